//! Dyesabel application layer
//!
//! Navigation state machine, session flow, dashboard command surface,
//! and theme handling. A rendering front end embeds `AppState` and
//! drives it from discrete user input events; everything here is
//! synchronous and single-threaded.

pub mod dashboard;
pub mod nav;
pub mod session;
pub mod state;
pub mod theme;

pub use dashboard::{Dashboard, PendingDelete, SystemHealth};
pub use nav::{HomeSection, NavState, ScrollCommand, View};
pub use session::Session;
pub use state::{AppState, Notice};
pub use theme::ThemeManager;
