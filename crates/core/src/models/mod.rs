//! Data models for Dyesabel

mod chapter;
mod founder;
mod pillar;
mod user;

pub use chapter::*;
pub use founder::*;
pub use pillar::*;
pub use user::*;
