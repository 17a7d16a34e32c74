//! In-memory content store
//!
//! The single mutable collection of chapters, pillars, and founders
//! backing every view. Seeded once at startup from a fixed literal set;
//! nothing outlives the process.

mod memory;
mod seed;
mod traits;

pub use memory::InMemoryStore;
pub use seed::{seed_chapters, seed_founders, seed_pillars};
pub use traits::ContentRepository;
