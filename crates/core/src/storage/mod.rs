//! SQLite storage for durable preferences
//!
//! The only state that survives a reload is the theme preference; all
//! content lives in the in-memory store.

mod preferences;

pub use preferences::{PreferencesStore, Theme};

use std::path::Path;

use rusqlite::Connection;
use tracing::instrument;

use crate::error::Result;

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )?;
        Ok(())
    }

    /// Preferences store accessor
    pub fn preferences(&self) -> PreferencesStore<'_> {
        PreferencesStore::new(&self.conn)
    }
}
