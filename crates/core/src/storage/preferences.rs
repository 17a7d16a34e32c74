//! Theme preference persistence
//!
//! One durable key: the light/dark choice, read once at startup and
//! written on every toggle.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const THEME_KEY: &str = "theme";

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Preferences store
pub struct PreferencesStore<'a> {
    conn: &'a Connection,
}

impl<'a> PreferencesStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Persist the theme choice
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![THEME_KEY, theme.as_str(), Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Load the saved theme, if any
    pub fn theme(&self) -> Result<Option<Theme>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![THEME_KEY],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value.as_deref().and_then(Theme::parse))
    }
}
