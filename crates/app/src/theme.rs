//! Theme handling
//!
//! The saved preference wins, then the OS-level hint, then the manifest
//! default. Every toggle is written back immediately.

use dyesabel_core::{Database, Result, Theme};

#[derive(Debug)]
pub struct ThemeManager {
    current: Theme,
}

impl ThemeManager {
    /// Resolve the startup theme from the saved preference, the OS hint,
    /// and the configured fallback, in that order
    pub fn init(db: &Database, os_hint: Option<Theme>, fallback: Theme) -> Result<Self> {
        let saved = db.preferences().theme()?;
        let current = saved.or(os_hint).unwrap_or(fallback);
        Ok(Self { current })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new value
    pub fn toggle(&mut self, db: &Database) -> Result<Theme> {
        self.current = self.current.toggled();
        db.preferences().set_theme(self.current)?;
        tracing::debug!(theme = %self.current, "Theme toggled");
        Ok(self.current)
    }
}
