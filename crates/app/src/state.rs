//! Application state
//!
//! Owns the content store, durable preferences, session, navigation,
//! and ephemeral notices. Single-threaded: every read and write happens
//! on the UI event thread, so fields are owned directly rather than
//! shared behind locks.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use uuid::Uuid;

use dyesabel_core::{
    invariants, ContentRepository, Database, Error, InMemoryStore, MockResolver, Result,
    SiteManifest, Theme,
};

use crate::nav::NavState;
use crate::session::Session;
use crate::theme::ThemeManager;

/// How long a toast stays up before auto-dismissing
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Ephemeral toast notice (not persisted)
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    expires_at: Instant,
}

/// Main application state
pub struct AppState {
    pub store: InMemoryStore,
    pub db: Database,
    pub manifest: SiteManifest,
    pub nav: NavState,
    pub session: Session,
    pub theme: ThemeManager,
    resolver: MockResolver,
    notices: Vec<Notice>,
}

impl AppState {
    /// Open the durable preference database and seed the content store
    pub fn new() -> Result<Self> {
        let data_dir = Self::data_path()?;
        std::fs::create_dir_all(&data_dir)?;

        let db = Database::open(data_dir.join("dyesabel.db"))?;
        let manifest = SiteManifest::load_or_default(&data_dir.join("site.toml"));
        Self::with_parts(db, manifest, None)
    }

    /// Assemble state from explicit parts; front ends pass the OS-level
    /// light/dark hint here, tests pass an in-memory database
    pub fn with_parts(
        db: Database,
        manifest: SiteManifest,
        os_theme_hint: Option<Theme>,
    ) -> Result<Self> {
        let theme = ThemeManager::init(&db, os_theme_hint, manifest.default_theme)?;
        Ok(Self {
            store: InMemoryStore::seeded(),
            db,
            manifest,
            nav: NavState::new(),
            session: Session::new(),
            theme,
            resolver: MockResolver,
            notices: Vec::new(),
        })
    }

    fn data_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("ph", "dyesabel", "dyesabel").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(dirs.data_dir().to_path_buf())
    }

    /// Login through the configured resolver
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.session.login(
            &self.resolver,
            &mut self.nav,
            username,
            password,
            self.store.chapters(),
        )?;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout(&mut self.nav);
    }

    /// Toggle the theme, persisting the new value
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.theme.toggle(&self.db)
    }

    /// External join-the-movement link; blocked when the manifest does
    /// not carry one
    pub fn join_link(&self) -> Result<&str> {
        self.manifest
            .join_form_url
            .as_deref()
            .ok_or_else(|| Error::InvalidOperation("join form link is not configured".into()))
    }

    /// Donation landing page, consumed as an opaque link; blocked when
    /// the manifest does not carry one
    pub fn donate_link(&self) -> Result<&str> {
        self.manifest
            .donate_url
            .as_deref()
            .ok_or_else(|| Error::InvalidOperation("donation link is not configured".into()))
    }

    /// Post a toast notice with the standard auto-dismiss deadline
    pub fn push_notice(&mut self, message: impl Into<String>) -> Uuid {
        let notice = Notice {
            id: Uuid::new_v4(),
            message: message.into(),
            timestamp: Utc::now(),
            expires_at: Instant::now() + NOTICE_TTL,
        };
        let id = notice.id;
        self.notices.push(notice);
        id
    }

    /// Notices still visible at `now`. Expiry is a pure function of the
    /// clock, so a timer superseded by a later state change needs no
    /// cancellation: the next read simply reflects the latest state.
    pub fn visible_notices(&self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| n.expires_at > now)
    }

    /// Drop notices whose deadline has passed
    pub fn expire_notices(&mut self, now: Instant) {
        self.notices.retain(|n| n.expires_at > now);
    }

    /// Log a startup summary and check the seed invariants
    pub fn log_startup_summary(&self) {
        invariants::assert_collection_invariants(self.store.chapters());
        tracing::info!(
            organization = %self.manifest.organization,
            chapters = self.store.chapters().len(),
            pillars = self.store.pillars().len(),
            founders = self.store.founders().len(),
            theme = %self.theme.current(),
            "Content store seeded"
        );
    }
}
