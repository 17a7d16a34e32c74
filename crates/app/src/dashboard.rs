//! Dashboard command surface
//!
//! Role-gated create/update/delete operations over the shared content
//! store. Every command is checked against the permission matrix before
//! touching the store; destructive operations pass through a pending
//! confirmation step that models the synchronous confirm prompt. All
//! mutations are synchronous and immediately visible to every view
//! reading from the store.

use serde::Serialize;

use dyesabel_core::{
    ActivityInput, Chapter, ChapterActivity, ChapterPatch, ContentRepository, DashboardAction,
    Error, NewChapter, PermissionMatrix, Result, User,
};

/// Static, non-functional diagnostics readout (auditor exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemHealth {
    pub server_load_pct: u8,
    pub database_health_pct: u8,
    pub api_latency_ms: u16,
}

/// The fixed figures shown on the auditor's health tab
pub const SYSTEM_HEALTH: SystemHealth = SystemHealth {
    server_load_pct: 34,
    database_health_pct: 98,
    api_latency_ms: 45,
};

/// Destructive operation awaiting a yes/no confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Chapter {
        id: String,
    },
    Activity {
        chapter_id: String,
        activity_id: String,
    },
}

/// One dashboard session for a logged-in user
#[derive(Debug)]
pub struct Dashboard {
    user: User,
    pending_delete: Option<PendingDelete>,
    draft: Option<ChapterPatch>,
}

impl Dashboard {
    pub fn new(user: User) -> Self {
        Self {
            user,
            pending_delete: None,
            draft: None,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    fn require(&self, action: DashboardAction) -> Result<()> {
        if PermissionMatrix::can_perform(self.user.role, action) {
            Ok(())
        } else {
            Err(Error::PermissionDenied(format!(
                "{} may not perform {action:?}",
                self.user.role
            )))
        }
    }

    fn require_chapter_scope(&self, chapter_id: &str) -> Result<()> {
        if PermissionMatrix::can_edit_chapter(&self.user, chapter_id) {
            Ok(())
        } else {
            Err(Error::PermissionDenied(format!(
                "{} may not edit chapter '{chapter_id}'",
                self.user.role
            )))
        }
    }

    // ---- read surfaces ----

    /// Chapters visible to this user: heads see only their own chapter
    pub fn visible_chapters<'a>(
        &self,
        store: &'a impl ContentRepository,
    ) -> Result<Vec<&'a Chapter>> {
        if PermissionMatrix::can_perform(self.user.role, DashboardAction::ViewAllChapters) {
            Ok(store.chapters().iter().collect())
        } else {
            Ok(vec![self.own_chapter(store)?])
        }
    }

    /// The chapter a head is scoped to
    ///
    /// A dangling reference (chapter deleted since login) is an error:
    /// access is denied rather than substituting another chapter.
    pub fn own_chapter<'a>(&self, store: &'a impl ContentRepository) -> Result<&'a Chapter> {
        let id = self
            .user
            .chapter_id
            .as_deref()
            .ok_or_else(|| Error::InvalidOperation("user is not scoped to a chapter".into()))?;

        store
            .find_chapter(id)
            .ok_or_else(|| Error::NotFound(format!("chapter '{id}' no longer exists")))
    }

    /// Auditor-only diagnostics readout
    pub fn system_health(&self) -> Result<SystemHealth> {
        self.require(DashboardAction::ViewSystemHealth)?;
        Ok(SYSTEM_HEALTH)
    }

    /// Auditor-only JSON export of the chapter collection
    pub fn export_chapters(&self, store: &impl ContentRepository) -> Result<String> {
        self.require(DashboardAction::ExportChapters)?;
        Ok(serde_json::to_string_pretty(store.chapters())?)
    }

    // ---- chapter commands ----

    pub fn create_chapter(
        &self,
        store: &mut impl ContentRepository,
        new: NewChapter,
    ) -> Result<Chapter> {
        self.require(DashboardAction::CreateChapter)?;
        store.create_chapter(new)
    }

    pub fn edit_chapter(
        &self,
        store: &mut impl ContentRepository,
        chapter_id: &str,
        patch: ChapterPatch,
    ) -> Result<()> {
        self.require(DashboardAction::EditOwnChapter)?;
        self.require_chapter_scope(chapter_id)?;
        store.update_chapter(chapter_id, patch)
    }

    /// Stage a chapter delete; takes effect on `confirm_pending`
    pub fn request_delete_chapter(&mut self, chapter_id: impl Into<String>) -> Result<()> {
        self.require(DashboardAction::DeleteChapter)?;
        self.pending_delete = Some(PendingDelete::Chapter {
            id: chapter_id.into(),
        });
        Ok(())
    }

    // ---- activity commands ----

    pub fn add_activity(
        &self,
        store: &mut impl ContentRepository,
        chapter_id: &str,
        input: ActivityInput,
    ) -> Result<ChapterActivity> {
        self.require(DashboardAction::CreateActivity)?;
        self.require_chapter_scope(chapter_id)?;
        store.add_activity(chapter_id, input)
    }

    pub fn edit_activity(
        &self,
        store: &mut impl ContentRepository,
        chapter_id: &str,
        activity_id: &str,
        input: ActivityInput,
    ) -> Result<()> {
        self.require(DashboardAction::EditActivity)?;
        self.require_chapter_scope(chapter_id)?;
        store.update_activity(chapter_id, activity_id, input)
    }

    /// Stage an activity delete; takes effect on `confirm_pending`
    pub fn request_delete_activity(
        &mut self,
        chapter_id: impl Into<String>,
        activity_id: impl Into<String>,
    ) -> Result<()> {
        self.require(DashboardAction::DeleteActivity)?;
        let chapter_id = chapter_id.into();
        self.require_chapter_scope(&chapter_id)?;
        self.pending_delete = Some(PendingDelete::Activity {
            chapter_id,
            activity_id: activity_id.into(),
        });
        Ok(())
    }

    // ---- confirmation ----

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    /// Execute the staged delete. No undo.
    pub fn confirm_pending(&mut self, store: &mut impl ContentRepository) -> Result<()> {
        match self.pending_delete.take() {
            Some(PendingDelete::Chapter { id }) => store.delete_chapter(&id),
            Some(PendingDelete::Activity {
                chapter_id,
                activity_id,
            }) => store.delete_activity(&chapter_id, &activity_id),
            None => Err(Error::InvalidOperation("nothing staged for deletion".into())),
        }
    }

    /// Abandon the staged delete
    pub fn cancel_pending(&mut self) {
        self.pending_delete = None;
    }

    // ---- inline field edit ----

    /// Begin a single-field (or small related-group) edit, staging an
    /// empty patch for the caller to fill in
    pub fn begin_field_edit(&mut self) -> &mut ChapterPatch {
        self.draft.insert(ChapterPatch::default())
    }

    pub fn draft(&self) -> Option<&ChapterPatch> {
        self.draft.as_ref()
    }

    /// Commit the staged patch by merging it into the target chapter.
    /// A denied commit leaves the draft staged so the caller can retarget
    /// or cancel explicitly.
    pub fn commit_field_edit(
        &mut self,
        store: &mut impl ContentRepository,
        chapter_id: &str,
    ) -> Result<()> {
        if self.draft.is_none() {
            return Err(Error::InvalidOperation("no field edit in progress".into()));
        }
        self.require_chapter_scope(chapter_id)?;

        let patch = self.draft.take().unwrap_or_default();
        store.update_chapter(chapter_id, patch)
    }

    /// Abandon the staged patch
    pub fn cancel_field_edit(&mut self) {
        self.draft = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyesabel_core::InMemoryStore;

    fn activity(title: &str) -> ActivityInput {
        ActivityInput::new(title, "Details.", "Nov 1, 2024")
    }

    #[test]
    fn test_admin_can_create_and_delete_chapters() {
        let mut store = InMemoryStore::seeded();
        let mut dashboard = Dashboard::new(User::admin());

        let created = dashboard
            .create_chapter(&mut store, NewChapter::new("Green Future", "Davao City"))
            .unwrap();
        assert_eq!(created.id, "green-future");

        dashboard.request_delete_chapter("green-future").unwrap();
        dashboard.confirm_pending(&mut store).unwrap();
        assert!(store.find_chapter("green-future").is_none());
    }

    #[test]
    fn test_auditor_cannot_mutate() {
        let mut store = InMemoryStore::seeded();
        let mut dashboard = Dashboard::new(User::auditor());

        assert!(matches!(
            dashboard.create_chapter(&mut store, NewChapter::new("X", "Y")),
            Err(Error::PermissionDenied(_))
        ));
        assert!(matches!(
            dashboard.request_delete_chapter("tagum"),
            Err(Error::PermissionDenied(_))
        ));
        assert!(matches!(
            dashboard.edit_chapter(&mut store, "tagum", ChapterPatch::default()),
            Err(Error::PermissionDenied(_))
        ));
        assert!(matches!(
            dashboard.add_activity(&mut store, "tagum", activity("Nope")),
            Err(Error::PermissionDenied(_))
        ));
    }

    #[test]
    fn test_auditor_read_surfaces() {
        let store = InMemoryStore::seeded();
        let dashboard = Dashboard::new(User::auditor());

        assert_eq!(dashboard.visible_chapters(&store).unwrap().len(), 6);

        let health = dashboard.system_health().unwrap();
        assert_eq!(health.server_load_pct, 34);
        assert_eq!(health.database_health_pct, 98);
        assert_eq!(health.api_latency_ms, 45);

        let export = dashboard.export_chapters(&store).unwrap();
        assert!(export.contains("\"tagum\""));

        // Health and export are auditor-exclusive
        let admin = Dashboard::new(User::admin());
        assert!(admin.system_health().is_err());
        assert!(admin.export_chapters(&store).is_err());
    }

    #[test]
    fn test_head_is_scoped_to_own_chapter() {
        let mut store = InMemoryStore::seeded();
        let dashboard = Dashboard::new(User::chapter_head("tagum"));

        let visible = dashboard.visible_chapters(&store).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "tagum");

        dashboard
            .add_activity(&mut store, "tagum", activity("Tree Planting Drive"))
            .unwrap();
        assert_eq!(store.find_chapter("tagum").unwrap().activities.len(), 3);

        assert!(matches!(
            dashboard.add_activity(&mut store, "mati", activity("Foreign")),
            Err(Error::PermissionDenied(_))
        ));
        assert!(matches!(
            dashboard.edit_chapter(&mut store, "mati", ChapterPatch::default()),
            Err(Error::PermissionDenied(_))
        ));
    }

    #[test]
    fn test_head_cannot_manage_chapters() {
        let mut store = InMemoryStore::seeded();
        let mut dashboard = Dashboard::new(User::chapter_head("tagum"));

        assert!(matches!(
            dashboard.create_chapter(&mut store, NewChapter::new("New", "Place")),
            Err(Error::PermissionDenied(_))
        ));
        assert!(matches!(
            dashboard.request_delete_chapter("mati"),
            Err(Error::PermissionDenied(_))
        ));
    }

    #[test]
    fn test_admin_edits_any_chapter() {
        let mut store = InMemoryStore::seeded();
        let dashboard = Dashboard::new(User::admin());

        let patch = ChapterPatch {
            president: Some("Clara Natividad".to_string()),
            ..Default::default()
        };
        dashboard.edit_chapter(&mut store, "mati", patch).unwrap();

        assert_eq!(
            store.find_chapter("mati").unwrap().president.as_deref(),
            Some("Clara Natividad")
        );
    }

    #[test]
    fn test_dangling_head_reference_is_denied() {
        let mut store = InMemoryStore::seeded();
        let dashboard = Dashboard::new(User::chapter_head("tagum"));

        // Admin deletes the head's chapter out from under them
        store.delete_chapter("tagum").unwrap();

        // No silent fallback to the first chapter
        assert!(matches!(
            dashboard.own_chapter(&store),
            Err(Error::NotFound(_))
        ));
        assert!(dashboard.visible_chapters(&store).is_err());
    }

    #[test]
    fn test_activity_delete_requires_confirmation() {
        let mut store = InMemoryStore::seeded();
        let mut dashboard = Dashboard::new(User::chapter_head("tagum"));

        dashboard.request_delete_activity("tagum", "t1").unwrap();
        // Nothing removed until confirmed
        assert_eq!(store.find_chapter("tagum").unwrap().activities.len(), 2);

        dashboard.confirm_pending(&mut store).unwrap();
        let tagum = store.find_chapter("tagum").unwrap();
        assert_eq!(tagum.activities.len(), 1);
        assert_eq!(tagum.activities[0].id, "t2");
    }

    #[test]
    fn test_cancelled_delete_changes_nothing() {
        let mut store = InMemoryStore::seeded();
        let mut dashboard = Dashboard::new(User::admin());

        dashboard.request_delete_chapter("mati").unwrap();
        dashboard.cancel_pending();

        assert!(dashboard.pending_delete().is_none());
        assert!(store.find_chapter("mati").is_some());
        assert!(matches!(
            dashboard.confirm_pending(&mut store),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_inline_field_edit_commits_by_merging() {
        let mut store = InMemoryStore::seeded();
        let mut dashboard = Dashboard::new(User::chapter_head("tagum"));

        let draft = dashboard.begin_field_edit();
        draft.email = Some("hello@dyesabel.ph".to_string());
        draft.phone = Some("(084) 999-0000".to_string());
        dashboard.commit_field_edit(&mut store, "tagum").unwrap();

        let tagum = store.find_chapter("tagum").unwrap();
        assert_eq!(tagum.email.as_deref(), Some("hello@dyesabel.ph"));
        assert_eq!(tagum.phone.as_deref(), Some("(084) 999-0000"));
        // Fields outside the group are untouched
        assert_eq!(tagum.president.as_deref(), Some("Juan Dela Cruz"));
    }

    #[test]
    fn test_denied_commit_keeps_draft() {
        let mut store = InMemoryStore::seeded();
        let mut dashboard = Dashboard::new(User::chapter_head("tagum"));

        let draft = dashboard.begin_field_edit();
        draft.email = Some("hello@dyesabel.ph".to_string());

        assert!(matches!(
            dashboard.commit_field_edit(&mut store, "mati"),
            Err(Error::PermissionDenied(_))
        ));
        assert_eq!(store.find_chapter("mati").unwrap().email.as_deref(), Some("mati@dyesabel.ph"));

        // The staged patch survives the denial and can be retargeted
        assert!(dashboard.draft().is_some());
        dashboard.commit_field_edit(&mut store, "tagum").unwrap();
        assert_eq!(
            store.find_chapter("tagum").unwrap().email.as_deref(),
            Some("hello@dyesabel.ph")
        );
    }

    #[test]
    fn test_edit_activity_keeps_position() {
        let mut store = InMemoryStore::seeded();
        let dashboard = Dashboard::new(User::chapter_head("tagum"));

        dashboard
            .edit_activity(&mut store, "tagum", "t2", activity("Renamed Campaign"))
            .unwrap();

        let tagum = store.find_chapter("tagum").unwrap();
        assert_eq!(tagum.activities[1].id, "t2");
        assert_eq!(tagum.activities[1].title, "Renamed Campaign");
    }
}
