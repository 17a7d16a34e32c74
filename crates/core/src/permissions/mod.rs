//! Permission system for dashboard operations

use crate::models::{Role, User};

/// Actions that can be performed from the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    // Chapter management
    CreateChapter,
    DeleteChapter,

    // Own-chapter scope
    EditOwnChapter,
    CreateActivity,
    EditActivity,
    DeleteActivity,

    // Read surfaces
    ViewAllChapters,
    ViewSystemHealth,
    ExportChapters,
}

/// Permission matrix for dashboard roles
pub struct PermissionMatrix;

impl PermissionMatrix {
    /// Check if a role has permission to perform an action
    pub fn can_perform(role: Role, action: DashboardAction) -> bool {
        match action {
            // Chapter management - admin only
            DashboardAction::CreateChapter => role == Role::Admin,
            DashboardAction::DeleteChapter => role == Role::Admin,

            // Chapter field editing - heads on their chapter, admins
            // anywhere; which chapter is checked by `can_edit_chapter`
            DashboardAction::EditOwnChapter => matches!(role, Role::Admin | Role::ChapterHead),
            DashboardAction::CreateActivity
            | DashboardAction::EditActivity
            | DashboardAction::DeleteActivity => {
                matches!(role, Role::Admin | Role::ChapterHead)
            }

            // Heads see only their own chapter
            DashboardAction::ViewAllChapters => matches!(role, Role::Admin | Role::Auditor),

            // Auditor-exclusive diagnostics and reporting
            DashboardAction::ViewSystemHealth => role == Role::Auditor,
            DashboardAction::ExportChapters => role == Role::Auditor,
        }
    }

    /// Scoped check: may this user edit the given chapter's fields?
    pub fn can_edit_chapter(user: &User, chapter_id: &str) -> bool {
        match user.role {
            Role::Admin => true,
            Role::ChapterHead => user.chapter_id.as_deref() == Some(chapter_id),
            Role::Auditor => false,
        }
    }
}
