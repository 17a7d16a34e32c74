//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{Chapter, Role, User};

/// Validate that the chapter collection is internally consistent
pub fn assert_collection_invariants(chapters: &[Chapter]) {
    for (i, chapter) in chapters.iter().enumerate() {
        debug_assert!(
            !chapter.name.trim().is_empty(),
            "Chapter {} has empty name",
            chapter.id
        );

        debug_assert!(
            !chapters[..i].iter().any(|c| c.id == chapter.id),
            "Duplicate chapter id {}",
            chapter.id
        );

        for (j, activity) in chapter.activities.iter().enumerate() {
            debug_assert!(
                !chapter.activities[..j].iter().any(|a| a.id == activity.id),
                "Chapter {} has duplicate activity id {}",
                chapter.id,
                activity.id
            );
        }
    }
}

/// Validate that a user's chapter reference is consistent with their role
pub fn assert_user_invariants(user: &User, chapters: &[Chapter]) {
    match user.role {
        Role::ChapterHead => {
            debug_assert!(
                user.chapter_id.is_some(),
                "Chapter head {} has no chapter_id",
                user.username
            );
            if let Some(id) = &user.chapter_id {
                debug_assert!(
                    chapters.iter().any(|c| &c.id == id),
                    "Chapter head {} references missing chapter {}",
                    user.username,
                    id
                );
            }
        }
        Role::Admin | Role::Auditor => {
            debug_assert!(
                user.chapter_id.is_none(),
                "User {} has chapter_id but role {:?}",
                user.username,
                user.role
            );
        }
    }
}
