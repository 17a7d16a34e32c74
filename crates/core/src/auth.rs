//! Mock identity resolution
//!
//! Maps a free-text username to a `User` via substring matching. An
//! illustrative stand-in for real authentication, never a security
//! boundary: a real deployment would verify credentials against an
//! external identity provider behind the same trait.

use crate::error::{Error, Result};
use crate::models::{Chapter, User};

/// Seam for swapping the mock resolver for a real identity provider
/// without touching CRUD or navigation logic
pub trait IdentityResolver {
    /// Resolve a typed username against the current chapter collection.
    /// The password is collected by the login form but never validated.
    fn resolve(&self, username: &str, password: &str, chapters: &[Chapter]) -> Result<User>;
}

/// Substring-matching resolver backing the demo dashboard
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResolver;

impl IdentityResolver for MockResolver {
    fn resolve(&self, username: &str, _password: &str, chapters: &[Chapter]) -> Result<User> {
        let lower = username.to_lowercase();

        if lower.contains("auditor") {
            tracing::debug!("Resolved auditor login");
            return Ok(User::auditor());
        }
        if lower.contains("admin") {
            tracing::debug!("Resolved admin login");
            return Ok(User::admin());
        }
        if lower.contains("head") {
            // Heads are scoped to the first chapter for demo purposes
            let first = chapters
                .first()
                .ok_or_else(|| Error::Authentication("no chapter available to assign".into()))?;
            tracing::debug!(chapter_id = %first.id, "Resolved chapter head login");
            return Ok(User::chapter_head(first.id.clone()));
        }

        Err(Error::Authentication(
            "Role not found. Try 'auditor', 'admin', or 'head'".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn chapters() -> Vec<Chapter> {
        vec![
            Chapter::new("Tagum Chapter", "Tagum City"),
            Chapter::new("Mati Chapter", "Mati City"),
        ]
    }

    #[test]
    fn test_admin_substring_resolves_admin() {
        let user = MockResolver
            .resolve("site-ADMIN-2024", "whatever", &chapters())
            .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.username, "Admin User");
        assert!(user.chapter_id.is_none());
    }

    #[test]
    fn test_auditor_substring_resolves_auditor() {
        let user = MockResolver.resolve("Auditor", "", &chapters()).unwrap();
        assert_eq!(user.role, Role::Auditor);
        assert_eq!(user.username, "Auditor User");
    }

    #[test]
    fn test_head_gets_first_chapter() {
        let user = MockResolver
            .resolve("chapterHEAD", "pw", &chapters())
            .unwrap();
        assert_eq!(user.role, Role::ChapterHead);
        assert_eq!(user.chapter_id.as_deref(), Some("tagum-chapter"));
    }

    #[test]
    fn test_auditor_wins_over_later_patterns() {
        // "auditor" is checked before "admin" and "head"
        let user = MockResolver
            .resolve("auditor-admin-head", "", &chapters())
            .unwrap();
        assert_eq!(user.role, Role::Auditor);
    }

    #[test]
    fn test_unrecognized_input_fails() {
        let err = MockResolver
            .resolve("someone-else", "", &chapters())
            .unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_head_fails_with_empty_collection() {
        let err = MockResolver.resolve("head", "", &[]).unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }
}
