//! User and role models

use serde::{Deserialize, Serialize};

/// Dashboard roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Auditor,
    Admin,
    ChapterHead,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Auditor => "Auditor",
            Role::Admin => "Admin",
            Role::ChapterHead => "Chapter Head",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A logged-in dashboard user
///
/// The username is a display string, not an identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
    /// Present exactly when the role is `ChapterHead`
    pub chapter_id: Option<String>,
}

impl User {
    pub fn auditor() -> Self {
        Self {
            username: "Auditor User".to_string(),
            role: Role::Auditor,
            chapter_id: None,
        }
    }

    pub fn admin() -> Self {
        Self {
            username: "Admin User".to_string(),
            role: Role::Admin,
            chapter_id: None,
        }
    }

    pub fn chapter_head(chapter_id: impl Into<String>) -> Self {
        Self {
            username: "Chapter Head".to_string(),
            role: Role::ChapterHead,
            chapter_id: Some(chapter_id.into()),
        }
    }
}
