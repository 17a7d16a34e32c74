//! Pillar model - thematic program areas
//!
//! Structurally analogous to chapters but read-only: no CRUD surface
//! exists for pillars.

use serde::{Deserialize, Serialize};

/// A thematic program area shown on the home view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub description: String,
    pub aim: String,
    pub image_url: String,
    pub activities: Vec<PillarActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarActivity {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub image_url: String,
}
