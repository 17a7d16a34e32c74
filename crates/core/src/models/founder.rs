//! Founder model - static home-section content

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Founder {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}
