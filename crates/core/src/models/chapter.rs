//! Chapter model - the primary content entity

use serde::{Deserialize, Serialize};

/// Logo applied to chapters created without one
pub const DEFAULT_LOGO_URL: &str = "https://i.imgur.com/CQCKjQM.png";

/// A regional branch of the organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique slug derived from the name at creation; never changes
    pub id: String,
    pub name: String,
    pub location: String,
    pub logo: String,
    /// Cover image for the chapter detail view
    pub image: Option<String>,
    pub description: Option<String>,
    pub president: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
    /// Newest-first by convention
    pub activities: Vec<ChapterActivity>,
}

impl Chapter {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: slug_from_name(&name),
            name,
            location: location.into(),
            logo: DEFAULT_LOGO_URL.to_string(),
            image: None,
            description: None,
            president: None,
            email: None,
            phone: None,
            facebook: None,
            activities: Vec::new(),
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    /// Render-time fallback for the about text
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("Start adding your chapter story here...")
    }

    pub fn president_or_default(&self) -> &str {
        self.president.as_deref().unwrap_or("No President Name")
    }

    pub fn email_or_default(&self) -> &str {
        self.email.as_deref().unwrap_or("Email not set")
    }

    pub fn phone_or_default(&self) -> &str {
        self.phone.as_deref().unwrap_or("Phone not set")
    }
}

/// An activity owned by its parent chapter; no independent lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterActivity {
    /// Unique within the owning chapter, generated from a timestamp
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-text date label, not a structured date
    pub date: String,
    pub image_url: String,
}

/// Payload for creating a chapter via the dashboard
#[derive(Debug, Clone, Default)]
pub struct NewChapter {
    pub name: String,
    pub location: String,
    pub logo: Option<String>,
}

impl NewChapter {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            logo: None,
        }
    }
}

/// Shared form payload for creating or editing an activity
#[derive(Debug, Clone, Default)]
pub struct ActivityInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub image_url: Option<String>,
}

impl ActivityInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Replace the fields of an existing activity, preserving its id
    pub fn apply_to(self, activity: &mut ChapterActivity) {
        activity.title = self.title;
        activity.description = self.description;
        activity.date = self.date;
        if let Some(url) = self.image_url.filter(|u| !u.trim().is_empty()) {
            activity.image_url = url;
        }
    }
}

/// Partial update staged by the inline edit affordance and the admin
/// edit form; merged into the target chapter on commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub president: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook: Option<String>,
}

impl ChapterPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.logo.is_none()
            && self.image.is_none()
            && self.description.is_none()
            && self.president.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.facebook.is_none()
    }

    /// Merge the set fields into the chapter. The id is not part of the
    /// patch: it never changes after creation, even when the name does.
    pub fn apply_to(&self, chapter: &mut Chapter) {
        if let Some(v) = &self.name {
            chapter.name = v.clone();
        }
        if let Some(v) = &self.location {
            chapter.location = v.clone();
        }
        if let Some(v) = &self.logo {
            chapter.logo = v.clone();
        }
        if let Some(v) = &self.image {
            chapter.image = Some(v.clone());
        }
        if let Some(v) = &self.description {
            chapter.description = Some(v.clone());
        }
        if let Some(v) = &self.president {
            chapter.president = Some(v.clone());
        }
        if let Some(v) = &self.email {
            chapter.email = Some(v.clone());
        }
        if let Some(v) = &self.phone {
            chapter.phone = Some(v.clone());
        }
        if let Some(v) = &self.facebook {
            chapter.facebook = Some(v.clone());
        }
    }
}

/// Derive a chapter id from its display name: lowercase, whitespace
/// runs collapsed to single hyphens
pub fn slug_from_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
