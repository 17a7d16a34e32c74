//! In-memory implementation of the content repository

use chrono::Utc;
use tracing::instrument;

use super::seed;
use super::traits::ContentRepository;
use crate::error::{Error, Result};
use crate::models::{
    slug_from_name, ActivityInput, Chapter, ChapterActivity, ChapterPatch, Founder, NewChapter,
    Pillar,
};

/// Content collection held at the application root
///
/// Single-threaded by construction: every read and write happens on the
/// owning thread, so no locking discipline is required. A reload of the
/// application rebuilds the store from the seed; nothing is persisted.
#[derive(Debug)]
pub struct InMemoryStore {
    chapters: Vec<Chapter>,
    pillars: Vec<Pillar>,
    founders: Vec<Founder>,
}

impl InMemoryStore {
    /// Store populated with the fixed initial content
    pub fn seeded() -> Self {
        Self {
            chapters: seed::seed_chapters(),
            pillars: seed::seed_pillars(),
            founders: seed::seed_founders(),
        }
    }

    /// Empty store, used by tests
    pub fn empty() -> Self {
        Self {
            chapters: Vec::new(),
            pillars: Vec::new(),
            founders: Vec::new(),
        }
    }

    fn chapter_mut(&mut self, id: &str) -> Result<&mut Chapter> {
        self.chapters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("chapter '{id}'")))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Timestamp-derived activity id, bumped until unique within the
/// chapter (two submissions can land on the same millisecond)
fn next_activity_stamp(chapter: &Chapter) -> i64 {
    let mut stamp = Utc::now().timestamp_millis();
    while chapter
        .activities
        .iter()
        .any(|a| a.id == format!("act-{stamp}"))
    {
        stamp += 1;
    }
    stamp
}

fn validate_activity_input(input: &ActivityInput) -> Result<()> {
    if input.title.trim().is_empty() {
        return Err(Error::Validation("activity title must not be empty".into()));
    }
    if input.date.trim().is_empty() {
        return Err(Error::Validation("activity date must not be empty".into()));
    }
    if input.description.trim().is_empty() {
        return Err(Error::Validation(
            "activity description must not be empty".into(),
        ));
    }
    Ok(())
}

impl ContentRepository for InMemoryStore {
    fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    fn find_chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    fn create_chapter(&mut self, new: NewChapter) -> Result<Chapter> {
        if new.name.trim().is_empty() {
            return Err(Error::Validation("chapter name must not be empty".into()));
        }
        if new.location.trim().is_empty() {
            return Err(Error::Validation(
                "chapter location must not be empty".into(),
            ));
        }

        let id = slug_from_name(&new.name);
        if self.chapters.iter().any(|c| c.id == id) {
            return Err(Error::Validation(format!(
                "a chapter with id '{id}' already exists"
            )));
        }

        let mut chapter = Chapter::new(new.name, new.location);
        if let Some(logo) = new.logo.filter(|l| !l.trim().is_empty()) {
            chapter.logo = logo;
        }

        tracing::info!(chapter_id = %chapter.id, "Created chapter");
        let created = chapter.clone();
        self.chapters.push(chapter);
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    fn update_chapter(&mut self, id: &str, patch: ChapterPatch) -> Result<()> {
        let chapter = self.chapter_mut(id)?;
        patch.apply_to(chapter);
        tracing::debug!(chapter_id = %id, "Updated chapter");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_chapter(&mut self, id: &str) -> Result<()> {
        let position = self
            .chapters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("chapter '{id}'")))?;

        self.chapters.remove(position);
        tracing::info!(chapter_id = %id, "Deleted chapter");
        Ok(())
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    fn add_activity(&mut self, chapter_id: &str, input: ActivityInput) -> Result<ChapterActivity> {
        validate_activity_input(&input)?;

        let chapter = self.chapter_mut(chapter_id)?;
        let stamp = next_activity_stamp(chapter);
        let activity = ChapterActivity {
            id: format!("act-{stamp}"),
            title: input.title,
            description: input.description,
            date: input.date,
            image_url: input
                .image_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| format!("https://picsum.photos/seed/{stamp}/400/300")),
        };

        // Newest first
        chapter.activities.insert(0, activity.clone());
        tracing::info!(chapter_id = %chapter_id, activity_id = %activity.id, "Added activity");
        Ok(activity)
    }

    #[instrument(skip(self, input))]
    fn update_activity(
        &mut self,
        chapter_id: &str,
        activity_id: &str,
        input: ActivityInput,
    ) -> Result<()> {
        validate_activity_input(&input)?;

        let chapter = self.chapter_mut(chapter_id)?;
        let activity = chapter
            .activities
            .iter_mut()
            .find(|a| a.id == activity_id)
            .ok_or_else(|| Error::NotFound(format!("activity '{activity_id}'")))?;

        input.apply_to(activity);
        tracing::debug!(chapter_id = %chapter_id, activity_id = %activity_id, "Updated activity");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_activity(&mut self, chapter_id: &str, activity_id: &str) -> Result<()> {
        let chapter = self.chapter_mut(chapter_id)?;
        let before = chapter.activities.len();
        chapter.activities.retain(|a| a.id != activity_id);

        if chapter.activities.len() == before {
            return Err(Error::NotFound(format!("activity '{activity_id}'")));
        }
        tracing::info!(chapter_id = %chapter_id, activity_id = %activity_id, "Deleted activity");
        Ok(())
    }

    fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    fn find_pillar(&self, id: &str) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.id == id)
    }

    fn founders(&self) -> &[Founder] {
        &self.founders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(title: &str) -> ActivityInput {
        ActivityInput::new(title, "What happened.", "Oct 20, 2024")
    }

    #[test]
    fn test_seeded_store_contents() {
        let store = InMemoryStore::seeded();
        assert_eq!(store.chapters().len(), 6);
        assert_eq!(store.chapters()[0].id, "tagum");
        assert!(!store.pillars().is_empty());
        assert!(!store.founders().is_empty());
    }

    #[test]
    fn test_create_chapter_derives_slug_id() {
        let mut store = InMemoryStore::empty();
        let chapter = store
            .create_chapter(NewChapter::new("Green Future", "Davao City"))
            .unwrap();
        assert_eq!(chapter.id, "green-future");
        assert_eq!(store.chapters().len(), 1);
    }

    #[test]
    fn test_create_chapter_collapses_spaces() {
        let mut store = InMemoryStore::empty();
        let chapter = store
            .create_chapter(NewChapter::new("Green   Future", "Davao City"))
            .unwrap();
        assert_eq!(chapter.id, "green-future");
    }

    #[test]
    fn test_create_chapter_rejects_blank_fields() {
        let mut store = InMemoryStore::empty();
        assert!(matches!(
            store.create_chapter(NewChapter::new("  ", "Davao City")),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            store.create_chapter(NewChapter::new("Green Future", "")),
            Err(Error::Validation(_))
        ));
        assert!(store.chapters().is_empty());
    }

    #[test]
    fn test_create_chapter_rejects_id_collision() {
        let mut store = InMemoryStore::empty();
        store
            .create_chapter(NewChapter::new("Green Future", "Davao City"))
            .unwrap();

        // Same normalized name, different spacing
        let err = store
            .create_chapter(NewChapter::new("green   future", "Elsewhere"))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.chapters().len(), 1);
    }

    #[test]
    fn test_delete_chapter_removes_exactly_one() {
        let mut store = InMemoryStore::seeded();
        let before: Vec<String> = store.chapters().iter().map(|c| c.id.clone()).collect();
        let tagum_activities = store.find_chapter("tagum").unwrap().activities.clone();

        store.delete_chapter("nabunturan").unwrap();

        let after: Vec<String> = store.chapters().iter().map(|c| c.id.clone()).collect();
        let expected: Vec<String> = before.into_iter().filter(|id| id != "nabunturan").collect();
        assert_eq!(after, expected);
        // Sibling activities untouched
        assert_eq!(store.find_chapter("tagum").unwrap().activities, tagum_activities);
    }

    #[test]
    fn test_delete_missing_chapter_fails() {
        let mut store = InMemoryStore::seeded();
        assert!(matches!(
            store.delete_chapter("atlantis"),
            Err(Error::NotFound(_))
        ));
        assert_eq!(store.chapters().len(), 6);
    }

    #[test]
    fn test_add_activity_to_empty_chapter() {
        let mut store = InMemoryStore::seeded();
        assert!(store.find_chapter("mati").unwrap().activities.is_empty());
        let others: Vec<usize> = store
            .chapters()
            .iter()
            .filter(|c| c.id != "mati")
            .map(|c| c.activities.len())
            .collect();

        let added = store.add_activity("mati", activity("Coastal Cleanup")).unwrap();

        let mati = store.find_chapter("mati").unwrap();
        assert_eq!(mati.activities.len(), 1);
        assert_eq!(mati.activities[0], added);
        assert!(added.id.starts_with("act-"));
        // Every other chapter's sequence is unchanged
        let others_after: Vec<usize> = store
            .chapters()
            .iter()
            .filter(|c| c.id != "mati")
            .map(|c| c.activities.len())
            .collect();
        assert_eq!(others, others_after);
    }

    #[test]
    fn test_add_activity_prepends() {
        let mut store = InMemoryStore::seeded();
        let added = store.add_activity("tagum", activity("Mangrove Planting")).unwrap();

        let tagum = store.find_chapter("tagum").unwrap();
        assert_eq!(tagum.activities[0].id, added.id);
        assert_eq!(tagum.activities.len(), 3);
        assert_eq!(tagum.activities[1].id, "t1");
    }

    #[test]
    fn test_add_activity_defaults_placeholder_image() {
        let mut store = InMemoryStore::seeded();
        let added = store.add_activity("tagum", activity("No Photo Yet")).unwrap();
        assert!(added.image_url.starts_with("https://picsum.photos/seed/"));

        let with_image = store
            .add_activity("tagum", activity("With Photo").with_image_url("https://example.org/p.jpg"))
            .unwrap();
        assert_eq!(with_image.image_url, "https://example.org/p.jpg");
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut store = InMemoryStore::seeded();
        let a = store.add_activity("tagum", activity("First")).unwrap();
        let b = store.add_activity("tagum", activity("Second")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_activity_preserves_position() {
        let mut store = InMemoryStore::seeded();
        // Seeded tagum has t1 then t2
        store
            .update_activity("tagum", "t2", activity("Plastic-Free Tagum 2.0"))
            .unwrap();

        let tagum = store.find_chapter("tagum").unwrap();
        assert_eq!(tagum.activities.len(), 2);
        assert_eq!(tagum.activities[1].id, "t2");
        assert_eq!(tagum.activities[1].title, "Plastic-Free Tagum 2.0");
        // Sibling untouched
        assert_eq!(tagum.activities[0].id, "t1");
        assert_eq!(tagum.activities[0].title, "Urban Garden Project");
    }

    #[test]
    fn test_update_missing_activity_fails() {
        let mut store = InMemoryStore::seeded();
        assert!(matches!(
            store.update_activity("tagum", "nope", activity("x")),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_activity_by_id() {
        let mut store = InMemoryStore::seeded();
        store.delete_activity("tagum", "t1").unwrap();

        let tagum = store.find_chapter("tagum").unwrap();
        assert_eq!(tagum.activities.len(), 1);
        assert_eq!(tagum.activities[0].id, "t2");

        assert!(matches!(
            store.delete_activity("tagum", "t1"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_pillars_are_readable() {
        let store = InMemoryStore::seeded();
        let first = &store.pillars()[0];
        assert_eq!(store.find_pillar(&first.id).unwrap().title, first.title);
        assert!(store.find_pillar("nonexistent").is_none());
    }
}
