//! Content repository trait
//!
//! Narrow mutation interface over the content collection, so the
//! in-memory backend can be swapped without touching the dashboard or
//! navigation logic.

use crate::error::Result;
use crate::models::{
    ActivityInput, Chapter, ChapterActivity, ChapterPatch, Founder, NewChapter, Pillar,
};

pub trait ContentRepository {
    /// All chapters, in collection order
    fn chapters(&self) -> &[Chapter];

    fn find_chapter(&self, id: &str) -> Option<&Chapter>;

    /// Create a chapter. Fails on empty name/location or when the
    /// derived id collides with an existing chapter.
    fn create_chapter(&mut self, new: NewChapter) -> Result<Chapter>;

    /// Merge a partial update into the chapter with the given id
    fn update_chapter(&mut self, id: &str, patch: ChapterPatch) -> Result<()>;

    /// Remove exactly the chapter with the given id, leaving all others
    /// and their activities unchanged
    fn delete_chapter(&mut self, id: &str) -> Result<()>;

    /// Prepend a new activity to the chapter's sequence
    fn add_activity(&mut self, chapter_id: &str, input: ActivityInput) -> Result<ChapterActivity>;

    /// Replace the fields of the activity matched by id, preserving its
    /// position in the sequence
    fn update_activity(
        &mut self,
        chapter_id: &str,
        activity_id: &str,
        input: ActivityInput,
    ) -> Result<()>;

    /// Remove the activity matched by id
    fn delete_activity(&mut self, chapter_id: &str, activity_id: &str) -> Result<()>;

    fn pillars(&self) -> &[Pillar];

    fn find_pillar(&self, id: &str) -> Option<&Pillar>;

    fn founders(&self) -> &[Founder];
}
