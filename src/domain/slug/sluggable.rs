use crate::domain::slug::value_objects::{RecordId, Slug};

/// A record whose slug is derived from one of its own attributes.
pub trait Sluggable {
    /// Persisted identifier, `None` until the record has been stored.
    fn record_id(&self) -> Option<RecordId>;

    /// Current value of the attribute the slug is derived from.
    fn slug_source(&self) -> &str;

    fn slug(&self) -> &Slug;

    fn set_slug(&mut self, slug: Slug);
}
