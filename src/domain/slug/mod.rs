pub mod repository;
pub mod services;
pub mod sluggable;
pub mod value_objects;

pub use repository::SlugLookup;
pub use services::{SlugLifecycle, SlugResolver};
pub use sluggable::Sluggable;
pub use value_objects::{DEFAULT_SLUG_COLUMN, RecordId, Slug, SlugCandidate, SlugColumn};
