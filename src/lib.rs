//! Unique slug resolution for persisted records.
//!
//! [`domain::slug::SlugResolver`] normalizes a source attribute and appends
//! `-1`, `-2`, ... until no other record holds the value. Records opt in by
//! implementing [`domain::slug::Sluggable`]; [`domain::slug::SlugLifecycle`]
//! runs the resolver from create and update flows.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
