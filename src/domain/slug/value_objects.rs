use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const DEFAULT_SLUG_COLUMN: &str = "slug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A slug value as stored on a record.
///
/// Empty slugs are legal: a source attribute with no alphanumeric content
/// normalizes to an empty base token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One probe of the resolution loop: the normalized base plus a numeric suffix.
///
/// Suffix `0` renders as the bare base; suffix `n` renders as `base-n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCandidate {
    base: String,
    suffix: u64,
}

impl SlugCandidate {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            suffix: 0,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn suffix(&self) -> u64 {
        self.suffix
    }

    /// 1-based index of this probe.
    pub fn attempt(&self) -> u64 {
        self.suffix + 1
    }

    pub fn next(self) -> Self {
        Self {
            base: self.base,
            suffix: self.suffix + 1,
        }
    }

    pub fn to_slug(&self) -> Slug {
        if self.suffix == 0 {
            Slug::new(self.base.clone())
        } else {
            Slug::new(format!("{}-{}", self.base, self.suffix))
        }
    }
}

/// Name of the column a collection stores its slug in.
///
/// Only plain identifiers are accepted since the name is spliced into SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugColumn(String);

impl SlugColumn {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_plain_identifier(&value) {
            return Err(DomainError::Validation(format!(
                "slug column `{value}` must be a plain identifier"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SlugColumn {
    fn default() -> Self {
        Self(DEFAULT_SLUG_COLUMN.to_string())
    }
}

impl fmt::Display for SlugColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_plain_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
