// src/application/ports/util.rs

/// Turns free text into a slug token.
///
/// Implementations must be deterministic: lowercase output, every run of
/// non-alphanumeric characters collapsed into one `-`, no leading or trailing
/// `-`.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
