//! Project name validation and display helpers

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{ScaffoldError, ScaffoldResult};

/// Shortest accepted project name
pub const MIN_NAME_LEN: usize = 4;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid name pattern"));

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w").expect("valid word pattern"));

/// A validated project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a candidate name
    pub fn parse(candidate: &str) -> ScaffoldResult<Self> {
        if !NAME_PATTERN.is_match(candidate) {
            return Err(ScaffoldError::InvalidProjectName {
                name: candidate.to_string(),
                reason: "it must start with a letter and contain only letters, numbers, dashes, and underscores"
                    .to_string(),
            });
        }

        if candidate.len() < MIN_NAME_LEN {
            return Err(ScaffoldError::InvalidProjectName {
                name: candidate.to_string(),
                reason: format!("it must be at least {} characters", MIN_NAME_LEN),
            });
        }

        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form: separators become spaces, words are capitalized
    /// (`my-app` → `My App`)
    pub fn display_name(&self) -> String {
        let spaced = self.0.replace(['-', '_'], " ");
        WORD_START
            .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
            .into_owned()
    }

    /// Lowercase identifier with underscores, as required by Dart and Java
    /// package segments
    pub fn snake_case(&self) -> String {
        self.0.to_lowercase().replace('-', "_")
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
