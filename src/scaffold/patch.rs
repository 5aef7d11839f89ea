//! Find-and-replace edits on generated boilerplate
//!
//! A pattern that does not match leaves the file untouched. Patches are not
//! idempotent: applying an insertion twice inserts twice.

use std::path::{Path, PathBuf};
use regex::{NoExpand, Regex};

use crate::core::ScaffoldResult;

/// One edit on a file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Regex replacement of the first (or every) match
    Regex {
        pattern: String,
        replacement: String,
        all: bool,
        /// Interpret `${1}`-style group references in the replacement
        expand: bool,
        /// Skip the edit when this pattern already matches
        unless: Option<String>,
    },
    /// Replace the first literal occurrence
    Literal { from: String, to: String },
    /// Insert a line before the 0-based line `index`, or at the end
    InsertLine { index: usize, line: String },
    Prepend(String),
    Append(String),
}

impl Edit {
    /// Replace the first match with literal text
    pub fn regex(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Edit::Regex {
            pattern: pattern.into(),
            replacement: replacement.into(),
            all: false,
            expand: false,
            unless: None,
        }
    }

    /// Replace every match with literal text
    pub fn regex_all(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Edit::Regex {
            pattern: pattern.into(),
            replacement: replacement.into(),
            all: true,
            expand: false,
            unless: None,
        }
    }

    /// Allow group references in the replacement
    pub fn expanding(mut self) -> Self {
        if let Edit::Regex { ref mut expand, .. } = self {
            *expand = true;
        }
        self
    }

    /// Only apply when `guard` does not match the content
    pub fn unless(mut self, guard: impl Into<String>) -> Self {
        if let Edit::Regex { ref mut unless, .. } = self {
            *unless = Some(guard.into());
        }
        self
    }

    pub fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        Edit::Literal { from: from.into(), to: to.into() }
    }

    pub fn insert_line(index: usize, line: impl Into<String>) -> Self {
        Edit::InsertLine { index, line: line.into() }
    }

    /// Apply the edit to `content`
    pub fn apply(&self, content: &str) -> ScaffoldResult<String> {
        let updated = match self {
            Edit::Regex { pattern, replacement, all, expand, unless } => {
                if let Some(guard) = unless {
                    if Regex::new(guard)?.is_match(content) {
                        return Ok(content.to_string());
                    }
                }
                let re = Regex::new(pattern)?;
                let replaced = match (all, expand) {
                    (true, true) => re.replace_all(content, replacement.as_str()),
                    (true, false) => re.replace_all(content, NoExpand(replacement)),
                    (false, true) => re.replace(content, replacement.as_str()),
                    (false, false) => re.replace(content, NoExpand(replacement)),
                };
                replaced.into_owned()
            }
            Edit::Literal { from, to } => content.replacen(from.as_str(), to, 1),
            Edit::InsertLine { index, line } => {
                let mut lines: Vec<&str> = content.split('\n').collect();
                let at = (*index).min(lines.len());
                lines.insert(at, line);
                lines.join("\n")
            }
            Edit::Prepend(text) => format!("{}{}", text, content),
            Edit::Append(text) => format!("{}{}", content, text),
        };
        Ok(updated)
    }
}

/// Apply edits in order
pub fn apply_edits(content: &str, edits: &[Edit]) -> ScaffoldResult<String> {
    edits
        .iter()
        .try_fold(content.to_string(), |acc, edit| edit.apply(&acc))
}

/// Edits targeting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePatch {
    pub path: PathBuf,
    pub edits: Vec<Edit>,
}

impl FilePatch {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            edits: Vec::new(),
        }
    }

    pub fn edit(mut self, edit: Edit) -> Self {
        self.edits.push(edit);
        self
    }

    /// Read the file, apply every edit and write it back
    pub fn apply(&self) -> ScaffoldResult<()> {
        patch_file(&self.path, &self.edits)
    }
}

fn patch_file(path: &Path, edits: &[Edit]) -> ScaffoldResult<()> {
    let content = std::fs::read_to_string(path)?;
    let updated = apply_edits(&content, edits)?;
    std::fs::write(path, updated)?;
    Ok(())
}
