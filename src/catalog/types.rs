//! Catalog data types

use std::fmt;
use std::str::FromStr;
use serde::Serialize;

use crate::core::ScaffoldError;

/// Technology category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Backend,
    Database,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Web,
        Category::Mobile,
        Category::Backend,
        Category::Database,
    ];

    /// Key used on the command line (`-c web`)
    pub fn key(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Backend => "backend",
            Category::Database => "database",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Web => "Web Technologies",
            Category::Mobile => "Mobile Technologies",
            Category::Backend => "Backend Technologies",
            Category::Database => "Database Technologies",
        }
    }

    /// Folder under the generated-projects root
    pub fn root_path(&self) -> &'static str {
        match self {
            Category::Web => "guis/web",
            Category::Mobile => "guis/mobile",
            Category::Backend => "backends",
            Category::Database => "databases",
        }
    }

    /// Prefix of the namespaced verb (`guis:web:reactjs`)
    pub fn verb_prefix(&self) -> &'static str {
        match self {
            Category::Web => "guis:web:",
            Category::Mobile => "guis:mobile:",
            Category::Backend => "backends:",
            Category::Database => "databases:",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ScaffoldError::UnknownCategory(s.to_string()))
    }
}

/// Static description of one scaffoldable technology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub id: &'static str,
    pub category: Category,
    /// Human-readable name ("ReactJs", "MongoDB")
    pub title: &'static str,
    pub description: &'static str,
    pub documentation: &'static str,
}

impl Technology {
    /// The namespaced verb that creates a project with this technology
    pub fn verb(&self) -> String {
        format!("{}{}", self.category.verb_prefix(), self.id)
    }
}
