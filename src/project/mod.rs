//! Project request: validated name, resolved paths and the context handed to
//! templates

mod folders;
mod name;
mod paths;

pub use folders::{create_suggested_folders, Folder};
pub use name::ProjectName;
pub use paths::ProjectPaths;

use std::path::PathBuf;

use crate::catalog::Technology;
use crate::core::Config;

/// Timestamp format shown on generated landing pages (`19 Oct 2026 14:05`)
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M";

/// Local time formatted for landing pages
pub fn formatted_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Everything a template needs to describe a scaffolding run
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub name: ProjectName,
    pub technology: &'static Technology,
    pub paths: ProjectPaths,
    pub config: Config,
    /// `My App` for `my-app`
    pub display_name: String,
    /// Creation time shown on the landing page
    pub timestamp: String,
    /// JAVA_HOME derived from the `java` on PATH
    pub java_home: Option<PathBuf>,
}

impl ProjectContext {
    pub fn new(name: ProjectName, technology: &'static Technology, paths: ProjectPaths, config: Config) -> Self {
        let display_name = name.display_name();
        Self {
            name,
            technology,
            paths,
            config,
            display_name,
            timestamp: formatted_now(),
            java_home: None,
        }
    }

    pub fn with_java_home(mut self, java_home: Option<PathBuf>) -> Self {
        self.java_home = java_home;
        self
    }

    /// Path inside the project directory
    pub fn project_file(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.paths.project_dir.clone(), |path, segment| path.join(segment))
    }
}
