//! On-disk layout of a generated project

use std::path::{Path, PathBuf};

use crate::catalog::Technology;
use crate::core::{Config, ScaffoldResult};
use crate::project::ProjectName;

/// Every path a scaffolding run touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Directory the command was started from
    pub root_dir: PathBuf,
    /// `<root>/<generated-projects>`
    pub base_dir: PathBuf,
    /// `<base>/<category-root>/<tech>`, parent of the project
    pub tech_dir: PathBuf,
    /// `<tech_dir>/<name>`
    pub project_dir: PathBuf,
    /// Project directory relative to `root_dir`, for display
    pub relative_project_dir: PathBuf,
    /// On-disk template folder for the technology, when configured
    pub tools_dir: Option<PathBuf>,
}

impl ProjectPaths {
    /// Compute the layout without touching the filesystem
    pub fn resolve(root_dir: &Path, config: &Config, tech: &Technology, name: &ProjectName) -> Self {
        let base_dir = root_dir.join(&config.output.root);
        let tech_dir = base_dir.join(tech.category.root_path()).join(tech.id);
        let project_dir = tech_dir.join(name.as_str());
        let relative_project_dir = pathdiff::diff_paths(&project_dir, root_dir)
            .unwrap_or_else(|| project_dir.clone());
        let tools_dir = config
            .output
            .templates_dir
            .as_ref()
            .map(|dir| root_dir.join(dir).join(tech.category.root_path()).join(tech.id));

        Self {
            root_dir: root_dir.to_path_buf(),
            base_dir,
            tech_dir,
            project_dir,
            relative_project_dir,
            tools_dir,
        }
    }

    /// Compute the layout and create the generated-projects and technology
    /// directories. The project directory itself is left to the generator.
    pub fn assemble(root_dir: &Path, config: &Config, tech: &Technology, name: &ProjectName) -> ScaffoldResult<Self> {
        let paths = Self::resolve(root_dir, config, tech, name);

        tracing::debug!("base dir: {}", paths.base_dir.display());
        tracing::debug!("tech dir: {}", paths.tech_dir.display());
        tracing::debug!("project dir: {}", paths.project_dir.display());

        std::fs::create_dir_all(&paths.base_dir)?;
        std::fs::create_dir_all(&paths.tech_dir)?;

        Ok(paths)
    }

    /// Template folder holding copy-verbatim files, if one is configured
    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.tools_dir.as_ref().map(|dir| dir.join("templates"))
    }
}
