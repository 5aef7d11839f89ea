//! Suggested folder structure with per-folder READMEs

use std::path::Path;

use crate::core::ScaffoldResult;

/// A suggested subfolder and the README header describing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Folder {
    /// Path relative to the folder base, `/` separated
    pub name: &'static str,
    pub readme_header: &'static str,
}

impl Folder {
    pub const fn new(name: &'static str, readme_header: &'static str) -> Self {
        Self { name, readme_header }
    }
}

/// Create every folder under `base` and write its README.md
pub fn create_suggested_folders(base: &Path, folders: &[Folder]) -> ScaffoldResult<()> {
    for folder in folders {
        let folder_path = folder
            .name
            .split('/')
            .fold(base.to_path_buf(), |path, segment| path.join(segment));
        std::fs::create_dir_all(&folder_path)?;
        std::fs::write(folder_path.join("README.md"), format!("{}\n", folder.readme_header))?;
    }
    Ok(())
}
