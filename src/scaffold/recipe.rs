//! Data description of a scaffolding run

use std::path::PathBuf;
use std::time::Duration;

use crate::process::CommandSpec;
use crate::project::Folder;
use crate::scaffold::FilePatch;

/// A file copied verbatim into the project, with the copy shipped in the
/// binary used when no on-disk template folder provides it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub name: &'static str,
    pub contents: &'static str,
}

/// One unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    CreateDir(PathBuf),
    /// External generator or package manager call
    Run(CommandSpec),
    /// Download a `.tar.gz` and unpack it into `dest`
    DownloadArchive { url: String, dest: PathBuf },
    CopyTemplates { files: Vec<TemplateFile>, dest: PathBuf },
    WriteFile { path: PathBuf, contents: String },
    RemoveFile(PathBuf),
    Patch(FilePatch),
    /// Add scripts to and drop top-level keys from a package.json
    UpdatePackageJson {
        path: PathBuf,
        scripts: Vec<(String, String)>,
        remove: Vec<String>,
    },
    SuggestedFolders { base: PathBuf, folders: Vec<Folder> },
    MakeExecutable(PathBuf),
    /// Recursive world-writable permissions for bind-mounted volumes
    OpenPermissions(Vec<PathBuf>),
    EnsureNetwork,
    EnsureImage { image: String },
    ComposeUp,
    WaitHealthy { container: String, timeout: Duration },
}

/// A titled group of steps, reported as one numbered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub title: String,
    pub steps: Vec<Step>,
}

/// Everything needed to scaffold one project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    pub stages: Vec<Stage>,
    /// Development server started once every stage succeeded
    pub serve: Option<CommandSpec>,
    /// Lines printed after a successful run
    pub next_steps: Vec<String>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(mut self, title: impl Into<String>, steps: Vec<Step>) -> Self {
        self.stages.push(Stage {
            title: title.into(),
            steps,
        });
        self
    }

    pub fn serve(mut self, command: CommandSpec) -> Self {
        self.serve = Some(command);
        self
    }

    pub fn next_step(mut self, line: impl Into<String>) -> Self {
        self.next_steps.push(line.into());
        self
    }

    /// All steps in execution order
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.stages.iter().flat_map(|stage| stage.steps.iter())
    }

    /// External commands in execution order
    pub fn commands(&self) -> impl Iterator<Item = &CommandSpec> {
        self.steps().filter_map(|step| match step {
            Step::Run(spec) => Some(spec),
            _ => None,
        })
    }
}
