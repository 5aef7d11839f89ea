//! Runs a [`Recipe`] step by step

use std::path::Path;

use crate::cli::output;
use crate::core::{ScaffoldError, ScaffoldResult};
use crate::docker::ContainerController;
use crate::process::Shell;
use crate::project::{create_suggested_folders, ProjectContext};
use crate::scaffold::archive;
use crate::scaffold::recipe::{Recipe, Step, TemplateFile};

/// Sequential recipe runner. Every step is awaited before the next one
/// starts; the first fatal error stops the run.
pub struct Executor<'a, S> {
    shell: &'a S,
    ctx: &'a ProjectContext,
    http: reqwest::Client,
}

impl<'a, S: Shell> Executor<'a, S> {
    pub fn new(shell: &'a S, ctx: &'a ProjectContext) -> ScaffoldResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(ctx.config.http_timeout())
            .user_agent(format!("multitech/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { shell, ctx, http })
    }

    /// Run every stage of the recipe
    pub async fn execute(&self, recipe: &Recipe) -> ScaffoldResult<()> {
        let total = recipe.stages.len();
        tracing::debug!(
            "{}: {} stages, {} steps, {} external commands",
            self.ctx.technology.id,
            total,
            recipe.steps().count(),
            recipe.commands().count()
        );
        for (index, stage) in recipe.stages.iter().enumerate() {
            output::step(index + 1, total, &stage.title);
            for step in &stage.steps {
                self.run_step(step).await?;
            }
        }
        Ok(())
    }

    /// Start the development server, if the recipe has one. The server runs
    /// in the foreground; its exit status is reported but never fatal since
    /// stopping it with Ctrl-C is the normal way out.
    pub async fn serve(&self, recipe: &Recipe) -> ScaffoldResult<()> {
        let Some(ref command) = recipe.serve else {
            return Ok(());
        };

        output::info(&format!(
            "Starting the development server: {}",
            console::style(command.display()).dim()
        ));

        if let Err(e) = self.shell.run(command).await {
            tracing::warn!("development server stopped: {}", e);
            output::warning(&format!("Development server stopped: {}", e));
        }
        Ok(())
    }

    async fn run_step(&self, step: &Step) -> ScaffoldResult<()> {
        let project_dir = &self.ctx.paths.project_dir;

        match step {
            Step::CreateDir(path) => {
                std::fs::create_dir_all(path)?;
                tracing::debug!("created {}", path.display());
            }
            Step::Run(spec) => {
                output::info(&format!("{} {}", console::style("$").dim(), spec.display()));
                self.shell.run(spec).await?;
            }
            Step::DownloadArchive { url, dest } => {
                output::info(&format!("Downloading {}", console::style(url).dim()));
                let data = archive::download(&self.http, url).await?;
                let files = archive::unpack_tar_gz(&data, dest)?;
                tracing::debug!("unpacked {} files into {}", files, dest.display());
            }
            Step::CopyTemplates { files, dest } => {
                for file in files {
                    self.copy_template(file, dest)?;
                }
            }
            Step::WriteFile { path, contents } => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, contents)?;
            }
            Step::RemoveFile(path) => {
                std::fs::remove_file(path)?;
            }
            Step::Patch(patch) => {
                tracing::debug!("patching {}", patch.path.display());
                patch.apply()?;
            }
            Step::UpdatePackageJson { path, scripts, remove } => {
                update_package_json(path, scripts, remove)?;
            }
            Step::SuggestedFolders { base, folders } => {
                let names: Vec<&str> = folders.iter().map(|f| f.name).collect();
                output::info(&names.join(", "));
                create_suggested_folders(base, folders)?;
            }
            Step::MakeExecutable(path) => make_executable(path)?,
            Step::OpenPermissions(paths) => open_permissions(paths),
            Step::EnsureNetwork => {
                self.containers().ensure_shared_network(project_dir).await;
            }
            Step::EnsureImage { image } => {
                if self.containers().ensure_image(image, project_dir).await? {
                    output::success(&format!("Built image {}", image));
                }
            }
            Step::ComposeUp => {
                self.containers().bring_up(project_dir).await?;
            }
            Step::WaitHealthy { container, timeout } => {
                let spinner = output::spinner(&format!("Waiting for {} to become healthy...", container));
                let result = self
                    .containers()
                    .wait_healthy(container, *timeout, project_dir)
                    .await;
                spinner.finish_and_clear();
                result?;
                output::success("Container is healthy and ready to use!");
            }
        }

        Ok(())
    }

    fn containers(&self) -> ContainerController<'_, S> {
        ContainerController::new(self.shell, &self.ctx.config.docker)
    }

    /// Prefer the on-disk template folder, fall back to the embedded copy
    fn copy_template(&self, file: &TemplateFile, dest: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(dest)?;
        let target = dest.join(file.name);

        if let Some(source) = self
            .ctx
            .paths
            .templates_dir()
            .map(|dir| dir.join(file.name))
            .filter(|source| source.is_file())
        {
            output::info(&format!("Copying {} from {}", file.name, source.display()));
            std::fs::copy(&source, &target)?;
        } else {
            output::info(&format!("Copying {}", file.name));
            std::fs::write(&target, file.contents)?;
        }

        #[cfg(unix)]
        if file.name.ends_with(".sh") {
            make_executable(&target)?;
        }

        Ok(())
    }
}

fn update_package_json(path: &Path, scripts: &[(String, String)], remove: &[String]) -> ScaffoldResult<()> {
    let content = std::fs::read_to_string(path)?;
    let mut pkg: serde_json::Value = serde_json::from_str(&content)?;

    let object = pkg
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::template(format!("{} is not a JSON object", path.display())))?;

    for key in remove {
        object.remove(key);
    }

    let entry = object
        .entry("scripts")
        .or_insert_with(|| serde_json::json!({}));
    let script_map = entry
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::template(format!("{}: \"scripts\" is not an object", path.display())))?;

    for (name, command) in scripts {
        script_map.insert(name.clone(), serde_json::Value::String(command.clone()));
    }

    std::fs::write(path, serde_json::to_string_pretty(&pkg)?)?;
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> ScaffoldResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    std::fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(path: &Path) -> ScaffoldResult<()> {
    tracing::debug!("no executable bit to set on {}", path.display());
    Ok(())
}

/// Best effort: failures only warn
#[cfg(unix)]
fn open_permissions(paths: &[std::path::PathBuf]) {
    use std::os::unix::fs::PermissionsExt;

    for root in paths {
        for entry in walkdir::WalkDir::new(root) {
            let result = entry
                .map_err(std::io::Error::from)
                .and_then(|entry| {
                    std::fs::set_permissions(entry.path(), std::fs::Permissions::from_mode(0o777))
                });
            if let Err(e) = result {
                tracing::warn!("could not set permissions under {}: {}", root.display(), e);
                output::warning(&format!("Could not set permissions on {}", root.display()));
                break;
            }
        }
    }
}

#[cfg(not(unix))]
fn open_permissions(paths: &[std::path::PathBuf]) {
    for root in paths {
        tracing::debug!("skipping permission change on {}", root.display());
    }
    output::info("Skipping permission change on this platform.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::Config;
    use crate::process::fake::FakeShell;
    use crate::process::CommandSpec;
    use crate::project::{Folder, ProjectName, ProjectPaths};
    use crate::scaffold::{Edit, FilePatch};
    use tempfile::tempdir;

    fn context(root: &Path, tech: &str, config: Config) -> ProjectContext {
        let tech = Catalog::builtin().find(tech).unwrap();
        let name = ProjectName::parse("demo-project").unwrap();
        let paths = ProjectPaths::assemble(root, &config, tech, &name).unwrap();
        ProjectContext::new(name, tech, paths, config)
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path(), "expressjs", Config::default());
        let project = ctx.paths.project_dir.clone();
        let shell = FakeShell::ok();

        let recipe = Recipe::new()
            .stage(
                "Initialising",
                vec![
                    Step::CreateDir(project.clone()),
                    Step::Run(CommandSpec::new("bun", &project).args(["init", "-y"])),
                    Step::WriteFile {
                        path: project.join("src/server.ts"),
                        contents: "// <title>old</title>".to_string(),
                    },
                ],
            )
            .stage(
                "Customising",
                vec![
                    Step::Patch(
                        FilePatch::new(project.join("src/server.ts"))
                            .edit(Edit::regex(r"<title>.*</title>", "<title>Demo Project</title>")),
                    ),
                    Step::SuggestedFolders {
                        base: project.clone(),
                        folders: vec![Folder::new("tests", "# Tests")],
                    },
                ],
            );

        Executor::new(&shell, &ctx).unwrap().execute(&recipe).await.unwrap();

        assert_eq!(shell.command_lines(), vec!["bun init -y"]);
        assert_eq!(shell.calls()[0].cwd, project);
        assert_eq!(
            std::fs::read_to_string(project.join("src/server.ts")).unwrap(),
            "// <title>Demo Project</title>"
        );
        assert!(project.join("tests/README.md").is_file());
    }

    #[tokio::test]
    async fn test_failed_command_stops_the_run() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path(), "reactjs", Config::default());
        let project = ctx.paths.project_dir.clone();
        let shell = FakeShell::new(|spec| Err(crate::process::fake::failed(spec)));

        let recipe = Recipe::new().stage(
            "Initialising",
            vec![
                Step::Run(CommandSpec::new("bun", &ctx.paths.tech_dir).args(["create", "vite@latest"])),
                Step::CreateDir(project.clone()),
            ],
        );

        let err = Executor::new(&shell, &ctx).unwrap().execute(&recipe).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandFailed { .. }));
        assert!(!project.exists());
    }

    #[tokio::test]
    async fn test_copy_templates_prefers_disk_folder() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.output.templates_dir = Some("_tools".into());
        let ctx = context(dir.path(), "apiplatform", config);

        let overrides = ctx.paths.templates_dir().unwrap();
        std::fs::create_dir_all(&overrides).unwrap();
        std::fs::write(overrides.join("Dockerfile"), "FROM custom\n").unwrap();

        let shell = FakeShell::ok();
        let recipe = Recipe::new().stage(
            "Copying",
            vec![Step::CopyTemplates {
                files: vec![
                    TemplateFile { name: "Dockerfile", contents: "FROM embedded\n" },
                    TemplateFile { name: "setup.sh", contents: "#!/bin/sh\n" },
                ],
                dest: ctx.paths.project_dir.clone(),
            }],
        );

        Executor::new(&shell, &ctx).unwrap().execute(&recipe).await.unwrap();

        let project = &ctx.paths.project_dir;
        assert_eq!(std::fs::read_to_string(project.join("Dockerfile")).unwrap(), "FROM custom\n");
        assert_eq!(std::fs::read_to_string(project.join("setup.sh")).unwrap(), "#!/bin/sh\n");
    }

    #[test]
    fn test_update_package_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"name":"api","module":"index.ts","type":"module"}"#).unwrap();

        update_package_json(
            &path,
            &[("start".to_string(), "bun run --watch src/server.ts".to_string())],
            &["module".to_string()],
        )
        .unwrap();

        let pkg: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(pkg["scripts"]["start"], "bun run --watch src/server.ts");
        assert!(pkg.get("module").is_none());
        assert_eq!(pkg["type"], "module");
    }

    #[cfg(unix)]
    #[test]
    fn test_open_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("db.cnf"), "").unwrap();

        open_permissions(&[dir.path().to_path_buf()]);

        let mode = std::fs::metadata(data.join("db.cnf")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o777);
    }
}
