//! multitech create / namespaced verbs - scaffold a project

use std::env;
use std::path::Path;
use std::time::Instant;

use clap::{error::ErrorKind, Args, Parser};

use crate::catalog::{Catalog, Category, Technology};
use crate::cli::output;
use crate::core::{Config, ScaffoldError, ScaffoldResult};
use crate::process::{self, SystemShell};
use crate::project::{ProjectContext, ProjectName, ProjectPaths};
use crate::scaffold::Executor;
use crate::templates::TemplateManager;

#[derive(Args)]
pub struct CreateArgs {
    /// Project name (letters, digits, dashes and underscores, at least 4 characters)
    pub name: Option<String>,

    /// Category (web, mobile, backend, database)
    #[arg(short, long)]
    pub category: String,

    /// Technology within the category (e.g. reactjs, springboot, mongodb)
    #[arg(short, long = "tech")]
    pub technology: String,

    /// Do not start the development server afterwards
    #[arg(long)]
    pub no_start: bool,
}

/// Arguments following a namespaced verb such as `backends:expressjs`
#[derive(Parser, Debug)]
struct NamespacedArgs {
    /// Project name
    name: Option<String>,

    /// Do not start the development server afterwards
    #[arg(long)]
    no_start: bool,
}

pub async fn execute(args: CreateArgs, json_output: bool) -> ScaffoldResult<()> {
    let catalog = Catalog::builtin();
    let category: Category = args.category.parse()?;
    let technology = catalog.find_in(category, &args.technology)?;

    scaffold(technology, args.name.as_deref(), args.no_start, json_output).await
}

/// `guis:web:<tech> <name>`, `backends:<tech> <name>`, ...
pub async fn execute_namespaced(raw: Vec<String>, json_output: bool) -> ScaffoldResult<()> {
    let catalog = Catalog::builtin();
    let (verb, _) = raw
        .split_first()
        .ok_or_else(|| ScaffoldError::UnknownCommand(String::new()))?;
    let technology = catalog.resolve_verb(verb)?;

    let args = match NamespacedArgs::try_parse_from(&raw) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(ScaffoldError::InvalidArguments(clap_message(&e))),
    };

    scaffold(technology, args.name.as_deref(), args.no_start, json_output).await
}

/// First line of a clap error without its `error:` prefix
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

async fn scaffold(
    technology: &'static Technology,
    name: Option<&str>,
    no_start: bool,
    json_output: bool,
) -> ScaffoldResult<()> {
    let start_time = Instant::now();

    // Validation happens before anything touches the disk
    let name = name.ok_or_else(|| ScaffoldError::MissingArgument("project name".to_string()))?;
    let name = ProjectName::parse(name)?;

    let root = env::current_dir()?;
    let config = Config::load(&root)?;
    let ctx = prepare_context(&root, config, technology, name)?;

    let template = TemplateManager::new().get_template(technology)?;
    let recipe = template.recipe(&ctx)?;
    tracing::debug!("using the {} template", template.name());

    output::info(&format!(
        "Creating {} project '{}'...",
        console::style(technology.title).cyan(),
        console::style(&ctx.name).green()
    ));
    output::info(&format!(
        "The project is about to be created in {}",
        ctx.paths.relative_project_dir.display()
    ));

    let shell = SystemShell;
    let executor = Executor::new(&shell, &ctx)?;
    executor.execute(&recipe).await?;

    let duration = start_time.elapsed();

    if json_output {
        output::json(&serde_json::json!({
            "success": true,
            "technology": technology.id,
            "category": technology.category.key(),
            "name": ctx.name.as_str(),
            "path": ctx.paths.project_dir,
            "relative_path": ctx.paths.relative_project_dir,
            "duration_ms": duration.as_millis(),
            "next_steps": recipe.next_steps,
        }))?;
    } else {
        println!();
        output::success(&format!(
            "Project setup completed and ready at {} in {}",
            ctx.paths.project_dir.display(),
            output::format_duration(duration.as_millis())
        ));
        output::info("Happy coding!");

        if !recipe.next_steps.is_empty() {
            println!();
            output::info("Next steps:");
            for line in &recipe.next_steps {
                println!("  {}", line);
            }
            println!();
        }
    }

    if no_start {
        tracing::debug!("--no-start given, not starting the development server");
        return Ok(());
    }
    executor.serve(&recipe).await
}

/// Resolve paths, refuse to overwrite an existing project and pick up the
/// Java installation when the technology needs one
fn prepare_context(
    root: &Path,
    config: Config,
    technology: &'static Technology,
    name: ProjectName,
) -> ScaffoldResult<ProjectContext> {
    let planned = ProjectPaths::resolve(root, &config, technology, &name);
    if planned.project_dir.exists() {
        return Err(ScaffoldError::ProjectExists(planned.relative_project_dir));
    }

    let paths = ProjectPaths::assemble(root, &config, technology, &name)?;
    let ctx = ProjectContext::new(name, technology, paths, config);

    if technology.id != "springboot" {
        return Ok(ctx);
    }

    let java_home = process::java_home();
    match java_home {
        Some(ref home) => tracing::debug!("using JAVA_HOME {}", home.display()),
        None => {
            tracing::warn!("java not found on PATH");
            output::warning("Java was not found on PATH; Maven will use the ambient JAVA_HOME");
        }
    }
    Ok(ctx.with_java_home(java_home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_existing_project_is_refused() {
        let dir = tempdir().unwrap();
        let config = Config::default();
        let tech = Catalog::builtin().find("expressjs").unwrap();
        let existing = dir.path().join("__GEN_PROJECTS/backends/expressjs/orders-api");
        std::fs::create_dir_all(&existing).unwrap();

        let err = prepare_context(dir.path(), config, tech, ProjectName::parse("orders-api").unwrap()).unwrap_err();
        assert!(matches!(err, ScaffoldError::ProjectExists(_)));
    }

    #[test]
    fn test_prepare_creates_tech_dir_only() {
        let dir = tempdir().unwrap();
        let tech = Catalog::builtin().find("mongodb").unwrap();

        let ctx = prepare_context(dir.path(), Config::default(), tech, ProjectName::parse("erp-db").unwrap()).unwrap();

        assert!(ctx.paths.tech_dir.is_dir());
        assert!(!ctx.paths.project_dir.exists());
        assert!(ctx.java_home.is_none());
    }

    #[tokio::test]
    async fn test_namespaced_unknown_flag() {
        let err = execute_namespaced(
            vec!["backends:expressjs".to_string(), "orders-api".to_string(), "--bogus".to_string()],
            false,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidArguments(ref msg) if msg.contains("--bogus")));
    }

    #[tokio::test]
    async fn test_namespaced_unknown_technology() {
        let err = execute_namespaced(vec!["guis:web:ember".to_string(), "my-app".to_string()], false)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::UnknownTechnology { .. }));
    }

    #[tokio::test]
    async fn test_missing_name() {
        let err = execute_namespaced(vec!["databases:mongodb".to_string()], false)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingArgument(_)));
    }
}
