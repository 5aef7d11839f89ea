//! Project templates, one per technology
//!
//! A template turns a [`ProjectContext`] into a [`Recipe`]. Nothing here
//! touches the filesystem or spawns processes; the executor does.

mod angular;
mod apiplatform;
mod astro;
mod database;
mod express;
mod flutter;
mod react;
mod springboot;
mod svelte;
mod vue;

use std::path::{Path, PathBuf};

use crate::catalog::Technology;
use crate::core::config::DEFAULT_NETWORK;
use crate::core::{ScaffoldError, ScaffoldResult};
use crate::process::CommandSpec;
use crate::project::ProjectContext;
use crate::scaffold::{Edit, FilePatch, Recipe, Step};

pub use angular::AngularTemplate;
pub use apiplatform::ApiPlatformTemplate;
pub use astro::AstroTemplate;
pub use database::DatabaseTemplate;
pub use express::ExpressTemplate;
pub use flutter::FlutterTemplate;
pub use react::ReactTemplate;
pub use springboot::SpringBootTemplate;
pub use svelte::SvelteTemplate;
pub use vue::VueTemplate;

/// Template trait for project scaffolding
pub trait Template {
    /// Get the template name
    fn name(&self) -> &str;

    /// Describe how to generate the project
    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe>;
}

/// Template manager
pub struct TemplateManager;

impl TemplateManager {
    /// Create a new template manager
    pub fn new() -> Self {
        Self
    }

    /// Get the template of a catalog technology
    pub fn get_template(&self, technology: &Technology) -> ScaffoldResult<Box<dyn Template>> {
        match technology.id {
            "angular" => Ok(Box::new(AngularTemplate)),
            "astro" => Ok(Box::new(AstroTemplate)),
            "reactjs" => Ok(Box::new(ReactTemplate)),
            "svelte" => Ok(Box::new(SvelteTemplate)),
            "vuejs" => Ok(Box::new(VueTemplate)),
            "flutter" => Ok(Box::new(FlutterTemplate)),
            "apiplatform" => Ok(Box::new(ApiPlatformTemplate)),
            "expressjs" => Ok(Box::new(ExpressTemplate)),
            "springboot" => Ok(Box::new(SpringBootTemplate)),
            id => DatabaseTemplate::for_technology(id)
                .map(|t| Box::new(t) as Box<dyn Template>)
                .ok_or_else(|| ScaffoldError::template(format!("No template for technology: {}", id))),
        }
    }
}

impl Default for TemplateManager {
    fn default() -> Self {
        Self::new()
    }
}

/// `bun <args>` in `cwd`
fn bun<I, S>(cwd: &Path, args: I) -> Step
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Step::Run(CommandSpec::new("bun", cwd).args(args))
}

/// Replace the page `<title>` with the project's display name
fn title_edit(ctx: &ProjectContext) -> Edit {
    Edit::regex(r"<title>.*</title>", format!("<title>{}</title>", ctx.display_name))
}

/// Landing page block with the project name and creation time. `class_attr`
/// is `class`, or `className` for JSX.
fn placeholder(ctx: &ProjectContext, class_attr: &str, label: &str) -> String {
    format!(
        r#"<div><div {attr}="h-1/3 w-full flex items-center justify-center"><h1 {attr}="text-3xl font-bold underline">{name} with {label}</h1></div><div><p {attr}="mt-4 text-gray-500 text-3xl">{timestamp}</p></div></div>"#,
        attr = class_attr,
        name = ctx.display_name,
        label = label,
        timestamp = ctx.timestamp,
    )
}

/// Vite config edits shared by the vite-based templates: tailwind plugin
/// import at `import_line`, the plugin itself, and a fixed dev server port
fn vite_tailwind_edits(import_line: usize, plugins: Edit, port: u16) -> Vec<Edit> {
    vec![
        Edit::insert_line(import_line, "import tailwindcss from '@tailwindcss/vite'"),
        plugins,
        Edit::regex(
            r"(?s)plugins:\s*\[.*?\]\s*,",
            format!("${{0}}\n  server: {{\n    port: {},\n  }},", port),
        )
        .expanding()
        .unless(r"server:\s*\{"),
    ]
}

/// Bundled compose files name the default network; point them at the
/// configured one when it differs
fn compose_network_patch(ctx: &ProjectContext, compose_file: PathBuf) -> Option<Step> {
    let network = &ctx.config.docker.network;
    if network == DEFAULT_NETWORK {
        return None;
    }
    Some(Step::Patch(
        FilePatch::new(compose_file).edit(Edit::regex_all(regex::escape(DEFAULT_NETWORK), network.clone())),
    ))
}

fn cd_hint(ctx: &ProjectContext) -> String {
    format!("cd {}", ctx.paths.relative_project_dir.display())
}
