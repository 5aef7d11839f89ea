//! Svelte project template (vite + tailwind)

use crate::core::ScaffoldResult;
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Edit, FilePatch, Recipe, Step};
use crate::templates::{bun, cd_hint, placeholder, title_edit, vite_tailwind_edits, Template};

const DEV_PORT: u16 = 51732;

const FOLDERS: &[Folder] = &[
    Folder::new("assets", "# Static assets (images, fonts, styles)"),
    Folder::new("lib", "# Library for reusable components, stores, and utilities"),
    Folder::new("lib/components", "# Reusable UI components"),
    Folder::new("lib/stores", "# Svelte stores (global state management)"),
    Folder::new("lib/utils", "# Utility functions and helpers"),
    Folder::new("lib/hooks", "# Custom Svelte hooks"),
    Folder::new("routes", "# SvelteKit routes (if applicable)"),
    Folder::new("styles", "# Global styles (CSS, SCSS, Tailwind, etc.)"),
    Folder::new("config", "# Configuration files (API endpoints, constants)"),
    Folder::new("static", "# Public static files (favicons, robots.txt, etc.)"),
    Folder::new("tests", "# Unit and integration tests"),
];

/// Svelte template
pub struct SvelteTemplate;

impl Template for SvelteTemplate {
    fn name(&self) -> &str {
        "svelte"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let name = ctx.name.as_str();
        let project = &ctx.paths.project_dir;

        let recipe = Recipe::new()
            .stage(
                format!("Initialising Svelte project: {}", name),
                vec![
                    bun(&ctx.paths.tech_dir, ["create", "vite@latest", name, "--template", "svelte-ts"]),
                    bun(project, ["install"]),
                ],
            )
            .stage(
                format!("Setting up Svelte project: {}", name),
                vec![
                    bun(project, ["add", "tailwindcss", "@tailwindcss/vite"]),
                    Step::Patch(FilePatch {
                        path: ctx.project_file("vite.config.ts"),
                        edits: vite_tailwind_edits(
                            2,
                            Edit::regex(r"plugins:\s*\[\s*svelte\(\)\s*\]", "plugins: [svelte(), tailwindcss()]"),
                            DEV_PORT,
                        ),
                    }),
                ],
            )
            .stage(
                "Creating suggested folder structure",
                vec![Step::SuggestedFolders {
                    base: ctx.project_file("src"),
                    folders: FOLDERS.to_vec(),
                }],
            )
            .stage(
                "Preparing the base project",
                vec![
                    Step::Patch(FilePatch::new(ctx.project_file("index.html")).edit(title_edit(ctx))),
                    Step::WriteFile {
                        path: ctx.project_file("src/app.css"),
                        contents: "@import \"tailwindcss\";\n".to_string(),
                    },
                    Step::WriteFile {
                        path: ctx.project_file("src/App.svelte"),
                        contents: placeholder(ctx, "class", "svelte (vite)"),
                    },
                ],
            )
            .serve(CommandSpec::new("bun", project).args(["run", "dev"]))
            .next_step(cd_hint(ctx))
            .next_step("bun run dev");

        Ok(recipe)
    }
}
