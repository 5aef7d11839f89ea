//! Astro project template

use crate::core::ScaffoldResult;
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Edit, FilePatch, Recipe, Step};
use crate::templates::{bun, cd_hint, placeholder, title_edit, Template};

const FOLDERS: &[Folder] = &[
    Folder::new("assets", "# Project Assets\n\nStores project-specific assets like images, fonts, and icons."),
    Folder::new("components", "# Reusable UI Components\n\nContains UI components used across multiple pages."),
    Folder::new("config", "# Configuration Files\n\nHolds site settings, metadata, and API configurations."),
    Folder::new("content", "# Content Collection\n\nStores Markdown/MDX files for blog posts or dynamic content."),
    Folder::new("layouts", "# Layouts\n\nDefines reusable page layouts for consistent design."),
    Folder::new("pages", "# Pages\n\nContains Astro pages that define routes for the site."),
    Folder::new("styles", "# Global Styles\n\nHolds CSS, SCSS, or Tailwind styles for the project."),
    Folder::new("utils", "# Utility Functions\n\nHelper functions for common operations like formatting dates."),
    Folder::new("services", "# Services\n\nHandles API requests and business logic."),
    Folder::new("hooks", "# Custom Hooks\n\nStores framework-specific custom hooks (if applicable)."),
];

/// Astro template
pub struct AstroTemplate;

impl Template for AstroTemplate {
    fn name(&self) -> &str {
        "astro"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let name = ctx.name.as_str();
        let project = &ctx.paths.project_dir;

        let recipe = Recipe::new()
            .stage(
                format!("Initialising Astro project: {}", name),
                vec![bun(
                    &ctx.paths.tech_dir,
                    ["create", "astro@latest", name, "--template", "basics", "--install", "--git"],
                )],
            )
            .stage(
                format!("Setting up Astro project: {}", name),
                vec![bun(project, ["astro", "add", "tailwind", "-y"])],
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
                    Step::Patch(
                        FilePatch::new(ctx.project_file("src/layouts/Layout.astro"))
                            .edit(title_edit(ctx))
                            .edit(Edit::Prepend("---\nimport \"../styles/global.css\";\n---\n\n".to_string())),
                    ),
                    Step::Patch(FilePatch::new(ctx.project_file("src/pages/index.astro")).edit(
                        Edit::regex(
                            r"<Welcome\s*/>",
                            format!("\n{}\n\n${{0}}", placeholder(ctx, "class", "astro")),
                        )
                        .expanding(),
                    )),
                ],
            )
            .serve(CommandSpec::new("bun", project).args(["run", "dev"]))
            .next_step(cd_hint(ctx))
            .next_step("bun run dev");

        Ok(recipe)
    }
}
