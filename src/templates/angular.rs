//! Angular project template (Angular CLI + tailwind through postcss)

use crate::core::ScaffoldResult;
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Edit, FilePatch, Recipe, Step};
use crate::templates::{bun, cd_hint, placeholder, title_edit, Template};

const POSTCSS_CONFIG: &str = "{\n  \"plugins\": {\n    \"@tailwindcss/postcss\": {}\n  }\n}\n";

const FOLDERS: &[Folder] = &[
    Folder::new("core", "# Core module for singleton services and global config"),
    Folder::new("core/services", "## Singleton services (Auth, API, Logging, etc.)"),
    Folder::new("core/guards", "## Route guards for protecting routes"),
    Folder::new("core/interceptors", "## HTTP interceptors for modifying requests and responses"),
    Folder::new("core/models", "## Global interfaces and models"),
    Folder::new("shared", "# Shared module for reusable components, directives, and pipes"),
    Folder::new("shared/components", "## UI components (buttons, modals, etc.)"),
    Folder::new("shared/directives", "## Custom directives"),
    Folder::new("shared/pipes", "## Custom pipes"),
    Folder::new("features", "# Feature modules (lazy-loaded when possible)"),
    Folder::new("features/home", "## Home feature module"),
    Folder::new("features/auth", "## Authentication module"),
    Folder::new("features/dashboard", "## Dashboard feature module"),
    Folder::new("layouts", "# Layout components (header, sidebar, etc.)"),
    Folder::new("layouts/main-layout", "## Main layout"),
    Folder::new("layouts/auth-layout", "## Authentication layout"),
    Folder::new("store", "# Global state management (NgRx, signals, or services)"),
    Folder::new("store/actions", "## State actions"),
    Folder::new("store/reducers", "## Reducers for managing state updates"),
    Folder::new("store/selectors", "## Selectors for retrieving specific state slices"),
    Folder::new("store/effects", "## Effects for handling side effects like API calls"),
    Folder::new("config", "# Environment and global app config"),
    Folder::new("assets", "# Static assets (images, icons, etc.)"),
    Folder::new("environments", "# Environment-specific configurations"),
    Folder::new("styles", "# Global styles and themes"),
    Folder::new("testing", "# Testing utilities and mocks"),
    Folder::new("i18n", "# Internationalization (i18n) files"),
];

/// Angular template
pub struct AngularTemplate;

impl Template for AngularTemplate {
    fn name(&self) -> &str {
        "angular"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let name = ctx.name.as_str();
        let project = &ctx.paths.project_dir;

        let recipe = Recipe::new()
            .stage(
                format!("Initialising Angular project: {}", name),
                vec![Step::Run(CommandSpec::new("ng", &ctx.paths.tech_dir).args([
                    "new",
                    name,
                    "--style=css",
                    "--ssr=false",
                    "--package-manager",
                    "bun",
                ]))],
            )
            .stage(
                format!("Setting up Angular project: {}", name),
                vec![
                    bun(project, ["add", "tailwindcss", "@tailwindcss/postcss", "postcss"]),
                    Step::WriteFile {
                        path: ctx.project_file(".postcssrc.json"),
                        contents: POSTCSS_CONFIG.to_string(),
                    },
                    Step::Patch(
                        FilePatch::new(ctx.project_file("src/styles.css"))
                            .edit(Edit::Append("@import \"tailwindcss\";\n".to_string())),
                    ),
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
                    Step::Patch(FilePatch::new(ctx.project_file("src/index.html")).edit(title_edit(ctx))),
                    Step::WriteFile {
                        path: ctx.project_file("src/app/app.component.html"),
                        contents: placeholder(ctx, "class", "angular"),
                    },
                    Step::Patch(
                        FilePatch::new(ctx.project_file("src/app/app.component.ts"))
                            .edit(Edit::literal("import { RouterOutlet } from '@angular/router';", ""))
                            .edit(Edit::literal("imports: [RouterOutlet],", "imports: [],"))
                            .edit(Edit::regex(r"title = '.*?';", format!("title = '{}';", ctx.display_name))),
                    ),
                ],
            )
            .serve(CommandSpec::new("bun", project).args(["run", "start"]))
            .next_step(cd_hint(ctx))
            .next_step("bun run start");

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::apply_edits;
    use crate::templates::testing;
    use std::path::Path;

    const APP_COMPONENT: &str = "import { Component } from '@angular/core';\nimport { RouterOutlet } from '@angular/router';\n\n@Component({\n  selector: 'app-root',\n  imports: [RouterOutlet],\n  templateUrl: './app.component.html',\n  styleUrl: './app.component.css'\n})\nexport class AppComponent {\n  title = 'movie-night';\n}\n";

    #[test]
    fn test_app_component_drops_router_and_sets_title() {
        let ctx = testing::context(Path::new("/work"), "angular", "movie-night");
        let recipe = AngularTemplate.recipe(&ctx).unwrap();

        let patch = recipe
            .steps()
            .find_map(|step| match step {
                Step::Patch(patch) if patch.path.ends_with("app.component.ts") => Some(patch),
                _ => None,
            })
            .unwrap();

        let out = apply_edits(APP_COMPONENT, &patch.edits).unwrap();
        assert!(!out.contains("RouterOutlet"));
        assert!(out.contains("imports: [],"));
        assert!(out.contains("title = 'Movie Night';"));
    }

    #[test]
    fn test_generator_runs_ng_in_tech_dir() {
        let ctx = testing::context(Path::new("/work"), "angular", "movie-night");
        let recipe = AngularTemplate.recipe(&ctx).unwrap();

        let lines: Vec<String> = recipe.commands().map(|c| c.display()).collect();
        assert_eq!(
            lines,
            vec![
                "ng new movie-night --style=css --ssr=false --package-manager bun",
                "bun add tailwindcss @tailwindcss/postcss postcss",
            ]
        );
        assert_eq!(recipe.next_steps.last().map(String::as_str), Some("bun run start"));
    }
}
