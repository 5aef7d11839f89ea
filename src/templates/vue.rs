//! Vue project template (create-vue + tailwind)

use crate::core::ScaffoldResult;
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Edit, FilePatch, Recipe, Step};
use crate::templates::{bun, cd_hint, placeholder, title_edit, vite_tailwind_edits, Template};

const DEV_PORT: u16 = 51733;

const FOLDERS: &[Folder] = &[
    Folder::new("assets", "# Static assets (images, fonts, styles)"),
    Folder::new("components", "# Reusable components"),
    Folder::new("composables", "# Reusable composable functions (Vue 3 hooks)"),
    Folder::new("layouts", "# Layout components (Header, Sidebar, etc.)"),
    Folder::new("router", "# Vue Router configuration"),
    Folder::new("stores", "# Pinia/Vuex store modules"),
    Folder::new("styles", "# Global styles (CSS, SCSS, Tailwind, etc.)"),
    Folder::new("utils", "# Utility/helper functions"),
    Folder::new("views", "# Page views (full-page components)"),
    Folder::new("services", "# API calls, authentication, external services"),
    Folder::new("directives", "# Custom Vue directives"),
    Folder::new("plugins", "# Third-party plugin configuration (i18n, Axios, etc.)"),
    Folder::new("types", "# TypeScript interfaces and types"),
];

/// Vue template
pub struct VueTemplate;

impl Template for VueTemplate {
    fn name(&self) -> &str {
        "vuejs"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let name = ctx.name.as_str();
        let project = &ctx.paths.project_dir;

        // create-vue lists several plugins; keep them and append tailwind
        let plugins = Edit::regex(
            r"plugins:\s*\[\s*([\s\S]*?),?\s*\]",
            "plugins: [\n    ${1},\n    tailwindcss(),\n  ]",
        )
        .expanding();

        let recipe = Recipe::new()
            .stage(
                format!("Initialising VueJs project: {}", name),
                vec![
                    bun(
                        &ctx.paths.tech_dir,
                        ["create", "vue@latest", name, "--ts", "--router", "--pinia", "--eslint"],
                    ),
                    bun(project, ["install"]),
                ],
            )
            .stage(
                format!("Setting up VueJs project: {}", name),
                vec![
                    bun(project, ["add", "tailwindcss", "@tailwindcss/vite"]),
                    Step::Patch(FilePatch {
                        path: ctx.project_file("vite.config.ts"),
                        edits: vite_tailwind_edits(2, plugins, DEV_PORT),
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
                        path: ctx.project_file("src/assets/base.css"),
                        contents: "@import \"tailwindcss\";\n".to_string(),
                    },
                    Step::WriteFile {
                        path: ctx.project_file("src/assets/main.css"),
                        contents: "@import './base.css';\n".to_string(),
                    },
                    Step::WriteFile {
                        path: ctx.project_file("src/App.vue"),
                        contents: format!("<template>{}</template>", placeholder(ctx, "class", "VueJs (vite)")),
                    },
                ],
            )
            .serve(CommandSpec::new("bun", project).args(["run", "dev"]))
            .next_step(cd_hint(ctx))
            .next_step("bun run dev");

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::apply_edits;
    use crate::templates::testing;
    use std::path::Path;

    const VITE_CONFIG: &str = "import { fileURLToPath, URL } from 'node:url'\n\nimport { defineConfig } from 'vite'\nimport vue from '@vitejs/plugin-vue'\nimport vueDevTools from 'vite-plugin-vue-devtools'\n\n// https://vite.dev/config/\nexport default defineConfig({\n  plugins: [\n    vue(),\n    vueDevTools(),\n  ],\n  resolve: {\n    alias: {\n      '@': fileURLToPath(new URL('./src', import.meta.url))\n    },\n  },\n})\n";

    #[test]
    fn test_vite_config_keeps_existing_plugins() {
        let ctx = testing::context(Path::new("/work"), "vuejs", "admin-panel");
        let recipe = VueTemplate.recipe(&ctx).unwrap();

        let patch = recipe
            .steps()
            .find_map(|step| match step {
                Step::Patch(patch) if patch.path.ends_with("vite.config.ts") => Some(patch),
                _ => None,
            })
            .unwrap();

        let out = apply_edits(VITE_CONFIG, &patch.edits).unwrap();
        assert!(out.contains("plugins: [\n    vue(),\n    vueDevTools(),\n    tailwindcss(),\n  ],"));
        assert!(out.contains("port: 51733"));
        assert!(!out.contains(",,"));
        assert_eq!(out.lines().nth(2), Some("import tailwindcss from '@tailwindcss/vite'"));
    }

    #[test]
    fn test_app_vue_is_wrapped_in_template() {
        let ctx = testing::context(Path::new("/work"), "vuejs", "admin-panel");
        let recipe = VueTemplate.recipe(&ctx).unwrap();

        let app = recipe
            .steps()
            .find_map(|step| match step {
                Step::WriteFile { path, contents } if path.ends_with("App.vue") => Some(contents.clone()),
                _ => None,
            })
            .unwrap();
        assert!(app.starts_with("<template><div>"));
        assert!(app.contains("Admin Panel with VueJs (vite)"));
    }
}
