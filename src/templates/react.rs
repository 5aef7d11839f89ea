//! React project template (vite + tailwind)

use crate::core::ScaffoldResult;
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Edit, FilePatch, Recipe, Step};
use crate::templates::{bun, cd_hint, placeholder, title_edit, vite_tailwind_edits, Template};

const DEV_PORT: u16 = 51731;

const FOLDERS: &[Folder] = &[
    Folder::new("components", "# Reusable UI components"),
    Folder::new("hooks", "# Custom React hooks"),
    Folder::new("layouts", "# Layout components (header, footer, sidebar, etc.)"),
    Folder::new("pages", "# Page components (route-based structure)"),
    Folder::new("routes", "# React Router configurations"),
    Folder::new("contexts", "# React Context API configurations"),
    Folder::new("services", "# API calls, Firebase, or third-party integrations"),
    Folder::new("stores", "# Global state management (Zustand, Redux, etc.)"),
    Folder::new("utils", "# Utility functions (helpers, validators, etc.)"),
    Folder::new("config", "# Configuration files (environment variables, API keys, etc.)"),
    Folder::new("types", "# TypeScript types and interfaces"),
    Folder::new("styles", "# Global styles (Tailwind directives, CSS files, etc.)"),
    Folder::new("tests", "# Unit tests, integration tests, and end-to-end tests"),
];

/// React template
pub struct ReactTemplate;

impl Template for ReactTemplate {
    fn name(&self) -> &str {
        "reactjs"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let name = ctx.name.as_str();
        let tech_dir = &ctx.paths.tech_dir;
        let project = &ctx.paths.project_dir;

        let mut vite_edits = vec![Edit::insert_line(0, r#"import path from "path";"#)];
        vite_edits.extend(vite_tailwind_edits(
            3,
            Edit::regex(r"plugins:\s*\[\s*react\(\)\s*\]", "plugins: [react(), tailwindcss()]"),
            DEV_PORT,
        ));
        vite_edits.push(
            Edit::regex(
                r"(?s)server:\s*\{[^}]*\},",
                "${0}\n  resolve: {\n    alias: {\n      \"@\": path.resolve(__dirname, \"src\"),\n    },\n  },",
            )
            .expanding()
            .unless(r"resolve:\s*\{"),
        );

        let recipe = Recipe::new()
            .stage(
                format!("Initialising ReactJs project: {}", name),
                vec![
                    bun(tech_dir, ["create", "vite@latest", name, "--template", "react-ts"]),
                    bun(project, ["install"]),
                ],
            )
            .stage(
                format!("Setting up ReactJs project: {}", name),
                vec![
                    bun(project, ["add", "tailwindcss", "@tailwindcss/vite"]),
                    Step::Patch(FilePatch {
                        path: ctx.project_file("vite.config.ts"),
                        edits: vite_edits,
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
                        path: ctx.project_file("src/styles/global.css"),
                        contents: "@import \"tailwindcss\";\n".to_string(),
                    },
                    Step::RemoveFile(ctx.project_file("src/index.css")),
                    Step::Patch(
                        FilePatch::new(ctx.project_file("src/main.tsx"))
                            .edit(Edit::regex(r#"["']\./index\.css["']"#, r#""./styles/global.css""#)),
                    ),
                    Step::WriteFile {
                        path: ctx.project_file("src/App.css"),
                        contents: String::new(),
                    },
                    Step::Patch(app_patch(ctx)),
                ],
            )
            .serve(CommandSpec::new("bun", project).args(["run", "dev"]))
            .next_step(cd_hint(ctx))
            .next_step("bun run dev");

        Ok(recipe)
    }
}

/// Strip the counter demo from App.tsx and show the landing block
fn app_patch(ctx: &ProjectContext) -> FilePatch {
    FilePatch::new(ctx.project_file("src/App.tsx"))
        .edit(Edit::regex_all(r#"(?i)import\s+reactLogo\s+from\s+['"].*?['"]\s*;?\n?"#, ""))
        .edit(Edit::regex_all(r#"(?i)import\s+viteLogo\s+from\s+['"].*?['"]\s*;?\n?"#, ""))
        .edit(Edit::regex_all(
            r"const\s*\[\s*count\s*,\s*setCount\s*\]\s*=\s*useState\s*\(\s*0\s*\);?",
            "",
        ))
        .edit(Edit::regex_all(r#"import\s*\{\s*useState\s*\}\s+from\s+['"]react['"]\s*;?\n?"#, ""))
        .edit(Edit::regex(
            r"(?s)<>\s*.*?\s*</>",
            placeholder(ctx, "className", "reactjs (vite)"),
        ))
}
