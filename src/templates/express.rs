//! Express project template (bun + TypeScript + prisma)

use crate::core::ScaffoldResult;
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Recipe, Step};
use crate::templates::{bun, cd_hint, Template};

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ESNext",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "strict": true,
    "rootDir": "src",
    "outDir": "dist",
    "esModuleInterop": true,
    "forceConsistentCasingInFileNames": true
  },
  "include": ["src"]
}
"#;

const SCRIPTS: &[(&str, &str)] = &[
    ("start", "bun run --watch src/server.ts"),
    ("prisma:init", "prisma init"),
    ("prisma:generate", "prisma generate"),
    ("prisma:migrate:init", "prisma migrate dev --name init"),
    ("prisma:migrate", "prisma migrate dev"),
    ("prisma:validate", "prisma validate"),
    ("prisma:format", "prisma format"),
    ("prisma:db:pull", "prisma db pull"),
    ("prisma:db:push", "prisma db push"),
];

const FOLDERS: &[Folder] = &[
    Folder::new("src", "# Source Code\n\nContains all the core application logic."),
    Folder::new("src/config", "# Configuration\n\nStores configuration files such as database connections and environment settings."),
    Folder::new("src/routes", "# Routes\n\nDefines API endpoints and their handlers."),
    Folder::new("src/controllers", "# Controllers\n\nHandles request processing and response logic."),
    Folder::new("src/services", "# Services\n\nContains business logic and database interactions."),
    Folder::new("src/models", "# Models\n\nDefines database schemas (if using an ORM like Sequelize or Mongoose)."),
    Folder::new("src/middleware", "# Middleware\n\nCustom middleware for authentication, logging, etc."),
    Folder::new("src/utils", "# Utilities\n\nHelper functions and utility methods."),
    Folder::new("public", "# Public Assets\n\nStatic files like images, CSS, and client-side JavaScript."),
    Folder::new("tests", "# Tests\n\nUnit and integration tests for the application."),
];

/// Express template
pub struct ExpressTemplate;

impl Template for ExpressTemplate {
    fn name(&self) -> &str {
        "expressjs"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let project = &ctx.paths.project_dir;

        let recipe = Recipe::new()
            .stage(
                format!("Initialising ExpressJs project: {}", ctx.name),
                vec![
                    Step::CreateDir(project.clone()),
                    bun(project, ["init", "-y"]),
                    bun(project, ["add", "express", "dotenv", "prisma", "@prisma/client"]),
                    bun(project, ["add", "-d", "typescript", "tsx", "@types/node", "@types/express"]),
                    Step::WriteFile {
                        path: ctx.project_file("tsconfig.json"),
                        contents: TSCONFIG.to_string(),
                    },
                    Step::UpdatePackageJson {
                        path: ctx.project_file("package.json"),
                        scripts: SCRIPTS
                            .iter()
                            .map(|(name, command)| (name.to_string(), command.to_string()))
                            .collect(),
                        remove: vec!["module".to_string()],
                    },
                ],
            )
            .stage(
                "Creating suggested folder structure",
                vec![Step::SuggestedFolders {
                    base: project.clone(),
                    folders: FOLDERS.to_vec(),
                }],
            )
            .stage(
                "Preparing the base project",
                vec![Step::WriteFile {
                    path: ctx.project_file("src/server.ts"),
                    contents: server_ts(ctx),
                }],
            )
            .serve(CommandSpec::new("bun", project).args(["run", "start"]))
            .next_step(cd_hint(ctx))
            .next_step("bun run start");

        Ok(recipe)
    }
}

fn server_ts(ctx: &ProjectContext) -> String {
    format!(
        r#"import express, {{ Request, Response }} from "express";
import dotenv from "dotenv";

dotenv.config();

const app = express();
const PORT = process.env.PORT || 3000;

// Middleware
app.use(express.json());

// Default route
app.get("/", (req: Request, res: Response) => {{
    res.send("{name} with ExpressJs<br/>{timestamp}");
}});

// Start server
app.listen(PORT, () => {{
    console.log(`Server is running on http://localhost:${{PORT}}`);
}});
"#,
        name = ctx.display_name,
        timestamp = ctx.timestamp,
    )
}
