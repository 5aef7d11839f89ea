//! API Platform template: a PHP container built from bundled files

use std::time::Duration;

use crate::core::ScaffoldResult;
use crate::project::ProjectContext;
use crate::scaffold::{Recipe, Step, TemplateFile};
use crate::templates::{cd_hint, compose_network_patch, Template};

const IMAGE: &str = "multitech-apiplatform";
const CONTAINER: &str = "multitech-apiplatform";

const FILES: &[TemplateFile] = &[
    TemplateFile {
        name: "docker-compose.yml",
        contents: include_str!("files/apiplatform/docker-compose.yml"),
    },
    TemplateFile {
        name: "Dockerfile",
        contents: include_str!("files/apiplatform/Dockerfile"),
    },
    TemplateFile {
        name: "default.conf",
        contents: include_str!("files/apiplatform/default.conf"),
    },
    TemplateFile {
        name: "supervisord.conf",
        contents: include_str!("files/apiplatform/supervisord.conf"),
    },
    TemplateFile {
        name: "setup.sh",
        contents: include_str!("files/apiplatform/setup.sh"),
    },
];

/// API Platform template
pub struct ApiPlatformTemplate;

impl Template for ApiPlatformTemplate {
    fn name(&self) -> &str {
        "apiplatform"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let project = &ctx.paths.project_dir;

        let mut init = vec![
            Step::CreateDir(project.clone()),
            Step::CopyTemplates {
                files: FILES.to_vec(),
                dest: project.clone(),
            },
        ];
        init.extend(compose_network_patch(ctx, ctx.project_file("docker-compose.yml")));

        let recipe = Recipe::new()
            .stage(format!("Initialising ApiPlatform project: {}", ctx.name), init)
            .stage(
                "Starting the ApiPlatform container",
                vec![
                    Step::EnsureNetwork,
                    Step::EnsureImage {
                        image: IMAGE.to_string(),
                    },
                    Step::ComposeUp,
                    Step::WaitHealthy {
                        container: CONTAINER.to_string(),
                        timeout: Duration::from_secs(ctx.config.docker.health_timeout),
                    },
                ],
            )
            .next_step(cd_hint(ctx))
            .next_step("The development container is running")
            .next_step("The url to access the server is http://localhost:8086")
            .next_step("You can test the url http://localhost:8086/hello-api");

        Ok(recipe)
    }
}
