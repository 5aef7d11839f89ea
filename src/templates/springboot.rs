//! Spring Boot project template, generated by the Spring Initializr

use std::path::PathBuf;

use url::Url;

use crate::core::{ScaffoldError, ScaffoldResult};
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Recipe, Step};
use crate::templates::{cd_hint, Template};

const FOLDERS: &[Folder] = &[
    Folder::new("config", "# Configuration\n\nContains application configuration files and settings."),
    Folder::new("controller", "# Controllers\n\nContains REST controllers handling API requests."),
    Folder::new("service", "# Services\n\nContains business logic and service classes."),
    Folder::new("repository", "# Repositories\n\nContains database access logic using Spring Data JPA."),
    Folder::new("model", "# Models\n\nContains domain models and entity definitions."),
    Folder::new("dto", "# DTOs\n\nContains Data Transfer Objects for API communication."),
    Folder::new("exception", "# Exception Handling\n\nContains custom exceptions and global error handling."),
    Folder::new("security", "# Security\n\nContains security-related configurations and logic (e.g., JWT, authentication)."),
    Folder::new("util", "# Utilities\n\nContains helper and utility functions used across the application."),
];

/// Spring Boot template
pub struct SpringBootTemplate;

impl Template for SpringBootTemplate {
    fn name(&self) -> &str {
        "springboot"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let project = &ctx.paths.project_dir;
        let package = java_package(ctx);
        let package_dir = package
            .split('.')
            .fold(ctx.project_file("src/main/java"), |path, segment| path.join(segment));

        let recipe = Recipe::new()
            .stage(
                format!("Initialising SpringBoot project: {}", ctx.name),
                vec![
                    Step::CreateDir(project.clone()),
                    Step::DownloadArchive {
                        url: spring_starter_url(ctx)?,
                        dest: project.clone(),
                    },
                    Step::MakeExecutable(ctx.project_file("mvnw")),
                    Step::Run(with_java_home(maven(ctx).arg("wrapper:wrapper"), ctx)),
                ],
            )
            .stage(
                "Creating suggested folder structure",
                vec![Step::SuggestedFolders {
                    base: package_dir.clone(),
                    folders: FOLDERS.to_vec(),
                }],
            )
            .stage(
                "Preparing the base project",
                vec![Step::WriteFile {
                    path: package_dir.join("controller").join("HelloController.java"),
                    contents: hello_controller(ctx, &package),
                }],
            )
            .serve(with_java_home(maven(ctx).arg("spring-boot:run"), ctx))
            .next_step(cd_hint(ctx))
            .next_step("./mvnw spring-boot:run")
            .next_step("Go to http://localhost:8080/hello");

        Ok(recipe)
    }
}

/// `<group id>.<snake_case name>`
fn java_package(ctx: &ProjectContext) -> String {
    format!("{}.{}", ctx.config.spring.group_id, ctx.name.snake_case())
}

/// Initializr download URL with every parameter percent-encoded
pub fn spring_starter_url(ctx: &ProjectContext) -> ScaffoldResult<String> {
    let spring = &ctx.config.spring;
    let name = ctx.name.as_str();
    let package = java_package(ctx);

    let url = Url::parse_with_params(
        &spring.url,
        &[
            ("type", "maven-project"),
            ("language", "java"),
            ("javaVersion", spring.java_version.as_str()),
            ("bootVersion", spring.boot_version.as_str()),
            ("packaging", "jar"),
            ("groupId", spring.group_id.as_str()),
            ("artifactId", name),
            ("name", name),
            ("packageName", package.as_str()),
            ("dependencies", spring.dependencies.as_str()),
        ],
    )
    .map_err(|e| ScaffoldError::config(format!("invalid Spring Initializr URL '{}': {}", spring.url, e)))?;

    Ok(url.into())
}

/// The project's maven wrapper, addressed by absolute path
fn maven(ctx: &ProjectContext) -> CommandSpec {
    let mvnw: PathBuf = ctx.project_file("mvnw");
    CommandSpec::new(mvnw.to_string_lossy(), &ctx.paths.project_dir)
}

fn with_java_home(spec: CommandSpec, ctx: &ProjectContext) -> CommandSpec {
    match ctx.java_home {
        Some(ref home) => spec.env("JAVA_HOME", home.to_string_lossy()),
        None => spec,
    }
}

fn hello_controller(ctx: &ProjectContext, package: &str) -> String {
    format!(
        r#"package {package}.controller;

import org.springframework.web.bind.annotation.GetMapping;
import org.springframework.web.bind.annotation.RestController;

@RestController
public class HelloController {{

    @GetMapping("/hello")
    public String hello() {{
        return "Hello {name} with SpringBoot!<br/>{timestamp}";
    }}

}}
"#,
        package = package,
        name = ctx.display_name,
        timestamp = ctx.timestamp,
    )
}
