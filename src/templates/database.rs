//! Database servers run through docker compose

use std::time::Duration;

use crate::core::ScaffoldResult;
use crate::project::ProjectContext;
use crate::scaffold::{Recipe, Step, TemplateFile};
use crate::templates::{cd_hint, compose_network_patch, Template};

/// A containerised database server
#[derive(Debug, Clone, Copy)]
pub struct DatabaseTemplate {
    id: &'static str,
    title: &'static str,
    port: u16,
    username: &'static str,
    compose: &'static str,
    /// Lower bound on the health wait, for images that initialise slowly
    min_timeout: u64,
}

const DATABASES: &[DatabaseTemplate] = &[
    DatabaseTemplate {
        id: "mariadb",
        title: "MariaDB",
        port: 3306,
        username: "mariadbadmin",
        compose: include_str!("files/mariadb/docker-compose.yml"),
        min_timeout: 0,
    },
    DatabaseTemplate {
        id: "mongodb",
        title: "MongoDB",
        port: 27017,
        username: "mongodbadmin",
        compose: include_str!("files/mongodb/docker-compose.yml"),
        min_timeout: 0,
    },
    DatabaseTemplate {
        id: "oracleenterprise",
        title: "Oracle Enterprise",
        port: 1521,
        username: "system",
        compose: include_str!("files/oracleenterprise/docker-compose.yml"),
        min_timeout: 600,
    },
    DatabaseTemplate {
        id: "postgresql",
        title: "PostgreSQL",
        port: 5432,
        username: "postgresadmin",
        compose: include_str!("files/postgresql/docker-compose.yml"),
        min_timeout: 0,
    },
];

impl DatabaseTemplate {
    pub fn for_technology(id: &str) -> Option<Self> {
        DATABASES.iter().find(|db| db.id == id).copied()
    }

    /// Name given to the container by the bundled compose file
    pub fn container(&self) -> String {
        format!("multitech-{}-server", self.id)
    }

    fn timeout(&self, ctx: &ProjectContext) -> Duration {
        Duration::from_secs(ctx.config.docker.health_timeout.max(self.min_timeout))
    }
}

impl Template for DatabaseTemplate {
    fn name(&self) -> &str {
        self.id
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let project = &ctx.paths.project_dir;

        let mut init = vec![
            Step::CreateDir(project.clone()),
            Step::CreateDir(ctx.project_file("config")),
            Step::CreateDir(ctx.project_file("data")),
            Step::OpenPermissions(vec![ctx.paths.tech_dir.clone(), project.clone()]),
            Step::CopyTemplates {
                files: vec![TemplateFile {
                    name: "docker-compose.yml",
                    contents: self.compose,
                }],
                dest: project.clone(),
            },
        ];
        init.extend(compose_network_patch(ctx, ctx.project_file("docker-compose.yml")));

        let recipe = Recipe::new()
            .stage(format!("Initialising {} project: {}", self.title, ctx.name), init)
            .stage(
                format!("Starting the {} container", self.title),
                vec![
                    Step::EnsureNetwork,
                    Step::ComposeUp,
                    Step::WaitHealthy {
                        container: self.container(),
                        timeout: self.timeout(ctx),
                    },
                ],
            )
            .next_step(cd_hint(ctx))
            .next_step("The development container is running")
            .next_step(format!("The host url is localhost:{}", self.port))
            .next_step(format!("The username is {}", self.username));

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::templates::testing;
    use std::path::Path;

    #[test]
    fn test_every_database_in_catalog_has_compose_file() {
        for tech in Catalog::builtin().in_category(Category::Database) {
            let db = DatabaseTemplate::for_technology(tech.id).unwrap();
            assert!(
                db.compose.contains(&format!("container_name: {}", db.container())),
                "{} compose file names another container",
                tech.id
            );
            assert!(db.compose.contains("healthcheck:"));
            assert!(db.compose.contains("./data:"));
            assert!(db.compose.contains("./config:"));
        }
        assert!(DatabaseTemplate::for_technology("angular").is_none());
    }

    #[test]
    fn test_oracle_waits_longer() {
        let ctx = testing::context(Path::new("/work"), "oracleenterprise", "erp-db");
        let oracle = DatabaseTemplate::for_technology("oracleenterprise").unwrap();
        assert_eq!(oracle.timeout(&ctx), Duration::from_secs(600));

        let ctx = testing::context(Path::new("/work"), "mongodb", "erp-db");
        let mongo = DatabaseTemplate::for_technology("mongodb").unwrap();
        assert_eq!(mongo.timeout(&ctx), Duration::from_secs(60));
    }

    #[test]
    fn test_recipe_layout() {
        let ctx = testing::context(Path::new("/work"), "mongodb", "erp-db");
        let recipe = DatabaseTemplate::for_technology("mongodb").unwrap().recipe(&ctx).unwrap();

        let project = &ctx.paths.project_dir;
        let steps: Vec<&Step> = recipe.steps().collect();
        assert_eq!(steps[1], &Step::CreateDir(project.join("config")));
        assert_eq!(steps[2], &Step::CreateDir(project.join("data")));
        assert!(matches!(steps[3], Step::OpenPermissions(paths) if paths.len() == 2));
        assert!(!steps.iter().any(|s| matches!(s, Step::EnsureImage { .. })));
        assert_eq!(
            steps.last(),
            Some(&&Step::WaitHealthy {
                container: "multitech-mongodb-server".to_string(),
                timeout: Duration::from_secs(60),
            })
        );
        assert!(recipe.next_steps.iter().any(|l| l == "The host url is localhost:27017"));
        assert_eq!(recipe.commands().count(), 0);
    }
}
