//! Container lifecycle: shared network, image, compose up and health wait

use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;

use crate::core::config::DockerConfig;
use crate::core::{ScaffoldError, ScaffoldResult};
use crate::process::{CommandSpec, Shell};

/// Health status reported by `docker inspect` for a ready container
const HEALTHY: &str = "healthy";

/// Drives the docker CLI for one project
pub struct ContainerController<'a, S> {
    shell: &'a S,
    config: &'a DockerConfig,
}

impl<'a, S: Shell> ContainerController<'a, S> {
    pub fn new(shell: &'a S, config: &'a DockerConfig) -> Self {
        Self { shell, config }
    }

    fn docker(cwd: &Path) -> CommandSpec {
        CommandSpec::new("docker", cwd)
    }

    /// Create the shared bridge network unless it already exists.
    ///
    /// Failures are logged and swallowed: compose may still succeed when the
    /// network exists through other means. Returns whether a network was
    /// created.
    pub async fn ensure_shared_network(&self, cwd: &Path) -> bool {
        let network = &self.config.network;
        let list = Self::docker(cwd).args(["network", "ls", "--format", "{{.Name}}"]);

        let existing = match self.shell.capture(&list).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("could not list docker networks: {}", e);
                return false;
            }
        };

        if existing.lines().any(|name| name.trim() == network) {
            tracing::info!("docker network '{}' already exists", network);
            return false;
        }

        let create = Self::docker(cwd).args([
            "network",
            "create",
            "--driver",
            "bridge",
            "--subnet",
            self.config.subnet.as_str(),
            network.as_str(),
        ]);

        match self.shell.run(&create).await {
            Ok(()) => {
                tracing::info!("docker network '{}' created", network);
                true
            }
            Err(e) => {
                tracing::warn!("could not create docker network '{}': {}", network, e);
                false
            }
        }
    }

    /// Build `image` from `context_dir` when it is not present locally.
    /// Returns whether a build ran.
    pub async fn ensure_image(&self, image: &str, context_dir: &Path) -> ScaffoldResult<bool> {
        let query = Self::docker(context_dir).args(["images", "-q", image]);
        if !self.shell.capture(&query).await?.is_empty() {
            tracing::info!("docker image '{}' already present", image);
            return Ok(false);
        }

        let build = Self::docker(context_dir).args(["build", "--no-cache", "-t", image, "."]);
        self.shell.run(&build).await?;
        Ok(true)
    }

    /// `docker compose up --build -d` for the compose file in `project_dir`
    pub async fn bring_up(&self, project_dir: &Path) -> ScaffoldResult<()> {
        let up = Self::docker(project_dir).args(["compose", "up", "--build", "-d"]);
        self.shell.run(&up).await
    }

    /// Poll the container's health until it reports healthy or `timeout`
    /// elapses. Inspection failures count as "not healthy yet".
    pub async fn wait_healthy(&self, container: &str, timeout: Duration, cwd: &Path) -> ScaffoldResult<()> {
        let interval = Duration::from_secs(self.config.poll_interval);
        let start = Instant::now();

        loop {
            match self.health_status(container, cwd).await {
                Ok(Some(status)) if status == HEALTHY => return Ok(()),
                Ok(Some(status)) => tracing::debug!("container '{}' is {}", container, status),
                Ok(None) => tracing::debug!("container '{}' not created yet", container),
                Err(e) => tracing::debug!("waiting for container '{}' to start: {}", container, e),
            }

            if start.elapsed() > timeout {
                tracing::error!("container '{}' did not become healthy in time", container);
                return Err(ScaffoldError::HealthTimeout {
                    container: container.to_string(),
                    seconds: timeout.as_secs(),
                });
            }

            tokio::time::sleep(interval).await;
        }
    }

    /// Health status of the first container matching `container`, `None`
    /// while no such container exists
    async fn health_status(&self, container: &str, cwd: &Path) -> ScaffoldResult<Option<String>> {
        let filter = format!("name={}", container);
        let ps = Self::docker(cwd).args(["ps", "-q", "--filter", filter.as_str()]);
        let ids = self.shell.capture(&ps).await?;

        let Some(id) = ids.lines().map(str::trim).find(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let inspect = Self::docker(cwd).args(["inspect", "--format", "{{.State.Health.Status}}", id]);
        Ok(Some(self.shell.capture(&inspect).await?))
    }
}
