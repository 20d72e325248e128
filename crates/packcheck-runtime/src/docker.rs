//! Container runtime CLI wrapper.
//!
//! Each method is a single invocation of one `docker` subcommand with
//! captured output; a non-zero exit maps to `CommandFailed` with both
//! streams attached.

use std::path::{Path, PathBuf};
use std::process::Command;

use packcheck_common::constants::{DOCKER_BIN, FUNCTION_PORT};
use packcheck_common::error::{PackcheckError, Result};
use packcheck_common::types::{ContainerId, ContainerStatus, ImageTag};

const DOCKER_INSTALL_HINT: &str =
    "Install Docker Desktop/Engine: https://www.docker.com/get-started/";

/// Go template handed to `docker inspect` to extract the run status.
const STATUS_TEMPLATE: &str = "{{.State.Status}}";

/// Handle to a located `docker` binary.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: PathBuf,
}

impl DockerCli {
    /// Locates the `docker` binary on PATH.
    ///
    /// # Errors
    ///
    /// Returns [`PackcheckError::ToolNotFound`] with an install hint if the
    /// binary is not found.
    pub fn locate() -> Result<Self> {
        let binary = which::which(DOCKER_BIN).map_err(|_| PackcheckError::ToolNotFound {
            tool: DOCKER_BIN,
            hint: DOCKER_INSTALL_HINT,
        })?;
        tracing::debug!(binary = %binary.display(), "located docker binary");
        Ok(Self { binary })
    }

    /// Creates a handle for an explicit binary path, bypassing PATH lookup.
    #[must_use]
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Returns the path of the wrapped binary.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Starts a container from the image in detached mode and returns the
    /// assigned container id.
    ///
    /// When `publish_port` is given, the function port inside the container
    /// is published to that host port.
    ///
    /// # Errors
    ///
    /// Returns an error if the run command cannot be spawned or exits
    /// non-zero.
    pub fn run_detached(
        &self,
        image: &ImageTag,
        publish_port: Option<u16>,
    ) -> Result<ContainerId> {
        let mut args = vec!["run".to_string(), "-d".to_string()];
        if let Some(port) = publish_port {
            args.push("-p".to_string());
            args.push(format!("{port}:{FUNCTION_PORT}"));
        }
        args.push(image.as_str().to_string());

        tracing::info!(image = %image, "starting container");
        let output = self.invoke(&args)?;
        let id = ContainerId::new(String::from_utf8_lossy(&output.stdout));
        tracing::info!(id = %id, "container started");
        Ok(id)
    }

    /// Queries the container's current run status.
    ///
    /// # Errors
    ///
    /// Returns an error if the inspect command cannot be spawned or exits
    /// non-zero (e.g. the container does not exist).
    pub fn inspect_status(&self, id: &ContainerId) -> Result<ContainerStatus> {
        let args = [
            "inspect".to_string(),
            "-f".to_string(),
            STATUS_TEMPLATE.to_string(),
            id.as_str().to_string(),
        ];
        let output = self.invoke(&args)?;
        let status = ContainerStatus::parse(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(id = %id, status = %status, "inspected container");
        Ok(status)
    }

    /// Stops a running container.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop command cannot be spawned or exits
    /// non-zero.
    pub fn stop(&self, id: &ContainerId) -> Result<()> {
        tracing::info!(id = %id, "stopping container");
        let _output = self.invoke(&["stop".to_string(), id.as_str().to_string()])?;
        Ok(())
    }

    /// Fetches the container's logs, both streams combined.
    ///
    /// # Errors
    ///
    /// Returns an error if the logs command cannot be spawned or exits
    /// non-zero.
    pub fn logs(&self, id: &ContainerId) -> Result<String> {
        let output = self.invoke(&["logs".to_string(), id.as_str().to_string()])?;
        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }

    /// Runs one docker subcommand, mapping spawn failures and non-zero exits
    /// to domain errors.
    fn invoke(&self, args: &[String]) -> Result<std::process::Output> {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| PackcheckError::Io {
                path: self.binary.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(PackcheckError::CommandFailed {
                tool: DOCKER_BIN,
                code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }
        Ok(output)
    }
}
