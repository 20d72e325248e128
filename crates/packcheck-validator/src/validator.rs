//! Validation pipeline orchestration.

use std::time::Instant;

use chrono::Utc;

use packcheck_build::pack::{BuildOutput, BuildRequest, PackCli};
use packcheck_common::config::ValidatorConfig;
use packcheck_common::error::Result;
use packcheck_common::types::ImageTag;
use packcheck_runtime::docker::DockerCli;

use crate::appdir;
use crate::healthcheck;
use crate::report::{ValidationReport, Verdict};

/// Drives one function source directory through build, launch, and health
/// check.
///
/// External tools are located lazily, at the step that needs them: a missing
/// `pack` halts before anything is built, and a missing `docker` only
/// surfaces after a successful build, matching the step-by-step tool
/// discovery of the validation contract.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the validator's configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates the named function fixture against the runtime version.
    ///
    /// Builds an image from `{base_dir}/{app_dir_name}` with a freshly
    /// generated unique tag, starts it detached, observes the container
    /// status per the configured health check policy, and stops the
    /// container only when it was seen running. On the failure path the
    /// container is left in place for inspection and its logs are captured
    /// into the report.
    ///
    /// # Errors
    ///
    /// Returns an error if a tool is missing, the build or launch fails, or
    /// a status inspection fails. A container that is simply not running is
    /// not an error; it is reported via [`Verdict::NotRunning`].
    pub fn validate(&self, app_dir_name: &str, runtime_version: &str) -> Result<ValidationReport> {
        let started_at = Utc::now();

        let app_dir = appdir::ensure_app_dir(&self.config.base_dir, app_dir_name)?;
        let image_tag = ImageTag::generate(app_dir_name, runtime_version);
        tracing::info!(image = %image_tag, app_dir = %app_dir.display(), "validation started");

        // Step A: build. Locating pack first means a missing builder halts
        // before any image or container side effects exist.
        let pack = self.pack_cli()?;
        eprintln!("  Building image '{image_tag}'...");
        let build_start = Instant::now();
        let request = BuildRequest::for_function(
            image_tag.clone(),
            &app_dir,
            self.config.builder_image.clone(),
            runtime_version,
        );
        let build = pack.build(&request)?;
        let build_elapsed = build_start.elapsed();
        emit_build_output(&build);

        // Step B: run detached.
        let docker = self.docker_cli()?;
        eprintln!("  Starting container from '{image_tag}'...");
        let container_id = docker.run_detached(&image_tag, self.config.publish_port)?;

        // Step C: health check.
        let startup_start = Instant::now();
        let status = healthcheck::await_status(&docker, &container_id, &self.config.health_check)?;
        let startup_elapsed = startup_start.elapsed();

        // Step D: stop only a running container; anything else is left in
        // place so its logs and state stay available.
        let (verdict, container_logs) = if status.is_running() {
            docker.stop(&container_id)?;
            tracing::info!(id = %container_id, "container ran and was stopped");
            (Verdict::Passed, None)
        } else {
            tracing::warn!(id = %container_id, status = %status, "container is not running");
            (Verdict::NotRunning, docker.logs(&container_id).ok())
        };

        Ok(ValidationReport {
            image_tag,
            container_id,
            status,
            verdict,
            container_logs,
            started_at,
            build_elapsed,
            startup_elapsed,
        })
    }

    /// Resolves the `pack` CLI from the configured override or PATH.
    fn pack_cli(&self) -> Result<PackCli> {
        self.config
            .pack_binary
            .as_ref()
            .map_or_else(PackCli::locate, |p| Ok(PackCli::with_binary(p)))
    }

    /// Resolves the `docker` CLI from the configured override or PATH.
    fn docker_cli(&self) -> Result<DockerCli> {
        self.config
            .docker_binary
            .as_ref()
            .map_or_else(DockerCli::locate, |p| Ok(DockerCli::with_binary(p)))
    }
}

/// Echoes the captured build streams for visibility.
fn emit_build_output(build: &BuildOutput) {
    if !build.stdout.trim().is_empty() {
        eprintln!("{}", build.stdout.trim_end());
    }
    if !build.stderr.trim().is_empty() {
        eprintln!("{}", build.stderr.trim_end());
    }
}
