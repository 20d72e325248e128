//! Validation run configuration model.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the post-start health check observes the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCheckPolicy {
    /// Wait a fixed duration, then inspect the status exactly once.
    SingleCheck {
        /// Time to give the container to initialize (or crash).
        wait: Duration,
    },
    /// Inspect repeatedly until the container is running, has reached a
    /// terminal state, or the timeout elapses.
    Poll {
        /// Overall deadline for the container to become running.
        timeout: Duration,
        /// Pause between consecutive status checks.
        interval: Duration,
    },
}

impl Default for HealthCheckPolicy {
    fn default() -> Self {
        Self::SingleCheck {
            wait: Duration::from_secs(crate::constants::DEFAULT_STARTUP_WAIT_SECS),
        }
    }
}

/// Root configuration for a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Base directory under which function fixture directories are resolved.
    pub base_dir: PathBuf,
    /// Buildpacks builder image reference passed to the build.
    pub builder_image: String,
    /// Post-start health check policy.
    pub health_check: HealthCheckPolicy,
    /// Host port to publish the function port on, if any.
    pub publish_port: Option<u16>,
    /// Explicit path to the `pack` binary, bypassing PATH lookup.
    pub pack_binary: Option<PathBuf>,
    /// Explicit path to the `docker` binary, bypassing PATH lookup.
    pub docker_binary: Option<PathBuf>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(crate::constants::DEFAULT_BASE_APP_DIR),
            builder_image: crate::constants::DEFAULT_BUILDER_IMAGE.to_string(),
            health_check: HealthCheckPolicy::default(),
            publish_port: None,
            pack_binary: None,
            docker_binary: None,
        }
    }
}
