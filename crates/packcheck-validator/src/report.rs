//! Validation run reporting.
//!
//! The report makes the run's external side effects (image built, container
//! started, status observed) explicit return values instead of leaving them
//! only in log output.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use packcheck_common::error::Result;
use packcheck_common::types::{ContainerId, ContainerStatus, ImageTag};

/// Outcome of a validation run that got as far as the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The container was observed running and was stopped.
    Passed,
    /// The container was not running after the health check; it is left in
    /// place for inspection.
    NotRunning,
}

impl Verdict {
    /// Returns whether the run passed.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::NotRunning => write!(f, "not running"),
        }
    }
}

/// Record of a completed validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Tag of the image that was built.
    pub image_tag: ImageTag,
    /// Id of the container that was started from the image.
    pub container_id: ContainerId,
    /// Status observed by the health check.
    pub status: ContainerStatus,
    /// Overall outcome.
    pub verdict: Verdict,
    /// Container logs captured on the failure path.
    pub container_logs: Option<String>,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock time of the image build.
    pub build_elapsed: Duration,
    /// Wall-clock time from container launch to the observed status.
    pub startup_elapsed: Duration,
}

impl ValidationReport {
    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
