//! Domain primitive types used across the Packcheck workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag assigned to a built function image.
///
/// Generated tags follow `{appDirName}-{runtimeVersion}-app-{suffix}` where
/// the suffix is 8 random hex characters, so two runs with identical inputs
/// never collide on the image name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageTag(String);

impl ImageTag {
    /// Creates an image tag from an existing string value.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Generates a fresh tag for a function build.
    #[must_use]
    pub fn generate(app_dir_name: &str, runtime_version: &str) -> Self {
        let id = uuid::Uuid::new_v4().simple().to_string();
        let suffix = &id[..crate::constants::TAG_SUFFIX_LEN];
        Self(format!("{app_dir_name}-{runtime_version}-app-{suffix}"))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a container by the runtime at launch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a container ID from a string value, trimming surrounding
    /// whitespace as returned by `docker run -d`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Run status of a container as reported by the runtime's inspect command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerStatus {
    /// Container has been created but not started.
    Created,
    /// Container is actively running.
    Running,
    /// Container is restarting.
    Restarting,
    /// Container is paused.
    Paused,
    /// Container has exited.
    Exited,
    /// Container is in the dead state.
    Dead,
    /// A status string this version does not know about.
    Unknown(String),
}

impl ContainerStatus {
    /// Parses a status string as printed by `docker inspect`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "created" => Self::Created,
            "running" => Self::Running,
            "restarting" => Self::Restarting,
            "paused" => Self::Paused,
            "exited" => Self::Exited,
            "dead" => Self::Dead,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns whether the container is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns whether the container has reached a terminal state and will
    /// not become running on its own.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Exited | Self::Dead)
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Running => write!(f, "running"),
            Self::Restarting => write!(f, "restarting"),
            Self::Paused => write!(f, "paused"),
            Self::Exited => write!(f, "exited"),
            Self::Dead => write!(f, "dead"),
            Self::Unknown(s) => write!(f, "{s}"),
        }
    }
}
