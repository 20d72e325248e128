//! `pack build` invocation.
//!
//! One build attempt per request, no retry. A failed build carries both
//! captured output streams back to the caller for display.

use std::path::{Path, PathBuf};
use std::process::Command;

use packcheck_common::constants::{PACK_BIN, RUNTIME_VERSION_ENV};
use packcheck_common::error::{PackcheckError, Result};
use packcheck_common::types::ImageTag;

const PACK_INSTALL_HINT: &str =
    "Install the Cloud Native Buildpacks CLI: https://buildpacks.io/docs/install-pack/";

/// A single image build to submit to the `pack` CLI.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Tag for the image to be built.
    pub image_tag: ImageTag,
    /// Directory containing the function source.
    pub app_dir: PathBuf,
    /// Buildpacks builder image reference.
    pub builder: String,
    /// Build-time environment variables as `(key, value)` pairs.
    pub env: Vec<(String, String)>,
}

impl BuildRequest {
    /// Creates the request for a serverless function build: the source
    /// directory, the builder, and the runtime-version environment variable.
    #[must_use]
    pub fn for_function(
        image_tag: ImageTag,
        app_dir: impl Into<PathBuf>,
        builder: impl Into<String>,
        runtime_version: &str,
    ) -> Self {
        Self {
            image_tag,
            app_dir: app_dir.into(),
            builder: builder.into(),
            env: vec![(RUNTIME_VERSION_ENV.to_string(), runtime_version.to_string())],
        }
    }

    /// Returns the full `pack` argument list for this request.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "build".to_string(),
            self.image_tag.as_str().to_string(),
            "--path".to_string(),
            self.app_dir.display().to_string(),
            "--builder".to_string(),
            self.builder.clone(),
        ];
        for (key, value) in &self.env {
            args.push("--env".to_string());
            args.push(format!("{key}={value}"));
        }
        args
    }
}

/// Captured output streams from a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Standard output of the build.
    pub stdout: String,
    /// Standard error of the build.
    pub stderr: String,
}

/// Handle to a located `pack` binary.
#[derive(Debug, Clone)]
pub struct PackCli {
    binary: PathBuf,
}

impl PackCli {
    /// Locates the `pack` binary on PATH.
    ///
    /// # Errors
    ///
    /// Returns [`PackcheckError::ToolNotFound`] with an install hint if the
    /// binary is not found.
    pub fn locate() -> Result<Self> {
        let binary = which::which(PACK_BIN).map_err(|_| PackcheckError::ToolNotFound {
            tool: PACK_BIN,
            hint: PACK_INSTALL_HINT,
        })?;
        tracing::debug!(binary = %binary.display(), "located pack binary");
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

    /// Runs `pack build` for the given request and captures its output.
    ///
    /// # Errors
    ///
    /// Returns [`PackcheckError::Io`] if the process cannot be spawned and
    /// [`PackcheckError::CommandFailed`] with both output streams if the
    /// build exits non-zero.
    pub fn build(&self, request: &BuildRequest) -> Result<BuildOutput> {
        tracing::info!(
            image = %request.image_tag,
            path = %request.app_dir.display(),
            builder = %request.builder,
            "running pack build"
        );

        let output = Command::new(&self.binary)
            .args(request.to_args())
            .output()
            .map_err(|e| PackcheckError::Io {
                path: self.binary.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(PackcheckError::CommandFailed {
                tool: PACK_BIN,
                code: output.status.code().unwrap_or(-1),
                stdout,
                stderr,
            });
        }

        tracing::info!(image = %request.image_tag, "pack build succeeded");
        Ok(BuildOutput { stdout, stderr })
    }
}
