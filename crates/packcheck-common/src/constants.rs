//! System-wide constants and default tool references.

/// Application name used in CLI output.
pub const APP_NAME: &str = "packcheck";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "pkchk";

/// Binary name of the Cloud Native Buildpacks CLI.
pub const PACK_BIN: &str = "pack";

/// Binary name of the container runtime CLI.
pub const DOCKER_BIN: &str = "docker";

/// Default base directory containing function fixture directories.
pub const DEFAULT_BASE_APP_DIR: &str = "./builders/testdata/";

/// Default buildpacks builder image reference.
pub const DEFAULT_BUILDER_IMAGE: &str = "gcr.io/buildpacks/builder:latest";

/// Build-time environment variable carrying the function runtime version.
pub const RUNTIME_VERSION_ENV: &str = "GOOGLE_RUNTIME_VERSION";

/// Seconds to wait before the single-shot container status check.
pub const DEFAULT_STARTUP_WAIT_SECS: u64 = 3;

/// Interval between status checks when polling is enabled, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Number of hex characters in a generated image tag suffix.
pub const TAG_SUFFIX_LEN: usize = 8;

/// Container port a buildpacks function image listens on.
pub const FUNCTION_PORT: u16 = 8080;
