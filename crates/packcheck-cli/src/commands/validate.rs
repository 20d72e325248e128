//! `pkchk validate`: build a function image and verify the container runs.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;

use packcheck_common::config::{HealthCheckPolicy, ValidatorConfig};
use packcheck_common::constants::{
    DEFAULT_BASE_APP_DIR, DEFAULT_BUILDER_IMAGE, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_STARTUP_WAIT_SECS,
};
use packcheck_validator::report::ValidationReport;
use packcheck_validator::validator::Validator;

use crate::output;

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Name of the function fixture directory under the base directory.
    #[arg(long)]
    pub app_dir: String,

    /// Runtime version forwarded to the build (e.g. "3.11" or "18").
    #[arg(long)]
    pub version: String,

    /// Buildpacks builder image reference.
    #[arg(long, default_value = DEFAULT_BUILDER_IMAGE)]
    pub builder: String,

    /// Base directory containing function fixture directories.
    #[arg(long, default_value = DEFAULT_BASE_APP_DIR)]
    pub base_dir: PathBuf,

    /// Seconds to wait before the single container status check.
    #[arg(long, default_value_t = DEFAULT_STARTUP_WAIT_SECS)]
    pub wait_secs: u64,

    /// Poll the container status for up to this many seconds instead of
    /// checking once.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Milliseconds between status checks when polling.
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// Publish the function port to this host port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Print the validation report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Executes the `validate` command.
///
/// # Errors
///
/// Returns an error if a tool is missing, the build or launch fails, or the
/// container is not running after the health check.
pub fn execute(args: ValidateArgs) -> anyhow::Result<()> {
    let total_start = Instant::now();
    print_header();

    tracing::info!(app_dir = %args.app_dir, version = %args.version, "validating function image");
    let validator = Validator::new(config_from(&args));
    let report = validator.validate(&args.app_dir, &args.version)?;

    if args.json {
        println!("{}", report.to_json()?);
    }

    if report.verdict.is_pass() {
        report_pass(&report, total_start);
        Ok(())
    } else {
        report_failure(&report);
        Err(anyhow::anyhow!(
            "container '{}' is not running (status: {})",
            report.container_id,
            report.status
        ))
    }
}

/// Translates CLI flags into a validator configuration.
fn config_from(args: &ValidateArgs) -> ValidatorConfig {
    let health_check = args.timeout_secs.map_or(
        HealthCheckPolicy::SingleCheck {
            wait: Duration::from_secs(args.wait_secs),
        },
        |timeout| HealthCheckPolicy::Poll {
            timeout: Duration::from_secs(timeout),
            interval: Duration::from_millis(args.poll_interval_ms),
        },
    );

    ValidatorConfig {
        base_dir: args.base_dir.clone(),
        builder_image: args.builder.clone(),
        health_check,
        publish_port: args.port,
        pack_binary: None,
        docker_binary: None,
    }
}

fn print_header() {
    eprintln!();
    eprintln!("  {BOLD}Packcheck{RESET} {DIM}v{}{RESET}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

fn report_pass(report: &ValidationReport, total_start: Instant) {
    eprintln!();
    eprintln!(
        "  {GREEN}{BOLD}PASS{RESET} container {DIM}[{}]{RESET} ran and was stopped",
        report.container_id
    );
    eprintln!(
        "  {DIM}image {} | build {} | startup {} | total {}{RESET}",
        report.image_tag,
        output::format_duration(report.build_elapsed),
        output::format_duration(report.startup_elapsed),
        output::format_duration(total_start.elapsed())
    );
}

fn report_failure(report: &ValidationReport) {
    eprintln!();
    eprintln!(
        "  {RED}{BOLD}FAIL{RESET} container {DIM}[{}]{RESET} is not running (status: {})",
        report.container_id, report.status
    );
    eprintln!(
        "  The container is left in place. Inspect it with: {BOLD}docker logs {}{RESET}",
        report.container_id
    );
    if let Some(logs) = report.container_logs.as_deref() {
        if !logs.trim().is_empty() {
            eprintln!();
            eprintln!("  {DIM}Captured container logs:{RESET}");
            for line in logs.lines() {
                eprintln!("    {line}");
            }
        }
    }
}
