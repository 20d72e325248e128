//! End-to-end tests for the Packcheck validation pipeline.
//!
//! These tests drive the full pipeline against stub `pack` and `docker`
//! executables written into a tempdir, so no real builder or container
//! runtime is needed:
//! 1. Healthy function: build, run, observed running, stopped, verdict pass
//! 2. Crashed function: observed exited, container left alone, verdict fail
//! 3. Build failure: docker is never invoked
//! 4. Missing fixture directory: created empty before the build
//! 5. Tag uniqueness across runs with identical inputs
//! 6. Polling health check: late starters and fail-fast on terminal states

// Stub tools are POSIX shell scripts.
#![cfg(unix)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use packcheck_common::config::{HealthCheckPolicy, ValidatorConfig};
use packcheck_common::error::PackcheckError;
use packcheck_common::types::ContainerStatus;
use packcheck_validator::report::Verdict;
use packcheck_validator::validator::Validator;

const CONTAINER_ID: &str = "f00dcafe12345678";

/// Writes an executable shell script into `dir` and returns its path.
fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write stub");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod stub");
    path
}

/// A `pack` stub that records its argument list and succeeds.
fn passing_pack(dir: &Path) -> PathBuf {
    let record = dir.join("pack-args");
    write_stub(
        dir,
        "pack",
        &format!("echo \"$@\" >> {}\necho 'Successfully built image'\n", record.display()),
    )
}

/// A `docker` stub that records every invocation and reports the given
/// inspect status.
fn docker_with_status(dir: &Path, status: &str) -> PathBuf {
    let record = dir.join("docker-args");
    write_stub(
        dir,
        "docker",
        &format!(
            r#"echo "$@" >> {record}
case "$1" in
  run) echo "{CONTAINER_ID}" ;;
  inspect) echo "{status}" ;;
  logs) echo "function log line" ;;
esac
"#,
            record = record.display(),
        ),
    )
}

fn docker_record(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("docker-args")).unwrap_or_default()
}

fn pack_record(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("pack-args")).unwrap_or_default()
}

/// Config pointing at the stub binaries with a zero-length startup wait.
fn stub_config(base_dir: &Path, pack: PathBuf, docker: PathBuf) -> ValidatorConfig {
    ValidatorConfig {
        base_dir: base_dir.to_path_buf(),
        builder_image: "test-builder:latest".to_string(),
        health_check: HealthCheckPolicy::SingleCheck {
            wait: Duration::ZERO,
        },
        publish_port: None,
        pack_binary: Some(pack),
        docker_binary: Some(docker),
    }
}

fn fixture_dir(base: &Path, name: &str) {
    let dir = base.join(name);
    std::fs::create_dir_all(&dir).expect("create fixture");
    std::fs::write(dir.join("main.py"), "def hello(request):\n    return 'ok'\n")
        .expect("write fixture source");
}

// ── Healthy function ─────────────────────────────────────────────────

#[test]
fn healthy_function_passes_and_stops_the_container() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    let docker = docker_with_status(tools.path(), "running");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let report = validator
        .validate("http_trigger", "3.11")
        .expect("validation should succeed");

    assert_eq!(report.verdict, Verdict::Passed);
    assert!(report.verdict.is_pass());
    assert_eq!(report.status, ContainerStatus::Running);
    assert_eq!(report.container_id.as_str(), CONTAINER_ID);
    assert!(report.container_logs.is_none());

    let record = docker_record(tools.path());
    let lines: Vec<&str> = record.lines().collect();
    assert_eq!(lines.len(), 3, "expected run, inspect, stop: {record}");
    assert_eq!(
        lines[0],
        format!("run -d {}", report.image_tag),
        "detached run with the generated tag"
    );
    assert_eq!(
        lines[1],
        format!("inspect -f {{{{.State.Status}}}} {CONTAINER_ID}")
    );
    assert_eq!(lines[2], format!("stop {CONTAINER_ID}"));
}

#[test]
fn build_arguments_match_the_pack_contract() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    let docker = docker_with_status(tools.path(), "running");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let report = validator.validate("http_trigger", "3.11").expect("validate");

    let record = pack_record(tools.path());
    let app_dir = base.path().join("http_trigger");
    assert_eq!(
        record.trim(),
        format!(
            "build {} --path {} --builder test-builder:latest --env GOOGLE_RUNTIME_VERSION=3.11",
            report.image_tag,
            app_dir.display()
        )
    );
}

#[test]
fn generated_tag_matches_the_expected_pattern() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    let docker = docker_with_status(tools.path(), "running");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let report = validator.validate("http_trigger", "3.11").expect("validate");
    let suffix = report
        .image_tag
        .as_str()
        .strip_prefix("http_trigger-3.11-app-")
        .expect("tag prefix");
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn consecutive_runs_generate_distinct_tags() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    let docker = docker_with_status(tools.path(), "running");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let first = validator.validate("http_trigger", "3.11").expect("first run");
    let second = validator.validate("http_trigger", "3.11").expect("second run");
    assert_ne!(first.image_tag, second.image_tag);
}

// ── Crashed function ─────────────────────────────────────────────────

#[test]
fn crashed_function_fails_and_leaves_the_container() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    let docker = docker_with_status(tools.path(), "exited");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let report = validator
        .validate("http_trigger", "3.11")
        .expect("a non-running container is a verdict, not an error");

    assert_eq!(report.verdict, Verdict::NotRunning);
    assert_eq!(report.status, ContainerStatus::Exited);

    let record = docker_record(tools.path());
    assert!(
        !record.lines().any(|l| l.starts_with("stop ")),
        "a non-running container must not be stopped: {record}"
    );
    assert!(
        record.lines().any(|l| l.starts_with("logs ")),
        "failure path should capture container logs"
    );
    assert_eq!(report.container_logs.as_deref(), Some("function log line\n"));
}

// ── Build failure ────────────────────────────────────────────────────

#[test]
fn failed_build_skips_the_run_step() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = write_stub(
        tools.path(),
        "pack",
        "echo 'ERROR: failed to build' >&2\nexit 1\n",
    );
    let docker = docker_with_status(tools.path(), "running");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let err = validator
        .validate("http_trigger", "3.11")
        .expect_err("build failure should abort");

    match err {
        PackcheckError::CommandFailed { tool, code, stderr, .. } => {
            assert_eq!(tool, "pack");
            assert_eq!(code, 1);
            assert!(stderr.contains("failed to build"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(
        docker_record(tools.path()).is_empty(),
        "docker must not be invoked after a failed build"
    );
}

// ── Missing fixture ──────────────────────────────────────────────────

#[test]
fn missing_app_dir_is_created_empty_before_the_build() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");

    let pack = write_stub(tools.path(), "pack", "echo 'no source detected' >&2\nexit 1\n");
    let docker = docker_with_status(tools.path(), "running");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let result = validator.validate("absent_fixture", "3.11");
    assert!(result.is_err(), "empty fixture should fail the build");

    let created = base.path().join("absent_fixture");
    assert!(created.is_dir(), "missing app dir should be created");
    assert_eq!(
        std::fs::read_dir(&created).expect("read dir").count(),
        0,
        "created app dir should be empty"
    );
}

// ── Polling health check ─────────────────────────────────────────────

#[test]
fn polling_waits_for_a_late_starter() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    // First inspect reports "created", later ones "running".
    let flip = tools.path().join("flip");
    let docker = write_stub(
        tools.path(),
        "docker",
        &format!(
            r#"case "$1" in
  run) echo "{CONTAINER_ID}" ;;
  inspect)
    if [ -f {flip} ]; then echo running; else touch {flip}; echo created; fi ;;
esac
"#,
            flip = flip.display(),
        ),
    );

    let mut config = stub_config(base.path(), pack, docker);
    config.health_check = HealthCheckPolicy::Poll {
        timeout: Duration::from_secs(5),
        interval: Duration::from_millis(10),
    };
    let validator = Validator::new(config);

    let report = validator.validate("http_trigger", "3.11").expect("validate");
    assert_eq!(report.verdict, Verdict::Passed);
    assert_eq!(report.status, ContainerStatus::Running);
}

#[test]
fn polling_fails_fast_on_a_terminal_state() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    let docker = docker_with_status(tools.path(), "dead");

    let mut config = stub_config(base.path(), pack, docker);
    config.health_check = HealthCheckPolicy::Poll {
        // Far longer than the test should take: the terminal state must
        // short-circuit the loop.
        timeout: Duration::from_secs(300),
        interval: Duration::from_millis(10),
    };
    let validator = Validator::new(config);

    let report = validator.validate("http_trigger", "3.11").expect("validate");
    assert_eq!(report.verdict, Verdict::NotRunning);
    assert_eq!(report.status, ContainerStatus::Dead);

    let record = docker_record(tools.path());
    let inspects = record.lines().filter(|l| l.starts_with("inspect ")).count();
    assert_eq!(inspects, 1, "terminal state should stop polling immediately");
}

// ── Report serialization ─────────────────────────────────────────────

#[test]
fn report_serializes_with_the_observed_outcome() {
    let tools = tempfile::tempdir().expect("tools dir");
    let base = tempfile::tempdir().expect("base dir");
    fixture_dir(base.path(), "http_trigger");

    let pack = passing_pack(tools.path());
    let docker = docker_with_status(tools.path(), "running");
    let validator = Validator::new(stub_config(base.path(), pack, docker));

    let report = validator.validate("http_trigger", "3.11").expect("validate");
    let json = report.to_json().expect("serialize report");
    assert!(json.contains("\"verdict\""));
    assert!(json.contains(report.image_tag.as_str()));
    assert!(json.contains(CONTAINER_ID));
}
