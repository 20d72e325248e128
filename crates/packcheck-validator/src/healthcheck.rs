//! Post-start container health observation.

use std::time::Instant;

use packcheck_common::config::HealthCheckPolicy;
use packcheck_common::error::Result;
use packcheck_common::types::{ContainerId, ContainerStatus};
use packcheck_runtime::docker::DockerCli;

/// Observes the container's status according to the policy.
///
/// `SingleCheck` sleeps for the configured wait and inspects exactly once.
/// `Poll` inspects every `interval` until the container is running, has
/// reached a terminal state, or the timeout elapses; the last observed
/// status is returned either way. Classifying the status is the caller's
/// job, so a non-running result is an `Ok` value here, not an error.
///
/// # Errors
///
/// Returns an error only if a status inspection itself fails.
pub fn await_status(
    docker: &DockerCli,
    id: &ContainerId,
    policy: &HealthCheckPolicy,
) -> Result<ContainerStatus> {
    match policy {
        HealthCheckPolicy::SingleCheck { wait } => {
            tracing::debug!(id = %id, wait = ?wait, "single-shot health check");
            std::thread::sleep(*wait);
            docker.inspect_status(id)
        }
        HealthCheckPolicy::Poll { timeout, interval } => {
            tracing::debug!(id = %id, timeout = ?timeout, "polling health check");
            let start = Instant::now();
            loop {
                let status = docker.inspect_status(id)?;
                if status.is_running() || status.is_terminal() {
                    return Ok(status);
                }
                if start.elapsed() >= *timeout {
                    tracing::warn!(id = %id, status = %status, "health check timed out");
                    return Ok(status);
                }
                std::thread::sleep(*interval);
            }
        }
    }
}
