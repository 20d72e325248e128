//! # packcheck-validator
//!
//! The Packcheck validation pipeline. Drives a function source directory
//! through build, launch, and health check, and reports the outcome:
//!
//! `NotBuilt -> Built -> Started -> { Running -> Stopped (pass) | NotRunning (fail) }`
//!
//! Handles:
//! - **Preflight**: resolving the app directory, creating it empty if absent.
//! - **Health check**: single-shot (default) or polling status observation.
//! - **Reporting**: the run's side effects as an explicit return value.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod appdir;
pub mod healthcheck;
pub mod report;
pub mod validator;
