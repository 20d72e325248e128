//! # packcheck-runtime
//!
//! Container lifecycle operations for Packcheck, delegated to the external
//! `docker` CLI.
//!
//! Handles:
//! - **Discovery**: locating the `docker` binary on PATH with an install hint.
//! - **Launch**: detached runs returning the assigned container id.
//! - **Inspection**: run-status queries via the inspect template.
//! - **Teardown**: stopping containers on the success path.
//! - **Diagnostics**: fetching container logs for failure reporting.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod docker;
