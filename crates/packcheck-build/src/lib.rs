//! # packcheck-build
//!
//! Image production for Packcheck: a thin wrapper over the Cloud Native
//! Buildpacks `pack` CLI.
//!
//! Handles:
//! - **Discovery**: locating the `pack` binary on PATH with an install hint.
//! - **Requests**: assembling the fixed `pack build` argument list.
//! - **Invocation**: a single build attempt with captured output streams.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod pack;
