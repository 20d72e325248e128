//! Integration tests for the validation pipeline.
//!
//! These tests are implemented in:
//! `crates/packcheck-validator/tests/e2e_test.rs`
//!
//! Covered scenarios:
//! - `healthy_function_passes_and_stops_the_container`: Full pass path
//! - `build_arguments_match_the_pack_contract`: Exact `pack build` argument list
//! - `generated_tag_matches_the_expected_pattern`: Tag naming scheme
//! - `consecutive_runs_generate_distinct_tags`: Random suffix uniqueness
//! - `crashed_function_fails_and_leaves_the_container`: Fail path, no stop, logs captured
//! - `failed_build_skips_the_run_step`: Docker never invoked after a build error
//! - `missing_app_dir_is_created_empty_before_the_build`: Missing fixture handling
//! - `polling_waits_for_a_late_starter`: Opt-in polling health check
//! - `polling_fails_fast_on_a_terminal_state`: Terminal states short-circuit polling
//! - `report_serializes_with_the_observed_outcome`: JSON report output
