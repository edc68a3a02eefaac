use gridwalk::logging::{default_filter, setup_logging};
use speculoos::prelude::*;

#[test]
fn test_default_filter_targets_crate() {
    let filter = default_filter().to_string();
    assert_that(&filter.contains("gridwalk=info")).is_true();
    assert_that(&filter.contains("warn")).is_true();
}

#[test]
fn test_setup_logging_is_idempotent() {
    setup_logging();
    setup_logging();
    tracing::info!("logging initialized");
}
