//! Tracing subscriber setup for the `gridwalk` binary.
//!
//! The library only emits events; installing a subscriber is left to binaries
//! and tests.

use std::fmt;

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Wall-clock timestamps, down to ten microseconds.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// Timer that prints the current UTC time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, writer: &mut Writer<'_>) -> fmt::Result {
        let formatted = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        writer.write_str(&formatted)
    }
}

/// The filter used when `RUST_LOG` is unset or invalid.
pub fn default_filter() -> EnvFilter {
    EnvFilter::new(format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME")))
}

/// Configure and initialize logging. Safe to call more than once.
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

        let subscriber = tracing_subscriber::fmt()
            .with_ansi(true)
            .with_target(true)
            .with_timer(ClockTime)
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("A global tracing subscriber was already installed");
        }
    });
}
