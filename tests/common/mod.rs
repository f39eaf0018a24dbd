//! Shared helpers for integration tests.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Shared test helper; not every integration test uses every helper

pub mod recording;

use std::sync::Once;

/// Route `tracing` output to the test writer once per test binary.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Render surface rows with a `|` marking each line end, so trailing
/// spaces show up in snapshots.
pub fn framed(rows: &[String]) -> String {
    rows.iter()
        .map(|row| format!("{row}|"))
        .collect::<Vec<_>>()
        .join("\n")
}
