//! Test fixtures for input session tests.
//!
//! - [`MockBackend`] - Scripted key source with a virtual clock
//! - [`MockDisplay`] - Window model recording refreshes and echo

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry
#![allow(dead_code)] // Shared test helpers; not every integration test uses every helper

pub mod mock_backend;
pub mod mock_display;

pub use mock_backend::*;
pub use mock_display::*;

/// Install a test-writer subscriber so `tracing` output shows up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
