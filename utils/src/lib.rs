//! Shared utilities for the stacksig workspace.

pub mod logging;

pub use logging::init_tracing;
