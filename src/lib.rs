#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal contact form: field model, validation, and the TUI that hosts it.

pub mod logging;
pub mod model;
pub mod tui;
