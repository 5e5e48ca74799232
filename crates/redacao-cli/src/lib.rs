//! CLI library components for the essay result analyzer.

pub mod cli;
pub mod commands;
pub mod logging;
