//! CLI library components for the blood bank generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
