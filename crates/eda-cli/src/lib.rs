//! CLI library components for the EDA generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
