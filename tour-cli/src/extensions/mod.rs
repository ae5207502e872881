//! Contains command line extensions: import, configuration, reporting and rendering.

pub mod config;
pub mod import;
pub mod render;
pub mod report;
