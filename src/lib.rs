pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod config;
pub mod telemetry;
pub mod tui;
