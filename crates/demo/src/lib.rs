//! Demo program: builds coin purses and prints a short report for each.

pub mod config;
pub mod report;

pub use config::{DEFAULT_PURSES, DemoConfig, PURSES_ENV};
pub use report::{write_report, write_reports};
