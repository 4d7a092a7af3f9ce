//! Weighted-average (GWA) calculator: course rows in, average, standing
//! and performance insights out.

pub mod config;
pub mod course;
pub mod interactive;
pub mod notice;
pub mod output;
pub mod prompt;
pub mod scoring;
