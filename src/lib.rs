//! Revcheck core library.
//!
//! This crate exposes programmatic APIs for validating a generated code
//! review document against a pull request's changed files before it is
//! submitted to a review API.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `inputs`: Presence checks and loading of both input documents.
//! - `checks`: Field, type, value, and line cross-checks.
//! - `validate`: The engine sequencing all checks into a report.
//! - `models`: Error taxonomy, report, field reads, changed-file set.
//! - `output`: Report printing and persistence.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod inputs;
pub mod models;
pub mod output;
pub mod utils;
pub mod validate;
