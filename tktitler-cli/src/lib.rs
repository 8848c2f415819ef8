//! tktitler CLI library
//!
//! This library provides the command-line interface for parsing and
//! formatting TÅGEKAMMER titles.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
