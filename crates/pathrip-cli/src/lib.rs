#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the tests/ integration suite only
#[cfg(test)]
use tempfile as _;

// Used by main.rs
use dotenvy as _;

pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

pub use error::CliError;
pub use handlers::EvaluateOutcome;
pub use parser::{Cli, OutputFormat};
