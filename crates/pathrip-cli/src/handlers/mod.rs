//! Command handlers.
//!
//! pathrip has a single command, so there is one handler.

pub mod evaluate;

pub use evaluate::{EvaluateOutcome, execute, resolve_input};
