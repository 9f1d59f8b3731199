#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod classify;
pub mod config;
pub mod entry;
pub mod env;
pub mod error;
pub mod evaluator;
pub mod executable;
pub mod fs;
pub mod platform;
pub mod recommend;
pub mod report;

pub use classify::{Classification, classify_entry};
pub use config::{
    DEFAULT_HINT_VARS, DEFAULT_PATH_VAR, DEFAULT_PATHEXT, DEFAULT_PATHEXT_VAR, EvaluatorConfig,
};
pub use entry::{PathEntry, split_path};
pub use env::{EnvProvider, SystemEnv};
pub use error::EvalError;
pub use evaluator::{
    EvaluationInput, HintSource, PathEvaluator, PlatformHint, evaluate_environment,
    gather_inputs,
};
pub use executable::ExecutablePolicy;
pub use fs::{EntryProbe, FsProvider, SystemFs};
pub use platform::{PathSeparator, Platform, determine_path_separator, resolve_platform};
pub use recommend::build_recommendation;
pub use report::{EntryReport, EvaluationReport};

#[cfg(any(test, feature = "test-utils"))]
pub use env::MockEnv;
#[cfg(any(test, feature = "test-utils"))]
pub use fs::MockFs;
