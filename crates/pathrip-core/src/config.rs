//! Names of the environment variables an evaluation reads.

/// Platform hint variables, in priority order.
pub const DEFAULT_HINT_VARS: [&str; 2] = ["OSTYPE", "OS"];

/// Variable holding the search path.
pub const DEFAULT_PATH_VAR: &str = "PATH";

/// Variable listing executable extensions on Windows.
pub const DEFAULT_PATHEXT_VAR: &str = "PATHEXT";

/// Extensions used when `PATHEXT` is unset or empty.
pub const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Which environment variables feed an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Hint variables, first one that is set wins.
    pub hint_vars: Vec<String>,
    /// Search-path variable.
    pub path_var: String,
    /// Executable-extension variable (consulted on Windows only).
    pub pathext_var: String,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            hint_vars: DEFAULT_HINT_VARS.iter().map(ToString::to_string).collect(),
            path_var: DEFAULT_PATH_VAR.to_string(),
            pathext_var: DEFAULT_PATHEXT_VAR.to_string(),
        }
    }
}

impl EvaluatorConfig {
    #[must_use]
    pub fn with_path_var(mut self, name: impl Into<String>) -> Self {
        self.path_var = name.into();
        self
    }
}
