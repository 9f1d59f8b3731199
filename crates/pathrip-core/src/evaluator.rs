//! The evaluation pipeline: hint → separator → split → classify → recommend.

use serde::Serialize;
use tracing::{info, warn};

use crate::classify::{Classification, classify_entry};
use crate::config::EvaluatorConfig;
use crate::entry::split_path;
use crate::env::EnvProvider;
use crate::error::EvalError;
use crate::fs::FsProvider;
use crate::platform::resolve_platform;
use crate::recommend::build_recommendation;
use crate::report::{EntryReport, EvaluationReport};

/// Where a platform hint came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum HintSource {
    /// Read from the named environment variable.
    Variable(String),
    /// Supplied explicitly by the caller.
    Override,
}

/// A platform hint and its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformHint {
    pub value: String,
    pub source: HintSource,
}

impl PlatformHint {
    pub fn new(value: impl Into<String>, source: HintSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }
}

/// The two environment reads an evaluation depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationInput {
    pub hint: Option<PlatformHint>,
    pub raw_path: String,
}

impl EvaluationInput {
    pub fn new(raw_path: impl Into<String>) -> Self {
        Self {
            hint: None,
            raw_path: raw_path.into(),
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: PlatformHint) -> Self {
        self.hint = Some(hint);
        self
    }
}

/// Read the platform hint and search path from the environment.
///
/// The hint is the first variable in `config.hint_vars` that is set, even to
/// an empty string; later variables are not consulted when that value turns
/// out to be unknown. An unset search-path variable reads as an empty path.
pub fn gather_inputs(env: &dyn EnvProvider, config: &EvaluatorConfig) -> EvaluationInput {
    let hint = config.hint_vars.iter().find_map(|name| {
        env.get_string(name)
            .map(|value| PlatformHint::new(value, HintSource::Variable(name.clone())))
    });

    let raw_path = env.get_string(&config.path_var).unwrap_or_else(|| {
        warn!(variable = %config.path_var, "search path variable is not set, treating it as empty");
        String::new()
    });

    EvaluationInput { hint, raw_path }
}

/// Runs evaluations against a filesystem provider.
pub struct PathEvaluator<'a> {
    fs: &'a dyn FsProvider,
}

impl<'a> PathEvaluator<'a> {
    pub fn new(fs: &'a dyn FsProvider) -> Self {
        Self { fs }
    }

    /// Evaluate one search path.
    ///
    /// Fails only when the platform cannot be determined, in which case no
    /// entry has been looked at. Entries are classified one at a time in
    /// split order.
    pub fn evaluate(&self, input: &EvaluationInput) -> Result<EvaluationReport, EvalError> {
        let hint = input
            .hint
            .clone()
            .ok_or_else(|| EvalError::unknown_platform(None))?;
        let platform = resolve_platform(Some(hint.value.as_str()))?;
        let separator = platform.separator();
        info!(%platform, %separator, hint = %hint.value, "resolved platform");

        let entries = split_path(&input.raw_path, separator);
        let classifications: Vec<Classification> = entries
            .iter()
            .map(|entry| classify_entry(entry, self.fs))
            .collect();
        let recommended = build_recommendation(&entries, &classifications, separator);

        let entries: Vec<EntryReport> = entries
            .into_iter()
            .zip(classifications)
            .map(|(entry, classification)| EntryReport {
                entry,
                classification,
            })
            .collect();

        info!(
            total = entries.len(),
            kept = entries.iter().filter(|e| e.classification.is_valid()).count(),
            "evaluation finished"
        );

        Ok(EvaluationReport {
            hint,
            platform,
            separator,
            original: input.raw_path.clone(),
            entries,
            recommended,
        })
    }
}

/// Gather inputs from `env` and evaluate them in one call.
pub fn evaluate_environment(
    env: &dyn EnvProvider,
    fs: &dyn FsProvider,
    config: &EvaluatorConfig,
) -> Result<EvaluationReport, EvalError> {
    PathEvaluator::new(fs).evaluate(&gather_inputs(env, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;
    use crate::fs::MockFs;
    use crate::platform::{PathSeparator, Platform};

    #[test]
    fn gather_prefers_ostype_over_os() {
        let env = MockEnv::new()
            .with_var("OSTYPE", "linux-gnu")
            .with_var("OS", "Windows_NT")
            .with_var("PATH", "/bin");
        let input = gather_inputs(&env, &EvaluatorConfig::default());
        assert_eq!(
            input.hint,
            Some(PlatformHint::new(
                "linux-gnu",
                HintSource::Variable("OSTYPE".into())
            ))
        );
        assert_eq!(input.raw_path, "/bin");
    }

    #[test]
    fn gather_falls_back_to_os_when_ostype_unset() {
        let env = MockEnv::new().with_var("OS", "Windows_NT");
        let input = gather_inputs(&env, &EvaluatorConfig::default());
        assert_eq!(input.hint.unwrap().source, HintSource::Variable("OS".into()));
    }

    #[test]
    fn empty_ostype_is_final_and_unknown() {
        let env = MockEnv::new()
            .with_var("OSTYPE", "")
            .with_var("OS", "Windows_NT")
            .with_var("PATH", "C:\\Bin");
        let input = gather_inputs(&env, &EvaluatorConfig::default());
        assert_eq!(
            input.hint,
            Some(PlatformHint::new("", HintSource::Variable("OSTYPE".into())))
        );

        let err = PathEvaluator::new(&MockFs::new())
            .evaluate(&input)
            .unwrap_err();
        assert_eq!(err, EvalError::UnknownPlatform { hint: None });
        assert_eq!(err.to_string(), "Can't determine HOST OS type.");
    }

    #[test]
    fn gather_does_not_skip_unknown_first_hint() {
        let env = MockEnv::new()
            .with_var("OSTYPE", "solaris")
            .with_var("OS", "Windows_NT");
        let input = gather_inputs(&env, &EvaluatorConfig::default());
        assert_eq!(input.hint.unwrap().value, "solaris");
    }

    #[test]
    fn gather_treats_unset_path_as_empty() {
        let env = MockEnv::new().with_var("OSTYPE", "linux-gnu");
        let input = gather_inputs(&env, &EvaluatorConfig::default());
        assert_eq!(input.raw_path, "");
    }

    #[test]
    fn gather_honours_custom_path_var() {
        let env = MockEnv::new()
            .with_var("PATH", "/bin")
            .with_var("ALT_PATH", "/opt/bin");
        let config = EvaluatorConfig::default().with_path_var("ALT_PATH");
        assert_eq!(gather_inputs(&env, &config).raw_path, "/opt/bin");
    }

    #[test]
    fn linux_scenario() {
        let fs = MockFs::new()
            .with_executable("/usr/bin", "ls")
            .with_plain_file("/etc", "hosts");
        let env = MockEnv::new()
            .with_var("OSTYPE", "linux-gnu")
            .with_var("PATH", "/usr/bin:/nonexistent:/etc");

        let report = evaluate_environment(&env, &fs, &EvaluatorConfig::default()).unwrap();

        assert_eq!(report.platform, Platform::Linux);
        assert_eq!(report.recommended, "/usr/bin");
        let diagnostics: Vec<_> = report
            .diagnostics()
            .map(|r| (r.entry.raw.as_str(), r.classification.clone()))
            .collect();
        assert_eq!(
            diagnostics,
            vec![
                ("/nonexistent", Classification::Missing),
                ("/etc", Classification::EmptyOrNoExecutables),
            ]
        );
    }

    #[test]
    fn windows_scenario() {
        let fs = MockFs::new()
            .with_executable("C:\\Bin", "tool.exe")
            .with_dir("C:\\Empty");
        let env = MockEnv::new()
            .with_var("OS", "Windows_NT")
            .with_var("PATH", "C:\\Bin;C:\\Empty");

        let report = evaluate_environment(&env, &fs, &EvaluatorConfig::default()).unwrap();

        assert_eq!(report.separator, PathSeparator::Semicolon);
        assert_eq!(report.recommended, "C:\\Bin");
        assert_eq!(report.entries.len(), 2);
    }

    #[test]
    fn missing_hint_fails_before_classifying() {
        let env = MockEnv::new().with_var("PATH", "/usr/bin");
        let err = evaluate_environment(&env, &MockFs::new(), &EvaluatorConfig::default())
            .unwrap_err();
        assert_eq!(err, EvalError::UnknownPlatform { hint: None });
    }

    #[test]
    fn unknown_hint_fails_with_value() {
        let input = EvaluationInput::new("/bin")
            .with_hint(PlatformHint::new("plan9", HintSource::Override));
        let err = PathEvaluator::new(&MockFs::new())
            .evaluate(&input)
            .unwrap_err();
        assert_eq!(
            err,
            EvalError::UnknownPlatform {
                hint: Some("plan9".into())
            }
        );
    }

    #[test]
    fn doubled_separator_gives_two_entries() {
        let fs = MockFs::new()
            .with_executable("/a", "x")
            .with_executable("/b", "y");
        let input = EvaluationInput::new("/a::/b")
            .with_hint(PlatformHint::new("linux-gnu", HintSource::Override));

        let report = PathEvaluator::new(&fs).evaluate(&input).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.recommended, "/a:/b");
        assert_eq!(report.original, "/a::/b");
    }

    #[test]
    fn leading_separator_reports_empty_entry() {
        let fs = MockFs::new().with_executable("/usr/bin", "ls");
        let input = EvaluationInput::new(":/usr/bin")
            .with_hint(PlatformHint::new("linux-gnu", HintSource::Override));

        let report = PathEvaluator::new(&fs).evaluate(&input).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].classification, Classification::Missing);
        assert_eq!(report.recommended, "/usr/bin");
        assert!(
            report
                .to_string()
                .starts_with("Entry [] does not exist\nOld PATH\n:/usr/bin\n")
        );
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let fs = MockFs::new()
            .with_executable("/usr/bin", "ls")
            .with_unreadable_dir("/root/bin", "Permission denied");
        let input = EvaluationInput::new("/usr/bin:/root/bin:/gone")
            .with_hint(PlatformHint::new("darwin23", HintSource::Override));
        let evaluator = PathEvaluator::new(&fs);

        assert_eq!(
            evaluator.evaluate(&input).unwrap(),
            evaluator.evaluate(&input).unwrap()
        );
    }
}
