//! What counts as an executable file on each platform.

use std::ffi::OsStr;
use std::fs::Metadata;
use std::path::Path;

use crate::config::{DEFAULT_PATHEXT, EvaluatorConfig};
use crate::env::EnvProvider;

/// Rule deciding whether a non-directory file is executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutablePolicy {
    /// Any of the `0o111` permission bits is set (Unix).
    PermissionBits,
    /// The file extension is in the list, compared case-insensitively (Windows).
    /// Extensions are stored upper-case without the leading dot.
    Extensions(Vec<String>),
}

impl ExecutablePolicy {
    /// Policy for the platform this binary was compiled for.
    ///
    /// Chosen by compilation target, never by the OS-type hint: an msys shell
    /// on Windows still runs `.exe` files, not files with mode bits.
    pub fn native(env: &dyn EnvProvider, config: &EvaluatorConfig) -> Self {
        if cfg!(windows) {
            Self::from_pathext(env.get_non_empty(&config.pathext_var).as_deref())
        } else {
            Self::PermissionBits
        }
    }

    /// Build an extension policy from a `PATHEXT` value.
    ///
    /// `None` or a value without any extension falls back to
    /// `.COM;.EXE;.BAT;.CMD`.
    pub fn from_pathext(pathext: Option<&str>) -> Self {
        let parse = |raw: &str| -> Vec<String> {
            raw.split(';')
                .map(|ext| ext.trim().trim_start_matches('.'))
                .filter(|ext| !ext.is_empty())
                .map(str::to_ascii_uppercase)
                .collect()
        };

        let extensions = pathext.map(parse).unwrap_or_default();
        if extensions.is_empty() {
            Self::Extensions(parse(DEFAULT_PATHEXT))
        } else {
            Self::Extensions(extensions)
        }
    }

    /// Whether the file at `path` with `metadata` qualifies. Directories never do.
    pub fn is_executable(&self, path: &Path, metadata: &Metadata) -> bool {
        if metadata.is_dir() {
            return false;
        }
        match self {
            Self::PermissionBits => has_execute_bit(metadata),
            Self::Extensions(_) => self.matches_extension(path),
        }
    }

    /// Name-only half of the extension rule. Always false for `PermissionBits`.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Self::Extensions(extensions) = self else {
            return false;
        };
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
    }
}

#[cfg(unix)]
fn has_execute_bit(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

// No mode bits to consult: every regular file counts.
#[cfg(not(unix))]
const fn has_execute_bit(_metadata: &Metadata) -> bool {
    true
}
