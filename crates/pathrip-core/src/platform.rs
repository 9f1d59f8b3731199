//! Platform hint parsing and path separators.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::EvalError;

/// Platform families recognised from an `OSTYPE`/`OS` style hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// `Windows_NT`, the value of `%OS%` on every NT-based Windows.
    Windows,
    /// MSYS / MinGW shells.
    Msys,
    Cygwin,
    /// `linux-gnu`, as set by bash on glibc systems.
    Linux,
    /// Any `darwin*` value (bash appends the kernel version).
    Darwin,
}

impl Platform {
    /// Match a hint exactly as the shell reports it. Matching is case-sensitive.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "Windows_NT" => Some(Self::Windows),
            "msys" => Some(Self::Msys),
            "cygwin" => Some(Self::Cygwin),
            "linux-gnu" => Some(Self::Linux),
            other if other.starts_with("darwin") => Some(Self::Darwin),
            _ => None,
        }
    }

    pub const fn separator(self) -> PathSeparator {
        match self {
            Self::Windows => PathSeparator::Semicolon,
            Self::Msys | Self::Cygwin | Self::Linux | Self::Darwin => PathSeparator::Colon,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::Msys => "msys",
            Self::Cygwin => "cygwin",
            Self::Linux => "linux",
            Self::Darwin => "darwin",
        };
        f.write_str(name)
    }
}

/// Delimiter between search-path entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSeparator {
    Colon,
    Semicolon,
}

impl PathSeparator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Semicolon => ';',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Semicolon => ";",
        }
    }
}

impl fmt::Display for PathSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PathSeparator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Resolve a hint to a platform, failing when it is absent or unknown.
pub fn resolve_platform(hint: Option<&str>) -> Result<Platform, EvalError> {
    hint.and_then(Platform::from_hint)
        .ok_or_else(|| EvalError::unknown_platform(hint))
}

/// Separator for a hint. The evaluator never guesses: an absent or
/// unrecognised hint is [`EvalError::UnknownPlatform`].
pub fn determine_path_separator(hint: Option<&str>) -> Result<PathSeparator, EvalError> {
    resolve_platform(hint).map(Platform::separator)
}
