//! Filesystem provider trait for testable classification.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::EvaluatorConfig;
use crate::env::EnvProvider;
use crate::executable::ExecutablePolicy;

/// What a path refers to, after following symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryProbe {
    /// Nothing at this path (including a broken symlink).
    Missing,
    File,
    Directory,
    /// The path could not be inspected, for example permission denied on a parent.
    Inaccessible(String),
}

/// Trait for filesystem operations (injectable for testing).
pub trait FsProvider {
    /// Inspect `path` without reading its contents.
    fn probe(&self, path: &Path) -> EntryProbe;

    /// Immediate children of a directory, in whatever order the filesystem
    /// returns them. The iterator is lazy so callers can stop early.
    fn read_dir<'a>(&'a self, dir: &Path) -> io::Result<Box<dyn Iterator<Item = PathBuf> + 'a>>;

    /// Whether `path` is a non-directory file the platform would execute.
    /// Unreadable children are reported as not executable.
    fn is_executable(&self, path: &Path) -> bool;
}

/// Production filesystem provider.
#[derive(Debug, Clone)]
pub struct SystemFs {
    policy: ExecutablePolicy,
}

impl SystemFs {
    pub const fn new(policy: ExecutablePolicy) -> Self {
        Self { policy }
    }

    /// Provider using the compilation target's executable convention.
    pub fn native(env: &dyn EnvProvider, config: &EvaluatorConfig) -> Self {
        Self::new(ExecutablePolicy::native(env, config))
    }

    pub const fn policy(&self) -> &ExecutablePolicy {
        &self.policy
    }
}

impl FsProvider for SystemFs {
    fn probe(&self, path: &Path) -> EntryProbe {
        if path.as_os_str().is_empty() {
            return EntryProbe::Missing;
        }

        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => EntryProbe::Directory,
            Ok(_) => EntryProbe::File,
            // A file used as a parent component ("/etc/passwd/bin") is just absent.
            Err(e) if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
            {
                EntryProbe::Missing
            }
            Err(e) => EntryProbe::Inaccessible(e.to_string()),
        }
    }

    fn read_dir<'a>(&'a self, dir: &Path) -> io::Result<Box<dyn Iterator<Item = PathBuf> + 'a>> {
        let entries = fs::read_dir(dir)?;
        let dir = dir.to_path_buf();
        Ok(Box::new(entries.filter_map(move |entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                None
            }
        })))
    }

    fn is_executable(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) => self.policy.is_executable(path, &metadata),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot stat child, not counting it");
                false
            }
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, PartialEq, Eq)]
enum MockNode {
    File { executable: bool },
    Dir,
    UnreadableDir(String),
    Inaccessible(String),
}

/// In-memory filesystem for tests.
///
/// Children are keyed by their parent string rather than `Path::parent`, so
/// Windows-style paths such as `C:\Bin` work on any host.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFs {
    nodes: std::collections::BTreeMap<PathBuf, MockNode>,
    children: std::collections::BTreeMap<PathBuf, Vec<PathBuf>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty directory.
    #[must_use]
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.nodes.insert(dir.into(), MockNode::Dir);
        self
    }

    /// An executable file `name` inside `dir`, creating `dir` if needed.
    #[must_use]
    pub fn with_executable(self, dir: impl Into<PathBuf>, name: &str) -> Self {
        self.with_child(dir.into(), name, MockNode::File { executable: true })
    }

    /// A non-executable file `name` inside `dir`, creating `dir` if needed.
    #[must_use]
    pub fn with_plain_file(self, dir: impl Into<PathBuf>, name: &str) -> Self {
        self.with_child(dir.into(), name, MockNode::File { executable: false })
    }

    /// A subdirectory `name` inside `dir`, creating `dir` if needed.
    #[must_use]
    pub fn with_subdir(self, dir: impl Into<PathBuf>, name: &str) -> Self {
        self.with_child(dir.into(), name, MockNode::Dir)
    }

    /// A regular file sitting where a search-path directory is expected.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.nodes
            .insert(path.into(), MockNode::File { executable: false });
        self
    }

    /// A directory whose listing fails with `reason`.
    #[must_use]
    pub fn with_unreadable_dir(mut self, dir: impl Into<PathBuf>, reason: &str) -> Self {
        self.nodes
            .insert(dir.into(), MockNode::UnreadableDir(reason.to_string()));
        self
    }

    /// A path whose metadata cannot be read at all.
    #[must_use]
    pub fn with_inaccessible(mut self, path: impl Into<PathBuf>, reason: &str) -> Self {
        self.nodes
            .insert(path.into(), MockNode::Inaccessible(reason.to_string()));
        self
    }

    fn with_child(mut self, dir: PathBuf, name: &str, node: MockNode) -> Self {
        self.nodes.entry(dir.clone()).or_insert(MockNode::Dir);
        let child = dir.join(name);
        self.nodes.insert(child.clone(), node);
        self.children.entry(dir).or_default().push(child);
        self
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FsProvider for MockFs {
    fn probe(&self, path: &Path) -> EntryProbe {
        match self.nodes.get(path) {
            None => EntryProbe::Missing,
            Some(MockNode::File { .. }) => EntryProbe::File,
            Some(MockNode::Dir | MockNode::UnreadableDir(_)) => EntryProbe::Directory,
            Some(MockNode::Inaccessible(reason)) => EntryProbe::Inaccessible(reason.clone()),
        }
    }

    fn read_dir<'a>(&'a self, dir: &Path) -> io::Result<Box<dyn Iterator<Item = PathBuf> + 'a>> {
        match self.nodes.get(dir) {
            Some(MockNode::Dir) => {
                let children = self.children.get(dir).map(Vec::as_slice).unwrap_or_default();
                Ok(Box::new(children.iter().cloned()))
            }
            Some(MockNode::UnreadableDir(reason)) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                reason.clone(),
            )),
            _ => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn is_executable(&self, path: &Path) -> bool {
        matches!(self.nodes.get(path), Some(MockNode::File { executable: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn probe_distinguishes_missing_file_and_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, b"data").unwrap();

        let fs_provider = SystemFs::new(ExecutablePolicy::PermissionBits);
        assert_eq!(fs_provider.probe(tmp.path()), EntryProbe::Directory);
        assert_eq!(fs_provider.probe(&file), EntryProbe::File);
        assert_eq!(
            fs_provider.probe(&tmp.path().join("absent")),
            EntryProbe::Missing
        );
    }

    #[test]
    fn probe_treats_empty_path_as_missing() {
        let fs_provider = SystemFs::new(ExecutablePolicy::PermissionBits);
        assert_eq!(fs_provider.probe(Path::new("")), EntryProbe::Missing);
    }

    #[test]
    fn probe_through_a_file_is_missing() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, b"data").unwrap();

        let fs_provider = SystemFs::new(ExecutablePolicy::PermissionBits);
        assert_eq!(fs_provider.probe(&file.join("bin")), EntryProbe::Missing);
    }

    #[test]
    fn read_dir_lists_immediate_children_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("deep"), b"").unwrap();
        fs::write(tmp.path().join("top"), b"").unwrap();

        let fs_provider = SystemFs::new(ExecutablePolicy::PermissionBits);
        let mut children: Vec<_> = fs_provider.read_dir(tmp.path()).unwrap().collect();
        children.sort();
        assert_eq!(
            children,
            vec![tmp.path().join("nested"), tmp.path().join("top")]
        );
    }

    #[test]
    fn read_dir_on_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let fs_provider = SystemFs::new(ExecutablePolicy::PermissionBits);
        assert!(fs_provider.read_dir(&tmp.path().join("absent")).is_err());
    }

    #[test]
    fn extension_policy_checks_names_of_real_files() {
        let tmp = TempDir::new().unwrap();
        let tool = tmp.path().join("tool.EXE");
        let notes = tmp.path().join("notes.txt");
        fs::write(&tool, b"").unwrap();
        fs::write(&notes, b"").unwrap();
        fs::create_dir(tmp.path().join("dir.exe")).unwrap();

        let fs_provider = SystemFs::new(ExecutablePolicy::from_pathext(Some(".exe")));
        assert!(fs_provider.is_executable(&tool));
        assert!(!fs_provider.is_executable(&notes));
        assert!(!fs_provider.is_executable(&tmp.path().join("dir.exe")));
    }

    #[cfg(unix)]
    #[test]
    fn permission_policy_follows_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join("script");
        let data = tmp.path().join("data");
        fs::write(&script, b"#!/bin/sh\n").unwrap();
        fs::write(&data, b"").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        fs::set_permissions(&data, fs::Permissions::from_mode(0o644)).unwrap();

        let fs_provider = SystemFs::new(ExecutablePolicy::PermissionBits);
        assert!(fs_provider.is_executable(&script));
        assert!(!fs_provider.is_executable(&data));
        // Directories carry x bits but never count.
        assert!(!fs_provider.is_executable(tmp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_executable_counts_and_broken_link_does_not() {
        use std::os::unix::fs::{PermissionsExt, symlink};

        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("real");
        fs::write(&target, b"").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
        symlink(&target, tmp.path().join("link")).unwrap();
        symlink(tmp.path().join("gone"), tmp.path().join("dangling")).unwrap();

        let fs_provider = SystemFs::new(ExecutablePolicy::PermissionBits);
        assert!(fs_provider.is_executable(&tmp.path().join("link")));
        assert!(!fs_provider.is_executable(&tmp.path().join("dangling")));
        assert_eq!(
            fs_provider.probe(&tmp.path().join("dangling")),
            EntryProbe::Missing
        );
    }

    #[test]
    fn mock_fs_lists_children_under_windows_style_dirs() {
        let fs_provider = MockFs::new()
            .with_executable("C:\\Bin", "tool.exe")
            .with_dir("C:\\Empty");

        assert_eq!(fs_provider.probe(Path::new("C:\\Bin")), EntryProbe::Directory);
        let children: Vec<_> = fs_provider.read_dir(Path::new("C:\\Bin")).unwrap().collect();
        assert_eq!(children.len(), 1);
        assert!(fs_provider.is_executable(&children[0]));
        assert_eq!(
            fs_provider.read_dir(Path::new("C:\\Empty")).unwrap().count(),
            0
        );
    }
}
