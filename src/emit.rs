//! Filesystem emission for the bootstrap manifest.
//!
//! Writes every manifest entry under a target root, creating parent
//! directories as needed, then best-effort removes the invoking artifact.
//! There is no transactional guarantee: a failure partway through leaves a
//! partially-materialized tree with no rollback.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::OUTPUT_FILES;

/// Summary of a completed emission pass.
#[derive(Debug, Serialize)]
pub struct EmitReport {
    /// Relative paths written, in emission order.
    pub written: Vec<String>,
    /// Whether the invoking artifact was removed afterwards.
    pub cleaned: bool,
}

/// Writes the fixed artifact set under a target root directory.
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Write every manifest entry under the root, in manifest order.
    pub fn emit_all(&self) -> Result<EmitReport> {
        let mut written = Vec::with_capacity(OUTPUT_FILES.len());
        for file in OUTPUT_FILES {
            self.write_file(file.path, file.content)?;
            written.push(file.path.to_string());
        }

        Ok(EmitReport {
            written,
            cleaned: false,
        })
    }

    /// Create or truncate `rel` under the root with the LF-normalized UTF-8
    /// bytes of `content`. Existing files are overwritten unconditionally.
    pub fn write_file(&self, rel: &str, content: &str) -> Result<()> {
        let path = self.root.join(rel);
        ensure_parent_directory(&path)?;

        fs::write(&path, normalize_line_endings(content))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        Ok(())
    }
}

/// Create the parent directory of `path` and all missing ancestors.
///
/// Idempotent: succeeds silently when the directory already exists.
pub fn ensure_parent_directory(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Best-effort removal of the invoking artifact.
///
/// Cleanup is a courtesy, not a postcondition: failures are discarded and
/// never affect the run's outcome. Returns whether the file was removed.
pub fn remove_artifact(path: &Path) -> bool {
    fs::remove_file(path).is_ok()
}

/// Emitted files always use LF, regardless of host convention.
fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_missing_ancestors() {
        let temp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(temp.path());

        scaffolder.write_file("a/b/c/file.txt", "hello\n").unwrap();

        assert!(temp.path().join("a/b/c").is_dir());
        let on_disk = fs::read_to_string(temp.path().join("a/b/c/file.txt")).unwrap();
        assert_eq!(on_disk, "hello\n");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(temp.path());

        scaffolder.write_file("file.txt", "first\n").unwrap();
        scaffolder.write_file("file.txt", "second\n").unwrap();

        let on_disk = fs::read_to_string(temp.path().join("file.txt")).unwrap();
        assert_eq!(on_disk, "second\n");
    }

    #[test]
    fn test_write_file_normalizes_crlf() {
        let temp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(temp.path());

        scaffolder.write_file("file.txt", "a\r\nb\r\nc\n").unwrap();

        let bytes = fs::read(temp.path().join("file.txt")).unwrap();
        assert_eq!(bytes, b"a\nb\nc\n");
    }

    #[test]
    fn test_ensure_parent_directory_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested/dir/file.txt");

        ensure_parent_directory(&target).unwrap();
        ensure_parent_directory(&target).unwrap();

        assert!(temp.path().join("nested/dir").is_dir());
    }

    #[test]
    fn test_ensure_parent_directory_bare_filename() {
        // A bare relative filename has an empty parent; nothing to create.
        ensure_parent_directory(Path::new("file.txt")).unwrap();
    }

    #[test]
    fn test_remove_artifact() {
        let temp = TempDir::new().unwrap();
        let artifact = temp.path().join("bootstrap");
        fs::write(&artifact, "binary").unwrap();

        assert!(remove_artifact(&artifact));
        assert!(!artifact.exists());

        // Already gone: still non-fatal, reported as not removed
        assert!(!remove_artifact(&artifact));
    }

    #[test]
    fn test_emit_all_reports_every_entry() {
        let temp = TempDir::new().unwrap();
        let report = Scaffolder::new(temp.path()).emit_all().unwrap();

        assert_eq!(report.written.len(), OUTPUT_FILES.len());
        assert!(!report.cleaned);
        for file in OUTPUT_FILES {
            assert!(temp.path().join(file.path).is_file(), "missing {}", file.path);
        }
    }
}
