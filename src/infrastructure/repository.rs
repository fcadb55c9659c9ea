//! File system access for target files

use crate::error::{Result, UntagError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Reads and rewrites target files in place.
#[derive(Debug, Clone, Default)]
pub struct FileSystemRepository;

impl FileSystemRepository {
    pub fn new() -> Self {
        FileSystemRepository
    }

    /// Read the whole file as UTF-8.
    ///
    /// A missing file is reported as `TargetNotFound` and invalid UTF-8 as
    /// `Decode`; neither case touches the file system.
    pub fn read_target(&self, path: &Path) -> Result<String> {
        debug!(path = %path.display(), "reading target");
        fs::read_to_string(path).map_err(|e| Self::target_error(path, e))
    }

    /// Overwrite the file where it is.
    ///
    /// The path is reopened for writing and truncated, so symlinks are
    /// followed and the file keeps its permissions. A file that vanished
    /// since it was read is not recreated.
    pub fn write_target(&self, path: &Path, content: &str) -> Result<()> {
        debug!(path = %path.display(), bytes = content.len(), "writing target");
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Self::target_error(path, e))?;

        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| Self::target_error(path, e))
    }

    fn target_error(path: &Path, source: std::io::Error) -> UntagError {
        let path = path.to_path_buf();
        match source.kind() {
            ErrorKind::NotFound => UntagError::TargetNotFound(path),
            ErrorKind::InvalidData => UntagError::Decode(path),
            _ => UntagError::TargetIo { path, source },
        }
    }

    /// Expand the given paths into the list of files to process.
    ///
    /// Files are taken as named, whatever their extension. Directories are
    /// only accepted with `recursive`, in which case HTML files below them
    /// are collected, skipping dot-directories.
    pub fn collect_targets(&self, paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
        let mut targets = Vec::new();

        for path in paths {
            if !path.is_dir() {
                targets.push(path.clone());
                continue;
            }

            if !recursive {
                return Err(UntagError::Config(format!(
                    "{} is a directory (use --recursive to process the HTML files inside it)",
                    path.display()
                )));
            }

            let mut found = Self::collect_html_files(path);
            found.sort();
            debug!(dir = %path.display(), count = found.len(), "collected HTML files");
            targets.extend(found);
        }

        Ok(targets)
    }

    fn collect_html_files(dir: &Path) -> Vec<PathBuf> {
        let walker = WalkDir::new(dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| Self::is_html(path))
            .collect()
    }

    fn is_html(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                HTML_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_target() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("text.html");
        fs::write(&path, "<p>Hi</p>").unwrap();

        let repo = FileSystemRepository::new();
        assert_eq!(repo.read_target(&path).unwrap(), "<p>Hi</p>");
    }

    #[test]
    fn test_read_missing_target_does_not_create_it() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("text.html");

        let repo = FileSystemRepository::new();
        match repo.read_target(&path) {
            Err(UntagError::TargetNotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected TargetNotFound, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.html");
        fs::write(&path, [b'<', b'p', b'>', 0xE9, b'<', b'/', b'p', b'>']).unwrap();

        let repo = FileSystemRepository::new();
        assert!(matches!(
            repo.read_target(&path),
            Err(UntagError::Decode(_))
        ));
    }

    #[test]
    fn test_write_target_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("text.html");
        fs::write(&path, "<p>a much longer original body</p>").unwrap();

        let repo = FileSystemRepository::new();
        repo.write_target(&path, "short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_target_does_not_create_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone.html");

        let result = FileSystemRepository::new().write_target(&path, "x");

        assert!(matches!(result, Err(UntagError::TargetNotFound(_))));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_target_follows_symlink() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.html");
        let link = temp.path().join("text.html");
        fs::write(&real, "<p>Hi</p>").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        FileSystemRepository::new().write_target(&link, "Hi").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "Hi");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_target_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.html");
        fs::write(&path, "<p>Hi</p>").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        FileSystemRepository::new().write_target(&path, "Hi").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hi");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_read_only_target_fails_with_path() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("locked.html");
        fs::write(&path, "<p>Hi</p>").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // Root ignores file modes; nothing to check there.
        if OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        match FileSystemRepository::new().write_target(&path, "Hi") {
            Err(UntagError::TargetIo { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            other => panic!("Expected TargetIo, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>Hi</p>");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o444);
    }

    #[test]
    fn test_collect_targets_keeps_files_in_order() {
        let temp = TempDir::new().unwrap();
        let b = temp.path().join("b.txt");
        let a = temp.path().join("a.html");
        fs::write(&b, "").unwrap();
        fs::write(&a, "").unwrap();

        let repo = FileSystemRepository::new();
        let targets = repo.collect_targets(&[b.clone(), a.clone()], false).unwrap();
        assert_eq!(targets, vec![b, a]);
    }

    #[test]
    fn test_collect_targets_passes_missing_files_through() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.html");

        let repo = FileSystemRepository::new();
        let targets = repo.collect_targets(&[missing.clone()], false).unwrap();
        assert_eq!(targets, vec![missing]);
    }

    #[test]
    fn test_collect_targets_rejects_directory_without_recursive() {
        let temp = TempDir::new().unwrap();

        let repo = FileSystemRepository::new();
        let result = repo.collect_targets(&[temp.path().to_path_buf()], false);
        assert!(matches!(result, Err(UntagError::Config(msg)) if msg.contains("--recursive")));
    }

    #[test]
    fn test_collect_targets_recursive() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("index.html"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::create_dir_all(root.join("blog")).unwrap();
        fs::write(root.join("blog").join("post.HTM"), "").unwrap();
        fs::create_dir_all(root.join(".cache")).unwrap();
        fs::write(root.join(".cache").join("hidden.html"), "").unwrap();

        let repo = FileSystemRepository::new();
        let targets = repo.collect_targets(&[root.to_path_buf()], true).unwrap();

        assert_eq!(
            targets,
            vec![root.join("blog").join("post.HTM"), root.join("index.html")]
        );
    }
}
