//! Strip use case

use crate::domain::strip_tags;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct StripOptions {
    pub targets: Vec<PathBuf>,
    pub recursive: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripFileChange {
    pub path: PathBuf,
    pub removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripReport {
    pub scanned_files: usize,
    pub changed_files: usize,
    pub total_removed: usize,
    pub dry_run: bool,
    pub changes: Vec<StripFileChange>,
}

/// Read one file, strip its tags and write the result back.
///
/// Returns the number of spans removed. Nothing is written when the file
/// holds no tags or when `dry_run` is set.
pub fn strip_file(repository: &FileSystemRepository, path: &Path, dry_run: bool) -> Result<usize> {
    let content = repository.read_target(path)?;
    let result = strip_tags(&content);

    if result.is_unchanged() {
        debug!(path = %path.display(), "no tags found");
        return Ok(0);
    }

    if !dry_run {
        repository.write_target(path, &result.content)?;
    }
    info!(path = %path.display(), removed = result.removed, dry_run, "stripped tags");

    Ok(result.removed)
}

/// Strip every target in order, stopping at the first failure.
pub fn strip_files(repository: &FileSystemRepository, options: StripOptions) -> Result<StripReport> {
    let targets = repository.collect_targets(&options.targets, options.recursive)?;

    let mut changes = Vec::new();
    let mut total_removed = 0usize;

    for path in &targets {
        let removed = strip_file(repository, path, options.dry_run)?;
        if removed == 0 {
            continue;
        }

        total_removed += removed;
        changes.push(StripFileChange {
            path: path.clone(),
            removed,
        });
    }

    Ok(StripReport {
        scanned_files: targets.len(),
        changed_files: changes.len(),
        total_removed,
        dry_run: options.dry_run,
        changes,
    })
}
