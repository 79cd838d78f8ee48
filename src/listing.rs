use crate::types::{DirEntry, EntryKind, Stats};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

pub const GIT_DIR_NAME: &str = ".git";

/// List the direct children of `dir`, sorted by name, without `.git`.
pub fn overview(dir: &Path) -> Result<Vec<DirEntry>> {
    let read_dir =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == GIT_DIR_NAME {
            continue;
        }

        // Follow symlinks; a dangling link is described by the link itself.
        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(_) => entry
                .metadata()
                .with_context(|| format!("Failed to stat {}", path.display()))?,
        };

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File {
                size: metadata.len(),
            }
        };
        entries.push(DirEntry { name, kind });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Whether the entry is a directory, or a symlink pointing at one.
/// Symlinks are classified but never descended into.
fn is_dir_like(entry: &walkdir::DirEntry) -> bool {
    if entry.path_is_symlink() {
        fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
    } else {
        entry.file_type().is_dir()
    }
}

/// Count every file and directory below `dir`, pruning `.git` directories at
/// all levels. A `.git` file (worktrees, submodules) counts as a file. The
/// root itself is not counted.
pub fn stats(dir: &Path) -> Result<Stats> {
    let mut stats = Stats::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !(e.file_name() == GIT_DIR_NAME && is_dir_like(e)));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if is_dir_like(&entry) {
            stats.dirs += 1;
        } else {
            stats.files += 1;
        }
    }

    debug!(
        event = "glance.listing.stats_completed",
        files = stats.files,
        dirs = stats.dirs,
        path = %dir.display()
    );
    Ok(stats)
}
