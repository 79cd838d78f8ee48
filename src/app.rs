use crate::{git, listing, summary};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Replace a leading `~` with the user's home directory.
///
/// Only the current user's home is known, so `~user` forms stay literal and
/// resolve relative to the working directory. Nothing changes when no home
/// is known.
pub fn expand_home(raw: &Path) -> PathBuf {
    let mut components = raw.components();
    match components.next() {
        Some(first) if first.as_os_str() == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => raw.to_path_buf(),
        },
        _ => raw.to_path_buf(),
    }
}

/// Expand `~`, make the path absolute and normalize it.
///
/// Missing paths resolve too: the existing prefix is canonicalized and the
/// rest is applied lexically, so `..` and symlinks never show up in the
/// result.
pub fn resolve_target(raw: &Path) -> Result<PathBuf> {
    let expanded = expand_home(raw);
    let absolute = std::path::absolute(&expanded)
        .with_context(|| format!("Failed to resolve {}", expanded.display()))?;
    Ok(normalize(&absolute))
}

fn normalize(absolute: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(absolute) {
        return real;
    }

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => {
                out.push(name);
                // Resolve symlinks while the prefix still exists.
                if let Ok(real) = fs::canonicalize(&out) {
                    out = real;
                }
            }
        }
    }
    out
}

/// Collect everything about `path` and render the report.
pub fn summarize(path: &Path) -> Result<String> {
    info!(event = "glance.app.summarize_started", path = %path.display());

    let git_info = git::collect(path);
    let stats = listing::stats(path)?;
    let entries = listing::overview(path)?;

    info!(
        event = "glance.app.summarize_completed",
        is_repository = git_info.is_some(),
        entries = entries.len()
    );

    Ok(summary::render(path, git_info.as_ref(), stats, &entries))
}
