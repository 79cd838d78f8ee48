//! Git metadata via the `git` CLI.
//!
//! Every query runs once, synchronously, in the inspected directory. A query
//! that cannot run or exits non-zero yields `None` for its field only.

use crate::types::GitInfo;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Run `git <args>` in `dir` and return trimmed stdout on success.
///
/// Empty output is treated the same as a failed query.
fn query(dir: &Path, args: &[&str]) -> Option<String> {
    debug!(
        event = "glance.git.query_started",
        args = %args.join(" "),
        path = %dir.display()
    );

    let output = match Command::new("git").current_dir(dir).args(args).output() {
        Ok(output) => output,
        Err(e) => {
            debug!(
                event = "glance.git.spawn_failed",
                args = %args.join(" "),
                error = %e
            );
            return None;
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(
            event = "glance.git.query_failed",
            args = %args.join(" "),
            stderr = %stderr.trim()
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

pub fn current_branch(dir: &Path) -> Option<String> {
    query(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

/// Latest commit as `<short-hash> <subject>`.
pub fn latest_commit(dir: &Path) -> Option<String> {
    query(dir, &["log", "-1", "--pretty=format:%h %s"])
}

/// Whether `git status --porcelain` reports anything.
///
/// A failed status query counts as clean.
pub fn is_dirty(dir: &Path) -> bool {
    query(dir, &["status", "--porcelain"]).is_some()
}

pub fn origin_url(dir: &Path) -> Option<String> {
    query(dir, &["remote", "get-url", "origin"])
}

/// Collect git metadata for `dir`, or `None` when it is not inside a
/// repository (or `git` is unavailable).
pub fn collect(dir: &Path) -> Option<GitInfo> {
    let branch = current_branch(dir)?;
    let latest_commit = latest_commit(dir);
    let dirty = is_dirty(dir);
    let remote = origin_url(dir);

    debug!(
        event = "glance.git.collect_completed",
        branch = %branch,
        dirty = dirty,
        has_remote = remote.is_some()
    );

    Some(GitInfo {
        branch,
        latest_commit,
        dirty,
        remote,
    })
}
