use crate::types::{DirEntry, GitInfo, Stats};
use std::fmt::Write;
use std::path::Path;

pub const NOT_A_REPOSITORY: &str = "Git: n/a (not a repository)";
const MISSING: &str = "n/a";

/// Render the full report. Pure; callers do the printing.
pub fn render(path: &Path, git: Option<&GitInfo>, stats: Stats, entries: &[DirEntry]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Path: {}", path.display());
    match git {
        Some(info) => {
            let _ = writeln!(out, "Branch: {}", info.branch);
            let _ = writeln!(
                out,
                "Latest commit: {}",
                info.latest_commit.as_deref().unwrap_or(MISSING)
            );
            let _ = writeln!(out, "Remote: {}", info.remote.as_deref().unwrap_or(MISSING));
            let _ = writeln!(out, "Working tree: {}", info.tree_state());
        }
        None => {
            let _ = writeln!(out, "{}", NOT_A_REPOSITORY);
        }
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "Contents: {} files in {} directories",
        stats.files, stats.dirs
    );
    for entry in entries {
        let _ = writeln!(out, "  - {}", entry);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    fn sample_entries() -> Vec<DirEntry> {
        vec![
            DirEntry {
                name: "README.md".to_string(),
                kind: EntryKind::File { size: 10 },
            },
            DirEntry {
                name: "src".to_string(),
                kind: EntryKind::Directory,
            },
        ]
    }

    #[test]
    fn render_without_repository() {
        let stats = Stats { files: 3, dirs: 1 };
        let out = render(Path::new("/tmp/project"), None, stats, &sample_entries());

        assert_eq!(
            out,
            "Path: /tmp/project\n\
             Git: n/a (not a repository)\n\
             \n\
             Contents: 3 files in 1 directories\n\
             \x20\x20- README.md (0.0 KB)\n\
             \x20\x20- src/\n"
        );
    }

    #[test]
    fn render_with_repository() {
        let info = GitInfo {
            branch: "main".to_string(),
            latest_commit: Some("abc1234 initial".to_string()),
            dirty: true,
            remote: Some("git@example.com:me/project.git".to_string()),
        };
        let out = render(
            Path::new("/tmp/project"),
            Some(&info),
            Stats { files: 1, dirs: 0 },
            &sample_entries()[..1],
        );

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Path: /tmp/project",
                "Branch: main",
                "Latest commit: abc1234 initial",
                "Remote: git@example.com:me/project.git",
                "Working tree: dirty",
                "",
                "Contents: 1 files in 0 directories",
                "  - README.md (0.0 KB)",
            ]
        );
        assert!(!out.contains(NOT_A_REPOSITORY));
    }

    #[test]
    fn render_missing_fields_as_placeholder() {
        let info = GitInfo {
            branch: "HEAD".to_string(),
            latest_commit: None,
            dirty: false,
            remote: None,
        };
        let out = render(Path::new("/repo"), Some(&info), Stats::default(), &[]);

        assert!(out.contains("Latest commit: n/a\n"));
        assert!(out.contains("Remote: n/a\n"));
        assert!(out.contains("Working tree: clean\n"));
        assert!(out.ends_with("Contents: 0 files in 0 directories\n"));
    }
}
