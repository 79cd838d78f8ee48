use std::fmt;

/// Git metadata for a directory inside a working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    pub branch: String,
    pub latest_commit: Option<String>,
    pub dirty: bool,
    pub remote: Option<String>,
}

impl GitInfo {
    pub fn tree_state(&self) -> &'static str {
        if self.dirty {
            "dirty"
        } else {
            "clean"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File { size: u64 },
}

/// A direct child of the inspected directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl fmt::Display for DirEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Directory => write!(f, "{}/", self.name),
            EntryKind::File { size } => {
                write!(f, "{} ({:.1} KB)", self.name, size as f64 / 1024.0)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub files: usize,
    pub dirs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_entry_has_trailing_slash() {
        let entry = DirEntry {
            name: "src".to_string(),
            kind: EntryKind::Directory,
        };
        assert_eq!(entry.to_string(), "src/");
    }

    #[test]
    fn file_entry_rounds_to_one_decimal() {
        let small = DirEntry {
            name: "README.md".to_string(),
            kind: EntryKind::File { size: 10 },
        };
        assert_eq!(small.to_string(), "README.md (0.0 KB)");

        let larger = DirEntry {
            name: "Cargo.lock".to_string(),
            kind: EntryKind::File { size: 1536 },
        };
        assert_eq!(larger.to_string(), "Cargo.lock (1.5 KB)");
    }
}
