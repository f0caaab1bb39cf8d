//! Filesystem-backed discovery: lists module source files from a directory.
//!
//! The handle name is the file stem, so `modules/day_night.module` becomes a
//! candidate named `day_night`. Pairing the handles with a resolver that can
//! actually instantiate file sources is the host's job; the engine only needs
//! the candidate sequence.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::warn;

use super::{Discovery, ModuleHandle};

/// Enumerates files with a fixed extension under one directory.
///
/// Enumeration errors (missing directory, unreadable entries) are logged and
/// swallowed: discovery reports what it could list.
pub struct DirectoryDiscovery {
    root: PathBuf,
    extension: String,
}

impl DirectoryDiscovery {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }
}

#[async_trait]
impl Discovery for DirectoryDiscovery {
    async fn list_candidates(&self) -> Vec<ModuleHandle> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(error) => {
                warn!(root = %self.root.display(), %error, "Module directory unreadable");
                return Vec::new();
            }
        };

        let mut handles = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    let matches = path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension));
                    if !matches {
                        continue;
                    }
                    match path.file_stem().and_then(|stem| stem.to_str()) {
                        Some(stem) => handles.push(ModuleHandle::file(stem, path.clone())),
                        None => {
                            warn!(path = %path.display(), "Skipping module file with unusable name")
                        }
                    }
                }
                Ok(None) => break,
                Err(error) => {
                    warn!(root = %self.root.display(), %error, "Stopping directory scan");
                    break;
                }
            }
        }
        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::ModuleSource;

    #[tokio::test]
    async fn lists_only_matching_extensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("day_night.module"), b"").expect("write");
        std::fs::write(dir.path().join("motd.module"), b"").expect("write");
        std::fs::write(dir.path().join("notes.txt"), b"").expect("write");

        let discovery = DirectoryDiscovery::new(dir.path(), "module");
        let mut names: Vec<_> = discovery
            .list_candidates()
            .await
            .into_iter()
            .map(|h| h.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["day_night", "motd"]);
    }

    #[tokio::test]
    async fn handles_carry_the_source_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clock.module");
        std::fs::write(&path, b"").expect("write");

        let discovery = DirectoryDiscovery::new(dir.path(), "module");
        let handles = discovery.list_candidates().await;
        assert_eq!(handles.len(), 1);
        assert_eq!(handles[0].source(), &ModuleSource::File(path));
    }

    #[tokio::test]
    async fn missing_directory_yields_no_candidates() {
        let discovery = DirectoryDiscovery::new("/definitely/not/here", "module");
        assert!(discovery.list_candidates().await.is_empty());
    }
}
