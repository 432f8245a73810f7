use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::task;

use crate::models::{DirectoryEntry, EntryKind};

use super::DirLister;

pub struct OsDirLister;

#[async_trait]
impl DirLister for OsDirLister {
    async fn list_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let reader = std::fs::read_dir(&dir)
                .with_context(|| format!("listing {}", dir.display()))?;

            let mut entries = Vec::new();
            for entry in reader.filter_map(|e| e.ok()) {
                // file_type comes from lstat, so a symlink to a directory
                // is reported as a symlink and never descended into.
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                let kind = if file_type.is_symlink() {
                    EntryKind::Symlink
                } else if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };

                entries.push(DirectoryEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }
}
