mod real;

#[cfg(test)]
mod mock;

pub use real::OsDirLister;

#[cfg(test)]
pub use mock::MockDirLister;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::DirectoryEntry;

/// Enumerates the immediate children of one directory. The listing is a
/// snapshot; no entry stays valid past the call that produced it.
#[async_trait]
pub trait DirLister: Send + Sync {
    async fn list_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>>;
}
