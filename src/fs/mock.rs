use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::DirectoryEntry;

use super::DirLister;

#[derive(Clone, Debug)]
enum Listing {
    Ok(Vec<DirectoryEntry>),
    Denied(String),
}

/// Scripted lister for walk tests. Records every directory it was asked
/// about so tests can assert what was (not) descended into.
#[derive(Clone, Default)]
pub struct MockDirLister {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Listing>,
    requests: Vec<PathBuf>,
}

impl MockDirLister {
    pub fn set_listing(&self, dir: impl Into<PathBuf>, entries: Vec<DirectoryEntry>) {
        let mut inner = self.inner.lock().expect("mock lister lock");
        inner.listings.insert(dir.into(), Listing::Ok(entries));
    }

    pub fn set_denied(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock lister lock");
        inner
            .listings
            .insert(dir.into(), Listing::Denied(message.into()));
    }

    pub fn requests(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock lister lock");
        inner.requests.clone()
    }
}

#[async_trait]
impl DirLister for MockDirLister {
    async fn list_dir(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        let mut inner = self.inner.lock().expect("mock lister lock");
        inner.requests.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Listing::Ok(entries)) => Ok(entries.clone()),
            Some(Listing::Denied(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock listing for {}", dir.display())),
        }
    }
}
