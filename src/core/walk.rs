use std::path::Path;

use anyhow::{Context, Result};

use crate::fs::DirLister;
use crate::models::{DirectoryEntry, EntryKind, EntryNode, TreeNode};

/// Scan the children of `root` down to `max_depth` levels.
///
/// `Some(0)` lists nothing below the root, `Some(1)` lists only the
/// immediate children, `None` is unlimited. A root that cannot be listed
/// is an error; a nested directory that cannot be listed becomes a single
/// `TreeNode::Inaccessible` child and the walk continues around it.
pub async fn walk_root<L: DirLister>(
    lister: &L,
    root: &Path,
    max_depth: Option<usize>,
) -> Result<Vec<TreeNode>> {
    if max_depth == Some(0) {
        return Ok(Vec::new());
    }

    let entries = lister
        .list_dir(root)
        .await
        .with_context(|| format!("reading root directory {}", root.display()))?;
    Ok(walk_level(lister, entries, max_depth, 1).await)
}

/// Turn one directory's listing into nodes, recursing with an explicit
/// depth counter. `depth` is the level these entries sit at, root children
/// being level 1.
async fn walk_level<L: DirLister>(
    lister: &L,
    mut entries: Vec<DirectoryEntry>,
    max_depth: Option<usize>,
    depth: usize,
) -> Vec<TreeNode> {
    sort_listing(&mut entries);

    let mut nodes = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut children = Vec::new();

        // Only real directories are descended into. Symlinks stay leaves
        // so circular links cannot loop the walk.
        let should_recurse = entry.kind == EntryKind::Directory
            && match max_depth {
                Some(max) => depth < max,
                None => true,
            };

        if should_recurse {
            children = match lister.list_dir(&entry.path).await {
                Ok(child_entries) => {
                    Box::pin(walk_level(lister, child_entries, max_depth, depth + 1)).await
                }
                Err(_) => vec![TreeNode::Inaccessible],
            };
        }

        nodes.push(TreeNode::Entry(EntryNode {
            name: entry.name,
            kind: entry.kind,
            children,
        }));
    }
    nodes
}

/// Directories first, then case-insensitive lexicographic by name. This
/// ordering is what makes reruns byte-identical.
fn sort_listing(entries: &mut [DirectoryEntry]) {
    entries
        .sort_by_cached_key(|entry| (entry.kind != EntryKind::Directory, entry.name.to_lowercase()));
}
