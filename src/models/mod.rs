mod entry;
mod tree;

pub use entry::{DirectoryEntry, EntryKind};
pub use tree::{EntryNode, TreeNode};
