use super::EntryKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryNode {
    pub name: String,
    pub kind: EntryKind,
    pub children: Vec<TreeNode>,
}

/// One node of the scanned tree. `Inaccessible` stands in for the contents
/// of a directory whose listing could not be read; it renders as a single
/// `[permission denied]` leaf in place of the children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TreeNode {
    Entry(EntryNode),
    Inaccessible,
}
