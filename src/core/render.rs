use crate::models::{EntryKind, TreeNode};

/// Render the scanned tree as display lines, rooted at `<root_name>/`.
/// Lines come out in traversal order; that order is the tree's structure
/// and is never rearranged afterwards.
pub fn render_lines(root_name: &str, children: &[TreeNode]) -> Vec<String> {
    let mut lines = vec![format!("{root_name}/")];
    render_children(&mut lines, children, &[]);
    lines
}

fn render_children(lines: &mut Vec<String>, children: &[TreeNode], ancestor_has_more: &[bool]) {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        let mut line = String::new();
        for &has_more in ancestor_has_more {
            line.push_str(if has_more { "│   " } else { "    " });
        }
        line.push_str(if is_last { "└── " } else { "├── " });

        match node {
            TreeNode::Inaccessible => line.push_str("[permission denied]"),
            TreeNode::Entry(entry) => {
                line.push_str(&entry.name);
                match entry.kind {
                    EntryKind::Directory => line.push('/'),
                    EntryKind::Symlink => line.push_str(" -> (symlink)"),
                    EntryKind::File | EntryKind::Other => {}
                }
            }
        }
        lines.push(line);

        if let TreeNode::Entry(entry) = node
            && !entry.children.is_empty()
        {
            let mut next_ancestor_has_more = ancestor_has_more.to_vec();
            next_ancestor_has_more.push(!is_last);
            render_children(lines, &entry.children, &next_ancestor_has_more);
        }
    }
}
