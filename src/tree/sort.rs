//! Deterministic sibling ordering

use super::node::Node;

/// Sort key for sibling ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic ascending by name.
    #[default]
    Name,
    /// Descending by resolved size, largest first; nodes without a size
    /// sort as zero.
    Size,
}

/// Reorder every node's children recursively, top-down, each sorted once.
///
/// The sort is stable, so siblings with equal keys keep their original
/// catalog arrival order and the result is deterministic for a given input
/// and configuration.
pub fn sort(node: &mut Node, key: SortKey) {
    match key {
        SortKey::Name => node.children.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Size => node
            .children
            .sort_by(|a, b| b.size_bytes.unwrap_or(0).cmp(&a.size_bytes.unwrap_or(0))),
    }

    for child in &mut node.children {
        sort(child, key);
    }
}
