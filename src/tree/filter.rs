//! Visibility filtering of node kinds

use std::collections::HashSet;

use crate::catalog::ObjectKind;

use super::node::Node;

/// Produce a pruned copy of the tree with every node of a hidden kind
/// removed, at every depth. Hiding a kind removes its whole subtree, so
/// hiding tables implicitly hides their columns and indexes.
///
/// Pure: the input tree is untouched, and surviving nodes keep the
/// `size_bytes` the aggregator already attached. Returns `None` when the
/// node itself is hidden.
pub fn prune(node: &Node, hidden_kinds: &HashSet<ObjectKind>) -> Option<Node> {
    if hidden_kinds.contains(&node.kind) {
        return None;
    }

    let mut kept = node.without_children();
    kept.children = node
        .children
        .iter()
        .filter_map(|child| prune(child, hidden_kinds))
        .collect();
    Some(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRow, ObjectId, ObjectKind};
    use crate::tree::aggregate::{aggregate, SizePolicy};
    use crate::tree::builder::build;

    fn aggregated_tree() -> Node {
        let mut tree = build(vec![
            CatalogRow::new(ObjectId(1), None, ObjectKind::Server, "srv"),
            CatalogRow::new(ObjectId(2), Some(ObjectId(1)), ObjectKind::Database, "db")
                .with_size(150),
            CatalogRow::new(ObjectId(3), Some(ObjectId(2)), ObjectKind::Table, "public.t")
                .with_size(100),
            CatalogRow::new(ObjectId(4), Some(ObjectId(3)), ObjectKind::Column, "id"),
            CatalogRow::new(ObjectId(5), Some(ObjectId(3)), ObjectKind::Index, "t_pkey")
                .with_size(40),
            CatalogRow::new(ObjectId(6), Some(ObjectId(2)), ObjectKind::View, "public.v"),
        ])
        .unwrap();
        aggregate(&mut tree, &HashSet::new(), SizePolicy::IncludeHidden);
        tree
    }

    #[test]
    fn test_hides_kind_at_every_depth() {
        let tree = aggregated_tree();
        let pruned = prune(&tree, &HashSet::from([ObjectKind::Column])).unwrap();

        let table = &pruned.children[0].children[0];
        assert_eq!(table.children.len(), 1, "only the index remains");
        assert_eq!(table.children[0].kind, ObjectKind::Index);
    }

    #[test]
    fn test_hiding_table_hides_its_subtree() {
        let tree = aggregated_tree();
        let pruned = prune(&tree, &HashSet::from([ObjectKind::Table])).unwrap();

        let db = &pruned.children[0];
        assert_eq!(db.children.len(), 1, "columns and indexes went with the table");
        assert_eq!(db.children[0].kind, ObjectKind::View);
    }

    #[test]
    fn test_sizes_unchanged_by_filtering() {
        let tree = aggregated_tree();
        let pruned = prune(&tree, &HashSet::from([ObjectKind::Table])).unwrap();

        // Aggregation is frozen before filtering; db keeps its full total.
        assert_eq!(pruned.children[0].size_bytes, Some(150));
        assert_eq!(tree.children[0].size_bytes, Some(150), "input untouched");
    }

    #[test]
    fn test_idempotent() {
        let tree = aggregated_tree();
        let hidden = HashSet::from([ObjectKind::Index, ObjectKind::Column]);

        let once = prune(&tree, &hidden).unwrap();
        let twice = prune(&once, &hidden).unwrap();
        assert_eq!(format!("{once:?}"), format!("{twice:?}"));
    }

    #[test]
    fn test_monotone_in_hidden_set() {
        let tree = aggregated_tree();
        let small = HashSet::from([ObjectKind::Index]);
        let large = HashSet::from([ObjectKind::Index, ObjectKind::Column, ObjectKind::View]);

        let with_small = prune(&tree, &small).unwrap();
        let with_large = prune(&tree, &large).unwrap();
        assert!(with_large.count() <= with_small.count());
    }

    #[test]
    fn test_empty_hidden_set_is_identity() {
        let tree = aggregated_tree();
        let pruned = prune(&tree, &HashSet::new()).unwrap();
        assert_eq!(pruned.count(), tree.count());
    }

    #[test]
    fn test_hidden_root_yields_none() {
        let tree = aggregated_tree();
        assert!(prune(&tree, &HashSet::from([ObjectKind::Server])).is_none());
    }
}
