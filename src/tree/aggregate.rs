//! Bottom-up size aggregation
//!
//! Runs exactly once, after building and strictly before filtering, so a
//! later hidden descendant still counts toward the totals of ancestors that
//! survive filtering (unless `SizePolicy::ExcludeHidden` is chosen).
//!
//! Size semantics per kind, chosen so totals match physically observed
//! sizes exactly and never double count:
//! - Table rows carry the heap size only (indexes excluded), so a table's
//!   total is heap plus its index children.
//! - Database rows carry the inclusive physical total (`pg_database_size`
//!   style); the aggregator derives the residual not attributed to any
//!   child (catalog overhead) and re-adds the children, which leaves the
//!   reported total intact under the default policy and shrinks it
//!   correctly when hidden kinds are excluded.
//! - Views and Columns contribute zero bytes.

use std::collections::HashSet;

use crate::catalog::ObjectKind;

use super::node::Node;

/// Whether hidden kinds still contribute to ancestor size totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizePolicy {
    /// Totals are computed from the full tree; hiding a kind only removes
    /// its rows from the display.
    #[default]
    IncludeHidden,
    /// Hidden subtrees are excluded from totals, so hiding indexes shrinks
    /// the displayed table and database sizes.
    ExcludeHidden,
}

/// Attach subtree size totals to every container node in a single
/// post-order traversal (children finalized before their parents).
pub fn aggregate(root: &mut Node, hidden_kinds: &HashSet<ObjectKind>, policy: SizePolicy) {
    subtree_total(root, hidden_kinds, policy);
}

/// Returns `(full, counted)` subtree totals: `full` over the whole subtree,
/// `counted` with excluded kinds removed. The database residual has to come
/// from the full totals even when hidden kinds are excluded from display.
fn subtree_total(
    node: &mut Node,
    hidden_kinds: &HashSet<ObjectKind>,
    policy: SizePolicy,
) -> (u64, u64) {
    let mut full_children = 0u64;
    let mut counted_children = 0u64;
    for child in &mut node.children {
        let (child_full, child_counted) = subtree_total(child, hidden_kinds, policy);
        full_children += child_full;
        let excluded =
            policy == SizePolicy::ExcludeHidden && hidden_kinds.contains(&child.kind);
        if !excluded {
            counted_children += child_counted;
        }
    }

    let (full, counted) = match node.kind {
        ObjectKind::Server => (full_children, counted_children),
        // The reported database size already includes its contents; only
        // the residual (catalog overhead, unattributed relations) is the
        // database's own contribution.
        ObjectKind::Database => {
            let residual = node.size_bytes.unwrap_or(0).saturating_sub(full_children);
            (residual + full_children, residual + counted_children)
        }
        ObjectKind::Table => {
            let heap = node.size_bytes.unwrap_or(0);
            (heap + full_children, heap + counted_children)
        }
        ObjectKind::Index => {
            let direct = node.size_bytes.unwrap_or(0);
            (direct, direct)
        }
        // No physical storage is attributed to views or columns.
        ObjectKind::View | ObjectKind::Column => (0, 0),
    };

    match node.kind {
        ObjectKind::Server | ObjectKind::Database | ObjectKind::Table => {
            node.size_bytes = Some(counted);
        }
        ObjectKind::Index | ObjectKind::View | ObjectKind::Column => {}
    }

    (full, counted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRow, ObjectId, ObjectKind};
    use crate::tree::builder::build;

    fn sample_tree() -> Node {
        // srv -> db (reported 180) -> t (heap 100) -> [idx (30), col], v -> col
        // 50 bytes of the database are attributed to no child.
        build(vec![
            CatalogRow::new(ObjectId(1), None, ObjectKind::Server, "srv"),
            CatalogRow::new(ObjectId(2), Some(ObjectId(1)), ObjectKind::Database, "db")
                .with_size(180),
            CatalogRow::new(ObjectId(3), Some(ObjectId(2)), ObjectKind::Table, "public.t")
                .with_size(100),
            CatalogRow::new(ObjectId(4), Some(ObjectId(3)), ObjectKind::Index, "t_pkey")
                .with_size(30),
            CatalogRow::new(ObjectId(5), Some(ObjectId(3)), ObjectKind::Column, "id")
                .with_type_label("integer"),
            CatalogRow::new(ObjectId(6), Some(ObjectId(2)), ObjectKind::View, "public.v"),
            CatalogRow::new(ObjectId(7), Some(ObjectId(6)), ObjectKind::Column, "name")
                .with_type_label("text"),
        ])
        .unwrap()
    }

    #[test]
    fn test_container_totals() {
        let mut tree = sample_tree();
        aggregate(&mut tree, &HashSet::new(), SizePolicy::IncludeHidden);

        let db = &tree.children[0];
        let table = &db.children[0];
        assert_eq!(table.size_bytes, Some(130), "heap + index");
        assert_eq!(db.size_bytes, Some(180), "reported total preserved");
        assert_eq!(tree.size_bytes, Some(180), "server total matches");
    }

    #[test]
    fn test_reported_total_covers_children() {
        // The database row's size in the end-to-end spec scenario is
        // exactly its tables' sum; aggregation must not inflate it.
        let mut tree = build(vec![
            CatalogRow::new(ObjectId(1), None, ObjectKind::Server, "srv"),
            CatalogRow::new(ObjectId(2), Some(ObjectId(1)), ObjectKind::Database, "db")
                .with_size(300),
            CatalogRow::new(ObjectId(3), Some(ObjectId(2)), ObjectKind::Table, "t1")
                .with_size(100),
            CatalogRow::new(ObjectId(4), Some(ObjectId(2)), ObjectKind::Table, "t2")
                .with_size(200),
        ])
        .unwrap();
        aggregate(&mut tree, &HashSet::new(), SizePolicy::IncludeHidden);

        assert_eq!(tree.children[0].size_bytes, Some(300));
        assert_eq!(tree.size_bytes, Some(300));
    }

    #[test]
    fn test_views_and_columns_contribute_zero() {
        let mut tree = sample_tree();
        aggregate(&mut tree, &HashSet::new(), SizePolicy::IncludeHidden);

        let db = &tree.children[0];
        let view = &db.children[1];
        assert_eq!(view.size_bytes, None);
        assert_eq!(view.children[0].size_bytes, None);
    }

    #[test]
    fn test_index_keeps_direct_size() {
        let mut tree = sample_tree();
        aggregate(&mut tree, &HashSet::new(), SizePolicy::IncludeHidden);

        let index = &tree.children[0].children[0].children[0];
        assert_eq!(index.kind, ObjectKind::Index);
        assert_eq!(index.size_bytes, Some(30));
    }

    #[test]
    fn test_round_trip_against_row_set() {
        // Every physically observed byte is counted exactly once at the root.
        let mut tree = sample_tree();
        aggregate(&mut tree, &HashSet::new(), SizePolicy::IncludeHidden);
        assert_eq!(tree.size_bytes, Some(180));
    }

    #[test]
    fn test_exclude_hidden_policy_shrinks_totals() {
        let mut tree = sample_tree();
        let hidden = HashSet::from([ObjectKind::Index]);
        aggregate(&mut tree, &hidden, SizePolicy::ExcludeHidden);

        let db = &tree.children[0];
        assert_eq!(db.children[0].size_bytes, Some(100), "index excluded");
        assert_eq!(db.size_bytes, Some(150), "residual 50 + heap 100");
        assert_eq!(tree.size_bytes, Some(150));
    }

    #[test]
    fn test_include_hidden_policy_ignores_hidden_set() {
        let mut tree = sample_tree();
        let hidden = HashSet::from([ObjectKind::Index]);
        aggregate(&mut tree, &hidden, SizePolicy::IncludeHidden);

        assert_eq!(tree.children[0].children[0].size_bytes, Some(130));
    }

    #[test]
    fn test_exclude_hidden_table_drops_whole_subtree() {
        let mut tree = sample_tree();
        let hidden = HashSet::from([ObjectKind::Table]);
        aggregate(&mut tree, &hidden, SizePolicy::ExcludeHidden);

        let db = &tree.children[0];
        assert_eq!(db.size_bytes, Some(50), "only unattributed bytes remain");
    }

    #[test]
    fn test_stale_reported_size_never_underflows() {
        // A database total smaller than its children (stale stats) clamps
        // the residual at zero instead of wrapping.
        let mut tree = build(vec![
            CatalogRow::new(ObjectId(1), None, ObjectKind::Server, "srv"),
            CatalogRow::new(ObjectId(2), Some(ObjectId(1)), ObjectKind::Database, "db")
                .with_size(10),
            CatalogRow::new(ObjectId(3), Some(ObjectId(2)), ObjectKind::Table, "t")
                .with_size(100),
        ])
        .unwrap();
        aggregate(&mut tree, &HashSet::new(), SizePolicy::IncludeHidden);
        assert_eq!(tree.children[0].size_bytes, Some(100));
    }
}
