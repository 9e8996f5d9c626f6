//! The hierarchical node model shared by every pipeline stage

use serde::Serialize;

use crate::catalog::{CatalogRow, ObjectId, ObjectKind};

/// One catalog object in the assembled tree.
///
/// Ownership flows strictly root-to-leaf through `children`; `parent` is an
/// identity back-reference for traversal only, never an owning edge.
///
/// `size_bytes` holds the size reported by the catalog source until the
/// aggregator runs, after which container kinds (Server, Database, Table)
/// carry their reconciled subtree total instead.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ObjectId>,
    pub kind: ObjectKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_estimate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub children: Vec<Node>,
}

impl From<CatalogRow> for Node {
    fn from(row: CatalogRow) -> Self {
        Self {
            id: row.id,
            parent: row.parent_id,
            kind: row.kind,
            name: row.name,
            size_bytes: row.size_bytes,
            row_estimate: row.row_estimate,
            type_label: row.type_label,
            nullable: row.nullable,
            description: row.description,
            children: Vec::new(),
        }
    }
}

impl Node {
    /// Clone every field except the children, which start empty.
    pub(crate) fn without_children(&self) -> Node {
        Node {
            id: self.id,
            parent: self.parent,
            kind: self.kind,
            name: self.name.clone(),
            size_bytes: self.size_bytes,
            row_estimate: self.row_estimate,
            type_label: self.type_label.clone(),
            nullable: self.nullable,
            description: self.description.clone(),
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
