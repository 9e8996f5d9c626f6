//! Flat catalog row types produced by the catalog source

use std::fmt;

use serde::Serialize;

/// Opaque identity of a catalog object, unique within one snapshot.
///
/// Identities are only used to wire rows to their parents during tree
/// construction; they carry no meaning across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of catalog object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Server,
    Database,
    Table,
    View,
    Index,
    Column,
}

impl ObjectKind {
    /// Lowercase label used in rendered output, e.g. "(database)".
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Server => "server",
            ObjectKind::Database => "database",
            ObjectKind::Table => "table",
            ObjectKind::View => "view",
            ObjectKind::Index => "index",
            ObjectKind::Column => "column",
        }
    }
}

/// One flat row describing a catalog object.
///
/// `size_bytes` semantics depend on the kind: tables carry their heap size
/// only (indexes excluded) and indexes their own size, while databases
/// carry the inclusive physical total. The aggregator reconciles these so
/// no byte is ever counted twice.
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub id: ObjectId,
    /// `None` only for the server root row.
    pub parent_id: Option<ObjectId>,
    pub kind: ObjectKind,
    pub name: String,
    pub size_bytes: Option<u64>,
    /// Planner row estimate for tables (`reltuples`), if known.
    pub row_estimate: Option<i64>,
    /// Data type label for columns, e.g. "integer".
    pub type_label: Option<String>,
    /// Whether a column is nullable.
    pub nullable: bool,
    /// Comment attached to the object, if any.
    pub description: Option<String>,
}

impl CatalogRow {
    pub fn new(
        id: ObjectId,
        parent_id: Option<ObjectId>,
        kind: ObjectKind,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            parent_id,
            kind,
            name: name.into(),
            size_bytes: None,
            row_estimate: None,
            type_label: None,
            nullable: false,
            description: None,
        }
    }

    pub fn with_size(mut self, bytes: u64) -> Self {
        self.size_bytes = Some(bytes);
        self
    }

    pub fn with_row_estimate(mut self, rows: i64) -> Self {
        self.row_estimate = Some(rows);
        self
    }

    pub fn with_type_label(mut self, label: impl Into<String>) -> Self {
        self.type_label = Some(label.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
