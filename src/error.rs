//! Error types for catalog inspection and tree construction.

use thiserror::Error;

use crate::catalog::ObjectId;

/// Errors raised while assembling the catalog tree from flat rows.
///
/// All of these indicate malformed input from the catalog source and abort
/// construction entirely; no partial tree is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A row's declared parent was never seen in the row sequence.
    #[error("object {name:?} ({id}) references parent {parent} that was never seen")]
    DanglingReference {
        id: ObjectId,
        parent: ObjectId,
        name: String,
    },

    /// An object identity was registered twice.
    #[error("object identity {id} ({name:?}) registered twice")]
    DuplicateObject { id: ObjectId, name: String },

    /// The row sequence contains no parentless (server) row.
    #[error("catalog snapshot contains no server row")]
    MissingRoot,

    /// The row sequence contains more than one parentless row.
    #[error("catalog snapshot contains a second root row {name:?} ({id})")]
    MultipleRoots { id: ObjectId, name: String },
}

/// Top-level error type for the pgls binary.
#[derive(Debug, Error)]
pub enum PglsError {
    /// The connection string could not be parsed.
    #[error("invalid connection string: {0}")]
    Dsn(String),

    /// A catalog query or connection failed.
    #[error("catalog query failed: {0}")]
    Catalog(#[from] tokio_postgres::Error),

    /// The catalog rows could not be assembled into a tree.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PglsError>;
