//! Catalog metadata source
//!
//! This module turns a PostgreSQL server's catalog into the flat row
//! sequence the tree pipeline consumes. The queries are read-only and run
//! against a point-in-time view of the catalog; the rest of the crate never
//! touches the network.

mod postgres;
mod row;

pub use postgres::PgCatalog;
pub use row::{CatalogRow, ObjectId, ObjectKind};
