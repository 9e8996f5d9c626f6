//! pgls - display PostgreSQL database information as a tree

pub mod catalog;
pub mod error;
pub mod output;
pub mod tree;

pub use catalog::{CatalogRow, ObjectId, ObjectKind, PgCatalog};
pub use error::{BuildError, PglsError, Result};
pub use output::{print_json, OutputConfig, TreeFormatter};
pub use tree::{assemble, Node, SizePolicy, SortKey, TreeConfig};
