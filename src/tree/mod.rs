//! Catalog tree assembly pipeline
//!
//! Flat catalog rows flow through four stages, in a fixed order:
//!
//! rows → builder → raw tree → aggregator → sized tree → filter →
//! pruned tree → sorter → ordered tree
//!
//! Aggregation runs strictly before filtering, so a hidden descendant's
//! bytes still show up in the totals of its surviving ancestors (unless
//! `SizePolicy::ExcludeHidden` asks otherwise).

pub(crate) mod aggregate;
pub(crate) mod builder;
mod config;
mod filter;
mod node;
mod sort;

pub use aggregate::{aggregate, SizePolicy};
pub use builder::build;
pub use config::TreeConfig;
pub use filter::prune;
pub use node::Node;
pub use sort::{sort, SortKey};

use crate::catalog::CatalogRow;
use crate::error::BuildError;

/// Run the whole pipeline: build, aggregate, filter, sort.
///
/// The tree is constructed fresh from a point-in-time row snapshot; nothing
/// is cached between invocations.
pub fn assemble(
    rows: impl IntoIterator<Item = CatalogRow>,
    config: &TreeConfig,
) -> Result<Node, BuildError> {
    let mut tree = build(rows)?;
    aggregate(&mut tree, &config.hidden_kinds, config.size_policy);

    let mut tree = match prune(&tree, &config.hidden_kinds) {
        Some(pruned) => pruned,
        // Hiding the root's own kind would erase the display entirely;
        // keep the bare root as an anchor instead.
        None => Node {
            children: Vec::new(),
            ..tree
        },
    };

    sort(&mut tree, config.sort_key);
    Ok(tree)
}
