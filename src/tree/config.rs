//! Configuration for the tree assembly pipeline

use std::collections::HashSet;

use crate::catalog::ObjectKind;

use super::aggregate::SizePolicy;
use super::sort::SortKey;

/// Configuration consumed by the filter, sorter and aggregator stages.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Node kinds removed from the display.
    pub hidden_kinds: HashSet<ObjectKind>,
    pub sort_key: SortKey,
    /// Whether hidden kinds still count toward ancestor size totals.
    pub size_policy: SizePolicy,
}
