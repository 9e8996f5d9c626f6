//! Tree builder - assembles flat catalog rows into a rooted ownership tree

use std::collections::HashMap;

use crate::catalog::CatalogRow;
use crate::error::BuildError;

use super::node::Node;

/// Assemble an ordered sequence of flat catalog rows into a single rooted
/// tree.
///
/// Every row's parent must appear earlier in the sequence; child arrival
/// order is preserved as the initial sibling order. Any malformed input
/// aborts construction with a `BuildError` and no partial tree.
pub fn build(rows: impl IntoIterator<Item = CatalogRow>) -> Result<Node, BuildError> {
    // Flat arena keyed by arrival order. Children are stitched into their
    // parents afterwards, which sidesteps holding mutable borrows into a
    // partially built tree.
    let mut nodes: Vec<Option<Node>> = Vec::new();
    let mut parent_slots: Vec<Option<usize>> = Vec::new();
    let mut index: HashMap<_, usize> = HashMap::new();
    let mut root_slot: Option<usize> = None;

    for row in rows {
        if index.contains_key(&row.id) {
            return Err(BuildError::DuplicateObject {
                id: row.id,
                name: row.name,
            });
        }

        let parent_slot = match row.parent_id {
            Some(parent_id) => match index.get(&parent_id) {
                Some(&slot) => Some(slot),
                None => {
                    return Err(BuildError::DanglingReference {
                        id: row.id,
                        parent: parent_id,
                        name: row.name,
                    });
                }
            },
            None => {
                if root_slot.is_some() {
                    return Err(BuildError::MultipleRoots {
                        id: row.id,
                        name: row.name,
                    });
                }
                None
            }
        };

        let slot = nodes.len();
        index.insert(row.id, slot);
        if parent_slot.is_none() {
            root_slot = Some(slot);
        }
        parent_slots.push(parent_slot);
        nodes.push(Some(Node::from(row)));
    }

    let root_slot = root_slot.ok_or(BuildError::MissingRoot)?;

    // Parents always precede their children, so walking the arena in
    // reverse moves every child into its parent before the parent itself
    // moves. Children accumulate reversed and are flipped back when their
    // node is complete.
    for slot in (0..nodes.len()).rev() {
        let Some(parent_slot) = parent_slots[slot] else {
            continue;
        };
        if let Some(mut child) = nodes[slot].take() {
            child.children.reverse();
            if let Some(parent) = nodes[parent_slot].as_mut() {
                parent.children.push(child);
            }
        }
    }

    let mut root = nodes[root_slot].take().ok_or(BuildError::MissingRoot)?;
    root.children.reverse();
    Ok(root)
}
