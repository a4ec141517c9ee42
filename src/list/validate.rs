//! Structural validation.
//!
//! Walks the chain once and reports the first broken rule. Used by tests
//! after every operation; cheap enough to call from debugging code too.

use thiserror::Error;

use super::StoutList;
use super::node::{HEAD, TAIL};

/// A violated structural rule. `node` is the node's ordinal in the chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("node {node} holds {count} elements, capacity is {capacity}")]
    NodeOverfull { node: usize, count: usize, capacity: usize },
    #[error("node {node} holds {count} elements, below the floor of {floor}")]
    NodeUnderfull { node: usize, count: usize, floor: usize },
    #[error("node {node} is linked but empty")]
    EmptyNode { node: usize },
    #[error("node {node} has occupied slots after an empty one")]
    SlotsNotPacked { node: usize },
    #[error("broken link at node {node}")]
    BrokenLink { node: usize },
    #[error("list records {recorded} elements but its nodes hold {actual}")]
    LengthMismatch { recorded: usize, actual: usize },
}

impl<T> StoutList<T> {
    /// Check the chain links, slot packing, node occupancy bounds and the
    /// element count.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let floor = self.half();
        let mut actual = 0usize;
        let mut ordinal = 0usize;
        let mut prev = HEAD;
        let mut idx = self.first_node();

        while idx != TAIL {
            // A chain longer than the arena must loop.
            if ordinal >= self.nodes.len() || idx as usize >= self.nodes.len() {
                return Err(InvariantError::BrokenLink { node: ordinal });
            }
            let node = self.node(idx);
            if node.prev != prev {
                return Err(InvariantError::BrokenLink { node: ordinal });
            }

            let count = node.len();
            let slots = node.slots();
            if slots.len() != self.node_size || count > self.node_size {
                return Err(InvariantError::NodeOverfull {
                    node: ordinal,
                    count,
                    capacity: self.node_size,
                });
            }
            if count == 0 {
                return Err(InvariantError::EmptyNode { node: ordinal });
            }
            let packed = slots[..count].iter().all(Option::is_some)
                && slots[count..].iter().all(Option::is_none);
            if !packed {
                return Err(InvariantError::SlotsNotPacked { node: ordinal });
            }
            if node.next != TAIL && count < floor {
                return Err(InvariantError::NodeUnderfull { node: ordinal, count, floor });
            }

            actual += count;
            ordinal += 1;
            prev = idx;
            idx = node.next;
        }

        if self.last_node() != prev {
            return Err(InvariantError::BrokenLink { node: ordinal });
        }
        if actual != self.len {
            return Err(InvariantError::LengthMismatch { recorded: self.len, actual });
        }
        Ok(())
    }
}
