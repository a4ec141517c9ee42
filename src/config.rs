//! List configuration.

use crate::error::{Result, StoutError};

/// Node capacity used when none is given.
pub const DEFAULT_NODE_SIZE: usize = 4;

/// Construction parameters for a [`StoutList`](crate::StoutList).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Maximum elements per node. Must be positive and even so that
    /// "half full" is a whole number of elements.
    pub node_size: usize,
}

impl ListConfig {
    pub fn new(node_size: usize) -> ListConfig {
        ListConfig { node_size }
    }

    pub fn validate(&self) -> Result<()> {
        if self.node_size == 0 || self.node_size % 2 != 0 {
            return Err(StoutError::InvalidNodeSize(self.node_size));
        }
        Ok(())
    }

    /// Minimum occupancy of every node but the last.
    pub fn half(&self) -> usize {
        self.node_size / 2
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig::new(DEFAULT_NODE_SIZE)
    }
}
