//! Stout List
//!
//! A sequential list stored as a doubly linked chain of fixed-capacity nodes.
//! Each node packs up to `node_size` elements into a slot array, so the link
//! overhead is paid per node rather than per element.
//!
//! Structure:
//! - Nodes live in an arena (`Vec<Node<T>>`) and link to each other by index
//! - Arena slots 0 and 1 are the head and tail sentinels; they never hold data
//! - Unlinked nodes go on a free list and are reused by the next allocation
//!
//! Half-full rule: every data node except the last holds at least
//! `node_size / 2` elements, and no node holds more than `node_size`.
//!
//! Operations:
//! - insert: direct when the target node has room, otherwise split it in two
//! - remove: direct when the node is above the floor or last, otherwise
//!   borrow one element from the successor (mini-merge) or absorb the
//!   successor entirely (full merge)
//! - rebalancing only ever consults the successor, never the predecessor

mod cursor;
mod iter;
mod node;
mod render;
mod sort;
mod validate;

use std::fmt;

use tracing::{debug, trace};

use crate::config::ListConfig;
use crate::error::{Result, StoutError};
use node::{HEAD, Node, NodeIdx, TAIL};

pub use cursor::CursorMut;
pub use iter::Iter;
pub use validate::InvariantError;

/// A position in the chain.
///
/// A canonical location points at an occupied slot. The position after the
/// last element is `(TAIL, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Location {
    pub(crate) node: NodeIdx,
    pub(crate) offset: usize,
}

impl Location {
    pub(crate) const END: Location = Location { node: TAIL, offset: 0 };
}

/// How an insertion is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InsertPlan {
    /// The list is empty; create the first data node.
    FirstNode,
    /// The target node has a free slot.
    Direct,
    /// Target is full; split it and insert into the lower half.
    SplitLeft,
    /// Target is full; split it and insert into the new upper half.
    SplitRight,
}

/// How a removal is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RemovePlan {
    /// Node is above the floor, or last.
    Direct,
    /// Node is last and holds only the removed element.
    DeleteEmptyNode,
    /// Node is at the floor and its successor is above it: borrow one.
    MiniMerge,
    /// Node and successor are both at the floor: absorb the successor.
    FullMerge,
}

/// A list of elements packed into a chain of fixed-capacity nodes.
#[derive(Clone)]
pub struct StoutList<T> {
    /// Node arena. Indices 0 and 1 are the sentinels.
    nodes: Vec<Node<T>>,
    /// Unlinked nodes available for reuse.
    free_nodes: Vec<NodeIdx>,
    /// Capacity of every data node.
    node_size: usize,
    /// Total number of elements.
    len: usize,
}

impl<T> StoutList<T> {
    /// Create an empty list with the default node size.
    pub fn new() -> StoutList<T> {
        return StoutList::build(ListConfig::default());
    }

    /// Create an empty list whose nodes hold `node_size` elements.
    ///
    /// Fails if `node_size` is zero or odd.
    pub fn with_node_size(node_size: usize) -> Result<StoutList<T>> {
        return StoutList::with_config(ListConfig::new(node_size));
    }

    pub fn with_config(config: ListConfig) -> Result<StoutList<T>> {
        config.validate()?;
        return Ok(StoutList::build(config));
    }

    fn build(config: ListConfig) -> StoutList<T> {
        let mut nodes = vec![Node::sentinel(), Node::sentinel()];
        nodes[HEAD as usize].next = TAIL;
        nodes[TAIL as usize].prev = HEAD;
        debug!(node_size = config.node_size, "created stout list");
        return StoutList {
            nodes,
            free_nodes: Vec::new(),
            node_size: config.node_size,
            len: 0,
        };
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.len;
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline(always)]
    pub fn node_size(&self) -> usize {
        return self.node_size;
    }

    /// Minimum occupancy of every node but the last.
    #[inline(always)]
    fn half(&self) -> usize {
        return self.node_size / 2;
    }

    /// Number of data nodes in the chain.
    pub fn node_count(&self) -> usize {
        return self.node_occupancies().len();
    }

    /// Element count of each data node, front to back.
    pub fn node_occupancies(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        let mut idx = self.first_node();
        while idx != TAIL {
            let node = self.node(idx);
            counts.push(node.len());
            idx = node.next;
        }
        return counts;
    }

    // =========================================================================
    // Arena
    // =========================================================================

    #[inline(always)]
    pub(crate) fn node(&self, idx: NodeIdx) -> &Node<T> {
        return &self.nodes[idx as usize];
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<T> {
        return &mut self.nodes[idx as usize];
    }

    /// First data node, or TAIL when empty.
    #[inline(always)]
    pub(crate) fn first_node(&self) -> NodeIdx {
        return self.node(HEAD).next;
    }

    /// Last data node, or HEAD when empty.
    #[inline(always)]
    pub(crate) fn last_node(&self) -> NodeIdx {
        return self.node(TAIL).prev;
    }

    /// Allocate an empty, unlinked node, reusing from the free list if available.
    fn alloc_node(&mut self) -> NodeIdx {
        if let Some(idx) = self.free_nodes.pop() {
            return idx;
        }
        let idx = self.nodes.len() as NodeIdx;
        self.nodes.push(Node::new(self.node_size));
        return idx;
    }

    /// Splice the unlinked node `idx` into the chain right after `prev`.
    fn link_after(&mut self, prev: NodeIdx, idx: NodeIdx) {
        let next = self.node(prev).next;
        let node = self.node_mut(idx);
        node.prev = prev;
        node.next = next;
        self.node_mut(prev).next = idx;
        self.node_mut(next).prev = idx;
    }

    /// Splice `idx` out of the chain, clear its links and recycle it.
    fn unlink(&mut self, idx: NodeIdx) {
        let node = self.node(idx);
        let (prev, next) = (node.prev, node.next);
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        self.node_mut(idx).reset();
        self.free_nodes.push(idx);
        trace!(node = idx, "unlinked node");
    }

    // =========================================================================
    // Locations
    // =========================================================================

    /// Find the location of global position `pos` by walking node occupancies
    /// from the front. A position on a node boundary belongs to the start of
    /// the following node; `pos >= len` is the end location.
    pub(crate) fn locate(&self, pos: usize) -> Location {
        if pos >= self.len {
            return Location::END;
        }
        let mut idx = self.first_node();
        let mut remaining = pos;
        loop {
            debug_assert!(idx != TAIL, "walked off the end of the chain");
            let node = self.node(idx);
            if remaining < node.len() {
                return Location { node: idx, offset: remaining };
            }
            remaining -= node.len();
            idx = node.next;
        }
    }

    /// Move a location that sits just past its node's last element onto the
    /// first slot of the next node.
    pub(crate) fn normalize(&self, at: Location) -> Location {
        if at.node != TAIL && at.offset >= self.node(at.node).len() {
            return Location { node: self.node(at.node).next, offset: 0 };
        }
        return at;
    }

    /// Location of the element after `at`.
    pub(crate) fn advance(&self, at: Location) -> Location {
        return self.normalize(Location { node: at.node, offset: at.offset + 1 });
    }

    /// Location of the element before `at`. Crossing back into the previous
    /// node lands on its last occupied slot.
    pub(crate) fn retreat(&self, at: Location) -> Location {
        if at.offset > 0 {
            return Location { node: at.node, offset: at.offset - 1 };
        }
        let prev = self.node(at.node).prev;
        return Location {
            node: prev,
            offset: self.node(prev).len().saturating_sub(1),
        };
    }

    /// Element at a canonical location.
    #[inline]
    pub(crate) fn element(&self, at: Location) -> Option<&T> {
        return self.node(at.node).get(at.offset);
    }

    // =========================================================================
    // Rebalancing engine
    // =========================================================================

    /// Move the upper half of the full node `idx` into a new successor.
    /// Returns the successor.
    fn split_node(&mut self, idx: NodeIdx) -> NodeIdx {
        let half = self.half();
        let upper = self.node_mut(idx).take_from(half);
        let right = self.alloc_node();
        for item in upper {
            self.node_mut(right).append(item);
        }
        self.link_after(idx, right);
        trace!(node = idx, successor = right, "split full node");
        return right;
    }

    /// Insert `item` before the element at `at` (or at the end for the end
    /// location). Returns the location of the inserted element.
    pub(crate) fn insert_at_location(&mut self, at: Location, item: T) -> Location {
        let (target, offset) = if at.node == TAIL {
            let last = self.last_node();
            (last, self.node(last).len())
        } else {
            (at.node, at.offset)
        };

        let half = self.half();
        let plan = if target == HEAD {
            InsertPlan::FirstNode
        } else if !self.node(target).is_full() {
            InsertPlan::Direct
        } else if offset <= half {
            InsertPlan::SplitLeft
        } else {
            InsertPlan::SplitRight
        };

        let inserted = match plan {
            InsertPlan::FirstNode => {
                let idx = self.alloc_node();
                self.link_after(HEAD, idx);
                self.node_mut(idx).append(item);
                Location { node: idx, offset: 0 }
            }
            InsertPlan::Direct => {
                self.node_mut(target).insert_at(offset, item);
                Location { node: target, offset }
            }
            InsertPlan::SplitLeft => {
                self.split_node(target);
                self.node_mut(target).insert_at(offset, item);
                Location { node: target, offset }
            }
            InsertPlan::SplitRight => {
                let right = self.split_node(target);
                let offset = offset - half;
                self.node_mut(right).insert_at(offset, item);
                Location { node: right, offset }
            }
        };

        self.len += 1;
        return inserted;
    }

    /// Remove the element at `at`, rebalancing against the successor node.
    ///
    /// Returns the element and the location of the element that now occupies
    /// its position (the end location if it was the last element). Returns
    /// `None` without touching the list if `at` is not an occupied slot.
    pub(crate) fn remove_at_location(&mut self, at: Location) -> Option<(T, Location)> {
        let (idx, offset) = (at.node, at.offset);
        if idx == HEAD || idx == TAIL || offset >= self.node(idx).len() {
            return None;
        }

        let half = self.half();
        let count = self.node(idx).len();
        let next = self.node(idx).next;
        let plan = if next == TAIL && count == 1 {
            RemovePlan::DeleteEmptyNode
        } else if next == TAIL || count > half {
            RemovePlan::Direct
        } else if self.node(next).len() > half {
            RemovePlan::MiniMerge
        } else {
            RemovePlan::FullMerge
        };

        let item = self.node_mut(idx).remove_at(offset)?;
        let follow = match plan {
            RemovePlan::Direct => self.normalize(Location { node: idx, offset }),
            RemovePlan::DeleteEmptyNode => {
                self.unlink(idx);
                Location::END
            }
            RemovePlan::MiniMerge => {
                if let Some(borrowed) = self.node_mut(next).remove_at(0) {
                    self.node_mut(idx).append(borrowed);
                }
                trace!(node = idx, successor = next, "borrowed from successor");
                Location { node: idx, offset }
            }
            RemovePlan::FullMerge => {
                let absorbed = self.node_mut(next).take_from(0);
                for moved in absorbed {
                    self.node_mut(idx).append(moved);
                }
                self.unlink(next);
                trace!(node = idx, successor = next, "merged successor");
                Location { node: idx, offset }
            }
        };

        self.len -= 1;
        return Some((item, follow));
    }

    /// Unlink every node front to back, collecting the elements in order.
    pub(crate) fn drain_forward(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        let mut idx = self.first_node();
        while idx != TAIL {
            let next = self.node(idx).next;
            items.extend(self.node_mut(idx).take_from(0));
            self.unlink(idx);
            idx = next;
        }
        self.len = 0;
        return items;
    }

    // =========================================================================
    // Public operations
    // =========================================================================

    /// Append `item` at the end. A full last node is left as it is and a new
    /// node is started, so repeated appends pack every node densely.
    pub fn push_back(&mut self, item: T) {
        let last = self.last_node();
        let target = if last == HEAD || self.node(last).is_full() {
            let idx = self.alloc_node();
            self.link_after(last, idx);
            idx
        } else {
            last
        };
        self.node_mut(target).append(item);
        self.len += 1;
    }

    /// Insert `item` so that it ends up at position `pos`.
    pub fn insert(&mut self, pos: usize, item: T) -> Result<()> {
        if pos > self.len {
            return Err(StoutError::IndexOutOfRange { pos, len: self.len });
        }
        let at = self.locate(pos);
        self.insert_at_location(at, item);
        return Ok(());
    }

    /// Remove and return the element at `pos`.
    pub fn remove(&mut self, pos: usize) -> Result<T> {
        let len = self.len;
        if pos >= len {
            return Err(StoutError::IndexOutOfRange { pos, len });
        }
        let at = self.locate(pos);
        let (item, _) = self
            .remove_at_location(at)
            .ok_or(StoutError::IndexOutOfRange { pos, len })?;
        return Ok(item);
    }

    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos >= self.len {
            return None;
        }
        return self.element(self.locate(pos));
    }

    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        if pos >= self.len {
            return None;
        }
        let at = self.locate(pos);
        return self.node_mut(at.node).get_mut(at.offset);
    }

    /// Replace the element at `pos`, returning the old one.
    pub fn set(&mut self, pos: usize, item: T) -> Result<T> {
        let len = self.len;
        if pos >= len {
            return Err(StoutError::IndexOutOfRange { pos, len });
        }
        let at = self.locate(pos);
        return self
            .node_mut(at.node)
            .replace(at.offset, item)
            .ok_or(StoutError::IndexOutOfRange { pos, len });
    }

    pub fn first(&self) -> Option<&T> {
        return self.node(self.first_node()).get(0);
    }

    pub fn last(&self) -> Option<&T> {
        let last = self.node(self.last_node());
        return last.get(last.len().checked_sub(1)?);
    }

    /// Remove every element, dropping all data nodes.
    pub fn clear(&mut self) {
        self.nodes.truncate(2);
        self.free_nodes.clear();
        self.nodes[HEAD as usize].next = TAIL;
        self.nodes[TAIL as usize].prev = HEAD;
        self.len = 0;
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        return self.iter().any(|candidate| candidate == item);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        return Iter::new(self);
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        return self.iter().cloned().collect();
    }

    /// A cursor before the first element.
    pub fn cursor_front(&mut self) -> CursorMut<'_, T> {
        return CursorMut::new(self, 0);
    }

    /// A cursor whose `next` returns the element at `pos`.
    /// `pos == len` places it after the last element.
    pub fn cursor_at(&mut self, pos: usize) -> Result<CursorMut<'_, T>> {
        if pos > self.len {
            return Err(StoutError::IndexOutOfRange { pos, len: self.len });
        }
        return Ok(CursorMut::new(self, pos));
    }

    /// Build a chain from explicit node contents, without checking the
    /// half-full rule. Lets tests reach shapes the public API never produces.
    #[cfg(test)]
    pub(crate) fn from_chunks_unchecked(node_size: usize, chunks: &[&[T]]) -> StoutList<T>
    where
        T: Clone,
    {
        let mut list = StoutList::build(ListConfig::new(node_size));
        for chunk in chunks {
            let idx = list.alloc_node();
            list.link_after(list.last_node(), idx);
            for item in chunk.iter() {
                list.node_mut(idx).append(item.clone());
            }
            list.len += chunk.len();
        }
        return list;
    }
}

impl<T> Default for StoutList<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: fmt::Debug> fmt::Debug for StoutList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

/// Lists are equal when they hold equal elements in the same order,
/// regardless of node size or how elements are spread over nodes.
impl<T: PartialEq> PartialEq for StoutList<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.len == other.len && self.iter().eq(other.iter());
    }
}

impl<T: Eq> Eq for StoutList<T> {}

impl<T> Extend<T> for StoutList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for StoutList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = StoutList::new();
        list.extend(iter);
        return list;
    }
}

impl<'a, T> IntoIterator for &'a StoutList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<T> IntoIterator for StoutList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        return self.drain_forward().into_iter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use node::NONE;

    fn list_of(node_size: usize, items: impl IntoIterator<Item = u32>) -> StoutList<u32> {
        let mut list = StoutList::with_node_size(node_size).unwrap();
        list.extend(items);
        return list;
    }

    #[test]
    fn empty_list() {
        let list: StoutList<u32> = StoutList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.node_size(), 4);
        assert_eq!(list.node_count(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
        assert_eq!(list.render(None), "[]");
    }

    #[test]
    fn rejects_invalid_node_sizes() {
        assert_eq!(
            StoutList::<u32>::with_node_size(0).unwrap_err(),
            StoutError::InvalidNodeSize(0)
        );
        assert_eq!(
            StoutList::<u32>::with_node_size(3).unwrap_err(),
            StoutError::InvalidNodeSize(3)
        );
        assert!(StoutList::<u32>::with_node_size(2).is_ok());
    }

    #[test]
    fn push_back_packs_nodes() {
        let list = list_of(4, 1..=10);
        assert_eq!(list.node_occupancies(), vec![4, 4, 2]);
        assert_eq!(list.to_vec(), (1..=10).collect::<Vec<_>>());
        assert_eq!(list.render(None), "[(1, 2, 3, 4), (5, 6, 7, 8), (9, 10, -, -)]");
    }

    #[test]
    fn insert_into_empty_list_creates_first_node() {
        let mut list = list_of(4, std::iter::empty());
        list.insert(0, 7).unwrap();
        assert_eq!(list.render(None), "[(7, -, -, -)]");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn insert_with_room_shifts_within_node() {
        let mut list = list_of(4, [1, 3]);
        list.insert(1, 2).unwrap();
        assert_eq!(list.render(None), "[(1, 2, 3, -)]");
    }

    #[test]
    fn split_left_when_offset_at_most_half() {
        let mut list = list_of(4, [1, 2, 3, 4]);
        list.insert(1, 9).unwrap();
        assert_eq!(list.render(None), "[(1, 9, 2, -), (3, 4, -, -)]");

        let mut list = list_of(4, [1, 2, 3, 4]);
        list.insert(2, 9).unwrap();
        assert_eq!(list.render(None), "[(1, 2, 9, -), (3, 4, -, -)]");
    }

    #[test]
    fn split_right_when_offset_past_half() {
        let mut list = list_of(4, [1, 2, 3, 4]);
        list.insert(3, 9).unwrap();
        assert_eq!(list.render(None), "[(1, 2, -, -), (3, 9, 4, -)]");
    }

    #[test]
    fn insert_at_end_of_full_last_node_splits() {
        let mut list = list_of(4, [1, 2, 3, 4]);
        list.insert(4, 5).unwrap();
        assert_eq!(list.render(None), "[(1, 2, -, -), (3, 4, 5, -)]");
    }

    #[test]
    fn insert_on_node_boundary_targets_next_node() {
        // [1, 2, 3] [4, 5]: position 3 is the start of the second node.
        let mut list = StoutList::from_chunks_unchecked(4, &[&[1, 2, 3], &[4, 5]]);
        list.insert(3, 9).unwrap();
        assert_eq!(list.render(None), "[(1, 2, 3, -), (9, 4, 5, -)]");
    }

    #[test]
    fn insert_out_of_range_leaves_list_untouched() {
        let mut list = list_of(4, [1, 2]);
        assert_eq!(
            list.insert(3, 9),
            Err(StoutError::IndexOutOfRange { pos: 3, len: 2 })
        );
        assert_eq!(list.render(None), "[(1, 2, -, -)]");
    }

    #[test]
    fn remove_direct_above_floor() {
        let mut list = list_of(4, 1..=6);
        assert_eq!(list.remove(1).unwrap(), 2);
        assert_eq!(list.render(None), "[(1, 3, 4, -), (5, 6, -, -)]");
    }

    #[test]
    fn remove_from_last_node_ignores_floor() {
        let mut list = list_of(4, 1..=6);
        assert_eq!(list.remove(5).unwrap(), 6);
        assert_eq!(list.remove(4).unwrap(), 5);
        assert_eq!(list.render(None), "[(1, 2, 3, 4)]");
    }

    #[test]
    fn remove_last_element_unlinks_node() {
        let mut list = list_of(4, [1]);
        assert_eq!(list.remove(0).unwrap(), 1);
        assert!(list.is_empty());
        assert_eq!(list.node_count(), 0);
        assert_eq!(list.first_node(), TAIL);
        assert_eq!(list.last_node(), HEAD);
    }

    #[test]
    fn mini_merge_borrows_one_element() {
        let mut list = list_of(4, [1, 2, 3, 4]);
        list.insert(4, 5).unwrap();
        assert_eq!(list.render(None), "[(1, 2, -, -), (3, 4, 5, -)]");

        assert_eq!(list.remove(0).unwrap(), 1);
        assert_eq!(list.render(None), "[(2, 3, -, -), (4, 5, -, -)]");
    }

    #[test]
    fn full_merge_absorbs_successor() {
        let mut list = StoutList::from_chunks_unchecked(4, &[&[1, 2], &[3, 4]]);
        let successor = list.node(list.first_node()).next;

        assert_eq!(list.remove(0).unwrap(), 1);
        assert_eq!(list.render(None), "[(2, 3, 4, -)]");
        assert_eq!(list.node_count(), 1);

        let absorbed = list.node(successor);
        assert_eq!(absorbed.prev, NONE);
        assert_eq!(absorbed.next, NONE);
        assert!(absorbed.is_empty());
    }

    #[test]
    fn full_merge_location_follows_removed_element() {
        let mut list = StoutList::from_chunks_unchecked(4, &[&[1, 2], &[3, 4], &[5]]);
        let at = list.locate(1);
        let (item, follow) = list.remove_at_location(at).unwrap();
        assert_eq!(item, 2);
        assert_eq!(list.element(follow), Some(&3));
        assert_eq!(list.render(None), "[(1, 3, 4, -), (5, -, -, -)]");
    }

    #[test]
    fn rebalancing_never_repairs_predecessor() {
        // Three underfull nodes: only the successor of the touched node is
        // consulted, so the remaining first node stays under the floor.
        let mut list = StoutList::from_chunks_unchecked(4, &[&[1], &[2], &[3]]);
        assert_eq!(list.remove(0).unwrap(), 1);
        assert_eq!(list.render(None), "[(2, -, -, -), (3, -, -, -)]");
        assert!(list.check_invariants().is_err());
    }

    #[test]
    fn unlinked_nodes_are_reused() {
        let mut list = list_of(4, [1, 2, 3, 4]);
        list.insert(4, 5).unwrap();
        list.remove(4).unwrap();
        list.remove(0).unwrap();
        let arena_len = list.nodes.len();
        assert_eq!(list.free_nodes.len(), 1);

        list.extend([6, 7]);
        assert_eq!(list.nodes.len(), arena_len);
        assert!(list.free_nodes.is_empty());
        assert_eq!(list.to_vec(), vec![2, 3, 4, 6, 7]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut list = list_of(4, [1, 2]);
        assert_eq!(list.remove(2), Err(StoutError::IndexOutOfRange { pos: 2, len: 2 }));
        let mut empty = list_of(4, std::iter::empty());
        assert_eq!(empty.remove(0), Err(StoutError::IndexOutOfRange { pos: 0, len: 0 }));
    }

    #[test]
    fn get_set_first_last() {
        let mut list = list_of(4, 1..=6);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(4), Some(&5));
        assert_eq!(list.get(6), None);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&6));

        assert_eq!(list.set(4, 50), Ok(5));
        assert_eq!(list.set(6, 0), Err(StoutError::IndexOutOfRange { pos: 6, len: 6 }));
        *list.get_mut(0).unwrap() = 10;
        assert_eq!(list.to_vec(), vec![10, 2, 3, 4, 50, 6]);
    }

    #[test]
    fn clear_resets_chain() {
        let mut list = list_of(4, 1..=9);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.render(None), "[]");
        list.push_back(1);
        assert_eq!(list.render(None), "[(1, -, -, -)]");
    }

    #[test]
    fn equality_ignores_node_layout() {
        let packed = list_of(4, 1..=5);
        let mut split = list_of(4, [1, 2, 3, 4]);
        split.insert(4, 5).unwrap();
        assert_ne!(packed.node_occupancies(), split.node_occupancies());
        assert_eq!(packed, split);
        assert_ne!(packed, list_of(2, 1..=4));
    }

    #[test]
    fn collect_debug_and_into_iter() {
        let list: StoutList<u32> = (1..=5).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3, 4, 5]");
        assert!(list.contains(&3));
        assert!(!list.contains(&9));

        let cloned = list.clone();
        let owned: Vec<u32> = list.into_iter().collect();
        assert_eq!(owned, cloned.to_vec());
    }
}
