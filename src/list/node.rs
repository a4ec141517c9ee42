//! Fixed-capacity nodes and the editing primitives that act on one node.
//!
//! A node owns `capacity` optional slots. Occupied slots are always packed
//! to the left: `data[..count]` is `Some`, `data[count..]` is `None`. None
//! of the primitives here know about the half-full rule; keeping it is the
//! list's job.

use smallvec::SmallVec;

/// Index into the node arena.
pub(crate) type NodeIdx = u32;
/// Sentinel value for no link.
pub(crate) const NONE: NodeIdx = u32::MAX;
/// Arena slot of the head sentinel.
pub(crate) const HEAD: NodeIdx = 0;
/// Arena slot of the tail sentinel.
pub(crate) const TAIL: NodeIdx = 1;

/// Elements moved between nodes in one split or merge.
pub(crate) type Moved<T> = SmallVec<[T; 8]>;

/// One link in the chain.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    /// Slot array. Sentinels have no slots.
    data: Box<[Option<T>]>,
    /// Number of occupied (leading) slots.
    count: usize,
    /// Previous node (NONE for the head sentinel or an unlinked node).
    pub(crate) prev: NodeIdx,
    /// Next node (NONE for the tail sentinel or an unlinked node).
    pub(crate) next: NodeIdx,
}

impl<T> Node<T> {
    /// Create an empty, unlinked data node.
    pub(crate) fn new(capacity: usize) -> Node<T> {
        return Node {
            data: (0..capacity).map(|_| None).collect(),
            count: 0,
            prev: NONE,
            next: NONE,
        };
    }

    /// Create a sentinel. Sentinels hold no data and never gain any.
    pub(crate) fn sentinel() -> Node<T> {
        return Node::new(0);
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        return self.count;
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        return self.count == 0;
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        return self.data.len();
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        return self.count >= self.data.len();
    }

    #[inline]
    pub(crate) fn get(&self, offset: usize) -> Option<&T> {
        return self.data.get(offset)?.as_ref();
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        return self.data.get_mut(offset)?.as_mut();
    }

    /// Raw view of every slot, occupied or not.
    pub(crate) fn slots(&self) -> &[Option<T>] {
        return &self.data;
    }

    /// Write `item` into the first free slot.
    ///
    /// Precondition: the node is not full.
    pub(crate) fn append(&mut self, item: T) {
        debug_assert!(!self.is_full(), "append to a full node");
        self.data[self.count] = Some(item);
        self.count += 1;
    }

    /// Insert `item` at `offset`, shifting `data[offset..count)` right by one.
    ///
    /// Precondition: `offset <= count < capacity`.
    pub(crate) fn insert_at(&mut self, offset: usize, item: T) {
        debug_assert!(!self.is_full(), "insert into a full node");
        debug_assert!(offset <= self.count, "insert offset past the occupied slots");
        // The free slot at `count` rotates down to `offset`.
        self.data[offset..=self.count].rotate_right(1);
        self.data[offset] = Some(item);
        self.count += 1;
    }

    /// Remove and return the element at `offset`, shifting the rest left.
    ///
    /// Precondition: `offset < count`.
    pub(crate) fn remove_at(&mut self, offset: usize) -> Option<T> {
        debug_assert!(offset < self.count, "remove offset past the occupied slots");
        let item = self.data[offset].take();
        // The emptied slot rotates up to the end of the occupied run.
        self.data[offset..self.count].rotate_left(1);
        self.count -= 1;
        return item;
    }

    /// Swap the element at `offset` for `item`, returning the old one.
    pub(crate) fn replace(&mut self, offset: usize, item: T) -> Option<T> {
        if offset >= self.count {
            return None;
        }
        return self.data[offset].replace(item);
    }

    /// Move every element from `offset` onwards out of this node.
    pub(crate) fn take_from(&mut self, offset: usize) -> Moved<T> {
        let mut moved = Moved::new();
        if offset >= self.count {
            return moved;
        }
        for slot in &mut self.data[offset..self.count] {
            if let Some(item) = slot.take() {
                moved.push(item);
            }
        }
        self.count = offset;
        return moved;
    }

    /// Drop any contents and clear both links so the node is unreachable.
    pub(crate) fn reset(&mut self) {
        for slot in &mut self.data[..self.count] {
            *slot = None;
        }
        self.count = 0;
        self.prev = NONE;
        self.next = NONE;
    }
}
