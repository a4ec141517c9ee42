//! Bidirectional editing cursor.
//!
//! A cursor rests between two elements. Its position runs from `0` (before
//! the first element) to `len` (after the last). Alongside the position it
//! caches the location of the element `next` would return, so stepping
//! across node boundaries never re-walks the chain.
//!
//! The cursor holds the list mutably, so no other cursor or direct list call
//! can restructure the chain under it.

use std::fmt;

use super::{Location, StoutList};
use crate::error::{Result, StoutError};

/// Whether an element is available to `set`/`remove`, and on which side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    /// Nothing returned since the last edit.
    Consumed,
    /// `next` returned the element just before the cursor.
    FromNext,
    /// `previous` returned the element just after the cursor.
    FromPrevious,
}

/// A cursor over a [`StoutList`] that can move both ways and edit in place.
pub struct CursorMut<'a, T> {
    list: &'a mut StoutList<T>,
    /// Location of the element `next` would return (END after the last).
    at: Location,
    /// Position `next` would return.
    pos: usize,
    pending: Pending,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut StoutList<T>, pos: usize) -> CursorMut<'a, T> {
        let at = list.locate(pos);
        return CursorMut {
            list,
            at,
            pos,
            pending: Pending::Consumed,
        };
    }

    pub fn has_next(&self) -> bool {
        return self.pos < self.list.len();
    }

    pub fn has_previous(&self) -> bool {
        return self.pos > 0;
    }

    /// Position of the element `next` would return.
    pub fn next_index(&self) -> usize {
        return self.pos;
    }

    /// Position of the element `previous` would return, `None` at the start.
    pub fn previous_index(&self) -> Option<usize> {
        return self.pos.checked_sub(1);
    }

    /// Step forward over one element and return it.
    pub fn next(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(StoutError::Exhausted);
        }
        let current = self.at;
        self.at = self.list.advance(current);
        self.pos += 1;
        self.pending = Pending::FromNext;
        return self.list.element(current).ok_or(StoutError::Exhausted);
    }

    /// Step back over one element and return it.
    pub fn previous(&mut self) -> Result<&T> {
        if !self.has_previous() {
            return Err(StoutError::Exhausted);
        }
        self.at = self.list.retreat(self.at);
        self.pos -= 1;
        self.pending = Pending::FromPrevious;
        return self.list.element(self.at).ok_or(StoutError::Exhausted);
    }

    pub fn peek_next(&self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        return self.list.element(self.at);
    }

    pub fn peek_previous(&self) -> Option<&T> {
        if !self.has_previous() {
            return None;
        }
        return self.list.element(self.list.retreat(self.at));
    }

    /// Location and position of the element last returned by `next` or
    /// `previous`, if it is still available for editing.
    fn pending_element(&self) -> Result<(Location, usize)> {
        return match self.pending {
            Pending::Consumed => Err(StoutError::NoPendingElement),
            Pending::FromNext => Ok((self.list.retreat(self.at), self.pos - 1)),
            Pending::FromPrevious => Ok((self.at, self.pos)),
        };
    }

    /// Replace the element last returned by `next`/`previous`, returning the
    /// old one. Allowed once per move.
    pub fn set(&mut self, item: T) -> Result<T> {
        let (target, _) = self.pending_element()?;
        let old = self
            .list
            .node_mut(target.node)
            .replace(target.offset, item)
            .ok_or(StoutError::NoPendingElement)?;
        self.pending = Pending::Consumed;
        return Ok(old);
    }

    /// Remove the element last returned by `next`/`previous`. Allowed once
    /// per move.
    pub fn remove(&mut self) -> Result<T> {
        let (target, target_pos) = self.pending_element()?;
        let (item, follow) = self
            .list
            .remove_at_location(target)
            .ok_or(StoutError::NoPendingElement)?;
        // The element after the removed one now occupies its position.
        self.at = follow;
        self.pos = target_pos;
        self.pending = Pending::Consumed;
        return Ok(item);
    }

    /// Insert `item` just before the element `next` would return. That
    /// element is still the one `next` returns afterwards.
    pub fn insert(&mut self, item: T) {
        let inserted = self.list.insert_at_location(self.at, item);
        self.at = self.list.advance(inserted);
        self.pos += 1;
        self.pending = Pending::Consumed;
    }

    /// The list this cursor edits.
    pub fn as_list(&self) -> &StoutList<T> {
        return self.list;
    }

    /// Render the list's nodes with this cursor's position marked.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        return self.list.render(Some(self.pos));
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("pending", &self.pending)
            .field("list", &self.list)
            .finish();
    }
}
