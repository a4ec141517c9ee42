//! Borrowing iterator over a [`StoutList`].

use std::iter::FusedIterator;

use super::{Location, StoutList};

/// Double-ended iterator over shared references to the elements.
pub struct Iter<'a, T> {
    list: &'a StoutList<T>,
    /// Location of the next element from the front.
    front: Location,
    /// Location just past the next element from the back.
    back: Location,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a StoutList<T>) -> Iter<'a, T> {
        Iter {
            list,
            front: list.locate(0),
            back: Location::END,
            remaining: list.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let item = list.element(self.front)?;
        self.front = list.advance(self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        self.back = list.retreat(self.back);
        self.remaining -= 1;
        list.element(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_backward() {
        let list: StoutList<u32> = (0..11).collect();
        let forward: Vec<_> = list.iter().copied().collect();
        let mut backward: Vec<_> = list.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, (0..11).collect::<Vec<_>>());
        assert_eq!(backward, forward);
    }

    #[test]
    fn meeting_in_the_middle() {
        let list: StoutList<u32> = (0..6).collect();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list: StoutList<u32> = StoutList::new();
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
    }
}
