//! Whole-list sorts.
//!
//! Both sorts drain the chain into a buffer (unlinking each node as it is
//! visited), order the buffer, and rebuild by appending, which leaves every
//! node but the last completely full. Ascending order uses insertion sort;
//! descending order uses bubble sort.

use std::cmp::Ordering;

use tracing::debug;

use super::StoutList;

impl<T> StoutList<T> {
    /// Sort into non-decreasing order under `compare`. Stable.
    pub fn sort_ascending<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.drain_forward();
        insertion_sort(&mut items, compare);
        self.rebuild(items);
    }

    /// Sort into non-increasing order under the natural ordering.
    pub fn sort_descending(&mut self)
    where
        T: Ord,
    {
        let mut items = self.drain_forward();
        bubble_sort_descending(&mut items);
        self.rebuild(items);
    }

    /// Sort into non-decreasing order under the natural ordering.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_ascending(T::cmp);
    }

    fn rebuild(&mut self, items: Vec<T>) {
        let count = items.len();
        for item in items {
            self.push_back(item);
        }
        debug!(elements = count, nodes = self.node_count(), "rebuilt list after sort");
    }
}

/// Stable insertion sort.
fn insertion_sort<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Bubble sort into non-increasing order. Stops early once a pass makes no swap.
fn bubble_sort_descending<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if items[j] < items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
