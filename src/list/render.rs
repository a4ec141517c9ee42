use std::fmt::{self, Write};

use super::StoutList;
use super::node::TAIL;

impl<T: fmt::Display> StoutList<T> {
    /// Render the internal node structure, e.g. `[(1, 2, -, -), (3, -, -, -)]`.
    ///
    /// Empty slots render as `-`. With `cursor = Some(pos)`, a `| ` marker
    /// precedes the element at `pos`, or ` |` follows the last element when
    /// `pos` is the length.
    pub fn render(&self, cursor: Option<usize>) -> String {
        let mut out = String::from("[");
        let mut seen = 0usize;
        let mut idx = self.first_node();
        while idx != TAIL {
            if idx != self.first_node() {
                out.push_str(", ");
            }
            out.push('(');
            let node = self.node(idx);
            for (slot, item) in node.slots().iter().enumerate() {
                if slot > 0 {
                    out.push_str(", ");
                }
                let Some(item) = item else {
                    out.push('-');
                    continue;
                };
                if cursor == Some(seen) {
                    out.push_str("| ");
                }
                // Writing into a String cannot fail.
                let _ = write!(out, "{item}");
                seen += 1;
                if cursor == Some(self.len) && seen == self.len {
                    out.push_str(" |");
                }
            }
            out.push(')');
            idx = node.next;
        }
        out.push(']');
        return out;
    }
}
