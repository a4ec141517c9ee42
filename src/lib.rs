//! Stout - a list of fixed-capacity nodes.
//!
//! Elements are packed into nodes of `node_size` slots that form a doubly
//! linked chain. Every node except the last stays at least half full, so
//! capacity waste is bounded while insertion and removal stay local to one
//! or two nodes.
//!
//! # Quick Start
//!
//! ```
//! use stout::StoutList;
//!
//! let mut list = StoutList::with_node_size(4).unwrap();
//! list.extend([5, 3, 8, 1, 9]);
//! list.insert(2, 7).unwrap();
//! assert_eq!(list.remove(0).unwrap(), 5);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 3, 7, 8, 9]);
//! assert_eq!(list.render(None), "[(1, 3, 7, 8), (9, -, -, -)]");
//!
//! let mut cursor = list.cursor_at(1).unwrap();
//! assert_eq!(cursor.next(), Ok(&3));
//! cursor.set(4).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 4, 7, 8, 9]);
//! ```

pub mod config;
pub mod error;
pub mod list;

pub use config::{DEFAULT_NODE_SIZE, ListConfig};
pub use error::{Result, StoutError};
pub use list::{CursorMut, InvariantError, Iter, StoutList};
