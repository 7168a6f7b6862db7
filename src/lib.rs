//! A doubly linked list addressed from its ends, with a detached cursor.
//!
//! `O(1)` at the ends, `O(n)` anywhere else — textbook bounds, no tuning.
//! Fallible operations report a [`ListError`]; search misses are `None`.
//! Cursors are plain position tokens: they never borrow the list, survive
//! going off the end, and restart from the front when advanced past it.
//!
//! ## Example
//!
//! ```rust
//! use dlist::DList;
//!
//! let mut list = DList::new();
//!
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(-1);
//!
//! assert_eq!(list.to_string(), "[-1, 1, 2, 3]");
//! assert_eq!(list.len(), 4);
//!
//! assert_eq!(list.get(2), Ok(&2));
//! assert_eq!(list.index_of(&3), Some(3));
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.value(&list), Ok(&-1));
//!
//! assert!(cursor.advance(&list));
//! cursor.assign(&mut list, 9).unwrap();
//! assert_eq!(list.to_string(), "[-1, 9, 2, 3]");
//!
//! assert_eq!(list.remove_current(&mut cursor), Ok(9));
//! assert_eq!(list.pop_back(), Ok(3));
//!
//! assert_eq!(list.to_string(), "[-1, 2]");
//! ```

#![allow(forbidden_lint_groups)]
#![forbid(clippy::all)]
#![allow(clippy::option_map_unit_fn)]

mod cursor;
mod error;
mod list;

pub use cursor::Cursor;
pub use error::ListError;
pub use list::{DList, IntoIter, Iter, IterMut};
