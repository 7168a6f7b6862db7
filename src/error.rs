use std::error::Error;
use std::fmt;

/// Everything that can go wrong on the list surface.
/// Search misses are not errors; `index_of` and friends report them as `None`.
///
/// ```
/// # use dlist::{DList, ListError};
/// let list: DList<u8> = DList::new();
/// assert_eq!(list.front(), Err(ListError::NoSuchElement));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
	/// A read or removal found no element to act on.
	NoSuchElement,
	/// An indexed operation landed past the end of the list.
	IndexOutOfBounds,
	/// A cursor-relative mutation ran while the cursor was off the end.
	IllegalAction,
}

impl fmt::Display for ListError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(match self {
			Self::NoSuchElement    => "no such element",
			Self::IndexOutOfBounds => "index out of bounds",
			Self::IllegalAction    => "illegal cursor action",
		})
	}
}

impl Error for ListError {}
