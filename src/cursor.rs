use crate::error::ListError;
use crate::list::DList;

/// A detached cursor over a [`DList`].
///
/// The cursor is a bare position token; it never borrows the list it came
/// from, so any number of them can exist at once and the list stays free to
/// hand out `&mut` access. Every operation takes the list as an argument.
/// A position that no longer exists (the list shrank underneath it) degrades
/// to an error, never to a dangling read.
///
/// Walking off the end parks the cursor rather than killing it: `advance`
/// resumes after the last visited element if the list has grown, and wraps
/// back to the front otherwise.
/// ```
/// # use dlist::DList;
/// let list = DList::from(vec![1, 2, 3]);
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.value(&list), Ok(&1));
/// assert!(cursor.advance(&list));
/// assert_eq!(cursor.value(&list), Ok(&2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Cursor {
	pub(crate) current:  Option<usize>,
	pub(crate) previous: Option<usize>,
}

impl Cursor {
	/// Reset the cursor to the first element. `O(1)`.
	/// Returns whether the list has one.
	/// ```
	/// # use dlist::DList;
	/// let list = DList::from(vec![1, 2]);
	/// let mut cursor = list.cursor();
	///
	/// assert!(cursor.advance(&list));
	/// assert!(cursor.begin(&list));
	/// assert_eq!(cursor.value(&list), Ok(&1));
	/// ```
	#[inline]
	pub fn begin<T>(&mut self, list: &DList<T>) -> bool {
		self.previous = None;
		self.current  = (!list.is_empty()).then_some(0);
		self.current.is_some()
	}

	/// Check whether the cursor has walked past the last element. `O(1)`.
	/// An off-the-end cursor first tries to re-derive its position from the
	/// element it last visited, so a list that has grown at the back since
	/// counts as not-at-end.
	/// ```
	/// # use dlist::DList;
	/// let mut list = DList::from(vec![1]);
	/// let mut cursor = list.cursor();
	///
	/// assert!(!cursor.at_end(&list));
	/// assert!(!cursor.advance(&list));
	/// assert!(cursor.at_end(&list));
	///
	/// list.push_back(2);
	/// assert!(!cursor.at_end(&list));
	/// assert_eq!(cursor.value(&list), Ok(&2));
	/// ```
	pub fn at_end<T>(&mut self, list: &DList<T>) -> bool {
		if let (None, Some(prev)) = (self.current, self.previous) {
			self.current = (prev + 1 < list.len()).then_some(prev + 1);
		}
		self.current.is_none()
	}

	/// Step the cursor forward one element. `O(1)`.
	/// Returns whether an element is reachable afterwards.
	///
	/// From off the end the cursor resumes after the element it last visited
	/// when the list has grown there, and otherwise restarts from the front,
	/// so exhausting the list and advancing again walks it from the top.
	/// ```
	/// # use dlist::DList;
	/// let list = DList::from(vec![1, 2]);
	/// let mut cursor = list.cursor();
	///
	/// assert!(cursor.advance(&list));
	/// assert_eq!(cursor.value(&list), Ok(&2));
	///
	/// assert!(!cursor.advance(&list));
	/// assert!(cursor.advance(&list));
	/// assert_eq!(cursor.value(&list), Ok(&1));
	/// ```
	#[must_use]
	pub fn advance<T>(&mut self, list: &DList<T>) -> bool {
		match self.current {
			Some(index) => {
				self.previous = Some(index);
				self.current  = (index + 1 < list.len()).then_some(index + 1);
			},
			None => {
				self.current = match self.previous.map(|prev| prev + 1).filter(|&i| i < list.len()) {
					Some(index) => Some(index),
					None => {
						self.previous = None;
						(!list.is_empty()).then_some(0)
					},
				};
			},
		}

		self.current.is_some()
	}

	/// Get a ref to the element under the cursor. `O(n)`.
	/// Fails with [`ListError::NoSuchElement`] off the end.
	/// ```
	/// # use dlist::{DList, ListError};
	/// let list = DList::from(vec![1]);
	/// let mut cursor = list.cursor();
	/// assert_eq!(cursor.value(&list), Ok(&1));
	///
	/// assert!(!cursor.advance(&list));
	/// assert_eq!(cursor.value(&list), Err(ListError::NoSuchElement));
	/// ```
	pub fn value<'a, T>(&self, list: &'a DList<T>) -> Result<&'a T, ListError> {
		self.current
			.and_then(|index| list.get(index).ok())
			.ok_or(ListError::NoSuchElement)
	}

	/// Get a mut ref to the element under the cursor. `O(n)`.
	/// Fails with [`ListError::NoSuchElement`] off the end.
	/// ```
	/// # use dlist::DList;
	/// let mut list = DList::from(vec![1, 2]);
	/// let cursor = list.cursor();
	///
	/// *cursor.value_mut(&mut list).unwrap() = 9;
	/// assert_eq!(list.to_string(), "[9, 2]");
	/// ```
	pub fn value_mut<'a, T>(&self, list: &'a mut DList<T>) -> Result<&'a mut T, ListError> {
		match self.current {
			Some(index) => list.get_mut(index).map_err(|_| ListError::NoSuchElement),
			None => Err(ListError::NoSuchElement),
		}
	}

	/// Write a new element through the cursor, dropping the old one. `O(n)`.
	/// Fails with [`ListError::NoSuchElement`] off the end.
	/// ```
	/// # use dlist::DList;
	/// let mut list = DList::from(vec![1, 2]);
	/// let cursor = list.cursor();
	///
	/// cursor.assign(&mut list, 9).unwrap();
	/// assert_eq!(list.to_string(), "[9, 2]");
	/// ```
	pub fn assign<T>(&self, list: &mut DList<T>, elem: T) -> Result<(), ListError> {
		match self.current {
			Some(index) => list.set(index, elem).map_err(|_| ListError::NoSuchElement),
			None => Err(ListError::NoSuchElement),
		}
	}

	/// The position of the cursor, front-relative. `O(1)`.
	/// `None` when off the end.
	#[inline]
	pub const fn index(&self) -> Option<usize> {
		self.current
	}
}
