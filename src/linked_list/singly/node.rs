use core::fmt;

use super::traits::{Link, NextLink};

/// A node in a singly linked list.
///
/// A node is owned by exactly one predecessor, or by the list itself when it
/// is the first node.
pub struct Node<T> {
    data: T,
    next: NextLink<T>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `data`.
    pub const fn new(data: T) -> Self {
        Self { data, next: None }
    }

    pub(crate) const fn with_next(data: T, next: NextLink<T>) -> Self {
        Self { data, next }
    }

    /// Get the data stored in the node
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the data stored in the node
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Consume the node, returning its data
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> Link<T> for Node<T> {
    #[inline]
    fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    #[inline]
    fn next_link(&mut self) -> &mut NextLink<T> {
        &mut self.next
    }
}

/// Only the stored value is shown, never the rest of the chain.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
