use alloc::string::String;

use thiserror::Error;

/// Result type returned by the fallible list operations.
pub type Result<T> = core::result::Result<T, ListError>;

/// Errors reported by [`SinglyLinkedList`](super::list::SinglyLinkedList).
///
/// Every error is raised by the call that detects it, and a failed call
/// leaves the list exactly as it was. Values are carried in their `Debug`
/// rendering so the error stays independent of the element type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An index-based operation was given an index outside the list.
    #[error("Index {index} out of range for list of length {len}!")]
    OutOfRange { index: isize, len: usize },

    /// No node holds the value an insertion or removal was anchored on.
    #[error("{data} data not found!")]
    NotFound { data: String },

    /// A search found no node holding the value at all.
    #[error("No data '{data}' found!")]
    NoOccurrence { data: String },

    /// A search found the value, but fewer times than requested.
    #[error("data '{data}' appears only {found} time(s)")]
    TooFewOccurrences { data: String, found: usize },

    /// A removal that needs at least one node was called on an empty list.
    #[error("cannot {operation} on an empty list")]
    Empty { operation: &'static str },
}

impl ListError {
    /// Whether this error comes from a value lookup that did not match.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ListError::NotFound { .. }
                | ListError::NoOccurrence { .. }
                | ListError::TooFewOccurrences { .. }
        )
    }
}
