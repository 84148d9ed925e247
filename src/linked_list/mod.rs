//! Linked list implementations.
//!
//! [`singly::list::SinglyLinkedList`] is an owning singly linked list: each
//! node holds a value and owns the next node. Positions are addressed with
//! `isize` indices, negative indices counting from the end of the list.
//!
//! # Examples
//!
//! ```
//! use slinked_collections::linked_list::singly::prelude::*;
//!
//! let mut list = SinglyLinkedList::new();
//! list.add_node(5);
//! list.add_node(1);
//! list.add_node(3);
//! list.insert_at_end(7);
//!
//! assert_eq!(list.length(), 4);
//! assert_eq!(list.to_string(), "[Head: 3]-> [1]-> [5]-> [Tail: 7]->");
//!
//! assert_eq!(*list.search_node(-1).unwrap().data(), 7);
//! assert_eq!(list.search_data(&5, 1), Ok(2));
//!
//! list.reverse_in_place();
//! let values: Vec<i32> = list.values().copied().collect();
//! assert_eq!(values, vec![7, 5, 1, 3]);
//!
//! let removed = list.remove_data(&5).unwrap();
//! assert_eq!(removed.into_data(), 5);
//! assert!(list.remove_data(&42).unwrap_err().is_not_found());
//! ```
pub mod singly;
