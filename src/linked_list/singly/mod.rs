//! # Singly Linked List
//!
//! This module provides an owning singly linked list.
//!
//! ## Core Components
//!
//! - [`traits::Link`]: The slot trait shared by the list handle and its nodes.
//! - [`node::Node`]: A single cell holding a value and the link to its successor.
//! - [`list::SinglyLinkedList`]: The list handle exposing every operation.
//! - [`iter`]: Front-to-back traversal over nodes and values.
//! - [`error::ListError`]: The errors returned by index and value lookups.
//!
//! ## Ownership
//!
//! Every node is owned by exactly one predecessor, and the first node is owned
//! by the list. Splicing moves ownership of the `Box` links around with
//! `Option::take`, so no `unsafe` is involved and the chain can never form a
//! cycle.

pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod traits;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::error::{ListError, Result};
    pub use super::list::SinglyLinkedList;
    pub use super::node::Node;
    pub use super::traits::Link;
}
