use alloc::boxed::Box;

use super::node::Node;

/// The owning link from one position in the chain to the next node.
pub type NextLink<T> = Option<Box<Node<T>>>;

/// A trait for anything that owns exactly one "next" slot in the chain.
///
/// Both a [`Node`] and the list handle implement it: a node's slot is its
/// successor, the list's slot is its head. Splicing in front of the list and
/// splicing after a node are therefore the same operation.
pub trait Link<T> {
    /// Get the node held in this slot
    fn next(&self) -> Option<&Node<T>>;

    /// Get mutable access to the slot itself
    fn next_link(&mut self) -> &mut NextLink<T>;

    /// Get a mutable reference to the node held in this slot
    fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next_link().as_deref_mut()
    }

    /// Replace the slot's contents, returning what was there before
    fn set_next(&mut self, next: NextLink<T>) -> NextLink<T> {
        core::mem::replace(self.next_link(), next)
    }

    /// Splice a new node holding `data` directly after this slot.
    ///
    /// The node previously in the slot becomes the successor of the new one.
    fn attach_next(&mut self, data: T) {
        let rest = self.next_link().take();
        *self.next_link() = Some(Box::new(Node::with_next(data, rest)));
    }

    /// Splice the node out of this slot, promoting its successor.
    ///
    /// The returned node has its own link cleared.
    fn detach_next(&mut self) -> Option<Box<Node<T>>> {
        let mut detached = self.next_link().take()?;
        *self.next_link() = detached.next_link().take();
        Some(detached)
    }
}
