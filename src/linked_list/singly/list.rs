use alloc::{boxed::Box, format};
use core::fmt;

use log::{debug, trace};

use super::{
    error::{ListError, Result},
    iter::{Iter, Values},
    node::Node,
    traits::{Link, NextLink},
};

/// A singly linked list that owns its nodes.
///
/// The list holds the first node and every node owns its successor. The
/// length is not cached: [`length`](Self::length) walks the chain.
pub struct SinglyLinkedList<T> {
    head: NextLink<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        SinglyLinkedList { head: None }
    }

    /// Creates a list whose first node is `node`, together with any chain
    /// already hanging off it.
    pub fn with_head(node: Node<T>) -> Self {
        SinglyLinkedList {
            head: Some(Box::new(node)),
        }
    }

    /// Get the first node of the list
    pub fn head(&self) -> Option<&Node<T>> {
        self.next()
    }

    /// Check if the list has no nodes. O(1).
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Count the nodes by walking the whole chain. O(n).
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Get an iterator over the nodes, first to last
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head())
    }

    /// Get an iterator over the stored values, first to last
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self.iter())
    }

    /// Prepend a node holding `data`. O(1).
    pub fn add_node(&mut self, data: T) {
        self.attach_next(data);
    }

    /// Same as [`add_node`](Self::add_node).
    pub fn insert_at_beginning(&mut self, data: T) {
        self.add_node(data);
    }

    /// Append a node holding `data` after the current last node. O(n).
    pub fn insert_at_end(&mut self, data: T) {
        *self.tail_link() = Some(Box::new(Node::new(data)));
    }

    /// Insert `data` so that it ends up at position `index`.
    ///
    /// `0` prepends. `-1` and `length - 1` both append; they are checked
    /// before the bounds, so appending through `length - 1` is allowed even
    /// though the new node lands at `length`. Any other index must lie in
    /// `0..length`.
    pub fn insert_at_index(&mut self, data: T, index: isize) -> Result<()> {
        if index == 0 {
            self.add_node(data);
            return Ok(());
        }

        let len = self.length();
        if index == -1 || index == len as isize - 1 {
            self.insert_at_end(data);
            return Ok(());
        }
        if index < 0 || index >= len as isize {
            debug!("insert at index {} rejected, length is {}", index, len);
            return Err(ListError::OutOfRange { index, len });
        }

        let predecessor = self
            .node_mut(index as usize - 1)
            .ok_or(ListError::OutOfRange { index, len })?;
        predecessor.attach_next(data);
        trace!("spliced new node in at index {}", index);
        Ok(())
    }

    /// Prepend every value of `values` in turn.
    ///
    /// The values end up in front of the previous contents, in reverse
    /// order of iteration.
    pub fn insert_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for data in values {
            self.add_node(data);
        }
    }

    /// Get the node at `index`.
    ///
    /// Index `0` is the first node. Negative indices count from the end,
    /// `-1` being the last node.
    pub fn search_node(&self, index: isize) -> Result<&Node<T>> {
        if index == 0 {
            return self.head().ok_or(ListError::OutOfRange { index, len: 0 });
        }

        let len = self.length();
        let position = resolve_index(index, len)?;
        self.iter()
            .nth(position)
            .ok_or(ListError::OutOfRange { index, len })
    }

    /// Detach the node at `index`, negative indices counting from the end.
    ///
    /// Returns the detached node together with its former successor, which
    /// now sits at `index`.
    pub fn remove_at_index(&mut self, index: isize) -> Result<(Node<T>, Option<&Node<T>>)> {
        if index == 0 {
            return detach_after(self).ok_or(ListError::OutOfRange { index, len: 0 });
        }

        let len = self.length();
        let position = resolve_index(index, len)?;
        let removed = if position == 0 {
            detach_after(self)
        } else {
            self.node_mut(position - 1)
                .and_then(|predecessor| detach_after(predecessor))
        };
        trace!("removed node at index {} (position {})", index, position);
        removed.ok_or(ListError::OutOfRange { index, len })
    }

    /// Remove the first node. Fails on an empty list.
    pub fn remove_at_start(&mut self) -> Result<Node<T>> {
        self.detach_next().map(|node| *node).ok_or_else(|| {
            debug!("remove at start on an empty list");
            ListError::Empty {
                operation: "remove at start",
            }
        })
    }

    /// Remove the last node. Fails on an empty list.
    pub fn remove_at_end(&mut self) -> Result<Node<T>> {
        let len = self.length();
        let removed = match len {
            0 => None,
            1 => self.detach_next(),
            _ => self
                .node_mut(len - 2)
                .and_then(|before_end| before_end.detach_next()),
        };
        removed.map(|node| *node).ok_or_else(|| {
            debug!("remove at end on an empty list");
            ListError::Empty {
                operation: "remove at end",
            }
        })
    }

    /// Reverse the chain in place by flipping every link. O(n), O(1) space.
    pub fn reverse_in_place(&mut self) {
        let mut reversed: NextLink<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.set_next(reversed);
            reversed = Some(node);
        }
        self.head = reversed;
        trace!("reversed list in place");
    }

    /// Build a second list holding the same values in reverse order.
    ///
    /// The receiver is left untouched.
    pub fn new_reversed_list(&self) -> Self
    where
        T: Clone,
    {
        let mut reversed = Self::new();
        reversed.insert_values(self.values().cloned());
        reversed
    }

    fn node_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        let mut link = &mut self.head;
        for _ in 0..position {
            link = link.as_mut()?.next_link();
        }
        link.as_deref_mut()
    }

    fn tail_link(&mut self) -> &mut NextLink<T> {
        let mut link = &mut self.head;
        loop {
            match link {
                Some(node) => link = node.next_link(),
                None => return link,
            }
        }
    }
}

impl<T> SinglyLinkedList<T>
where
    T: PartialEq + fmt::Debug,
{
    /// Insert `data` right after the first node holding `after`.
    pub fn insert_after_data(&mut self, after: &T, data: T) -> Result<()> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.data() == after {
                node.attach_next(data);
                trace!("spliced new node in after {:?}", after);
                return Ok(());
            }
            current = node.next_mut();
        }

        debug!("insert after {:?} found no match", after);
        Err(ListError::NotFound {
            data: format!("{:?}", after),
        })
    }

    /// Get the index of the `occurrence`-th node holding `data`.
    ///
    /// Occurrences count from 1. The error tells apart "never found" from
    /// "found fewer times than asked".
    pub fn search_data(&self, data: &T, occurrence: usize) -> Result<usize> {
        let mut found = 0;
        for (index, value) in self.values().enumerate() {
            if value == data {
                found += 1;
                if found == occurrence {
                    return Ok(index);
                }
            }
        }

        debug!("search for {:?} #{} found {} match(es)", data, occurrence, found);
        let data = format!("{:?}", data);
        if found == 0 {
            Err(ListError::NoOccurrence { data })
        } else {
            Err(ListError::TooFewOccurrences { data, found })
        }
    }

    /// Remove the first node holding `data`.
    pub fn remove_data(&mut self, data: &T) -> Result<Node<T>> {
        if self.head().is_some_and(|head| head.data() == data) {
            if let Some(head) = self.detach_next() {
                return Ok(*head);
            }
        }

        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.next().is_some_and(|next| next.data() == data) {
                if let Some(removed) = node.detach_next() {
                    trace!("removed node holding {:?}", data);
                    return Ok(*removed);
                }
            }
            current = node.next_mut();
        }

        debug!("remove {:?} found no match", data);
        Err(ListError::NotFound {
            data: format!("{:?}", data),
        })
    }
}

/// Map `index` into `0..len`, negative indices counting from the end.
fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let signed_len = len as isize;
    if index < -signed_len || index > signed_len - 1 {
        debug!("index {} out of range, length is {}", index, len);
        return Err(ListError::OutOfRange { index, len });
    }
    if index < 0 {
        Ok((signed_len + index) as usize)
    } else {
        Ok(index as usize)
    }
}

fn detach_after<T, L>(predecessor: &mut L) -> Option<(Node<T>, Option<&Node<T>>)>
where
    L: Link<T>,
{
    let removed = predecessor.detach_next()?;
    Some((*removed, predecessor.next()))
}

impl<T> Link<T> for SinglyLinkedList<T> {
    #[inline]
    fn next(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    #[inline]
    fn next_link(&mut self) -> &mut NextLink<T> {
        &mut self.head
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next_link().take();
        }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a Node<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders `[Head: a]-> [b]-> [Tail: c]->`, or `None` for an empty list.
impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        for (position, node) in self.iter().enumerate() {
            if position == 0 {
                write!(f, "[Head: {}]->", node.data())?;
            } else if node.next().is_none() {
                write!(f, " [Tail: {}]->", node.data())?;
            } else {
                write!(f, " [{}]->", node.data())?;
            }
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
