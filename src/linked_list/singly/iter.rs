use super::{node::Node, traits::Link};

/// A front-to-back iterator over the nodes of a list.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator starting at `head`.
    pub fn new(head: Option<&'a Node<T>>) -> Self {
        Self { current: head }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|&current| {
            self.current = current.next();
        })
    }
}

/// A front-to-back iterator over the values of a list.
pub struct Values<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(inner: Iter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Node::data)
    }
}
