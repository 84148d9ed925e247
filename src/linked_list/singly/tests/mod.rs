extern crate std;

use std::vec::Vec;

use super::list::SinglyLinkedList;

mod remove;

/// Collect the values of `list`, first to last.
fn values_of<T: Copy>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.values().copied().collect()
}

/// Build a list whose values read `values` from first to last.
fn list_of<T: Copy>(values: &[T]) -> SinglyLinkedList<T> {
    let mut list = SinglyLinkedList::new();
    for value in values {
        list.insert_at_end(*value);
    }
    list
}
