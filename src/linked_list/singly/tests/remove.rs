extern crate std;

use std::{string::String, vec};

use crate::linked_list::singly::{error::ListError, list::SinglyLinkedList, node::Node};

use super::{list_of, values_of};

#[test]
fn test_remove_at_index_zero() {
    let mut list = list_of(&[1, 2, 3]);
    let (removed, next) = list.remove_at_index(0).unwrap();
    assert_eq!(*removed.data(), 1);
    assert_eq!(next.map(|node| *node.data()), Some(2));
    assert_eq!(values_of(&list), vec![2, 3]);

    let mut single = list_of(&[1]);
    let (removed, next) = single.remove_at_index(0).unwrap();
    assert_eq!(removed.into_data(), 1);
    assert!(next.is_none());
    assert!(single.is_empty());
}

#[test]
fn test_remove_at_index_middle_and_end() {
    let mut list = list_of(&[1, 2, 3, 4]);
    let (removed, next) = list.remove_at_index(2).unwrap();
    assert_eq!(*removed.data(), 3);
    assert_eq!(next.map(|node| *node.data()), Some(4));
    assert_eq!(values_of(&list), vec![1, 2, 4]);

    let (removed, next) = list.remove_at_index(2).unwrap();
    assert_eq!(*removed.data(), 4);
    assert!(next.is_none());
    assert_eq!(values_of(&list), vec![1, 2]);
}

#[test]
fn test_remove_at_index_negative() {
    let mut list = list_of(&[1, 2, 3, 4]);
    let (removed, _) = list.remove_at_index(-2).unwrap();
    assert_eq!(removed.into_data(), 3);
    assert_eq!(values_of(&list), vec![1, 2, 4]);

    // -length resolves to the first node
    let (removed, next) = list.remove_at_index(-3).unwrap();
    assert_eq!(removed.into_data(), 1);
    assert_eq!(next.map(|node| *node.data()), Some(2));
    assert_eq!(values_of(&list), vec![2, 4]);
}

#[test]
fn test_remove_at_index_out_of_range() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(
        list.remove_at_index(3).unwrap_err(),
        ListError::OutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        list.remove_at_index(-4).unwrap_err(),
        ListError::OutOfRange { index: -4, len: 3 }
    );
    assert_eq!(values_of(&list), vec![1, 2, 3]);

    let mut empty = SinglyLinkedList::<i32>::new();
    assert!(empty.remove_at_index(0).is_err());
}

#[test]
fn test_remove_data() {
    let mut list = list_of(&[5, 7, 5, 9]);

    let removed = list.remove_data(&5).unwrap();
    assert_eq!(removed.into_data(), 5);
    assert_eq!(values_of(&list), vec![7, 5, 9]);

    let removed = list.remove_data(&5).unwrap();
    assert_eq!(removed.into_data(), 5);
    assert_eq!(values_of(&list), vec![7, 9]);

    let removed = list.remove_data(&9).unwrap();
    assert_eq!(removed.into_data(), 9);
    assert_eq!(values_of(&list), vec![7]);
}

#[test]
fn test_remove_data_not_found() {
    let mut list = list_of(&[1, 2]);
    let err = list.remove_data(&55).unwrap_err();
    assert_eq!(err, ListError::NotFound { data: String::from("55") });
    assert_eq!(values_of(&list), vec![1, 2]);

    let mut empty = SinglyLinkedList::<i32>::new();
    assert!(empty.remove_data(&1).unwrap_err().is_not_found());
}

#[test]
fn test_remove_at_start() {
    let mut list = list_of(&[1, 2]);
    assert_eq!(list.remove_at_start().unwrap().into_data(), 1);
    assert_eq!(list.remove_at_start().unwrap().into_data(), 2);
    assert!(list.is_empty());
    assert_eq!(
        list.remove_at_start().unwrap_err(),
        ListError::Empty {
            operation: "remove at start"
        }
    );
}

#[test]
fn test_remove_at_end() {
    let mut list = SinglyLinkedList::new();
    for value in [5, 1, 3, 10, 15] {
        list.add_node(value);
    }

    assert_eq!(list.remove_at_end().unwrap().into_data(), 5);
    assert_eq!(values_of(&list), vec![15, 10, 3, 1]);

    let mut single = list_of(&[1]);
    assert_eq!(single.remove_at_end().unwrap().into_data(), 1);
    assert!(single.is_empty());
    assert_eq!(
        single.remove_at_end().unwrap_err(),
        ListError::Empty {
            operation: "remove at end"
        }
    );
}

#[test]
fn test_with_head_keeps_chain() {
    let mut list = SinglyLinkedList::with_head(Node::new(1));
    list.insert_at_end(2);
    assert_eq!(list.length(), 2);

    let head = list.remove_at_start().unwrap();
    let mut rebuilt = SinglyLinkedList::with_head(head);
    rebuilt.insert_at_end(3);
    assert_eq!(values_of(&rebuilt), vec![1, 3]);
}

#[test]
fn test_drop_long_list() {
    let mut list = SinglyLinkedList::new();
    for value in 0..200_000 {
        list.add_node(value);
    }
    drop(list);
}
