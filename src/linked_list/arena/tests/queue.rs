extern crate std;

use std::vec;
use std::vec::Vec;

use crate::linked_list::arena::list::SingleList;

#[test]
fn test_enqueue_dequeue_is_first_in_first_out() {
    let mut queue = SingleList::new();
    for i in 0..4 {
        queue.enqueue(i).unwrap();
    }

    let mut drained = Vec::new();
    while !queue.is_empty() {
        drained.push(queue.dequeue());
    }
    assert_eq!(drained, vec![0, 1, 2, 3]);
}

#[test]
fn test_queue_interleaved_operations() {
    let mut queue = SingleList::new();
    queue.enqueue('a').unwrap();
    queue.enqueue('b').unwrap();
    assert_eq!(queue.dequeue(), 'a');

    queue.enqueue('c').unwrap();
    assert_eq!(queue.dequeue(), 'b');
    assert_eq!(queue.dequeue(), 'c');
    assert!(queue.is_empty());
}

#[test]
#[should_panic(expected = "pop from an empty list")]
fn test_dequeue_empty_panics() {
    let mut queue = SingleList::<u8>::new();
    queue.dequeue();
}
