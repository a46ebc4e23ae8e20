//! Singly linked lists.
//!
//! The [`arena`] flavor keeps its nodes in a slot store owned by the list
//! and hands out stable [`arena::node::NodeRef`] handles in place of node
//! pointers. Handles survive unrelated insertions and removals, so callers
//! can hold on to a position and insert or remove after it in O(1).
//!
//! # Examples
//!
//! ```
//! use adt_collections::linked_list::arena::list::SingleList;
//!
//! let mut list = SingleList::new();
//! list.append('a').unwrap();
//! list.append('b').unwrap();
//! list.append('c').unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.pop(), 'a');
//!
//! let head = list.head().unwrap();
//! assert_eq!(list.remove_after(head), 'c');
//! assert_eq!(list.iter().collect::<Vec<_>>(), [&'b']);
//! ```
pub mod arena;
