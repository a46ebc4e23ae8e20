//! Small abstract-data-type collections.
//!
//! The crate currently provides one component: a singly linked list backed
//! by an arena of slots, in [`linked_list`].

#![no_std]

extern crate alloc;

pub mod linked_list;
