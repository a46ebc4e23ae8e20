//! # Arena-backed linked list
//!
//! Nodes live in a growable slot store owned by the list and are addressed
//! through stable [`node::NodeRef`] handles. Slots vacated by a removal are
//! threaded on a free chain and reused by later insertions, so the store
//! only grows when no vacancy is left.
//!
//! ## Core Components
//!
//! - [`list::SingleList`]: the list itself — head and tail handles, length,
//!   and every structural operation.
//! - [`node::NodeRef`]: a copyable handle naming one node of one list.
//! - [`iter::Iter`]: head-to-tail traversal borrowed from the list.
//!
//! ## Contracts
//!
//! - `pop`/`dequeue` require a non-empty list, and `remove_after` requires
//!   the named node to have a successor. Violating either panics; check
//!   `len` first.
//! - A handle is valid from the insertion that returned it until its node
//!   is removed. A vacant handle panics on structural use; a reused slot
//!   resolves to whichever node occupies it now.
//! - Insertions report allocation failure as a typed error instead of
//!   aborting, and leave the list unchanged when they do.

pub mod node;
pub mod list;
pub mod iter;

#[cfg(test)]
mod tests;
