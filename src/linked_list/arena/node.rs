/// A stable handle to a node in a list.
///
/// Handles are slot indices into the list's backing store: `Copy`, cheap to
/// compare, and not invalidated by unrelated insertions or removals. A
/// handle stays valid from the insertion that returned it until its node is
/// removed. Using it past that point is a logic error, never a memory
/// hazard: structural operations panic on a vacant slot, and a slot that
/// has been reused resolves to the node currently occupying it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeRef(pub(super) usize);

/// A slot in the list's backing store.
///
/// Every slot is on exactly one chain: occupied slots on the list's
/// head-to-tail chain, vacant slots on the free chain awaiting reuse.
pub(super) enum Slot<T> {
    Vacant { next_free: Option<NodeRef> },
    Occupied { data: T, next: Option<NodeRef> },
}
