use super::list::SingleList;
use super::node::NodeRef;

/// An iterator over the elements of a [`SingleList`], head to tail.
///
/// The iterator borrows the list, so the list cannot be mutated while it is
/// alive.
pub struct Iter<'a, T> {
    list: &'a SingleList<T>,
    current: Option<NodeRef>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a SingleList<T>) -> Self {
        Iter {
            current: list.head(),
            list,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = self.list.next(node);
        self.list.get(node)
    }
}

impl<'a, T> IntoIterator for &'a SingleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
