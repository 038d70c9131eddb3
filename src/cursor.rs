use std::iter::FusedIterator;
use std::vec;

use tracing::trace;

use crate::node::Node;

/// Ordered snapshot of a node's immediate children.
///
/// Returned by [`Node::children`].
pub struct Children<V> {
    inner: vec::IntoIter<Node<V>>,
}

impl<V> Children<V> {
    pub(crate) fn new(children: Vec<Node<V>>) -> Self {
        Self {
            inner: children.into_iter(),
        }
    }
}

impl<V> Iterator for Children<V> {
    type Item = Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Children<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Children<V> {}

impl<V> FusedIterator for Children<V> {}

/// Index-based cursor over the children of one node.
///
/// Unlike [`Children`], the cursor reads the live child list on every step, so
/// the child it last returned can be removed with
/// [`ChildCursor::remove_current`] without skipping its successor:
///
/// ```
/// use ordtree::Node;
///
/// let root = Node::with_children(0, (1..=4).map(Node::new));
/// let mut cursor = root.cursor();
/// while let Some(child) = cursor.next() {
///     if *child.value() % 2 == 0 {
///         cursor.remove_current();
///     }
/// }
/// assert_eq!(root.to_string(), "0\n  1\n  3\n");
/// ```
pub struct ChildCursor<'a, V> {
    node: &'a Node<V>,
    position: usize,
    current: Option<(usize, Node<V>)>,
}

impl<'a, V> ChildCursor<'a, V> {
    pub(crate) fn new(node: &'a Node<V>) -> Self {
        Self {
            node,
            position: 0,
            current: None,
        }
    }

    /// Index of the child the next call to `next` will return.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Detaches the child most recently returned by `next`.
    ///
    /// Returns `None` if `next` has not returned a child since the last removal,
    /// or if that child is no longer at its position because the node was
    /// changed through another handle.
    pub fn remove_current(&mut self) -> Option<Node<V>> {
        let (index, returned) = self.current.take()?;
        if !self.node.child_at(index).ok()?.ptr_eq(&returned) {
            trace!(index, "child at cursor was moved by another handle");
            return None;
        }
        let removed = self.node.remove_child(index).ok()?;
        self.position = index;
        trace!(index, "removed child at cursor");
        Some(removed)
    }
}

impl<V> Iterator for ChildCursor<'_, V> {
    type Item = Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.node.child_at(self.position).ok()?;
        self.current = Some((self.position, child.clone()));
        self.position += 1;
        Some(child)
    }
}
