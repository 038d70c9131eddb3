use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::cursor::{ChildCursor, Children};
use crate::errors::{TreeError, TreeResult};

struct NodeInner<V> {
    value: V,
    children: Vec<Node<V>>,
}

// Tear subtrees down with an explicit stack so deep chains cannot overflow it.
impl<V> Drop for NodeInner<V> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(child) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(child.inner) {
                let mut inner = cell.into_inner();
                stack.append(&mut inner.children);
            }
        }
    }
}

/// Handle to a tree node holding a value and an ordered list of children.
///
/// Cloning a `Node` clones the handle, not the subtree: both handles refer to the
/// same node, and [`Node::ptr_eq`] reports them as identical. Identity is what the
/// cycle check in [`Node::add_child`] compares.
///
/// Nodes are single-threaded (`!Send`, `!Sync`). Holding a [`Node::value`] guard
/// while mutating the same node panics, as with any `RefCell`.
pub struct Node<V> {
    inner: Rc<RefCell<NodeInner<V>>>,
}

impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V> From<V> for Node<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V> Node<V> {
    pub fn new(value: V) -> Self {
        Self::with_children(value, Vec::new())
    }

    /// Creates a node owning `value` with `children` attached in the given order.
    ///
    /// No cycle check is performed: a freshly created node cannot be reachable
    /// from subtrees that existed before it.
    pub fn with_children<I>(value: V, children: I) -> Self
    where
        I: IntoIterator<Item = Node<V>>,
    {
        Self {
            inner: Rc::new(RefCell::new(NodeInner {
                value,
                children: children.into_iter().collect(),
            })),
        }
    }

    pub fn value(&self) -> Ref<'_, V> {
        Ref::map(self.inner.borrow(), |inner| &inner.value)
    }

    pub fn value_mut(&self) -> RefMut<'_, V> {
        RefMut::map(self.inner.borrow_mut(), |inner| &mut inner.value)
    }

    /// Replaces the value of this node, returning the previous one.
    pub fn set_value(&self, value: V) -> V {
        std::mem::replace(&mut self.inner.borrow_mut().value, value)
    }

    /// True if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node<V>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn first_child(&self) -> Option<Node<V>> {
        self.inner.borrow().children.first().cloned()
    }

    pub fn last_child(&self) -> Option<Node<V>> {
        self.inner.borrow().children.last().cloned()
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    pub fn has_children(&self) -> bool {
        self.child_count() > 0
    }

    /// Returns the child at `index`, counting from zero.
    pub fn child_at(&self, index: usize) -> TreeResult<Node<V>> {
        let inner = self.inner.borrow();
        inner
            .children
            .get(index)
            .cloned()
            .ok_or(TreeError::OutOfRange {
                index,
                len: inner.children.len(),
            })
    }

    /// Snapshot of the immediate children, in order.
    ///
    /// Each call starts again from the first child. Mutating this node while the
    /// iterator is alive does not affect what it yields.
    pub fn children(&self) -> Children<V> {
        Children::new(self.inner.borrow().children.clone())
    }

    /// Cursor over the immediate children that supports removing the child it
    /// last returned.
    pub fn cursor(&self) -> ChildCursor<'_, V> {
        ChildCursor::new(self)
    }

    /// Appends `child` as the new last child.
    ///
    /// Fails with [`TreeError::CycleDetected`] if this node is reachable from
    /// `child`, including when `child` is this node. The node is unchanged on
    /// failure.
    #[instrument(level = "trace", skip(self, child))]
    pub fn add_child(&self, child: Node<V>) -> TreeResult<()> {
        if child.contains(self) {
            debug!(
                children = self.child_count(),
                "rejected child that already contains this node"
            );
            return Err(TreeError::CycleDetected);
        }
        self.inner.borrow_mut().children.push(child);
        Ok(())
    }

    /// Inserts `child` at `index`, shifting later children one place right.
    ///
    /// `index == child_count()` appends. Unlike [`Node::add_child`] this does not
    /// check for cycles; use [`Node::contains`] first when the child may already
    /// hold this node. A cycle makes rendering, equality and traversal of the
    /// affected nodes non-terminating, and leaks the nodes involved.
    #[instrument(level = "trace", skip(self, child))]
    pub fn insert_child(&self, index: usize, child: Node<V>) -> TreeResult<()> {
        let mut inner = self.inner.borrow_mut();
        let len = inner.children.len();
        if index > len {
            debug!(index, len, "rejected insertion index");
            return Err(TreeError::InvalidIndex { index, len });
        }
        inner.children.insert(index, child);
        Ok(())
    }

    /// Detaches and returns the child at `index`. The removed subtree keeps its
    /// own children; later siblings shift one place left.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&self, index: usize) -> TreeResult<Node<V>> {
        let mut inner = self.inner.borrow_mut();
        let len = inner.children.len();
        if index >= len {
            debug!(index, len, "rejected removal index");
            return Err(TreeError::OutOfRange { index, len });
        }
        Ok(inner.children.remove(index))
    }

    /// Removes every child for which `keep` returns false and returns the removed
    /// subtrees in their original order.
    pub fn retain_children<F>(&self, mut keep: F) -> Vec<Node<V>>
    where
        F: FnMut(&Node<V>) -> bool,
    {
        let mut removed = Vec::new();
        let mut cursor = self.cursor();
        while let Some(child) = cursor.next() {
            if !keep(&child) {
                removed.extend(cursor.remove_current());
            }
        }
        trace!(removed = removed.len(), "retained children");
        removed
    }

    /// Depth-first search for `target` by identity, starting with this node.
    ///
    /// Nodes already visited are skipped, so the search terminates even on a
    /// graph made cyclic through [`Node::insert_child`].
    pub fn contains(&self, target: &Node<V>) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![self.clone()];

        while let Some(node) = stack.pop() {
            if node.ptr_eq(target) {
                return true;
            }
            if !visited.insert(Rc::as_ptr(&node.inner)) {
                continue;
            }
            stack.extend(node.children().rev());
        }
        false
    }
}

/// Deep structural equality: equal values, same number of children, children
/// pairwise equal in order.
///
/// Two handles to the same node are equal without consulting `V`, so a node is
/// always equal to itself even when its value is not (an `f64` NaN, say). A
/// structural copy of such a node is not equal to it.
impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let this = self.inner.borrow();
        let that = other.inner.borrow();
        this.value == that.value
            && this.children.len() == that.children.len()
            && this
                .children
                .iter()
                .zip_eq(that.children.iter())
                .all(|(a, b)| a == b)
    }
}

impl<V: Eq> Eq for Node<V> {}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Node")
            .field("value", &inner.value)
            .field("children", &inner.children)
            .finish()
    }
}
