//! Depth-first traversals and whole-subtree measurements.
//!
//! All of these walk the current shape of the tree. A cycle introduced through
//! [`Node::insert_child`] makes them run forever.

use tracing::instrument;

use crate::node::Node;

impl<V> Node<V> {
    /// Parent before children, children left to right.
    pub fn iter_preorder(&self) -> PreOrderIterator<V> {
        PreOrderIterator::new(self)
    }

    /// Children before parent, children left to right.
    pub fn iter_postorder(&self) -> PostOrderIterator<V> {
        PostOrderIterator::new(self)
    }

    /// Number of levels in the subtree: 1 for a leaf.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in the subtree, this node included.
    pub fn size(&self) -> usize {
        self.iter_preorder().count()
    }

    /// Values of all leaf nodes, left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn leaf_values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter_preorder()
            .filter(|node| !node.has_children())
            .map(|node| node.value().clone())
            .collect()
    }
}

pub struct PreOrderIterator<V> {
    stack: Vec<Node<V>>,
}

impl<V> PreOrderIterator<V> {
    fn new(root: &Node<V>) -> Self {
        Self {
            stack: vec![root.clone()],
        }
    }
}

impl<V> Iterator for PreOrderIterator<V> {
    type Item = Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children().rev());
        Some(current)
    }
}

pub struct PostOrderIterator<V> {
    stack: Vec<(Node<V>, bool)>,
}

impl<V> PostOrderIterator<V> {
    fn new(root: &Node<V>) -> Self {
        Self {
            stack: vec![(root.clone(), false)],
        }
    }
}

impl<V> Iterator for PostOrderIterator<V> {
    type Item = Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if visited {
                return Some(current);
            }
            let children = current.children();
            self.stack.push((current, true));
            self.stack.extend(children.rev().map(|child| (child, false)));
        }
        None
    }
}
