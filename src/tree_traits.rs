use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::node::Node;

/// Conversion into a [`termtree::Tree`] for box-drawing display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<V: fmt::Display> TreeNodeConvert for Node<V> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.value().to_string()).with_leaves(leaves)
    }
}
