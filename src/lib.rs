//! Ordered multi-way tree container.
//!
//! Every [`Node`] holds one value and an ordered list of child nodes. Appending a
//! child is checked so that no node can become its own descendant.

pub mod cursor;
pub mod errors;
pub mod node;
pub mod render;
pub mod traversal;
pub mod tree_traits;
pub mod util;

pub use cursor::{ChildCursor, Children};
pub use errors::{TreeError, TreeResult};
pub use node::Node;
pub use render::RenderConfig;
pub use traversal::{PostOrderIterator, PreOrderIterator};
pub use tree_traits::TreeNodeConvert;
