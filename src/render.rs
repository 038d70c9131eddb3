//! Indented text rendering of trees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Options for [`Node::render_with`].
///
/// Deserializable so host applications can carry it in their own config files:
///
/// ```toml
/// indent = 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces added per level of depth.
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl<V: fmt::Display> Node<V> {
    /// Renders one line per node, each child indented `config.indent` spaces
    /// deeper than its parent. Every line ends with `\n`.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        render_subtree(self, 0, config, &mut out);
        out
    }
}

fn render_subtree<V: fmt::Display>(
    node: &Node<V>,
    depth: usize,
    config: &RenderConfig,
    out: &mut String,
) {
    out.push_str(&" ".repeat(depth * config.indent));
    out.push_str(&node.value().to_string());
    out.push('\n');
    for child in node.children() {
        render_subtree(&child, depth + 1, config, out);
    }
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&RenderConfig::default()))
    }
}
