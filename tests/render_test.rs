//! Tests for text and box-drawing rendering

use ordtree::util::testing;
use ordtree::{Node, RenderConfig, TreeNodeConvert};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn tree() -> Node<&'static str> {
    Node::with_children(
        "root",
        vec![
            Node::with_children("a", vec![Node::new("a1"), Node::new("a2")]),
            Node::new("b"),
        ],
    )
}

#[test]
fn given_single_child_when_rendering_then_indents_two_spaces() {
    let node = Node::with_children("X", vec![Node::new("Y")]);
    assert_eq!(node.to_string(), "X\n  Y\n");
}

#[test]
fn given_leaf_when_rendering_then_single_terminated_line() {
    assert_eq!(Node::new(42).to_string(), "42\n");
}

#[rstest]
fn given_nested_tree_when_rendering_then_children_follow_parent(tree: Node<&'static str>) {
    assert_eq!(tree.to_string(), "root\n  a\n    a1\n    a2\n  b\n");
}

#[rstest]
#[case(0, "root\na\na1\na2\nb\n")]
#[case(4, "root\n    a\n        a1\n        a2\n    b\n")]
fn given_custom_indent_when_rendering_then_uses_it(
    tree: Node<&'static str>,
    #[case] indent: usize,
    #[case] expected: &str,
) {
    assert_eq!(tree.render_with(&RenderConfig { indent }), expected);
}

#[rstest]
fn given_default_config_when_rendering_then_matches_display(tree: Node<&'static str>) {
    assert_eq!(tree.render_with(&RenderConfig::default()), tree.to_string());
}

#[test]
fn given_toml_config_when_deserializing_then_missing_fields_use_defaults() {
    let config: RenderConfig = toml::from_str("indent = 3").unwrap();
    assert_eq!(config, RenderConfig { indent: 3 });

    let config: RenderConfig = toml::from_str("").unwrap();
    assert_eq!(config, RenderConfig::default());
}

#[rstest]
fn given_tree_when_converting_to_termtree_then_structure_is_kept(tree: Node<&'static str>) {
    let converted = tree.to_tree_string();

    assert_eq!(converted.root, "root");
    assert_eq!(converted.leaves.len(), 2);
    assert_eq!(converted.leaves[0].root, "a");
    assert_eq!(converted.leaves[0].leaves.len(), 2);
    assert!(converted.to_string().contains("a1"));
}
