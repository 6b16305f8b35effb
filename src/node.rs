//! The value tree being rendered.
//!
//! Nodes are built by an introspection layer outside this crate. The
//! renderer only ever borrows them, so a tree (and every node's hints) is
//! fixed for the duration of a render pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The two node types that carry children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// Rendered between ` [` and `]`
    Array,
    /// Rendered between ` (` and `)`
    Object,
}

impl Container {
    /// Classify a type tag. Anything but `array`/`object` is a leaf.
    pub fn from_type(type_name: &str) -> Option<Self> {
        match type_name {
            "array" => Some(Container::Array),
            "object" => Some(Container::Object),
            _ => None,
        }
    }

    pub fn open(self) -> &'static str {
        match self {
            Container::Array => " [",
            Container::Object => " (",
        }
    }

    pub fn close(self) -> char {
        match self {
            Container::Array => ']',
            Container::Object => ')',
        }
    }
}

/// One inspected value, or one named/keyed child of a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueNode {
    /// Nesting level, 0 for the root
    #[serde(default)]
    pub depth: usize,
    /// Variable, key or property name
    #[serde(default)]
    pub name: Option<String>,
    /// Type tag; `array` and `object` have children
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// Precomputed size, e.g. an element count
    #[serde(default)]
    pub size: Option<String>,
    /// Access operator shown after the name, e.g. `=>` or `->`
    #[serde(default)]
    pub operator: Option<String>,
    /// Visibility/static markers shown before the name
    #[serde(default)]
    pub modifiers: Option<String>,
    /// Short textual rendering of a scalar value
    #[serde(default)]
    pub value_short: Option<String>,
    /// Category tags used to pick a plugin
    #[serde(default)]
    pub hints: BTreeSet<String>,
    /// Children, only meaningful for containers
    #[serde(default)]
    pub contents: Option<Vec<ValueNode>>,
    /// Stack frame data for children of a `trace` node
    #[serde(default)]
    pub trace: Option<TraceFrame>,
}

/// A single stack frame attached to a trace child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub class: Option<String>,
    /// Instance call (`->`) rather than static (`::`)
    #[serde(default)]
    pub object: bool,
    #[serde(default)]
    pub function: Option<String>,
    /// Rendered parameter list; `None` renders as `...`
    #[serde(default)]
    pub params: Option<String>,
}

impl ValueNode {
    /// Create an empty node at `depth`.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.modifiers = Some(modifiers.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value_short = Some(value.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.insert(hint.into());
        self
    }

    /// Append a child. The child keeps whatever depth it was built with.
    pub fn with_child(mut self, child: ValueNode) -> Self {
        self.contents.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_trace(mut self, frame: TraceFrame) -> Self {
        self.trace = Some(frame);
        self
    }

    /// The container kind, if this node's type carries children.
    pub fn container(&self) -> Option<Container> {
        self.type_name.as_deref().and_then(Container::from_type)
    }

    /// Children to traverse.
    ///
    /// Empty for leaves even when `contents` is populated, and empty for
    /// containers whose contents are missing.
    pub fn children(&self) -> &[ValueNode] {
        match (self.container(), &self.contents) {
            (Some(_), Some(contents)) => contents,
            _ => &[],
        }
    }

    pub fn has_hint(&self, hint: &str) -> bool {
        self.hints.contains(hint)
    }

    /// Rewrite depths so that this node sits at `depth` and every
    /// descendant is exactly one level below its parent.
    pub fn assign_depths(&mut self, depth: usize) {
        self.depth = depth;
        if let Some(contents) = self.contents.as_mut() {
            for child in contents {
                child.assign_depths(depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_hides_contents() {
        let node = ValueNode::new(0)
            .with_type("int")
            .with_child(ValueNode::new(1).with_type("int"));
        assert!(node.container().is_none());
        assert!(node.children().is_empty());
    }

    #[test]
    fn container_without_contents_has_no_children() {
        let node = ValueNode::new(0).with_type("object");
        assert_eq!(node.container(), Some(Container::Object));
        assert!(node.children().is_empty());
    }

    #[test]
    fn assign_depths_is_parent_plus_one() {
        let mut root = ValueNode::new(7).with_type("array").with_child(
            ValueNode::new(0)
                .with_type("object")
                .with_child(ValueNode::new(0).with_type("int")),
        );
        root.assign_depths(0);

        assert_eq!(root.depth, 0);
        assert_eq!(root.children()[0].depth, 1);
        assert_eq!(root.children()[0].children()[0].depth, 2);
    }

    #[test]
    fn deserializes_with_renamed_type() {
        let node: ValueNode = toml::from_str(
            r#"
            name = "x"
            type = "array"
            hints = ["recursion", "blacklist"]

            [[contents]]
            depth = 1
            type = "int"
            value_short = "5"
            "#,
        )
        .unwrap();

        assert_eq!(node.type_name.as_deref(), Some("array"));
        assert!(node.has_hint("recursion"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].value_short.as_deref(), Some("5"));
    }
}
