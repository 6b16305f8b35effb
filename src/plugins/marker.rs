//! Plugins that replace a node's children with a single marker word.

use crate::node::ValueNode;
use crate::renderer::{TextPlugin, TextRenderer};

/// Title (root only), header, then the marker in place of any children.
fn render_marked(renderer: &TextRenderer, node: &ValueNode, marker: &str) -> String {
    let mut out = String::new();

    if node.depth == 0 {
        out.push_str(&renderer.color_title(renderer.render_title(node)));
        out.push('\n');
    }

    out.push_str(&renderer.render_header(node));
    out.push(' ');
    out.push_str(&renderer.color_value(marker.to_string()));
    out.push('\n');
    out
}

/// A value already being rendered further up the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursionPlugin;

impl TextPlugin for RecursionPlugin {
    fn render(&self, renderer: &TextRenderer, node: &ValueNode) -> Option<String> {
        Some(render_marked(renderer, node, "RECURSION"))
    }
}

/// A value the producer stopped descending into.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthLimitPlugin;

impl TextPlugin for DepthLimitPlugin {
    fn render(&self, renderer: &TextRenderer, node: &ValueNode) -> Option<String> {
        Some(render_marked(renderer, node, "DEPTH LIMIT"))
    }
}

/// A value whose type is configured never to be expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlacklistPlugin;

impl TextPlugin for BlacklistPlugin {
    fn render(&self, renderer: &TextRenderer, node: &ValueNode) -> Option<String> {
        Some(render_marked(renderer, node, "BLACKLISTED"))
    }
}
