use crate::node::ValueNode;
use crate::renderer::{TextPlugin, TextRenderer};

const NO_ARGUMENT: &str = "No argument";

/// A dump call made without any value.
///
/// Only meaningful at the root; anywhere else it declines and the node
/// renders normally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NothingPlugin;

impl TextPlugin for NothingPlugin {
    fn render(&self, renderer: &TextRenderer, node: &ValueNode) -> Option<String> {
        if node.depth != 0 {
            return None;
        }

        let mut out = renderer.color_title(renderer.box_text(NO_ARGUMENT, renderer.header_width()));
        out.push('\n');
        Some(out)
    }
}
