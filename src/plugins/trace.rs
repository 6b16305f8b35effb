//! Stack trace rendering.
//!
//! ```text
//! array (2):
//!     1:  src/app.rs:12
//!         Repo->save(Entity $e)
//!
//!     2:  internal call
//!         main(...)
//!
//! ```

use crate::node::{TraceFrame, ValueNode};
use crate::renderer::{TextPlugin, TextRenderer};
use crate::text::{escape, pad_to_width};

const INTERNAL_CALL: &str = "internal call";

/// Renders each child of a `trace` node as a numbered frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracePlugin;

impl TextPlugin for TracePlugin {
    fn render(&self, renderer: &TextRenderer, node: &ValueNode) -> Option<String> {
        let mut out = String::new();

        if node.depth == 0 {
            out.push_str(&renderer.color_title(renderer.render_title(node)));
            out.push('\n');
        }

        out.push_str(&renderer.render_header(node));
        out.push_str(":\n");

        let indent = " ".repeat((node.depth + 1) * renderer.indent_width());
        let unknown = TraceFrame::default();

        for (i, child) in node.children().iter().enumerate() {
            let frame = child.trace.as_ref().unwrap_or(&unknown);

            let mut desc = indent.clone();
            desc.push_str(&pad_to_width(&format!("{}: ", i + 1), 4));

            match &frame.file {
                Some(file) => desc.push_str(&renderer.ide_link(file, frame.line.unwrap_or(0))),
                None => desc.push_str(INTERNAL_CALL),
            }
            desc.push('\n');
            desc.push_str(&indent);
            desc.push_str("    ");

            if let Some(class) = &frame.class {
                desc.push_str(&escape(class));
                desc.push_str(if frame.object { "->" } else { "::" });
            }

            if let Some(function) = &frame.function {
                desc.push_str(&escape(function));
                desc.push('(');
                match &frame.params {
                    Some(params) => desc.push_str(&escape(params)),
                    None => desc.push_str("..."),
                }
                desc.push(')');
            }

            out.push_str(&renderer.color_type(desc));
            out.push_str("\n\n");
        }

        Some(out)
    }
}
