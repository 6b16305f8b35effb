#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Monospace text rendering for inspected value trees.
//!
//! A tree of [`ValueNode`]s is produced elsewhere (by whatever walks a live
//! object graph). This crate turns that tree into a block of text suitable
//! for logs and terminals:
//!
//! ```text
//! ┌──────────────────┐
//! │ $config          │
//! └──────────────────┘
//! array (2) [
//!     "name" string "demo"
//!     "size" int 3
//! ]
//! ════════════════════
//! ```
//!
//! ## Modules
//!
//! - [`node`] - The value tree being rendered
//! - [`renderer`] - The recursive render engine and its plugin resolver
//! - [`plugins`] - Standard plugins for recursion, depth limits, traces, ...
//! - [`layout`] - Box drawing and indentation
//! - [`text`] - Escaping and display-width aware string helpers
//! - [`hooks`] - Color and path collaborators
//! - [`call_site`] - The "Called from" footer data
//! - [`config`] - Render configuration loaded from TOML
//! - [`errors`] - Error types

pub mod call_site;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod layout;
pub mod node;
pub mod plugins;
pub mod renderer;
pub mod text;

pub use call_site::{CallSite, Callee, CallerFrame};
pub use config::RenderConfig;
pub use errors::{DumpError, DumpResult};
pub use hooks::{ColorHooks, FullPaths, PathShortener, PlainColors};
pub use layout::{box_text, indent, rule};
pub use node::{Container, TraceFrame, ValueNode};
pub use plugins::{BlacklistPlugin, DepthLimitPlugin, NothingPlugin, RecursionPlugin, TracePlugin};
pub use renderer::{PluginKind, PluginRegistry, TextPlugin, TextRenderer};

/// Render `root` followed by the footer, using a fresh renderer.
///
/// Each call gets its own plugin cache, so nothing leaks between
/// unrelated dumps.
pub fn dump(root: &ValueNode, config: &RenderConfig) -> DumpResult<String> {
    let renderer = TextRenderer::new(config.clone())?;
    let mut out = renderer.render(root);
    out.push_str(&renderer.post_render());
    Ok(out)
}
