//! The recursive render engine.
//!
//! [`TextRenderer::render`] first offers each node to the plugin chosen by
//! its hints. Only when no plugin claims the node does it fall back to the
//! default layout:
//!
//! ```text
//! ┌────────────┐        title box, root only
//! │ $user      │
//! └────────────┘
//! object (User) (       header + children block
//!     public "id" => int 7
//!     public "tags" => array (0) []
//! )
//! ```
//!
//! The engine has no depth guard of its own. Producers and plugins (see
//! `depth_limit` and `recursion`) are what keep a tree finite.

mod plugin;

pub use plugin::{PluginKind, PluginRegistry, TextPlugin};

use crate::call_site::CallSite;
use crate::config::RenderConfig;
use crate::errors::DumpResult;
use crate::hooks::{ColorHooks, FullPaths, PathShortener, PlainColors};
use crate::layout::{box_text, indent, rule};
use crate::node::ValueNode;
use crate::text::{escape, quote, truncate_chars};
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

const FOOTER_RULE: char = '═';
const UNNAMED_TITLE: &str = "literal";

/// Renders value trees to plain (optionally decorated) text.
///
/// A renderer caches the plugins it instantiates. Use one renderer per
/// dump, or call [`clear_plugin_cache`](Self::clear_plugin_cache) between
/// unrelated dumps.
pub struct TextRenderer {
    config: RenderConfig,
    registry: Arc<PluginRegistry>,
    colors: Box<dyn ColorHooks>,
    paths: Box<dyn PathShortener>,
    call_site: CallSite,
    plugins: RefCell<HashMap<&'static str, Rc<dyn TextPlugin>>>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::with_valid_config(RenderConfig::default())
    }
}

impl TextRenderer {
    /// Create a renderer using the standard plugins.
    pub fn new(config: RenderConfig) -> DumpResult<Self> {
        config.validate()?;
        log::debug!(
            "text renderer: width {}, indent {}, strlen_max {}",
            config.header_width,
            config.indent_width,
            config.strlen_max
        );
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: RenderConfig) -> Self {
        Self {
            config,
            registry: PluginRegistry::shared_standard(),
            colors: Box::new(PlainColors),
            paths: Box::new(FullPaths),
            call_site: CallSite::default(),
            plugins: RefCell::new(HashMap::new()),
        }
    }

    /// Replace the plugin registry. Drops any cached plugins.
    pub fn with_registry(mut self, registry: Arc<PluginRegistry>) -> Self {
        self.registry = registry;
        self.plugins.get_mut().clear();
        self
    }

    pub fn with_colors(mut self, colors: impl ColorHooks + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    pub fn with_path_shortener(mut self, paths: impl PathShortener + 'static) -> Self {
        self.paths = Box::new(paths);
        self
    }

    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = call_site;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn header_width(&self) -> usize {
        self.config.header_width
    }

    pub fn indent_width(&self) -> usize {
        self.config.indent_width
    }

    /// Forget every instantiated plugin.
    pub fn clear_plugin_cache(&mut self) {
        self.plugins.get_mut().clear();
    }

    /// Render `node` and everything below it.
    pub fn render(&self, node: &ValueNode) -> String {
        if let Some(plugin) = self.plugin_for(node) {
            match plugin.render(self, node) {
                Some(out) if !out.is_empty() => return out,
                _ => log::trace!("plugin declined node at depth {}", node.depth),
            }
        }

        let mut out = String::new();

        if node.depth == 0 {
            out.push_str(&self.color_title(self.render_title(node)));
            out.push('\n');
        }

        out.push_str(&self.render_header(node));
        out.push_str(&self.render_children(node));
        out.push('\n');

        out
    }

    /// Box the node's name, or `literal` for unnamed values.
    pub fn render_title(&self, node: &ValueNode) -> String {
        let name = node.name.as_deref().unwrap_or(UNNAMED_TITLE);
        self.box_text(name, self.config.header_width)
    }

    pub fn box_text(&self, text: &str, width: usize) -> String {
        box_text(text, width)
    }

    /// The one-line summary of a node, indented for its depth.
    ///
    /// Modifiers, name and operator describe the node's place in its
    /// parent, so the root only gets type, size and value.
    pub fn render_header(&self, node: &ValueNode) -> String {
        let mut parts: Vec<String> = Vec::new();

        if node.depth > 0 {
            if let Some(modifiers) = &node.modifiers {
                parts.push(modifiers.clone());
            }

            if let Some(name) = &node.name {
                parts.push(escape(&quote(name)).into_owned());

                if let Some(operator) = &node.operator {
                    parts.push(escape(operator).into_owned());
                }
            }
        }

        if let Some(type_name) = &node.type_name {
            parts.push(self.color_type(escape(type_name).into_owned()));
        }

        if let Some(size) = &node.size {
            parts.push(format!("({})", escape(size)));
        }

        if let Some(value) = &node.value_short {
            let value = self.truncate_value(value);
            parts.push(self.color_value(escape(&value).into_owned()));
        }

        let mut out = indent(node.depth, self.config.indent_width);
        out.push_str(&parts.join(" "));
        out
    }

    /// The bracketed block of an array's or object's children.
    ///
    /// Leaves get nothing at all; an empty container still gets `[]`/`()`.
    pub fn render_children(&self, node: &ValueNode) -> String {
        let container = match node.container() {
            Some(container) => container,
            None => return String::new(),
        };

        let children: String = node.children().iter().map(|child| self.render(child)).collect();

        let mut out = String::from(container.open());
        if !children.is_empty() {
            out.push('\n');
            out.push_str(&children);
            out.push_str(&indent(node.depth, self.config.indent_width));
        }
        out.push(container.close());
        out
    }

    /// The rule (and optional call-site line) that closes a dump.
    pub fn post_render(&self) -> String {
        let mut out = rule(FOOTER_RULE, self.config.header_width);

        if self.config.display_called_from {
            out.push('\n');
            out.push_str(&self.called_from());
            out.push('\n');
        }

        self.color_title(out)
    }

    /// `Called from file:line [Class->caller()]`, with unknown parts left out.
    pub fn called_from(&self) -> String {
        let mut out = String::new();

        if let Some(callee) = &self.call_site.callee {
            out.push_str("Called from ");
            out.push_str(&self.ide_link(&callee.file, callee.line));
        }

        let caller = self
            .call_site
            .caller
            .as_ref()
            .map(|frame| frame.describe())
            .unwrap_or_default();

        if !caller.is_empty() {
            out.push_str(" [");
            out.push_str(&caller);
            out.push(']');
        }

        out
    }

    /// `file:line` with the path shortened and escaped.
    pub fn ide_link(&self, file: &str, line: u32) -> String {
        format!("{}:{}", escape(&self.paths.shorten_path(file)), line)
    }

    pub fn color_value(&self, text: String) -> String {
        self.colors.color_value(text)
    }

    pub fn color_type(&self, text: String) -> String {
        self.colors.color_type(text)
    }

    pub fn color_title(&self, text: String) -> String {
        self.colors.color_title(text)
    }

    /// Cut a raw value to `strlen_max` chars plus an ellipsis.
    ///
    /// This runs before escaping, so an escape sequence is never split but
    /// the escaped result can be longer than `strlen_max + 3`.
    fn truncate_value<'v>(&self, value: &'v str) -> Cow<'v, str> {
        let max = self.config.strlen_max;
        if max == 0 || value.chars().count() <= max {
            return Cow::Borrowed(value);
        }
        Cow::Owned(format!("{}...", truncate_chars(value, max)))
    }

    /// The cached plugin for this node's hints, instantiated on first use.
    fn plugin_for(&self, node: &ValueNode) -> Option<Rc<dyn TextPlugin>> {
        let kind = self.registry.resolve(&node.hints)?;
        let mut cache = self.plugins.borrow_mut();
        let plugin = cache.entry(kind.id()).or_insert_with(|| {
            log::trace!("instantiating text plugin {}", kind.id());
            kind.instantiate()
        });
        Some(Rc::clone(plugin))
    }

    #[cfg(test)]
    pub(crate) fn cached_plugins(&self) -> usize {
        self.plugins.borrow().len()
    }
}
