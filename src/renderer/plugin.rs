//! Plugin trait and the ordered hint registry.

use super::TextRenderer;
use crate::node::ValueNode;
use crate::plugins::{BlacklistPlugin, DepthLimitPlugin, NothingPlugin, RecursionPlugin, TracePlugin};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::Arc;

/// A specialized renderer for nodes carrying a particular hint.
///
/// The renderer is handed back on every call so a plugin can reuse the
/// title, header and child rendering of the default path.
pub trait TextPlugin {
    /// Render `node`, or return `None` (or an empty string) to fall back to
    /// default rendering.
    fn render(&self, renderer: &TextRenderer, node: &ValueNode) -> Option<String>;
}

fn construct<P>() -> Rc<dyn TextPlugin>
where
    P: TextPlugin + Default + 'static,
{
    Rc::new(P::default())
}

/// Identifies a plugin type and knows how to build one.
///
/// Two registry entries with the same id share a cached instance.
#[derive(Debug, Clone, Copy)]
pub struct PluginKind {
    id: &'static str,
    construct: fn() -> Rc<dyn TextPlugin>,
}

impl PluginKind {
    /// Kind for a default-constructible plugin, identified by its type name.
    pub fn of<P>() -> Self
    where
        P: TextPlugin + Default + 'static,
    {
        Self {
            id: std::any::type_name::<P>(),
            construct: construct::<P>,
        }
    }

    /// Kind with an explicit id and constructor.
    pub fn new(id: &'static str, construct: fn() -> Rc<dyn TextPlugin>) -> Self {
        Self { id, construct }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub(crate) fn instantiate(&self) -> Rc<dyn TextPlugin> {
        (self.construct)()
    }
}

static STANDARD: Lazy<Arc<PluginRegistry>> = Lazy::new(|| Arc::new(PluginRegistry::standard()));

/// Hint tags mapped to plugin kinds, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    entries: Vec<(String, PluginKind)>,
}

impl PluginRegistry {
    /// A registry with no plugins; every node renders the default way.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard text plugins.
    pub fn standard() -> Self {
        Self::empty()
            .with("blacklist", PluginKind::of::<BlacklistPlugin>())
            .with("depth_limit", PluginKind::of::<DepthLimitPlugin>())
            .with("nothing", PluginKind::of::<NothingPlugin>())
            .with("recursion", PluginKind::of::<RecursionPlugin>())
            .with("trace", PluginKind::of::<TracePlugin>())
    }

    /// Process-wide copy of [`standard`](Self::standard), built once.
    pub fn shared_standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Map `tag` to `kind`.
    ///
    /// A new tag goes to the end of the order. Re-registering a tag swaps
    /// its kind in place, keeping its position.
    pub fn register(&mut self, tag: impl Into<String>, kind: PluginKind) {
        let tag = tag.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == tag) {
            Some(entry) => entry.1 = kind,
            None => self.entries.push((tag, kind)),
        }
    }

    /// Takes self
    pub fn with(mut self, tag: impl Into<String>, kind: PluginKind) -> Self {
        self.register(tag, kind);
        self
    }

    /// Registered tags in order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The plugin for a node with `hints`, if any.
    ///
    /// When several tags match, the one registered last wins, so a specific
    /// category registered later overrides a general one.
    pub fn resolve(&self, hints: &BTreeSet<String>) -> Option<PluginKind> {
        self.entries
            .iter()
            .filter(|(tag, _)| hints.contains(tag))
            .map(|(_, kind)| *kind)
            .last()
    }
}
