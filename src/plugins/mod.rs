//! Standard text plugins.
//!
//! These are registered by [`PluginRegistry::standard`](crate::PluginRegistry::standard)
//! under the hint tags `blacklist`, `depth_limit`, `nothing`, `recursion`
//! and `trace`.

mod marker;
mod nothing;
mod trace;

pub use marker::{BlacklistPlugin, DepthLimitPlugin, RecursionPlugin};
pub use nothing::NothingPlugin;
pub use trace::TracePlugin;
