//! Core types for `.toml` fixture files.
//!
//! ```toml
//! title = "Array of two ints"
//! expected = '''
//! ┌──────────┐
//! │ literal  │
//! └──────────┘
//! array (2) [
//!     "0" int 1
//!     "1" int 2
//! ]
//! '''
//!
//! [config]
//! header_width = 12
//!
//! [root]
//! type = "array"
//! size = "2"
//!
//! [[root.contents]]
//! name = "0"
//! type = "int"
//! value_short = "1"
//! ```
//!
//! Depths are never written by hand: the root is placed at 0 and each child
//! one level below its parent when the fixture is parsed.

use crate::errors::{SpecError, SpecResult};
use layered_dump::{CallSite, RenderConfig, ValueNode};
use serde::{Deserialize, Serialize};

/// A parsed fixture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpFixture {
    /// Optional human readable title
    #[serde(default)]
    pub title: Option<String>,
    /// Append the footer (`post_render`) to the rendered tree
    #[serde(default)]
    pub footer: bool,
    /// Exact expected output
    pub expected: String,
    /// Render settings; missing keys use the defaults
    #[serde(default)]
    pub config: RenderConfig,
    /// Call-site context for the footer
    #[serde(default)]
    pub call_site: CallSite,
    /// The tree to render
    pub root: ValueNode,
}

/// Parse fixture text and normalize its tree's depths.
pub fn parse_fixture(content: &str) -> SpecResult<DumpFixture> {
    let mut fixture: DumpFixture = toml::from_str(content).map_err(|e| SpecError::Parse {
        message: e.to_string(),
    })?;
    fixture.root.assign_depths(0);
    Ok(fixture)
}
