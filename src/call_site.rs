//! Where a dump was requested from, for the footer.

use serde::{Deserialize, Serialize};

/// Calls that pull in a file rather than invoke a function. They are not
/// useful as a caller description.
const INCLUSION_PSEUDO_CALLS: &[&str] = &["include", "include_once", "require", "require_once"];

/// Source location of the dump call itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callee {
    pub file: String,
    pub line: u32,
}

/// The frame that contained the dump call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerFrame {
    #[serde(default)]
    pub class: Option<String>,
    /// `->` or `::`
    #[serde(default)]
    pub call_type: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
}

/// Call-site context shown under a rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    #[serde(default)]
    pub callee: Option<Callee>,
    #[serde(default)]
    pub caller: Option<CallerFrame>,
}

impl CallSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callee(mut self, file: impl Into<String>, line: u32) -> Self {
        self.callee = Some(Callee {
            file: file.into(),
            line,
        });
        self
    }

    pub fn with_caller(mut self, caller: CallerFrame) -> Self {
        self.caller = Some(caller);
        self
    }
}

impl CallerFrame {
    /// `Class->method()`, with any missing part left out.
    ///
    /// Returns an empty string when nothing worth showing is known.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if let Some(class) = &self.class {
            out.push_str(class);
        }
        if let Some(call_type) = &self.call_type {
            out.push_str(call_type);
        }
        if let Some(function) = &self.function {
            if !INCLUSION_PSEUDO_CALLS.contains(&function.as_str()) {
                out.push_str(function);
                out.push_str("()");
            }
        }
        out
    }
}
