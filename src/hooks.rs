//! Collaborators the renderer calls out to.
//!
//! Theming and path shortening live outside this crate. The renderer only
//! needs these two seams, and ships identity implementations of both.

/// Decorates rendered fragments, e.g. with ANSI escape sequences.
///
/// Implementations may wrap text but must not change its structure: no
/// added or removed line breaks, no reordering.
pub trait ColorHooks {
    /// Scalar values and plugin markers like `RECURSION`.
    fn color_value(&self, text: String) -> String {
        text
    }

    /// Type names and trace frames.
    fn color_type(&self, text: String) -> String {
        text
    }

    /// Title boxes and the footer.
    fn color_title(&self, text: String) -> String {
        text
    }
}

/// No decoration at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainColors;

impl ColorHooks for PlainColors {}

/// Shortens source paths before they are shown in call-site links.
pub trait PathShortener {
    fn shorten_path(&self, path: &str) -> String;
}

/// Shows paths exactly as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPaths;

impl PathShortener for FullPaths {
    fn shorten_path(&self, path: &str) -> String {
        path.to_string()
    }
}

impl<F> PathShortener for F
where
    F: Fn(&str) -> String,
{
    fn shorten_path(&self, path: &str) -> String {
        self(path)
    }
}
