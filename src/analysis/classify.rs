//! Component classification.
//!
//! Decides whether a source file defines a renderable UI component. This is
//! a text heuristic, not a parse: a file is a component when it declares a
//! function-like binding that later returns markup, or a class extending a
//! `Component` base.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// `function Name` / `const Name` followed anywhere later by `return <` or
/// `return (<`. `(?s)` lets the gap span line breaks.
static FUNCTION_COMPONENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(?:function|const)\s+\w+.*?return\s*\(?\s*<").unwrap()
});

/// `class Name extends Component` or `class Name extends React.Component`.
static CLASS_COMPONENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+\w+\s+extends\s+(?:\w+\.)?Component").unwrap());

/// The declaration shape that made a file count as a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Function or arrow-function component returning markup
    #[serde(rename = "functional")]
    Function,
    /// Class component extending a `Component` base
    Class,
}

impl ComponentKind {
    /// Returns a short label for the component kind.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Function => "functional",
            ComponentKind::Class => "class",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies source text, returning the component kind if it looks like one.
///
/// The function shape is checked first, so a file that both returns markup
/// from a function and declares a class component is reported as
/// [`ComponentKind::Function`].
///
/// # Example
///
/// ```
/// use compscope::analysis::classify::{classify, ComponentKind};
///
/// let source = "export function Card() {\n  return (\n    <div />\n  );\n}";
/// assert_eq!(classify(source), Some(ComponentKind::Function));
/// assert_eq!(classify("export const answer = 42;"), None);
/// ```
pub fn classify(text: &str) -> Option<ComponentKind> {
    if FUNCTION_COMPONENT_RE.is_match(text) {
        Some(ComponentKind::Function)
    } else if CLASS_COMPONENT_RE.is_match(text) {
        Some(ComponentKind::Class)
    } else {
        None
    }
}

/// Returns true if the text appears to define a UI component.
pub fn is_component(text: &str) -> bool {
    classify(text).is_some()
}
