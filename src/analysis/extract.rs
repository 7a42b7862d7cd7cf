//! Structural fact extraction for a single component file.
//!
//! Everything here is a pure function of the file text (and, for props, the
//! component's own name). Nothing looks at other files; resolving names
//! against the rest of the project is the graph builder's job.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// `import { A, B as C } from './x'` (group 1) or `import X from './x'`
/// (group 2), with the module specifier in group 3.
static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+(?:\{([^}]+)\}|(\w+))\s+from\s+['"]([^'"]+)['"]"#).unwrap()
});

/// `<Name` or `<Name.Member`, both segments uppercase-led.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([A-Z][a-zA-Z0-9]*(?:\.[A-Z][a-zA-Z0-9]*)?)").unwrap());

static ALIAS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+as\s+").unwrap());

/// Facts pulled out of one file's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFacts {
    /// Identifiers imported from relative (`.`-prefixed) modules, in text order
    pub declared_imports: Vec<String>,
    /// Capitalized markup tags referenced anywhere in the file
    pub referenced_tags: BTreeSet<String>,
    /// Destructured prop names of the component's own declaration
    pub declared_params: Vec<String>,
}

/// Extracts imports, referenced tags and declared props from a file.
///
/// `name` is the component's logical name (the file stem) and is only used
/// to locate its own declaration for prop extraction.
///
/// # Example
///
/// ```
/// use compscope::analysis::extract::extract;
///
/// let source = r#"
/// import { Header } from './Header';
/// export function Page({ title, children }) {
///   return <Header title={title}>{children}</Header>;
/// }
/// "#;
///
/// let facts = extract(source, "Page");
/// assert_eq!(facts.declared_imports, vec!["Header"]);
/// assert!(facts.referenced_tags.contains("Header"));
/// assert_eq!(facts.declared_params, vec!["title", "children"]);
/// ```
pub fn extract(text: &str, name: &str) -> ExtractedFacts {
    ExtractedFacts {
        declared_imports: extract_imports(text),
        referenced_tags: extract_tags(text),
        declared_params: extract_params(text, name),
    }
}

/// Extracts identifiers imported from same-project relative paths.
///
/// Package imports are skipped since they can never resolve to a local
/// component. Aliased named imports keep the original exported name.
/// Duplicates are kept; the result mirrors the text, not the module graph.
pub fn extract_imports(text: &str) -> Vec<String> {
    let mut imports = Vec::new();

    for caps in IMPORT_RE.captures_iter(text) {
        let Some(source) = caps.get(3) else {
            continue;
        };
        if !source.as_str().starts_with('.') {
            continue;
        }

        if let Some(named) = caps.get(1) {
            for entry in named.as_str().split(',') {
                let original = ALIAS_RE.split(entry.trim()).next().unwrap_or("").trim();
                if !original.is_empty() {
                    imports.push(original.to_string());
                }
            }
        }

        if let Some(default) = caps.get(2) {
            imports.push(default.as_str().to_string());
        }
    }

    imports
}

/// Extracts the set of capitalized markup tags, e.g. `Button` or `Menu.Item`.
pub fn extract_tags(text: &str) -> BTreeSet<String> {
    TAG_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts the destructured prop names of the component called `name`.
///
/// Recognizes `function Name({ a, b })`, `const Name = ({ a, b }) => ...`
/// and `const Name = (props) => ({ a, b })`-style outer patterns. Default
/// values (`a = 1`) and type annotations (`a: string`) are stripped.
/// Returns an empty list when no such pattern is found.
pub fn extract_params(text: &str, name: &str) -> Vec<String> {
    let pattern = String::from(r"(?:function|const)\s+")
        + &regex::escape(name)
        + r"\s*[=:]?\s*(?:\([^)]*\)\s*=>)?\s*\(?\s*\{\s*([^}]+)\s*\}";

    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            log::debug!("Skipping prop extraction for {}: {}", name, e);
            return Vec::new();
        }
    };

    let Some(body) = re.captures(text).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    body.as_str()
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            let without_default = entry.split('=').next().unwrap_or("");
            let without_type = without_default.split(':').next().unwrap_or("");
            without_type.trim().to_string()
        })
        .filter(|param| !param.is_empty())
        .collect()
}
