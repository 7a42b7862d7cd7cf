//! Per-component facts and the project-wide component index.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use super::classify::{classify, ComponentKind};
use super::extract::{extract, ExtractedFacts};

/// Everything known about one component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFacts {
    /// Logical component name (file stem, case preserved)
    pub name: String,
    /// Path relative to the project root, `/`-separated
    pub relative_path: String,
    /// Declaration shape that classified the file
    pub kind: ComponentKind,
    /// Identifiers imported from relative paths, in text order
    pub declared_imports: Vec<String>,
    /// Capitalized markup tags referenced by the file
    pub referenced_tags: BTreeSet<String>,
    /// Destructured prop names of the component's declaration
    pub declared_params: Vec<String>,
}

impl FileFacts {
    /// Creates facts from already-extracted parts.
    pub fn new(
        name: impl Into<String>,
        relative_path: impl Into<String>,
        kind: ComponentKind,
        extracted: ExtractedFacts,
    ) -> Self {
        Self {
            name: name.into(),
            relative_path: relative_path.into(),
            kind,
            declared_imports: extracted.declared_imports,
            referenced_tags: extracted.referenced_tags,
            declared_params: extracted.declared_params,
        }
    }

    /// Classifies and extracts a file in one step.
    ///
    /// Returns `None` when the text is not a component; that is an
    /// exclusion, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use compscope::analysis::FileFacts;
    ///
    /// let facts = FileFacts::from_source("src/Badge.tsx", "const Badge = () => { return <span /> }");
    /// assert_eq!(facts.unwrap().name, "Badge");
    ///
    /// assert!(FileFacts::from_source("src/util.ts", "export const x = 1;").is_none());
    /// ```
    pub fn from_source(relative_path: &str, text: &str) -> Option<Self> {
        let kind = classify(text)?;
        let name = component_name(relative_path);
        let extracted = extract(text, &name);
        Some(Self::new(name, relative_path, kind, extracted))
    }

    /// Number of props the component destructures.
    pub fn prop_count(&self) -> usize {
        self.declared_params.len()
    }
}

/// Derives a component's logical name from its path: the file stem.
///
/// `src/components/Button.tsx` becomes `Button`; `Menu.Item.tsx` becomes
/// `Menu.Item`.
pub fn component_name(relative_path: &str) -> String {
    Path::new(relative_path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Component name -> facts, in insertion order.
///
/// Two files with the same stem share one entry: the later file's facts
/// replace the earlier ones while the entry keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    components: Vec<FileFacts>,
    positions: HashMap<String, usize>,
}

impl ComponentIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts facts, replacing any existing entry with the same name.
    ///
    /// Returns the replaced facts, if any.
    pub fn insert(&mut self, facts: FileFacts) -> Option<FileFacts> {
        if let Some(&pos) = self.positions.get(&facts.name) {
            log::debug!(
                "Component name collision: {} replaces {}",
                facts.relative_path,
                self.components[pos].relative_path
            );
            return Some(std::mem::replace(&mut self.components[pos], facts));
        }

        self.positions.insert(facts.name.clone(), self.components.len());
        self.components.push(facts);
        None
    }

    /// Looks up a component by name.
    pub fn get(&self, name: &str) -> Option<&FileFacts> {
        self.positions.get(name).map(|&pos| &self.components[pos])
    }

    /// Returns true if a component with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Position of a component in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Iterates components in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileFacts> {
        self.components.iter()
    }

    /// Iterates component names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromIterator<FileFacts> for ComponentIndex {
    fn from_iter<I: IntoIterator<Item = FileFacts>>(iter: I) -> Self {
        let mut index = Self::new();
        for facts in iter {
            index.insert(facts);
        }
        index
    }
}

impl<'a> IntoIterator for &'a ComponentIndex {
    type Item = &'a FileFacts;
    type IntoIter = std::slice::Iter<'a, FileFacts>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
