//! Project profiling.
//!
//! Summarizes a React project from its manifest and a census of component
//! files: which framework, state library and styling approach it declares,
//! and where its components live.

mod detect;

pub use detect::{detect_framework, detect_state_management, detect_styling};

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::analysis::{classify, component_name, read_sources, AnalysisError, ComponentKind, ScanOptions};
use crate::parser::{self, ParseError};

/// Default number of components listed in a profile.
pub const DEFAULT_PROFILE_COMPONENT_LIMIT: usize = 20;

/// Default number of dependency names listed in a profile.
pub const DEFAULT_DEPENDENCY_LIMIT: usize = 15;

/// Errors that can occur while profiling a project.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("package.json not found")]
    ManifestNotFound,

    #[error(transparent)]
    Manifest(#[from] ParseError),

    #[error(transparent)]
    Scan(#[from] AnalysisError),
}

impl ProfileError {
    /// Returns true for errors reported as a JSON error document rather
    /// than as a failure of the tool itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ProfileError::PathNotFound(_)
                | ProfileError::ManifestNotFound
                | ProfileError::Scan(AnalysisError::PathNotFound(_))
        )
    }
}

/// Result type for profiling operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Rendering model of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Server-rendered framework (Next.js, Remix)
    Ssr,
    /// Client-only single page app
    Spa,
}

/// The application framework or build tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Next,
    Remix,
    Vite,
    Cra,
    Other,
}

impl Framework {
    /// Returns the rendering model this framework implies.
    pub fn project_type(&self) -> ProjectType {
        match self {
            Framework::Next | Framework::Remix => ProjectType::Ssr,
            _ => ProjectType::Spa,
        }
    }
}

/// The state management library in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateManagement {
    Redux,
    Zustand,
    Jotai,
    Recoil,
    Mobx,
    /// No library declared; built-in context is assumed
    Context,
}

/// The styling approach in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Styling {
    Tailwind,
    StyledComponents,
    Emotion,
    Sass,
    /// No library declared; CSS modules are assumed
    CssModules,
}

/// One file in the component census.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
}

/// Limits applied to the profile's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOptions {
    pub component_limit: usize,
    pub dependency_limit: usize,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            component_limit: DEFAULT_PROFILE_COMPONENT_LIMIT,
            dependency_limit: DEFAULT_DEPENDENCY_LIMIT,
        }
    }
}

/// Summary of a project's stack and component files.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectProfile {
    pub project_type: ProjectType,
    pub framework: Framework,
    pub state_management: StateManagement,
    pub styling: Styling,
    /// Number of component files found, before truncation
    pub component_count: usize,
    pub components: Vec<ComponentSummary>,
    /// Runtime dependency names, alphabetically
    pub dependencies: Vec<String>,
}

/// Lists every script file under `root` that looks like a component.
///
/// Unlike the analysis index, files sharing a stem are all listed.
pub fn component_census(root: &Path) -> ProfileResult<Vec<ComponentSummary>> {
    let sources = read_sources(root, &ScanOptions::scripts())?;

    Ok(sources
        .iter()
        .filter_map(|source| {
            classify(&source.text).map(|kind| ComponentSummary {
                name: component_name(&source.relative_path),
                path: source.relative_path.clone(),
                kind,
            })
        })
        .collect())
}

/// Profiles the project rooted at `root`.
///
/// The root must exist and contain a package.json. An empty `{}` manifest
/// counts as missing. Both checks happen before any source file is read.
pub fn profile_project(root: &Path, options: &ProfileOptions) -> ProfileResult<ProjectProfile> {
    if !root.exists() {
        return Err(ProfileError::PathNotFound(root.display().to_string()));
    }

    let pkg = parser::find_in(root)?
        .filter(|pkg| !pkg.is_empty())
        .ok_or(ProfileError::ManifestNotFound)?;
    let framework = detect_framework(&pkg);

    let mut components = component_census(root)?;
    let component_count = components.len();
    components.truncate(options.component_limit);

    log::debug!(
        "Profiled {}: {:?}, {} component files",
        root.display(),
        framework,
        component_count
    );

    Ok(ProjectProfile {
        project_type: framework.project_type(),
        framework,
        state_management: detect_state_management(&pkg),
        styling: detect_styling(&pkg),
        component_count,
        components,
        dependencies: pkg
            .dependency_names()
            .take(options.dependency_limit)
            .map(str::to_string)
            .collect(),
    })
}
