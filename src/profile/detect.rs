use super::{Framework, StateManagement, Styling};
use crate::parser::PackageJson;

/// Ordered detection rules: the first rule whose packages appear wins.
type Rules<T> = &'static [(&'static [&'static str], T)];

const FRAMEWORK_RULES: Rules<Framework> = &[
    (&["next"], Framework::Next),
    (&["@remix-run/react"], Framework::Remix),
    (&["vite"], Framework::Vite),
    (&["react-scripts"], Framework::Cra),
];

const STATE_RULES: Rules<StateManagement> = &[
    (&["redux", "@reduxjs/toolkit"], StateManagement::Redux),
    (&["zustand"], StateManagement::Zustand),
    (&["jotai"], StateManagement::Jotai),
    (&["recoil"], StateManagement::Recoil),
    (&["mobx"], StateManagement::Mobx),
];

const STYLING_RULES: Rules<Styling> = &[
    (&["tailwindcss"], Styling::Tailwind),
    (&["styled-components"], Styling::StyledComponents),
    (&["@emotion/react"], Styling::Emotion),
    (&["sass", "node-sass"], Styling::Sass),
];

fn first_match<T: Copy>(pkg: &PackageJson, rules: Rules<T>, fallback: T) -> T {
    rules
        .iter()
        .find(|(packages, _)| pkg.has_any(packages))
        .map_or(fallback, |(_, value)| *value)
}

/// Detects the framework from declared dependencies.
pub fn detect_framework(pkg: &PackageJson) -> Framework {
    first_match(pkg, FRAMEWORK_RULES, Framework::Other)
}

/// Detects the state management library from declared dependencies.
pub fn detect_state_management(pkg: &PackageJson) -> StateManagement {
    first_match(pkg, STATE_RULES, StateManagement::Context)
}

/// Detects the styling approach from declared dependencies.
pub fn detect_styling(pkg: &PackageJson) -> Styling {
    first_match(pkg, STYLING_RULES, Styling::CssModules)
}
