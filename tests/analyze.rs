//! End-to-end analysis of on-disk projects.

use std::fs;
use std::path::Path;
use std::process::Command;

use compscope::analysis::{analyze_project, AnalysisError, ScanOptions};
use compscope::export::{export_to_string, ComponentReport, ExportFormat, ReportOptions};
use compscope::issues::IssueKind;
use serde_json::{json, Value};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn layout_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "src/App.tsx",
        "import Header from './Header';\nimport { Footer } from './Footer';\n\n\
         export default function App() {\n  return (\n    <main>\n      <Header />\n      <Footer />\n    </main>\n  );\n}\n",
    );
    write(
        root,
        "src/Header.tsx",
        "export const Header = () => {\n  return <header>Shop</header>;\n};\n",
    );
    write(
        root,
        "src/Footer.jsx",
        "export function Footer() {\n  return <footer />;\n}\n",
    );
    write(
        root,
        "src/widgets/Widget.tsx",
        "export function Widget() {\n  return <div />;\n}\n",
    );
    write(
        root,
        "src/Button.tsx",
        "export function Button({label, onClick, variant, size, disabled, ariaLabel}) {\n  return <button />;\n}\n",
    );
    write(root, "src/utils.ts", "export const sum = (a, b) => a + b;\n");
    write(root, "src/hooks.tsx", "export function useToggle() { return useState(false); }\n");
    write(
        root,
        "node_modules/lib/Hidden.tsx",
        "export function Hidden() { return <App />; }\n",
    );
    dir
}

fn report_json(root: &Path) -> Value {
    let analysis = analyze_project(root, &ScanOptions::components()).unwrap();
    let report = ComponentReport::new("shop", &analysis, &ReportOptions::default());
    serde_json::from_str(&export_to_string(ExportFormat::Json, &report).unwrap()).unwrap()
}

fn component<'a>(report: &'a Value, name: &str) -> &'a Value {
    report["components"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .unwrap_or_else(|| panic!("component {} missing", name))
}

#[test]
fn test_layout_usage_graph() {
    let dir = layout_project();
    let report = report_json(dir.path());

    assert_eq!(report["component_count"], 5);

    let app = component(&report, "App");
    assert_eq!(app["children"], json!(["Footer", "Header"]));
    assert_eq!(component(&report, "Header")["used_by"], json!(["App"]));
    assert_eq!(component(&report, "Footer")["used_by"], json!(["App"]));
    assert_eq!(report["shared_components"], json!([]));
}

#[test]
fn test_layout_issues() {
    let dir = layout_project();
    let report = report_json(dir.path());

    let issues = report["issues"].as_array().unwrap();
    assert_eq!(
        issues[0],
        json!({
            "type": "prop_drilling",
            "location": "src/Button.tsx",
            "details": "Button receives 6 props - consider Context or composition"
        })
    );

    let orphans: Vec<&str> = issues
        .iter()
        .filter(|i| i["type"] == "orphan_component")
        .map(|i| i["location"].as_str().unwrap())
        .collect();
    assert_eq!(orphans, vec!["src/Button.tsx", "src/widgets/Widget.tsx"]);
}

#[test]
fn test_non_components_and_ignored_dirs_contribute_nothing() {
    let dir = layout_project();
    let analysis = analyze_project(dir.path(), &ScanOptions::components()).unwrap();

    assert!(!analysis.index.contains("utils"));
    assert!(!analysis.index.contains("hooks"));
    assert!(!analysis.index.contains("Hidden"));
    // Hidden would otherwise make App a used component
    assert!(analysis.graph.used_by("App").is_empty());
}

#[test]
fn test_issue_kinds_match_graph() {
    let dir = layout_project();
    let analysis = analyze_project(dir.path(), &ScanOptions::components()).unwrap();

    for issue in &analysis.issues {
        let facts = analysis
            .index
            .iter()
            .find(|f| f.relative_path == issue.location)
            .unwrap();
        match issue.kind {
            IssueKind::OrphanComponent => assert!(!analysis.graph.is_used(&facts.name)),
            IssueKind::PropDrilling => assert!(facts.prop_count() > 5),
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = layout_project();
    let render = || {
        let analysis = analyze_project(dir.path(), &ScanOptions::components()).unwrap();
        let report = ComponentReport::new("shop", &analysis, &ReportOptions::default());
        export_to_string(ExportFormat::Json, &report).unwrap()
    };

    assert_eq!(render(), render());
}

#[test]
fn test_report_truncates_to_thirty_components() {
    let dir = TempDir::new().unwrap();
    for i in 0..35 {
        write(
            dir.path(),
            &format!("src/Item{:02}.tsx", i),
            &format!("export function Item{:02}() {{ return <li />; }}", i),
        );
    }
    let report = report_json(dir.path());

    assert_eq!(report["component_count"], 35);
    assert_eq!(report["components"].as_array().unwrap().len(), 30);
    assert_eq!(report["components"][0]["name"], "Item00");
    assert_eq!(report["issues"].as_array().unwrap().len(), 35);
}

#[test]
fn test_missing_root_is_path_not_found() {
    let err = analyze_project(Path::new("/no/such/project"), &ScanOptions::components()).unwrap_err();

    assert!(matches!(err, AnalysisError::PathNotFound(_)));
    assert_eq!(err.to_string(), "Path not found: /no/such/project");
}

#[test]
fn test_cli_missing_root_prints_error_document() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let output = Command::new(env!("CARGO_BIN_EXE_compscope"))
        .arg("analyze")
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        json!({ "error": format!("Path not found: {}", missing.display()) })
    );
}

#[test]
fn test_cli_analyze_markdown() {
    let dir = layout_project();

    let output = Command::new(env!("CARGO_BIN_EXE_compscope"))
        .args(["analyze", "--format", "md"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let markdown = String::from_utf8(output.stdout).unwrap();
    assert!(markdown.starts_with("# Component Analysis Report"));
    assert!(markdown.contains("| Components | 5 |"));
}

#[test]
fn test_cli_profile_without_manifest() {
    let dir = layout_project();

    let output = Command::new(env!("CARGO_BIN_EXE_compscope"))
        .arg("profile")
        .arg(dir.path())
        .output()
        .unwrap();

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, json!({ "error": "package.json not found" }));
}

#[test]
fn test_cli_help_documents_exit_status() {
    let output = Command::new(env!("CARGO_BIN_EXE_compscope"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let help = String::from_utf8(output.stdout).unwrap();
    assert!(help.contains("Exit status:"));
    assert!(help.contains(r#"1  the project root or its package.json is missing"#));
}

#[test]
fn test_cli_profile_empty_manifest_exits_with_error_document() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "package.json", "{}");

    let output = Command::new(env!("CARGO_BIN_EXE_compscope"))
        .arg("profile")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, json!({ "error": "package.json not found" }));
}
