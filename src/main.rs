use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use compscope::analysis::{analyze_project, Analysis, AnalysisError, ScanOptions};
use compscope::export::{self, json, ComponentReport, ExportFormat, ReportOptions, DEFAULT_COMPONENT_LIMIT};
use compscope::parser;
use compscope::profile::{profile_project, ProfileOptions};
use compscope::ui::{build_component_tree, run_app, App};

const EXIT_STATUS_HELP: &str = "Exit status:\n  \
    0  the report or profile was written\n  \
    1  the project root or its package.json is missing; a {\"error\": ...} document is still printed on stdout\n  \
    2  invalid command-line arguments";

#[derive(Parser)]
#[command(name = "compscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Static component analysis for React projects", long_about = None)]
#[command(after_help = EXIT_STATUS_HELP)]
struct Cli {
    /// Show debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the component usage graph and report structural issues
    Analyze {
        /// Project root to analyze
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: json, markdown or csv
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Maximum number of components listed in the report
        #[arg(short, long, default_value_t = DEFAULT_COMPONENT_LIMIT)]
        limit: usize,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize the project's framework, libraries and component files
    Profile {
        /// Project root containing package.json
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Browse the component tree in the terminal
    View {
        /// Project root to analyze
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Show version information
    Version,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Name shown in reports: the manifest's name, else the directory name.
fn project_name(root: &Path) -> String {
    let from_manifest = match parser::find_in(root) {
        Ok(pkg) => pkg.and_then(|p| p.name),
        Err(e) => {
            log::warn!("Ignoring unreadable package.json: {}", e);
            None
        }
    };

    from_manifest
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.display().to_string())
}

/// Prints `{"error": ...}` to stdout and yields exit status 1.
///
/// Scripts can rely on either signal: the document is always valid JSON
/// and the status is never 0 when it is printed.
fn error_document(message: &str) -> Result<ExitCode> {
    let stdout = io::stdout();
    json::write_error(message, &mut stdout.lock()).context("Failed to write error document")?;
    Ok(ExitCode::FAILURE)
}

/// Runs the analysis, or returns the error document text for a bad root.
fn load_analysis(path: &Path) -> Result<std::result::Result<Analysis, String>> {
    match analyze_project(path, &ScanOptions::components()) {
        Ok(analysis) => Ok(Ok(analysis)),
        Err(e @ AnalysisError::PathNotFound(_)) => Ok(Err(e.to_string())),
        Err(e) => Err(e).with_context(|| format!("Failed to analyze {}", path.display())),
    }
}

fn run_analyze(
    path: &Path,
    format: ExportFormat,
    limit: usize,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let analysis = match load_analysis(path)? {
        Ok(analysis) => analysis,
        Err(message) => return error_document(&message),
    };

    let options = ReportOptions {
        component_limit: limit,
    };
    let report = ComponentReport::new(project_name(path), &analysis, &options);

    match output {
        Some(file) => {
            let handle = File::create(file)
                .with_context(|| format!("Failed to create {}", file.display()))?;
            let mut writer = BufWriter::new(handle);
            export::export(format, &report, &mut writer)
                .and_then(|_| writer.flush())
                .with_context(|| format!("Failed to write {}", file.display()))?;
            log::info!("Wrote {} report to {}", format, file.display());
        }
        None => {
            let stdout = io::stdout();
            export::export(format, &report, &mut stdout.lock())
                .context("Failed to write report")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_profile(path: &Path) -> Result<ExitCode> {
    let profile = match profile_project(path, &ProfileOptions::default()) {
        Ok(profile) => profile,
        Err(e) if e.is_input_error() => return error_document(&e.to_string()),
        Err(e) => return Err(e).with_context(|| format!("Failed to profile {}", path.display())),
    };

    let json = serde_json::to_string_pretty(&profile).context("Failed to serialize profile")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

fn run_view(path: &Path) -> Result<ExitCode> {
    let analysis = match load_analysis(path)? {
        Ok(analysis) => analysis,
        Err(message) => return error_document(&message),
    };
    let mut app = App::new(build_component_tree(&project_name(path), &analysis));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore the terminal even when the event loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("Terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Analyze {
            path,
            format,
            limit,
            output,
        }) => run_analyze(&path, format, limit, output.as_deref()),
        Some(Commands::Profile { path }) => run_profile(&path),
        Some(Commands::View { path }) => run_view(&path),
        Some(Commands::Version) => {
            println!("compscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("compscope - React component analyzer");
            println!("Run 'compscope analyze <path>' to analyze a project");
            println!("Run 'compscope --help' for more information");
            Ok(ExitCode::SUCCESS)
        }
    }
}
