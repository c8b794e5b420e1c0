use clap::{Parser, Subcommand};
use docs_lint::check::{self, CheckError};
use docs_lint::config::{self, LintConfig};
use docs_lint::{output, schema, site};
use std::path::PathBuf;
use std::process::ExitCode;

/// Findings were reported and `--advisory` was not given.
const EXIT_FINDINGS: u8 = 1;
/// `docs.json` or `docs-lint.toml` could not be loaded.
const EXIT_LOAD: u8 = 2;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docs-lint")]
#[command(about = "Check a docs.json documentation site for structural problems")]
#[command(long_about = "\
Check a docs.json documentation site for structural problems

Checks, in order:
  Schema   docs.json has name, logo, favicon, colors, theme, navigation;
           theme is a known theme; navigation is a group array or has 'tabs'
  Missing  every page in navigation has a content file on disk
  Orphans  every content file is in navigation (index is exempt)
  Links    every internal [label](target) link points at a known page

Exit status:
  0  no errors (orphans are warnings unless orphans_are_errors is set)
  1  schema errors, missing pages, or broken links were found
  2  docs.json or docs-lint.toml could not be loaded

Run 'docs-lint gen-config' to print a documented docs-lint.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project root containing docs.json
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Navigation config file, relative to the root (overrides docs-lint.toml)
    #[arg(long, global = true)]
    docs_config: Option<String>,

    /// Report findings but always exit 0 unless loading fails
    #[arg(long, global = true)]
    advisory: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every check (default)
    Check,
    /// Validate docs.json schema only
    Schema,
    /// List navigation pages and content files
    Pages,
    /// Print a stock docs-lint.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Check) {
        Command::Check => {
            let lint_config = match settings(&cli) {
                Ok(c) => c,
                Err(code) => return Ok(code),
            };
            let report = match check::run(&cli.root, &lint_config) {
                Ok(report) => report,
                Err(CheckError::Load(e)) => {
                    output::print_banner();
                    return Ok(load_failed(&e, &lint_config));
                }
                Err(e) => return Err(e.into()),
            };
            output::print_report(&report, &lint_config);
            Ok(exit_for(report.has_errors(&lint_config), cli.advisory))
        }
        Command::Schema => {
            let lint_config = match settings(&cli) {
                Ok(c) => c,
                Err(code) => return Ok(code),
            };
            let path = check::docs_config_path(&cli.root, &lint_config);
            let docs = match site::load_docs_config(&path) {
                Ok(docs) => docs,
                Err(e) => return Ok(load_failed(&e, &lint_config)),
            };
            let violations = schema::validate_schema(&docs);
            output::print_schema(&violations, &lint_config);
            Ok(exit_for(!violations.is_empty(), cli.advisory))
        }
        Command::Pages => {
            let lint_config = match settings(&cli) {
                Ok(c) => c,
                Err(code) => return Ok(code),
            };
            let report = match check::run(&cli.root, &lint_config) {
                Ok(report) => report,
                Err(CheckError::Load(e)) => return Ok(load_failed(&e, &lint_config)),
                Err(e) => return Err(e.into()),
            };
            output::print_pages(&report);
            Ok(ExitCode::SUCCESS)
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load `docs-lint.toml` from the root and apply CLI overrides.
fn settings(cli: &Cli) -> Result<LintConfig, ExitCode> {
    let mut lint_config = match config::load_config(&cli.root) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Error in {}: {e}", config::SETTINGS_FILE);
            return Err(ExitCode::from(EXIT_LOAD));
        }
    };
    if let Some(name) = &cli.docs_config {
        lint_config.docs_config = name.clone();
    }
    Ok(lint_config)
}

fn load_failed(err: &site::LoadError, config: &LintConfig) -> ExitCode {
    output::print_load_error(err, config);
    ExitCode::from(EXIT_LOAD)
}

fn exit_for(has_errors: bool, advisory: bool) -> ExitCode {
    if has_errors && !advisory {
        ExitCode::from(EXIT_FINDINGS)
    } else {
        ExitCode::SUCCESS
    }
}
