// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stderr: configuration errors are reported on stderr.
// - exit: the exit code is the verdict CI acts on.
#![allow(clippy::print_stderr, clippy::exit)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use class_lint::{AttributeOrder, FsSourceConfig, ValidationConfig, output, validate_fs};

const EXIT_ISSUES: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

/// Check class attribute values for malformed class tokens.
#[derive(Debug, Parser)]
#[command(name = "class-lint", version, about)]
struct Cli {
    /// Directories (or files) to scan; missing ones are ignored.
    #[arg(value_name = "PATH", default_values = ["templates", "public/assets/js", "public/assets/css"])]
    paths: Vec<PathBuf>,

    /// File extension to scan (repeatable). Defaults to php, js and css.
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Glob of paths or file names to exclude (repeatable).
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Extra regex for dynamic regions to blank out before tokenizing (repeatable).
    #[arg(long = "dynamic-pattern", value_name = "REGEX")]
    dynamic_patterns: Vec<String>,

    /// Report `class` and `className` values in document order.
    #[arg(long)]
    document_order: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Maximum size of a single file in bytes.
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Follow symbolic links while walking.
    #[arg(long)]
    follow_links: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn fs_config(&self) -> FsSourceConfig {
        let mut config = FsSourceConfig::default();
        config.paths.clone_from(&self.paths);
        if !self.extensions.is_empty() {
            config.extensions = self
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_owned())
                .collect();
        }
        config.exclude.clone_from(&self.exclude);
        config.follow_links = self.follow_links;
        if let Some(max) = self.max_file_size {
            config.max_file_size = max;
        }
        config
    }

    fn validation_config(&self) -> ValidationConfig {
        let mut config = ValidationConfig::default();
        if self.document_order {
            config.attribute_order = AttributeOrder::Document;
        }
        config.extra_dynamic_patterns.clone_from(&self.dynamic_patterns);
        config
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("class_lint={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let report = validate_fs(&cli.fs_config(), &cli.validation_config())?;

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }
    stdout.flush()?;

    Ok(report.ok)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_ISSUES),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_CONFIG);
        }
    }
}
