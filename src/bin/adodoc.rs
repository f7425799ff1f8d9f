//! Command-line interface for adodoc
//! Turns the docstrings of Stata do/ado files into reference documents.
//!
//! Usage:
//!   adodoc `<path>...` [--format `<format>`] [--output-dir `<dir>`]  - Document one or more files
//!   adodoc --list-formats                                          - List available output formats
//!
//! Without `--output-dir` the documents are printed to stdout. Settings are read from
//! the built-in defaults, then `./adodoc.toml` if present, then `--config`, then flags.

use adodoc::adodoc::batch::process_files;
use adodoc::adodoc::config::Loader;
use adodoc::adodoc::formats::FormatRegistry;
use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::fs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const LOCAL_CONFIG: &str = "adodoc.toml";

fn main() {
    let matches = Command::new("adodoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate reference documentation from docstrings in Stata do/ado files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Paths to the do/ado files to document")
                .required_unless_present("list-formats")
                .num_args(1..)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'markdown', 'json', 'yaml')"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .help("Write one document per input into this directory")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail a file on an unclosed docstring instead of skipping it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("signatures")
                .long("signatures")
                .help("Include each program's folded syntax statement")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let settings = Settings {
        format: matches.get_one::<String>("format").cloned(),
        output_dir: matches.get_one::<PathBuf>("output-dir").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        strict: matches.get_flag("strict"),
        signatures: matches.get_flag("signatures"),
    };

    match handle_document_command(&paths, &settings) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

struct Settings {
    format: Option<String>,
    output_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    strict: bool,
    signatures: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {}", e);
    }
}

/// Handle the default command. Returns whether every file succeeded.
fn handle_document_command(paths: &[PathBuf], settings: &Settings) -> Result<bool> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = &settings.config {
        loader = loader.with_file(path);
    }
    if let Some(format) = &settings.format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if settings.strict {
        loader = loader.set_override("extract.docstring_policy", "fail")?;
    }
    if settings.signatures {
        loader = loader.set_override("extract.signatures", true)?;
    }
    let config = loader.build().context("invalid configuration")?;

    let registry = FormatRegistry::with_defaults();
    let format = config.output.format.as_str();
    let Some(formatter) = registry.get(format) else {
        anyhow::bail!(
            "format '{}' not found (available: {})",
            format,
            registry.list_formats().join(", ")
        );
    };

    let mut report = process_files(paths, &config.extract_options(), &registry, format);

    match &settings.output_dir {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            report.write_outputs(dir, formatter.extension());
        }
        None => {
            for output in &report.outputs {
                print!("{}", output.rendered);
            }
        }
    }

    for failure in &report.failures {
        eprintln!("Error: {}: {}", failure.path.display(), failure.error);
    }

    Ok(report.is_success())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
