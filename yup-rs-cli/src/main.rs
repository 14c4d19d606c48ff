//! # yup-rs-cli
//!
//! CLI tool for generating Yup validation-schema modules from JSON
//! description documents.
//!
//! ## Usage
//!
//! ```bash
//! # Generate schema modules from current directory
//! yup-rs generate
//!
//! # Generate schema modules to a specific output directory
//! yup-rs generate --output ./generated
//!
//! # Watch mode for development
//! yup-rs generate --watch
//!
//! # Dry run to preview changes
//! yup-rs generate --dry-run
//!
//! # Initialize configuration
//! yup-rs init
//!
//! # Validate generated modules are up-to-date
//! yup-rs validate
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use yup_rs::YupGenerator;
use yup_rs_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::CliError,
    loader::{self, LoadedDescription},
    scanner::DescriptionScanner,
    watcher::DescriptionWatcher,
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "yup-rs")]
#[command(author, version, about = "Generate Yup validation schemas from description documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Yup schema modules from description documents
    Generate {
        /// Input directory containing description documents
        #[arg(short, long, default_value = ".")]
        input: PathBuf,

        /// Output directory for generated modules
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extension of generated modules
        #[arg(short, long)]
        extension: Option<String>,

        /// Watch for document changes and regenerate
        #[arg(short, long)]
        watch: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Filter documents by path pattern (glob)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Initialize a new yup-rs configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "yup-rs.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that generated modules are up-to-date
    Validate {
        /// Input directory containing description documents
        #[arg(short, long, default_value = ".")]
        input: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            extension,
            watch,
            dry_run,
            config,
            filter,
        } => {
            let config = ConfigManager::load(config.as_deref())?;
            let config = ConfigManager::merge_cli_args(config, &CliArgs { output, extension });

            if watch {
                run_watch_mode(&input, &config, filter.as_deref(), dry_run)
            } else {
                run_generate(&input, &config, filter.as_deref(), dry_run)
            }
        }

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate { input, config } => cmd_validate(input, config),
    }
}

/// Scan, load, and compile all descriptions under the input directory.
fn compile_all(
    input: &PathBuf,
    filter: Option<&str>,
) -> Result<Vec<(LoadedDescription, String)>, CliError> {
    let mut scanner = DescriptionScanner::new(input);
    if let Some(pattern) = filter {
        scanner = scanner.with_filter(pattern)?;
    }

    let files = scanner.scan_allow_empty()?;

    if files.is_empty() {
        return Ok(Vec::new());
    }

    println!(
        "  Found {} description document(s)",
        files.len().to_string().green()
    );

    let (descriptions, errors) = loader::load_files(&files);

    if !errors.is_empty() {
        println!("{} {} load error(s):", "Warning:".yellow(), errors.len());
        for error in &errors {
            println!("  {error}");
        }
    }

    let generator = YupGenerator::new();
    let mut compiled = Vec::new();

    for loaded in descriptions {
        let code = generator.generate(&loaded.description)?;
        compiled.push((loaded, code));
    }

    Ok(compiled)
}

/// Run schema generation once.
fn run_generate(
    input: &PathBuf,
    config: &Config,
    filter: Option<&str>,
    dry_run: bool,
) -> Result<(), CliError> {
    println!("{}", "Scanning for description documents...".cyan());

    let compiled = compile_all(input, filter)?;

    if compiled.is_empty() {
        println!("{}", "No description documents found.".yellow());
        return Ok(());
    }

    println!("{}", "Generating Yup schema modules...".cyan());

    let writer = FileWriter::new().with_dry_run(dry_run);

    for (loaded, code) in &compiled {
        let output_path = output_path_for(config, &loaded.name);

        match writer.write(&output_path, code)? {
            WriteResult::Written { path, bytes } => {
                println!(
                    "{} Written {} bytes to {}",
                    "✓".green(),
                    bytes,
                    path.display()
                );
            }
            WriteResult::DryRun { content, path } => {
                println!(
                    "{} Would write to {}:",
                    "[dry-run]".yellow(),
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                println!("{content}");
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    Ok(())
}

/// Run in watch mode.
fn run_watch_mode(
    input: &PathBuf,
    config: &Config,
    filter: Option<&str>,
    dry_run: bool,
) -> Result<(), CliError> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", input.display());
    println!("  Press Ctrl+C to stop\n");

    // Initial generation
    run_generate(input, config, filter, dry_run)?;

    let watcher = DescriptionWatcher::new(input).with_debounce(config.watch.debounce_ms);
    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    while let Ok(event) = rx.recv() {
        if let yup_rs_cli::watcher::WatchEvent::Error(message) = &event {
            println!("{} {}", "Watch error:".red(), message);
            continue;
        }

        if let Some(path) = event.path() {
            println!("\n{} {}", "Document changed:".cyan(), path.display());
        }

        if let Err(e) = run_generate(input, config, filter, dry_run) {
            println!("{} {}", "Generation error:".red(), e);
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(input: PathBuf, config_path: Option<PathBuf>) -> Result<(), CliError> {
    println!("{}", "Validating generated modules...".cyan());

    let config = ConfigManager::load(config_path.as_deref())?;
    let compiled = compile_all(&input, None)?;

    if compiled.is_empty() {
        println!("{}", "No description documents found.".yellow());
        return Ok(());
    }

    let writer = FileWriter::new();
    let mut stale = Vec::new();

    for (loaded, code) in &compiled {
        let output_path = output_path_for(&config, &loaded.name);
        if !writer.is_up_to_date(&output_path, code) {
            stale.push(output_path);
        }
    }

    if stale.is_empty() {
        println!("{} Modules are up-to-date", "✓".green());
        Ok(())
    } else {
        println!("{} {} module(s) out of date:", "✗".red(), stale.len());
        for path in &stale {
            println!("  {}", path.display());
        }
        println!("  Run 'yup-rs generate' to update");
        Err(CliError::Validation("Modules are out of date".to_string()))
    }
}

/// Compute the output path for a named description.
fn output_path_for(config: &Config, name: &str) -> PathBuf {
    config
        .output
        .dir
        .join(format!("{}.{}", name, config.output.extension))
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
