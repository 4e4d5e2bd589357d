//! Tabtex CLI - Build LaTeX tables from CSV, JSON, YAML or TOML data

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use tabtex::{load_document, load_options, InputFormat, PartialTableOptions, TableError, TableResult};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tabtex")]
#[command(version)]
#[command(about = "Tabtex - Build aligned LaTeX booktabs tables from rows of data", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Input format (detected from the file extension by default)
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// TOML file with table options (caption, scale, layout, number_precision)
    #[arg(short, long)]
    config: Option<String>,

    /// Table caption
    #[arg(long)]
    caption: Option<String>,

    /// Table width as a multiple of \linewidth
    #[arg(short, long)]
    scale: Option<f64>,

    /// Column layout, e.g. "lcr"
    #[arg(short, long)]
    layout: Option<String>,

    /// Decimals for numeric cells
    #[arg(short, long)]
    precision: Option<usize>,

    /// Quiet mode: suppress status output on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Detect from the file extension, CSV for stdin
    Auto,
    Csv,
    Json,
    Yaml,
    Toml,
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Info) = cli.command {
        print_info();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> TableResult<()> {
    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path).map_err(|e| TableError::Io {
            message: format!("{}: {}", path, e),
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let format = resolve_format(cli.format, cli.input_file.as_deref())?;
    tracing::debug!(%format, "input format resolved");

    let mut document = load_document(&input, format)?;

    // A config file replaces the document's options, flags override both
    if let Some(ref path) = cli.config {
        let config = fs::read_to_string(path).map_err(|e| TableError::Io {
            message: format!("{}: {}", path, e),
        })?;
        document.options = load_options(&config)?;
    }
    document.options = document.options.clone().merge(PartialTableOptions {
        caption: cli.caption.clone(),
        scale: cli.scale,
        layout: cli.layout.clone(),
        number_precision: cli.precision,
    });

    let table = document.build()?;

    match cli.output {
        Some(ref path) => {
            table.save(path)?;
            if !cli.quiet {
                eprintln!(
                    "✓ Table written to: {} ({} column(s), {} row(s))",
                    path,
                    table.cols(),
                    table.rows()
                );
            }
        }
        None => {
            println!("{}", table);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn resolve_format(format: Format, path: Option<&str>) -> TableResult<InputFormat> {
    Ok(match format {
        Format::Csv => InputFormat::Csv,
        Format::Json => InputFormat::Json,
        Format::Yaml => InputFormat::Yaml,
        Format::Toml => InputFormat::Toml,
        Format::Auto => match path {
            Some(p) => InputFormat::from_path(p).ok_or_else(|| {
                TableError::validation(format!(
                    "cannot detect the format of '{}', use --format",
                    p
                ))
            })?,
            None => InputFormat::Csv,
        },
    })
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("Tabtex - Build aligned LaTeX booktabs tables from rows of data");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Input formats:");
    println!("  ✓ CSV (first record is the header, '---' records are separators)");
    println!("  ✓ JSON / YAML / TOML table documents");
    println!();
    println!("Required LaTeX packages:");
    println!("  - booktabs, tabularx, siunitx");
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabtex --features cli");
    eprintln!("  tabtex [OPTIONS] [INPUT_FILE]");
}
