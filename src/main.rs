//! mediascrub CLI - clean and enrich media catalog CSV exports
//!
//! # Main Command
//!
//! ```bash
//! mediascrub                       # Clean the default export in place
//! mediascrub clean catalog.csv    # Clean a specific file
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! mediascrub parse catalog.csv    # Just parse CSV to JSON
//! mediascrub stages               # Show the cleaning stage sequence
//! ```

use clap::{Parser, Subcommand};
use mediascrub::{
    clean_file, load_file, stages_description, CleanOptions, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mediascrub")]
#[command(about = "Clean and enrich media catalog CSV exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full cleaning pipeline
    Clean {
        /// Input CSV file
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Also print the run report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Parse a CSV file and output its rows as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the cleaning stages in execution order
    Stages,
}

fn main() {
    let cli = Cli::parse();

    // Invoking the binary with no arguments runs the full pipeline on
    // the fixed default paths.
    let command = cli.command.unwrap_or(Commands::Clean {
        input: PathBuf::from(DEFAULT_INPUT),
        output: PathBuf::from(DEFAULT_OUTPUT),
        delimiter: None,
        json: false,
    });

    let result = match command {
        Commands::Clean {
            input,
            output,
            delimiter,
            json,
        } => cmd_clean(&input, &output, delimiter, json),

        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),

        Commands::Stages => cmd_stages(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_clean(
    input: &Path,
    output: &Path,
    delimiter: Option<char>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Cleaning: {}", input.display());

    let options = CleanOptions { delimiter };
    let report = clean_file(input, output, &options)?;

    eprintln!("   Encoding: {}", report.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(report.delimiter),
        if delimiter.is_none() {
            " (auto-detected)"
        } else {
            ""
        }
    );
    eprintln!("✅ Loaded rows: {}", report.rows_loaded);
    eprintln!("⚙️  Exploded to {} rows", report.rows_exploded);
    if report.movie_duration_failures > 0 {
        eprintln!(
            "⚠️  {} movie duration(s) could not be parsed, left missing",
            report.movie_duration_failures
        );
    }
    eprintln!("🧹 Dropped duplicates: {}", report.duplicates_removed);
    eprintln!("💾 Cleaned CSV written to: {}", report.output.display());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = load_file(input, delimiter)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(result.delimiter),
        if delimiter.is_none() {
            " (auto-detected)"
        } else {
            ""
        }
    );
    eprintln!("   Columns: {}", result.table.headers().join(", "));
    eprintln!("✅ Parsed {} rows", result.table.len());

    let json = serde_json::to_string_pretty(&result.table.to_json_rows())?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_stages() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", stages_description());
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
