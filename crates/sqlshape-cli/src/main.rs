//! sqlshape CLI
//!
//! Command-line tool for formatting and inspecting embedded SQL statements.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sqlshape_core::DEFAULT_INDENT_WIDTH;

/// Formats embedded SQL statements into keyword columns.
#[derive(Parser)]
#[command(name = "sqlshape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL file to read (stdin if not specified).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Indent width of the formatted output.
    #[arg(short, long, env = "SQLSHAPE_TAB_SIZE", default_value_t = DEFAULT_INDENT_WIDTH)]
    tab_size: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the formatted statement.
    Format,

    /// Print the parse tree.
    Tree {
        /// Print the tree as JSON instead of an outline.
        #[arg(long)]
        json: bool,
    },

    /// Fail if the statement was not fully parsed.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = commands::options(cli.tab_size)?;
    let sql = commands::read_input(cli.input.as_deref())?;

    let output = match cli.command {
        Commands::Format => commands::format(&sql, options),
        Commands::Tree { json: false } => commands::tree_outline(&sql),
        Commands::Tree { json: true } => commands::tree_json(&sql)?,
        Commands::Check => commands::check(&sql)?,
    };
    println!("{output}");

    Ok(())
}
