use std::process::ExitCode;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing_subscriber::EnvFilter;

pub mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "debver", version, about = "Compare Debian package versions")]
struct Cli {
    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "DEBVER_FORMAT",
        default_value = "text"
    )]
    format: OutputFormat,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Compare two versions and print -1, 0 or 1")]
    Compare {
        version_a: String,
        version_b: String,

        /// Print <, = or > instead of a number
        #[arg(long)]
        symbol: bool,
    },

    #[command(about = "Exit successfully if the relation between two versions holds")]
    Satisfies {
        version_a: String,
        /// One of <<, <=, =, !=, >=, >> or lt, le, eq, ne, ge, gt
        relation: debver::Relation,
        version_b: String,
    },

    #[command(about = "Show the epoch, upstream version and revision of a version")]
    Parse { version: String },

    #[command(about = "Sort versions given as arguments, or one per line on stdin")]
    Sort {
        versions: Vec<String>,

        /// Newest first
        #[arg(long)]
        reverse: bool,

        /// Drop versions that compare equal to the one before
        #[arg(long)]
        unique: bool,
    },

    #[command(about = "Run a table of expected comparisons and report every mismatch")]
    Check {
        /// File of `VERSION_A VERSION_B EXPECTED` lines
        table: String,
    },
}

fn init_tracing(verbose: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> miette::Result<ExitCode> {
    let format = cli.format;

    match cli.command {
        Commands::Compare {
            version_a,
            version_b,
            symbol,
        } => commands::compare::compare(&version_a, &version_b, symbol, format)?,
        Commands::Satisfies {
            version_a,
            relation,
            version_b,
        } => return Ok(commands::compare::satisfies(&version_a, relation, &version_b)?),
        Commands::Parse { version } => commands::parse::parse(&version, format)?,
        Commands::Sort {
            versions,
            reverse,
            unique,
        } => commands::sort::sort(versions, reverse, unique, format)?,
        Commands::Check { table } => return Ok(commands::check::check(&table)?),
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(report) => {
            anstream::eprintln!("{report:?}");
            ExitCode::from(2)
        }
    }
}
