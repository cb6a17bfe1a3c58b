//! guardgen: generate combinatorial test suites for guarded network attributes.

mod commands;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "guardgen")]
#[command(about = "Generate guarded-attribute test suites over every attribute/type/shape combination")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate the test suite and write it to <OUT>/<artifact>.cs.
    Generate {
        /// Axis config (defaults to ./guardgen.toml when present, else built-in axes).
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Output directory.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
        /// Print the document to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },
    /// List every generated cell and its predicted warnings without emitting anything.
    Plan {
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write a config file holding the built-in axes.
    Init {
        /// Config file to write.
        #[arg(long, value_name = "PATH", default_value = "guardgen.toml")]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let result = match cli.command {
        Commands::Generate {
            config,
            out,
            stdout,
        } => commands::generate::run_generate(config.as_deref(), &out, stdout),
        Commands::Plan { config } => commands::plan::run_plan(config.as_deref()),
        Commands::Init { path, force } => commands::init::run_init(&path, force),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
