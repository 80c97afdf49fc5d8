//! lotio developer tools: documentation builder and text padding checker.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "lotio-devtools")]
#[command(about = "Developer tools for lotio")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the docs config file (defaults to <root>/lotio-docs.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the documentation site
    BuildDocs {
        /// Project root containing docs/ and the asset directories
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output directory (defaults to config or <root>/_site)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the basic markdown converter instead of CommonMark
        #[arg(long)]
        fallback: bool,

        /// Version string for the pages, skipping env and git lookup
        #[arg(long)]
        version_override: Option<String>,
    },

    /// Measure transparent padding around the text in a rendered frame
    MeasurePadding {
        /// Path to a PNG image with a transparent background
        image: PathBuf,

        /// Expected padding in pixels on all sides (ignored unless an integer)
        #[arg(allow_negative_numbers = true)]
        expected_padding: Option<String>,
    },
}

/// Exit status for a command line that could not be parsed.
///
/// Help and version output are successes; usage errors exit 1.
fn usage_exit_code(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        1
    } else {
        0
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::BuildDocs {
            root,
            output,
            fallback,
            version_override,
        } => commands::build_docs::run(commands::build_docs::BuildArgs {
            root,
            config: cli.config,
            output,
            fallback,
            version: version_override,
        })
        .map(|()| ExitCode::SUCCESS),
        Commands::MeasurePadding {
            image,
            expected_padding,
        } => commands::measure_padding::run(
            &image,
            commands::measure_padding::parse_expected(expected_padding.as_deref()),
        )
        .map(ExitCode::from),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}
