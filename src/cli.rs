use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carecompare")]
#[command(about = "Side-by-side comparison of healthcare facilities", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two facility records
    Compare {
        /// JSON file for the first facility
        facility_a: PathBuf,

        /// JSON file for the second facility
        facility_b: PathBuf,

        /// Routing result (JSON) from the user's location to facility A
        #[arg(long = "route-a")]
        route_a: Option<PathBuf>,

        /// Routing result (JSON) from the user's location to facility B
        #[arg(long = "route-b")]
        route_b: Option<PathBuf>,

        /// Treat missing routes as still loading rather than unavailable
        #[arg(long = "pending-routes")]
        pending_routes: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to .carecompare.toml discovery)
        #[arg(short, long, env = "CARECOMPARE_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .carecompare.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective thresholds and weights
    ShowConfig {
        /// Config file (defaults to .carecompare.toml discovery)
        #[arg(short, long, env = "CARECOMPARE_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
