use anyhow::Result;
use carecompare::cli::{Cli, Commands};
use carecompare::commands::compare::{handle_compare, CompareConfig};
use carecompare::formatting::FormattingConfig;
use carecompare::observability::{init_tracing, install_panic_hook};
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compare {
            facility_a,
            facility_b,
            route_a,
            route_b,
            pending_routes,
            format,
            output,
            config,
            plain,
        } => handle_compare(CompareConfig {
            facility_a,
            facility_b,
            route_a,
            route_b,
            pending_routes,
            format: format.into(),
            output,
            config,
            formatting: create_formatting_config(plain),
        }),
        Commands::Init { force } => carecompare::commands::init::init_config(force),
        Commands::ShowConfig { config } => carecompare::commands::show_config(config.as_deref()),
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
