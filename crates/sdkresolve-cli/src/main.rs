//! CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sdkresolve_cli::{Cli, CliError, Commands, handlers};
use sdkresolve_core::ResolverConfig;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Resolve(target) => handlers::resolve::execute(&target, &mut io::stdout())?,
        Commands::Configure {
            target,
            verbose_voip,
            verbose_packets,
        } => {
            let config = ResolverConfig::default()
                .with_verbose_voip_logging(verbose_voip)
                .with_verbose_packet_level_logging(verbose_packets);
            handlers::configure::execute(&target, config, &mut io::stdout())?;
        }
        Commands::Platforms => handlers::platforms::execute(),
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables before clap reads `env` defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
