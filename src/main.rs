//! paybook binary entry point.
//!
//! Parses the CLI, loads settings, and dispatches to the subcommand
//! handlers. Every error is rendered as a user-facing notification; the
//! process exits non-zero only when a command actually failed.

use clap::Parser;
use paybook::cli::{Cli, CliContext, Commands};
use paybook::config::AppSettings;
use paybook::output;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path),
        None => AppSettings::load(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            output::print_warning(&format!("could not load settings, using defaults: {}", e));
            AppSettings::default()
        }
    };

    let ctx = CliContext {
        verbose: cli.verbose || settings.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir.clone(),
        settings,
    };

    if let Err(e) = run(&cli, &ctx) {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, ctx: &CliContext) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List(cmd) => cmd.execute(ctx)?,
        Commands::Add(cmd) => cmd.execute(ctx)?,
        Commands::Edit(cmd) => cmd.execute(ctx)?,
        Commands::Delete(cmd) => cmd.execute(ctx)?,
        Commands::Totals(cmd) => cmd.execute(ctx)?,
        Commands::Clients(cmd) => cmd.execute(ctx)?,
        Commands::Export(cmd) => cmd.execute(ctx)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "paybook=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
