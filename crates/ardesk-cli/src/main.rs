mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{clients, completions, dashboard, invoices, reminders, tui, Context};
use crate::error::{exit_code_for, report_error};
use ardesk_config as config;
use ardesk_core::rules::AgingPolicy;
use ardesk_core::time::today_local;
use ardesk_store::Store;

#[derive(Debug, Parser)]
#[command(name = "ardesk", version, about = "ardesk CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Date treated as today: sample, today or YYYY-MM-DD
    #[arg(long, global = true)]
    as_of: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Headline receivables figures and the aging breakdown
    Dashboard,
    #[command(subcommand)]
    Clients(clients::ClientCommand),
    #[command(subcommand)]
    Invoices(invoices::InvoiceCommand),
    #[command(subcommand)]
    Reminders(reminders::ReminderCommand),
    Tui(tui::TuiArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        as_of,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Tui(args) => tui::launch(config_path, as_of, args, verbose),
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let store = Store::seeded().with_context(|| "load sample data")?;
            debug!(
                clients = store.clients().len(),
                invoices = store.invoices().len(),
                reminders = store.reminders().len(),
                "store seeded"
            );

            let as_of = config::resolve_as_of(
                as_of.as_deref(),
                &app_config,
                store.reference_date(),
                today_local(),
            )
            .with_context(|| "parse --as-of")?;
            let policy = AgingPolicy::new(as_of, app_config.due_soon_days)?;
            debug!(as_of = %as_of, due_soon_days = policy.due_soon_days, "as-of resolved");

            let ctx = Context {
                store: &store,
                json,
                config: &app_config,
                policy,
            };

            match command {
                Command::Dashboard => dashboard::show_dashboard(&ctx),
                Command::Clients(cmd) => match cmd {
                    clients::ClientCommand::List(args) => clients::list_clients(&ctx, args),
                    clients::ClientCommand::Show(args) => clients::show_client(&ctx, args),
                },
                Command::Invoices(cmd) => match cmd {
                    invoices::InvoiceCommand::List(args) => invoices::list_invoices(&ctx, args),
                    invoices::InvoiceCommand::Show(args) => invoices::show_invoice(&ctx, args),
                },
                Command::Reminders(cmd) => match cmd {
                    reminders::ReminderCommand::List(args) => {
                        reminders::list_reminders(&ctx, args)
                    }
                    reminders::ReminderCommand::Show(args) => {
                        reminders::show_reminder(&ctx, args)
                    }
                },
                Command::Tui(_) => unreachable!("tui command handled before store initialization"),
                Command::Completions(_) => {
                    unreachable!("completions command handled before store initialization")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
