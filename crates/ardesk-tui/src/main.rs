mod app;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use ardesk_config as config;
use ardesk_core::rules::{validate_soon_days, AgingPolicy};
use ardesk_core::time::today_local;
use ardesk_core::view::ViewKind;
use ardesk_store::Store;

#[derive(Debug, Parser)]
#[command(name = "ardesk-tui", version, about = "ardesk TUI")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    as_of: Option<String>,
    #[arg(long)]
    soon_days: Option<i64>,
    #[arg(long)]
    view: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let app_config = config::load(args.config.clone()).with_context(|| "load config")?;

    let store = Store::seeded().with_context(|| "load sample data")?;
    let as_of = config::resolve_as_of(
        args.as_of.as_deref(),
        &app_config,
        store.reference_date(),
        today_local(),
    )
    .with_context(|| "parse --as-of")?;
    let soon_days = match args.soon_days {
        Some(value) => validate_soon_days(value)?,
        None => app_config.due_soon_days,
    };
    let policy = AgingPolicy::new(as_of, soon_days)?;
    let view = match args.view.as_deref() {
        Some(raw) => ViewKind::parse_label(raw).ok_or_else(|| anyhow!("unknown view: {}", raw))?,
        None => app_config.default_view,
    };

    let mut app = App::new(store, policy, app_config.currency_symbol.clone(), view);
    let mut terminal = TerminalGuard::new()?;
    run_app(&mut terminal, &mut app)
}

fn run_app(terminal: &mut TerminalGuard, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.terminal_mut().draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
