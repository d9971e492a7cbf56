use anyhow::Result;
use ardesk_config::AppConfig;
use ardesk_core::domain::Money;
use ardesk_core::rules::AgingPolicy;
use ardesk_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod clients;
pub mod completions;
pub mod dashboard;
pub mod invoices;
pub mod reminders;
pub mod tui;

pub const EMPTY_MESSAGE: &str = "no records found";

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
    pub policy: AgingPolicy,
}

impl Context<'_> {
    pub fn compact(&self, money: Money) -> String {
        money.format_compact(&self.config.currency_symbol)
    }

    pub fn full(&self, money: Money) -> String {
        money.format_full(&self.config.currency_symbol)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_footer(visible: usize, total: usize) {
    if visible == 0 {
        println!("{}", EMPTY_MESSAGE);
    } else {
        println!("showing {} of {}", visible, total);
    }
}
