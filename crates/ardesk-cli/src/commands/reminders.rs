use anyhow::Result;
use ardesk_core::domain::ReminderId;
use ardesk_core::time::{format_date, format_optional_date};
use ardesk_core::view::{ReminderFacet, ReminderSummary, ReminderView};
use ardesk_core::{derive, ListOutputDto, ReminderDto};
use clap::{Args, Subcommand};

use crate::commands::{print_footer, print_json, Context};
use crate::error::not_found;
use crate::util::{parse_filter_arg, yes_no};

#[derive(Debug, Subcommand)]
pub enum ReminderCommand {
    /// List reminders, e.g. `--filter queue:action` or `--filter channel:sms`
    List(ListArgs),
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

pub fn list_reminders(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filters = parse_filter_arg::<ReminderFacet>(args.filter.as_deref())?;
    let derived = derive(&ReminderView, ctx.store.reminders().all(), &filters);
    tracing::debug!(
        visible = derived.visible_count(),
        total = derived.total,
        "reminders derived"
    );

    if ctx.json {
        let output = ListOutputDto {
            summary: derived.summary,
            total: derived.total,
            items: derived
                .visible
                .iter()
                .map(|r| ReminderDto::from(*r))
                .collect::<Vec<_>>(),
        };
        return print_json(&output);
    }

    print_summary(&derived.summary);
    for reminder in &derived.visible {
        println!(
            "{}  {}  {}  {}  {} via {}  [{}]",
            reminder.id,
            reminder.invoice_id,
            reminder.client_name,
            ctx.compact(reminder.amount),
            format_date(reminder.scheduled_date),
            reminder.channel.label(),
            reminder.status.label()
        );
    }
    print_footer(derived.visible_count(), derived.total);
    Ok(())
}

pub fn show_reminder(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = ReminderId::new(&args.id)?;
    let reminder = ctx
        .store
        .reminders()
        .get(&id)
        .ok_or_else(|| not_found(format!("reminder {}", id)))?;
    let detail = ReminderDto::from(reminder);

    if ctx.json {
        return print_json(&detail);
    }

    println!("id: {}", detail.id);
    println!("invoice: {}", detail.invoice_id);
    println!("client: {}", detail.client_name);
    println!("amount: {}", ctx.full(detail.amount));
    println!("due: {}", format_date(detail.due_date));
    println!("scheduled: {}", format_date(detail.scheduled_date));
    println!("status: {}", detail.status.label());
    println!("queue: {}", detail.queue.title());
    println!("channel: {}", detail.channel.label());
    println!("attempts: {}", detail.attempt_count);
    println!("last attempt: {}", format_optional_date(detail.last_attempt));
    println!("next attempt: {}", format_optional_date(detail.next_attempt));
    println!("response received: {}", yes_no(detail.response_received));
    Ok(())
}

fn print_summary(summary: &ReminderSummary) {
    println!(
        "reminders: {}  action required: {}  upcoming: {}  history: {}  failed: {}",
        summary.total_reminders,
        summary.action_required,
        summary.upcoming,
        summary.history,
        summary.failed
    );
}
