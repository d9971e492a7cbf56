use anyhow::Result;
use ardesk_core::domain::ClientId;
use ardesk_core::rules::RiskLevel;
use ardesk_core::time::format_date;
use ardesk_core::view::{ClientSummary, ClientView};
use ardesk_core::{derive, ClientDto, ListOutputDto};
use clap::{Args, Subcommand};

use crate::commands::{print_footer, print_json, Context};
use crate::error::not_found;
use crate::util::parse_filter_arg;

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// List clients, e.g. `--filter "risk:high mega"`
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

pub fn list_clients(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filters = parse_filter_arg::<RiskLevel>(args.filter.as_deref())?;
    let derived = derive(&ClientView, ctx.store.clients().all(), &filters);
    tracing::debug!(
        visible = derived.visible_count(),
        total = derived.total,
        "clients derived"
    );

    if ctx.json {
        let output = ListOutputDto {
            summary: derived.summary,
            total: derived.total,
            items: derived.visible.iter().map(|c| ClientDto::from(*c)).collect::<Vec<_>>(),
        };
        return print_json(&output);
    }

    print_summary(ctx, &derived.summary);
    for client in &derived.visible {
        println!(
            "{}  {}  {}  {}  {}d late  [{} {}]",
            client.id,
            client.name,
            client.contact,
            ctx.compact(client.outstanding_balance),
            client.avg_days_late,
            client.risk_level().label(),
            client.risk_score.value()
        );
    }
    print_footer(derived.visible_count(), derived.total);
    Ok(())
}

pub fn show_client(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = ClientId::new(&args.id)?;
    let client = ctx
        .store
        .clients()
        .get(&id)
        .ok_or_else(|| not_found(format!("client {}", id)))?;
    let detail = ClientDto::from(client);

    if ctx.json {
        return print_json(&detail);
    }

    println!("id: {}", detail.id);
    println!("name: {}", detail.name);
    println!("contact: {}", detail.contact);
    println!("outstanding: {}", ctx.full(detail.outstanding_balance));
    println!(
        "risk: {} ({})",
        detail.risk_level.title(),
        detail.risk_score
    );
    println!("avg days late: {}", detail.avg_days_late);
    println!(
        "paid on time: {}/{} ({}%)",
        detail.paid_on_time, detail.total_invoices, detail.on_time_percent
    );
    println!("payment trend: {}", detail.payment_trend.label());
    println!("last payment: {}", format_date(detail.last_payment));
    Ok(())
}

fn print_summary(ctx: &Context<'_>, summary: &ClientSummary) {
    println!(
        "clients: {}  outstanding: {}  avg days late: {}  high risk: {}",
        summary.total_clients,
        ctx.compact(summary.total_outstanding),
        summary.avg_days_late,
        summary.high_risk_count
    );
}
