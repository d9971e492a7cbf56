use anyhow::Result;
use ardesk_core::domain::InvoiceId;
use ardesk_core::time::{format_date, format_optional_date};
use ardesk_core::view::{InvoiceFacet, InvoiceSummary, InvoiceView};
use ardesk_core::{derive, InvoiceDto, ListOutputDto};
use clap::{Args, Subcommand};

use crate::commands::{print_footer, print_json, Context};
use crate::error::not_found;
use crate::util::parse_filter_arg;

#[derive(Debug, Subcommand)]
pub enum InvoiceCommand {
    /// List invoices, e.g. `--filter status:overdue` or `--filter aging:31-60`
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

pub fn list_invoices(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let filters = parse_filter_arg::<InvoiceFacet>(args.filter.as_deref())?;
    let view = InvoiceView::new(ctx.policy);
    let derived = derive(&view, ctx.store.invoices().all(), &filters);
    tracing::debug!(
        visible = derived.visible_count(),
        total = derived.total,
        "invoices derived"
    );

    let items: Vec<InvoiceDto> = derived
        .visible
        .iter()
        .map(|invoice| InvoiceDto::new(invoice, &ctx.policy))
        .collect();

    if ctx.json {
        let output = ListOutputDto {
            summary: derived.summary,
            total: derived.total,
            items,
        };
        return print_json(&output);
    }

    print_summary(ctx, &derived.summary);
    for item in &items {
        let overdue = if item.days_overdue > 0 {
            format!(" {}d overdue", item.days_overdue)
        } else {
            String::new()
        };
        println!(
            "{}  {}  {}  due {}  [{}]{}  risk {}",
            item.id,
            item.customer,
            ctx.compact(item.amount),
            format_date(item.due_date),
            item.status.label(),
            overdue,
            item.risk_score
        );
    }
    print_footer(derived.visible_count(), derived.total);
    Ok(())
}

pub fn show_invoice(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = InvoiceId::new(&args.id)?;
    let invoice = ctx
        .store
        .invoices()
        .get(&id)
        .ok_or_else(|| not_found(format!("invoice {}", id)))?;
    let detail = InvoiceDto::new(invoice, &ctx.policy);

    if ctx.json {
        return print_json(&detail);
    }

    println!("id: {}", detail.id);
    println!("customer: {}", detail.customer);
    println!("amount: {}", ctx.full(detail.amount));
    println!("due: {}", format_date(detail.due_date));
    println!("status: {}", detail.status.label());
    println!("days overdue: {}", detail.days_overdue);
    println!("aging: {}", detail.aging.label());
    println!(
        "risk: {} ({})",
        detail.risk_level.title(),
        detail.risk_score
    );
    println!("last contact: {}", format_optional_date(detail.last_contact));
    println!(
        "last reminder: {}",
        format_optional_date(detail.last_reminder_sent)
    );
    Ok(())
}

fn print_summary(ctx: &Context<'_>, summary: &InvoiceSummary) {
    println!(
        "invoices: {}  total: {}  overdue: {} ({})  due soon: {}  avg risk: {}",
        summary.total_invoices,
        ctx.compact(summary.total_amount),
        summary.overdue_count,
        ctx.compact(summary.overdue_amount),
        summary.due_soon_count,
        summary.avg_risk_score
    );
}
