use anyhow::Result;
use ardesk_core::time::format_date_long;
use ardesk_core::view::summarize_dashboard;

use crate::commands::{print_json, Context};

pub fn show_dashboard(ctx: &Context<'_>) -> Result<()> {
    let summary = summarize_dashboard(ctx.store.invoices().all(), &ctx.policy);

    if ctx.json {
        return print_json(&summary);
    }

    println!("as of {}", format_date_long(ctx.policy.as_of));
    println!("total AR: {}", ctx.full(summary.total_ar));
    println!("current (0-30): {}", ctx.full(summary.current));
    println!(
        "overdue (31+): {}  {} of {} invoices past due",
        ctx.full(summary.overdue),
        summary.overdue_count,
        summary.invoice_count
    );
    println!("at risk: {}", ctx.full(summary.at_risk));
    println!("aging:");
    for slice in &summary.aging {
        println!(
            "  {:<6} {:>3}%  {:>2} invoices  {}",
            slice.bucket.label(),
            slice.percent,
            slice.count,
            ctx.compact(slice.amount)
        );
    }
    Ok(())
}
