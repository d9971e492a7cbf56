//! Filterable record views: search text plus one categorical facet over an
//! immutable record slice, with headline summaries computed over the whole
//! slice.

mod aggregate;
mod derivation;
mod facets;
mod filter;
mod kind;
mod parser;
mod record;
mod selection;
mod summary;

use thiserror::Error;

pub use aggregate::{mean_rounded, percent_rounded, sum_money};
pub use derivation::{derive, Derived};
pub use facets::{InvoiceFacet, ReminderFacet};
pub use filter::{CategoryFilter, Facet, Filters};
pub use kind::ViewKind;
pub use parser::parse_filters;
pub use record::{ClientView, InvoiceView, RecordView, ReminderView};
pub use selection::{Selection, ViewState};
pub use summary::{
    aging_breakdown, summarize_clients, summarize_dashboard, summarize_invoices,
    summarize_reminders, AgingSlice, ClientSummary, DashboardSummary, InvoiceSummary,
    ReminderSummary,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("only one category filter is allowed: {0}")]
    DuplicateCategory(String),
}
