use crate::domain::{Client, Invoice, Reminder};
use crate::rules::{AgingPolicy, RiskLevel};
use crate::view::facets::{InvoiceFacet, ReminderFacet};
use crate::view::filter::Facet;
use crate::view::summary::{
    summarize_clients, summarize_invoices, summarize_reminders, ClientSummary, InvoiceSummary,
    ReminderSummary,
};

/// Per-kind configuration of the derivation: which text fields are searched,
/// how a facet is decided for a record, and how the headline summary is built.
pub trait RecordView {
    type Record;
    type Facet: Facet;
    type Summary;

    fn search_fields<'r>(&self, record: &'r Self::Record) -> Vec<&'r str>;

    fn matches_facet(&self, record: &Self::Record, facet: &Self::Facet) -> bool;

    fn summarize(&self, records: &[Self::Record]) -> Self::Summary;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientView;

impl RecordView for ClientView {
    type Record = Client;
    type Facet = RiskLevel;
    type Summary = ClientSummary;

    fn search_fields<'r>(&self, record: &'r Client) -> Vec<&'r str> {
        vec![record.name.as_str(), record.contact.as_str()]
    }

    fn matches_facet(&self, record: &Client, facet: &RiskLevel) -> bool {
        record.risk_level() == *facet
    }

    fn summarize(&self, records: &[Client]) -> ClientSummary {
        summarize_clients(records)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InvoiceView {
    pub policy: AgingPolicy,
}

impl InvoiceView {
    pub fn new(policy: AgingPolicy) -> Self {
        Self { policy }
    }
}

impl RecordView for InvoiceView {
    type Record = Invoice;
    type Facet = InvoiceFacet;
    type Summary = InvoiceSummary;

    fn search_fields<'r>(&self, record: &'r Invoice) -> Vec<&'r str> {
        vec![record.id.as_str(), record.customer.as_str()]
    }

    fn matches_facet(&self, record: &Invoice, facet: &InvoiceFacet) -> bool {
        match facet {
            InvoiceFacet::Status(status) => self.policy.status(record) == *status,
            InvoiceFacet::Aging(bucket) => self.policy.aging(record) == *bucket,
            InvoiceFacet::Risk(level) => record.risk_level() == *level,
        }
    }

    fn summarize(&self, records: &[Invoice]) -> InvoiceSummary {
        summarize_invoices(records, &self.policy)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReminderView;

impl RecordView for ReminderView {
    type Record = Reminder;
    type Facet = ReminderFacet;
    type Summary = ReminderSummary;

    fn search_fields<'r>(&self, record: &'r Reminder) -> Vec<&'r str> {
        vec![
            record.id.as_str(),
            record.invoice_id.as_str(),
            record.client_name.as_str(),
        ]
    }

    fn matches_facet(&self, record: &Reminder, facet: &ReminderFacet) -> bool {
        match facet {
            ReminderFacet::Queue(queue) => record.queue() == *queue,
            ReminderFacet::Status(status) => record.status == *status,
            ReminderFacet::Channel(channel) => record.channel == *channel,
        }
    }

    fn summarize(&self, records: &[Reminder]) -> ReminderSummary {
        summarize_reminders(records)
    }
}
