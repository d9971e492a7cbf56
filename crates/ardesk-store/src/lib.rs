pub mod error;
pub mod records;
mod seed;

use ardesk_core::domain::{Client, Invoice, Reminder};
use chrono::NaiveDate;

use crate::error::Result;
pub use crate::error::{StoreError, StoreErrorKind};
pub use crate::records::RecordStore;

/// The session's record stores. Populated once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Store {
    clients: RecordStore<Client>,
    invoices: RecordStore<Invoice>,
    reminders: RecordStore<Reminder>,
    reference_date: Option<NaiveDate>,
}

impl Store {
    /// The compiled-in sample book of clients, invoices and reminders.
    pub fn seeded() -> Result<Self> {
        let sample = seed::load_sample()?;
        let mut store = Self::from_records(sample.clients, sample.invoices, sample.reminders)?;
        store.reference_date = Some(sample.reference_date);
        Ok(store)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(
        clients: Vec<Client>,
        invoices: Vec<Invoice>,
        reminders: Vec<Reminder>,
    ) -> Result<Self> {
        Ok(Self {
            clients: RecordStore::new(clients)?,
            invoices: RecordStore::new(invoices)?,
            reminders: RecordStore::new(reminders)?,
            reference_date: None,
        })
    }

    pub fn clients(&self) -> &RecordStore<Client> {
        &self.clients
    }

    pub fn invoices(&self) -> &RecordStore<Invoice> {
        &self.invoices
    }

    pub fn reminders(&self) -> &RecordStore<Reminder> {
        &self.reminders
    }

    /// The date the sample data was captured on, if this store was seeded.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }
}
