use crate::domain::Invoice;
use crate::error::CoreError;
use crate::rules::aging::{classify_aging, AgingBucket};
use crate::rules::status::{classify_invoice_status, InvoiceStatus};
use chrono::NaiveDate;

pub const DEFAULT_SOON_DAYS: i64 = 7;
pub const MAX_SOON_DAYS: i64 = 365;

pub fn validate_soon_days(soon_days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_SOON_DAYS).contains(&soon_days) {
        return Err(CoreError::InvalidSoonDays(soon_days));
    }
    Ok(soon_days)
}

/// The reference "now" used for every date-derived invoice classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgingPolicy {
    pub as_of: NaiveDate,
    pub due_soon_days: i64,
}

impl AgingPolicy {
    pub fn new(as_of: NaiveDate, due_soon_days: i64) -> Result<Self, CoreError> {
        Ok(Self {
            as_of,
            due_soon_days: validate_soon_days(due_soon_days)?,
        })
    }

    pub fn days_overdue(&self, invoice: &Invoice) -> u32 {
        invoice.days_overdue(self.as_of)
    }

    pub fn status(&self, invoice: &Invoice) -> InvoiceStatus {
        classify_invoice_status(invoice.days_until_due(self.as_of), self.due_soon_days)
    }

    pub fn aging(&self, invoice: &Invoice) -> AgingBucket {
        classify_aging(self.days_overdue(invoice))
    }
}
