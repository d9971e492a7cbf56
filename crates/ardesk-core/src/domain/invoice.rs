use crate::domain::ids::InvoiceId;
use crate::domain::money::Money;
use crate::domain::score::RiskScore;
use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::risk::{classify_risk, RiskLevel};
use crate::time::days_between;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub risk_score: RiskScore,
    #[serde(default)]
    pub last_contact: Option<NaiveDate>,
    #[serde(default)]
    pub last_reminder_sent: Option<NaiveDate>,
}

impl Invoice {
    pub fn risk_level(&self) -> RiskLevel {
        classify_risk(self.risk_score)
    }

    /// Days until the due date as seen from `as_of`; negative once past due.
    pub fn days_until_due(&self, as_of: NaiveDate) -> i64 {
        days_between(as_of, self.due_date)
    }

    /// Whole days past due, zero when the invoice is not yet due.
    pub fn days_overdue(&self, as_of: NaiveDate) -> u32 {
        let late = days_between(self.due_date, as_of);
        late.clamp(0, i64::from(u32::MAX)) as u32
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.customer.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(CoreError::InvalidAmount(self.amount.minor_units()));
        }
        Ok(())
    }
}

impl Record for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &InvoiceId {
        &self.id
    }

    fn validate(&self) -> Result<(), CoreError> {
        Invoice::validate(self)
    }
}
