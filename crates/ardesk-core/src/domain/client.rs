use crate::domain::ids::ClientId;
use crate::domain::money::Money;
use crate::domain::score::RiskScore;
use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::risk::{classify_risk, RiskLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTrend {
    Up,
    Down,
    Stable,
}

impl PaymentTrend {
    pub fn label(self) -> &'static str {
        match self {
            PaymentTrend::Up => "up",
            PaymentTrend::Down => "down",
            PaymentTrend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub contact: String,
    pub outstanding_balance: Money,
    pub avg_days_late: u32,
    pub risk_score: RiskScore,
    pub total_invoices: u32,
    pub paid_on_time: u32,
    pub payment_trend: PaymentTrend,
    pub last_payment: NaiveDate,
}

impl Client {
    pub fn risk_level(&self) -> RiskLevel {
        classify_risk(self.risk_score)
    }

    /// Share of invoices paid on time, rounded half-up; 0 with no invoices.
    pub fn on_time_percent(&self) -> u32 {
        if self.total_invoices == 0 {
            return 0;
        }
        let paid = u64::from(self.paid_on_time);
        let total = u64::from(self.total_invoices);
        ((paid * 200 + total) / (total * 2)) as u32
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if self.outstanding_balance.is_negative() {
            return Err(CoreError::InvalidAmount(
                self.outstanding_balance.minor_units(),
            ));
        }
        if self.paid_on_time > self.total_invoices {
            return Err(CoreError::InvalidInvoiceCounts {
                paid: self.paid_on_time,
                total: self.total_invoices,
            });
        }
        Ok(())
    }
}

impl Record for Client {
    type Id = ClientId;

    fn id(&self) -> &ClientId {
        &self.id
    }

    fn validate(&self) -> Result<(), CoreError> {
        Client::validate(self)
    }
}
