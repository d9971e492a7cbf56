pub mod client;
pub mod ids;
pub mod invoice;
pub mod money;
pub mod reminder;
pub mod score;

use crate::error::CoreError;

pub use client::{Client, PaymentTrend};
pub use ids::{ClientId, InvoiceId, ReminderId};
pub use invoice::Invoice;
pub use money::Money;
pub use reminder::{Reminder, ReminderChannel, ReminderStatus};
pub use score::{RiskScore, MAX_RISK_SCORE};

/// A record kind held by a record store and addressed by its id.
pub trait Record {
    type Id: Clone + Eq + std::hash::Hash + std::fmt::Display;

    fn id(&self) -> &Self::Id;

    fn validate(&self) -> Result<(), CoreError>;
}
