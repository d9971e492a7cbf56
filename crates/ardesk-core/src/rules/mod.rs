pub mod aging;
pub mod policy;
pub mod queue;
pub mod risk;
pub mod status;

pub use aging::{classify_aging, AgingBucket};
pub use policy::{validate_soon_days, AgingPolicy, DEFAULT_SOON_DAYS, MAX_SOON_DAYS};
pub use queue::{classify_reminder_queue, ReminderQueue};
pub use risk::{classify_risk, RiskLevel, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD};
pub use status::{classify_invoice_status, InvoiceStatus};
