use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("id is required")]
    EmptyId,
    #[error("name is required")]
    EmptyName,
    #[error("invalid risk score: {0} (expected 0-100)")]
    InvalidRiskScore(i64),
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
    #[error("paid on time ({paid}) exceeds total invoices ({total})")]
    InvalidInvoiceCounts { paid: u32, total: u32 },
    #[error("invalid due soon days: {0}")]
    InvalidSoonDays(i64),
}
