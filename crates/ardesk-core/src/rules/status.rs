use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    Overdue,
    DueSoon,
    Current,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Overdue,
        InvoiceStatus::DueSoon,
        InvoiceStatus::Current,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::DueSoon => "due-soon",
            InvoiceStatus::Current => "current",
        }
    }

    pub fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "overdue" => Some(InvoiceStatus::Overdue),
            "due-soon" | "soon" => Some(InvoiceStatus::DueSoon),
            "current" => Some(InvoiceStatus::Current),
            _ => None,
        }
    }
}

/// Any day past due is overdue; due today through `soon_days` out is due-soon.
pub fn classify_invoice_status(days_until_due: i64, soon_days: i64) -> InvoiceStatus {
    if days_until_due < 0 {
        InvoiceStatus::Overdue
    } else if days_until_due <= soon_days {
        InvoiceStatus::DueSoon
    } else {
        InvoiceStatus::Current
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_invoice_status, InvoiceStatus};

    #[test]
    fn past_due_is_overdue() {
        assert_eq!(classify_invoice_status(-1, 7), InvoiceStatus::Overdue);
        assert_eq!(classify_invoice_status(-35, 7), InvoiceStatus::Overdue);
    }

    #[test]
    fn due_window_is_inclusive() {
        assert_eq!(classify_invoice_status(0, 7), InvoiceStatus::DueSoon);
        assert_eq!(classify_invoice_status(7, 7), InvoiceStatus::DueSoon);
        assert_eq!(classify_invoice_status(8, 7), InvoiceStatus::Current);
    }

    #[test]
    fn zero_soon_days_only_flags_today() {
        assert_eq!(classify_invoice_status(0, 0), InvoiceStatus::DueSoon);
        assert_eq!(classify_invoice_status(1, 0), InvoiceStatus::Current);
    }
}
