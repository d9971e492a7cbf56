use crate::domain::{Client, Invoice, Money, Reminder, ReminderStatus};
use crate::rules::{AgingBucket, AgingPolicy, InvoiceStatus, ReminderQueue, RiskLevel};
use crate::view::aggregate::{mean_rounded, percent_rounded, sum_money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub total_clients: usize,
    pub total_outstanding: Money,
    pub avg_days_late: i64,
    pub high_risk_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingSlice {
    pub bucket: AgingBucket,
    pub count: usize,
    pub amount: Money,
    /// Share of the total invoiced amount, rounded half-up.
    pub percent: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub total_invoices: usize,
    pub total_amount: Money,
    pub overdue_count: usize,
    pub overdue_amount: Money,
    pub due_soon_count: usize,
    pub avg_risk_score: i64,
    pub aging: Vec<AgingSlice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSummary {
    pub total_reminders: usize,
    pub action_required: usize,
    pub upcoming: usize,
    pub history: usize,
    pub failed: usize,
    pub responses_received: usize,
    pub total_amount: Money,
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_ar: Money,
    pub current: Money,
    pub overdue: Money,
    pub at_risk: Money,
    pub invoice_count: usize,
    pub overdue_count: usize,
    pub aging: Vec<AgingSlice>,
}

pub fn summarize_clients(clients: &[Client]) -> ClientSummary {
    ClientSummary {
        total_clients: clients.len(),
        total_outstanding: sum_money(clients.iter().map(|c| c.outstanding_balance)),
        avg_days_late: mean_rounded(clients.iter().map(|c| i64::from(c.avg_days_late))),
        high_risk_count: clients
            .iter()
            .filter(|c| c.risk_level() == RiskLevel::High)
            .count(),
    }
}

pub fn aging_breakdown(invoices: &[Invoice], policy: &AgingPolicy) -> Vec<AgingSlice> {
    let total = sum_money(invoices.iter().map(|i| i.amount));
    AgingBucket::ALL
        .into_iter()
        .map(|bucket| {
            let in_bucket: Vec<&Invoice> = invoices
                .iter()
                .filter(|invoice| policy.aging(invoice) == bucket)
                .collect();
            let amount = sum_money(in_bucket.iter().map(|i| i.amount));
            AgingSlice {
                bucket,
                count: in_bucket.len(),
                amount,
                percent: percent_rounded(amount.minor_units(), total.minor_units()),
            }
        })
        .collect()
}

pub fn summarize_invoices(invoices: &[Invoice], policy: &AgingPolicy) -> InvoiceSummary {
    let overdue: Vec<&Invoice> = invoices
        .iter()
        .filter(|invoice| policy.status(invoice) == InvoiceStatus::Overdue)
        .collect();
    InvoiceSummary {
        total_invoices: invoices.len(),
        total_amount: sum_money(invoices.iter().map(|i| i.amount)),
        overdue_count: overdue.len(),
        overdue_amount: sum_money(overdue.iter().map(|i| i.amount)),
        due_soon_count: invoices
            .iter()
            .filter(|invoice| policy.status(invoice) == InvoiceStatus::DueSoon)
            .count(),
        avg_risk_score: mean_rounded(invoices.iter().map(|i| i64::from(i.risk_score.value()))),
        aging: aging_breakdown(invoices, policy),
    }
}

pub fn summarize_reminders(reminders: &[Reminder]) -> ReminderSummary {
    let in_queue = |queue: ReminderQueue| reminders.iter().filter(|r| r.queue() == queue).count();
    ReminderSummary {
        total_reminders: reminders.len(),
        action_required: in_queue(ReminderQueue::ActionRequired),
        upcoming: in_queue(ReminderQueue::Upcoming),
        history: in_queue(ReminderQueue::History),
        failed: reminders
            .iter()
            .filter(|r| r.status == ReminderStatus::Failed)
            .count(),
        responses_received: reminders
            .iter()
            .filter(|r| r.response_received == Some(true))
            .count(),
        total_amount: sum_money(reminders.iter().map(|r| r.amount)),
    }
}

pub fn summarize_dashboard(invoices: &[Invoice], policy: &AgingPolicy) -> DashboardSummary {
    let aging = aging_breakdown(invoices, policy);
    let current: Money = aging
        .iter()
        .filter(|slice| slice.bucket == AgingBucket::UpTo30)
        .map(|slice| slice.amount)
        .sum();
    let overdue: Money = aging
        .iter()
        .filter(|slice| slice.bucket != AgingBucket::UpTo30)
        .map(|slice| slice.amount)
        .sum();
    DashboardSummary {
        total_ar: sum_money(invoices.iter().map(|i| i.amount)),
        current,
        overdue,
        at_risk: sum_money(
            invoices
                .iter()
                .filter(|i| i.risk_level() == RiskLevel::High)
                .map(|i| i.amount),
        ),
        invoice_count: invoices.len(),
        overdue_count: invoices
            .iter()
            .filter(|invoice| policy.status(invoice) == InvoiceStatus::Overdue)
            .count(),
        aging,
    }
}

#[cfg(test)]
mod tests {
    use super::{aging_breakdown, summarize_clients, summarize_dashboard};
    use crate::domain::{Client, ClientId, Invoice, InvoiceId, Money, PaymentTrend, RiskScore};
    use crate::rules::{AgingBucket, AgingPolicy};
    use chrono::{Duration, NaiveDate};

    fn client(name: &str, balance: i64, days_late: u32, risk: i64) -> Client {
        Client {
            id: ClientId::new(name).unwrap(),
            name: name.to_string(),
            contact: "Someone".to_string(),
            outstanding_balance: Money::from_major(balance),
            avg_days_late: days_late,
            risk_score: RiskScore::new(risk).unwrap(),
            total_invoices: 10,
            paid_on_time: 5,
            payment_trend: PaymentTrend::Stable,
            last_payment: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        }
    }

    fn invoice(id: &str, amount: i64, days_late: i64, risk: i64, policy: &AgingPolicy) -> Invoice {
        Invoice {
            id: InvoiceId::new(id).unwrap(),
            customer: "Customer".to_string(),
            amount: Money::from_major(amount),
            due_date: policy.as_of - Duration::days(days_late),
            risk_score: RiskScore::new(risk).unwrap(),
            last_contact: None,
            last_reminder_sent: None,
        }
    }

    fn policy() -> AgingPolicy {
        AgingPolicy::new(NaiveDate::from_ymd_opt(2024, 12, 22).unwrap(), 7).unwrap()
    }

    #[test]
    fn client_summary_figures() {
        let clients = vec![
            client("MegaMart", 340_000, 45, 85),
            client("Acme Corp", 225_000, 12, 25),
            client("RetailHub", 180_000, 52, 80),
        ];
        let summary = summarize_clients(&clients);
        assert_eq!(summary.total_clients, 3);
        assert_eq!(summary.total_outstanding, Money::from_major(745_000));
        assert_eq!(summary.avg_days_late, 36);
        assert_eq!(summary.high_risk_count, 2);
    }

    #[test]
    fn empty_client_summary_is_zeroed() {
        let summary = summarize_clients(&[]);
        assert_eq!(summary.total_clients, 0);
        assert_eq!(summary.total_outstanding, Money::ZERO);
        assert_eq!(summary.avg_days_late, 0);
    }

    #[test]
    fn aging_breakdown_covers_every_bucket() {
        let policy = policy();
        let invoices = vec![
            invoice("A", 300, 5, 10, &policy),
            invoice("B", 100, 35, 10, &policy),
            invoice("C", 400, -10, 10, &policy),
        ];
        let slices = aging_breakdown(&invoices, &policy);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].bucket, AgingBucket::UpTo30);
        assert_eq!(slices[0].count, 2);
        assert_eq!(slices[0].percent, 88);
        assert_eq!(slices[1].count, 1);
        assert_eq!(slices[1].percent, 13);
        assert_eq!(slices[2].count, 0);
        assert_eq!(slices[2].amount, Money::ZERO);
    }

    #[test]
    fn dashboard_splits_current_and_overdue() {
        let policy = policy();
        let invoices = vec![
            invoice("A", 300, 5, 85, &policy),
            invoice("B", 100, 35, 20, &policy),
            invoice("C", 50, 90, 90, &policy),
        ];
        let dashboard = summarize_dashboard(&invoices, &policy);
        assert_eq!(dashboard.total_ar, Money::from_major(450));
        assert_eq!(dashboard.current, Money::from_major(300));
        assert_eq!(dashboard.overdue, Money::from_major(150));
        assert_eq!(dashboard.at_risk, Money::from_major(350));
        assert_eq!(dashboard.overdue_count, 3);
    }
}
