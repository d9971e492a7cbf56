use crate::domain::{
    Client, ClientId, Invoice, InvoiceId, Money, PaymentTrend, Reminder, ReminderChannel,
    ReminderId, ReminderStatus,
};
use crate::rules::{AgingBucket, AgingPolicy, InvoiceStatus, ReminderQueue, RiskLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDto {
    pub id: ClientId,
    pub name: String,
    pub contact: String,
    pub outstanding_balance: Money,
    pub avg_days_late: u32,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub total_invoices: u32,
    pub paid_on_time: u32,
    pub on_time_percent: u32,
    pub payment_trend: PaymentTrend,
    pub last_payment: NaiveDate,
}

impl From<&Client> for ClientDto {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.clone(),
            name: client.name.clone(),
            contact: client.contact.clone(),
            outstanding_balance: client.outstanding_balance,
            avg_days_late: client.avg_days_late,
            risk_score: client.risk_score.value(),
            risk_level: client.risk_level(),
            total_invoices: client.total_invoices,
            paid_on_time: client.paid_on_time,
            on_time_percent: client.on_time_percent(),
            payment_trend: client.payment_trend,
            last_payment: client.last_payment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub id: InvoiceId,
    pub customer: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub days_overdue: u32,
    pub aging: AgingBucket,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub last_contact: Option<NaiveDate>,
    pub last_reminder_sent: Option<NaiveDate>,
}

impl InvoiceDto {
    pub fn new(invoice: &Invoice, policy: &AgingPolicy) -> Self {
        Self {
            id: invoice.id.clone(),
            customer: invoice.customer.clone(),
            amount: invoice.amount,
            due_date: invoice.due_date,
            status: policy.status(invoice),
            days_overdue: policy.days_overdue(invoice),
            aging: policy.aging(invoice),
            risk_score: invoice.risk_score.value(),
            risk_level: invoice.risk_level(),
            last_contact: invoice.last_contact,
            last_reminder_sent: invoice.last_reminder_sent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderDto {
    pub id: ReminderId,
    pub invoice_id: InvoiceId,
    pub client_name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub scheduled_date: NaiveDate,
    pub status: ReminderStatus,
    pub channel: ReminderChannel,
    pub queue: ReminderQueue,
    pub attempt_count: u32,
    pub last_attempt: Option<NaiveDate>,
    pub next_attempt: Option<NaiveDate>,
    pub response_received: Option<bool>,
}

impl From<&Reminder> for ReminderDto {
    fn from(reminder: &Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            invoice_id: reminder.invoice_id.clone(),
            client_name: reminder.client_name.clone(),
            amount: reminder.amount,
            due_date: reminder.due_date,
            scheduled_date: reminder.scheduled_date,
            status: reminder.status,
            channel: reminder.channel,
            queue: reminder.queue(),
            attempt_count: reminder.attempt_count,
            last_attempt: reminder.last_attempt,
            next_attempt: reminder.next_attempt,
            response_received: reminder.response_received,
        }
    }
}

/// A filtered list together with the whole-store summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOutputDto<T, S> {
    pub summary: S,
    pub total: usize,
    pub items: Vec<T>,
}
