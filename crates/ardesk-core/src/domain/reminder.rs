use crate::domain::ids::{InvoiceId, ReminderId};
use crate::domain::money::Money;
use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::queue::{classify_reminder_queue, ReminderQueue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Scheduled,
    Sent,
    Failed,
    Pending,
}

impl ReminderStatus {
    pub const ALL: [ReminderStatus; 4] = [
        ReminderStatus::Scheduled,
        ReminderStatus::Sent,
        ReminderStatus::Failed,
        ReminderStatus::Pending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReminderStatus::Scheduled => "scheduled",
            ReminderStatus::Sent => "sent",
            ReminderStatus::Failed => "failed",
            ReminderStatus::Pending => "pending",
        }
    }

    pub fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Some(ReminderStatus::Scheduled),
            "sent" => Some(ReminderStatus::Sent),
            "failed" => Some(ReminderStatus::Failed),
            "pending" => Some(ReminderStatus::Pending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderChannel {
    Email,
    Sms,
    Whatsapp,
    Call,
}

impl ReminderChannel {
    pub const ALL: [ReminderChannel; 4] = [
        ReminderChannel::Email,
        ReminderChannel::Sms,
        ReminderChannel::Whatsapp,
        ReminderChannel::Call,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReminderChannel::Email => "email",
            ReminderChannel::Sms => "sms",
            ReminderChannel::Whatsapp => "whatsapp",
            ReminderChannel::Call => "call",
        }
    }

    pub fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "email" => Some(ReminderChannel::Email),
            "sms" => Some(ReminderChannel::Sms),
            "whatsapp" => Some(ReminderChannel::Whatsapp),
            "call" => Some(ReminderChannel::Call),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub invoice_id: InvoiceId,
    pub client_name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub scheduled_date: NaiveDate,
    pub status: ReminderStatus,
    pub channel: ReminderChannel,
    pub attempt_count: u32,
    #[serde(default)]
    pub last_attempt: Option<NaiveDate>,
    #[serde(default)]
    pub next_attempt: Option<NaiveDate>,
    #[serde(default)]
    pub response_received: Option<bool>,
}

impl Reminder {
    pub fn queue(&self) -> ReminderQueue {
        classify_reminder_queue(self.status)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.client_name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(CoreError::InvalidAmount(self.amount.minor_units()));
        }
        Ok(())
    }
}

impl Record for Reminder {
    type Id = ReminderId;

    fn id(&self) -> &ReminderId {
        &self.id
    }

    fn validate(&self) -> Result<(), CoreError> {
        Reminder::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{ReminderChannel, ReminderStatus};

    #[test]
    fn labels_round_trip_case_insensitively() {
        for status in ReminderStatus::ALL {
            assert_eq!(
                ReminderStatus::parse_label(&status.label().to_uppercase()),
                Some(status)
            );
        }
        assert_eq!(ReminderChannel::parse_label("WhatsApp"), Some(ReminderChannel::Whatsapp));
        assert_eq!(ReminderChannel::parse_label("fax"), None);
    }
}
