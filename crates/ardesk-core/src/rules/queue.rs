use crate::domain::ReminderStatus;
use serde::{Deserialize, Serialize};

/// Work queue a reminder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderQueue {
    ActionRequired,
    Upcoming,
    History,
}

impl ReminderQueue {
    pub const ALL: [ReminderQueue; 3] = [
        ReminderQueue::ActionRequired,
        ReminderQueue::Upcoming,
        ReminderQueue::History,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReminderQueue::ActionRequired => "action",
            ReminderQueue::Upcoming => "upcoming",
            ReminderQueue::History => "history",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReminderQueue::ActionRequired => "Action Required",
            ReminderQueue::Upcoming => "Upcoming",
            ReminderQueue::History => "History",
        }
    }

    pub fn parse_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "action" | "action-required" => Some(ReminderQueue::ActionRequired),
            "upcoming" => Some(ReminderQueue::Upcoming),
            "history" => Some(ReminderQueue::History),
            _ => None,
        }
    }
}

pub fn classify_reminder_queue(status: ReminderStatus) -> ReminderQueue {
    match status {
        ReminderStatus::Failed | ReminderStatus::Pending => ReminderQueue::ActionRequired,
        ReminderStatus::Scheduled => ReminderQueue::Upcoming,
        ReminderStatus::Sent => ReminderQueue::History,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_reminder_queue, ReminderQueue};
    use crate::domain::ReminderStatus;

    #[test]
    fn statuses_map_to_queues() {
        assert_eq!(
            classify_reminder_queue(ReminderStatus::Failed),
            ReminderQueue::ActionRequired
        );
        assert_eq!(
            classify_reminder_queue(ReminderStatus::Pending),
            ReminderQueue::ActionRequired
        );
        assert_eq!(
            classify_reminder_queue(ReminderStatus::Scheduled),
            ReminderQueue::Upcoming
        );
        assert_eq!(
            classify_reminder_queue(ReminderStatus::Sent),
            ReminderQueue::History
        );
    }
}
