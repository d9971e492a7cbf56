use serde::{Deserialize, Serialize};

/// Top-level views a front end can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Dashboard,
    Invoices,
    Reminders,
    Clients,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Dashboard,
        ViewKind::Invoices,
        ViewKind::Reminders,
        ViewKind::Clients,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "Dashboard",
            ViewKind::Invoices => "Invoices",
            ViewKind::Reminders => "Reminders",
            ViewKind::Clients => "Clients",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "dashboard",
            ViewKind::Invoices => "invoices",
            ViewKind::Reminders => "reminders",
            ViewKind::Clients => "clients",
        }
    }

    pub fn parse_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(raw))
    }

    pub fn index(self) -> usize {
        match self {
            ViewKind::Dashboard => 0,
            ViewKind::Invoices => 1,
            ViewKind::Reminders => 2,
            ViewKind::Clients => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::ViewKind;

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(ViewKind::Clients.next(), ViewKind::Dashboard);
        assert_eq!(ViewKind::Dashboard.prev(), ViewKind::Clients);
        assert_eq!(ViewKind::from_index(2), Some(ViewKind::Reminders));
        assert_eq!(ViewKind::from_index(4), None);
    }

    #[test]
    fn parse_label_ignores_case() {
        assert_eq!(ViewKind::parse_label("Invoices"), Some(ViewKind::Invoices));
        assert_eq!(ViewKind::parse_label("ledger"), None);
    }
}
