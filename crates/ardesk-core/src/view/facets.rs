use crate::domain::{ReminderChannel, ReminderStatus};
use crate::rules::{AgingBucket, InvoiceStatus, ReminderQueue, RiskLevel};
use crate::view::filter::Facet;

const RISK_KEY: &str = "risk";
const STATUS_KEY: &str = "status";
const AGING_KEY: &str = "aging";
const QUEUE_KEY: &str = "queue";
const CHANNEL_KEY: &str = "channel";

impl Facet for RiskLevel {
    const KEYS: &'static [&'static str] = &[RISK_KEY];

    fn parse(key: &str, value: &str) -> Option<Self> {
        match key {
            RISK_KEY => RiskLevel::parse_label(value),
            _ => None,
        }
    }

    fn key(&self) -> &'static str {
        RISK_KEY
    }

    fn value_label(&self) -> &'static str {
        self.label()
    }

    fn options() -> Vec<Self> {
        RiskLevel::ALL.to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceFacet {
    Status(InvoiceStatus),
    Aging(AgingBucket),
    Risk(RiskLevel),
}

impl Facet for InvoiceFacet {
    const KEYS: &'static [&'static str] = &[STATUS_KEY, AGING_KEY, RISK_KEY];

    fn parse(key: &str, value: &str) -> Option<Self> {
        match key {
            STATUS_KEY => InvoiceStatus::parse_label(value).map(InvoiceFacet::Status),
            AGING_KEY => AgingBucket::parse_label(value).map(InvoiceFacet::Aging),
            RISK_KEY => RiskLevel::parse_label(value).map(InvoiceFacet::Risk),
            _ => None,
        }
    }

    fn key(&self) -> &'static str {
        match self {
            InvoiceFacet::Status(_) => STATUS_KEY,
            InvoiceFacet::Aging(_) => AGING_KEY,
            InvoiceFacet::Risk(_) => RISK_KEY,
        }
    }

    fn value_label(&self) -> &'static str {
        match self {
            InvoiceFacet::Status(status) => status.label(),
            InvoiceFacet::Aging(bucket) => bucket.label(),
            InvoiceFacet::Risk(level) => level.label(),
        }
    }

    fn options() -> Vec<Self> {
        InvoiceStatus::ALL
            .into_iter()
            .map(InvoiceFacet::Status)
            .chain(AgingBucket::ALL.into_iter().map(InvoiceFacet::Aging))
            .chain(RiskLevel::ALL.into_iter().map(InvoiceFacet::Risk))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderFacet {
    Queue(ReminderQueue),
    Status(ReminderStatus),
    Channel(ReminderChannel),
}

impl Facet for ReminderFacet {
    const KEYS: &'static [&'static str] = &[QUEUE_KEY, STATUS_KEY, CHANNEL_KEY];

    fn parse(key: &str, value: &str) -> Option<Self> {
        match key {
            QUEUE_KEY => ReminderQueue::parse_label(value).map(ReminderFacet::Queue),
            STATUS_KEY => ReminderStatus::parse_label(value).map(ReminderFacet::Status),
            CHANNEL_KEY => ReminderChannel::parse_label(value).map(ReminderFacet::Channel),
            _ => None,
        }
    }

    fn key(&self) -> &'static str {
        match self {
            ReminderFacet::Queue(_) => QUEUE_KEY,
            ReminderFacet::Status(_) => STATUS_KEY,
            ReminderFacet::Channel(_) => CHANNEL_KEY,
        }
    }

    fn value_label(&self) -> &'static str {
        match self {
            ReminderFacet::Queue(queue) => queue.label(),
            ReminderFacet::Status(status) => status.label(),
            ReminderFacet::Channel(channel) => channel.label(),
        }
    }

    fn options() -> Vec<Self> {
        ReminderQueue::ALL
            .into_iter()
            .map(ReminderFacet::Queue)
            .chain(ReminderStatus::ALL.into_iter().map(ReminderFacet::Status))
            .chain(ReminderChannel::ALL.into_iter().map(ReminderFacet::Channel))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{InvoiceFacet, ReminderFacet};
    use crate::rules::{AgingBucket, InvoiceStatus};
    use crate::view::filter::Facet;

    #[test]
    fn every_option_parses_from_its_token() {
        for facet in InvoiceFacet::options() {
            assert_eq!(
                InvoiceFacet::parse(facet.key(), facet.value_label()),
                Some(facet)
            );
        }
        for facet in ReminderFacet::options() {
            assert_eq!(
                ReminderFacet::parse(facet.key(), facet.value_label()),
                Some(facet)
            );
        }
    }

    #[test]
    fn invoice_facet_tokens() {
        assert_eq!(
            InvoiceFacet::Status(InvoiceStatus::DueSoon).token(),
            "status:due-soon"
        );
        assert_eq!(InvoiceFacet::Aging(AgingBucket::Over60).token(), "aging:60+");
        assert_eq!(InvoiceFacet::parse("channel", "email"), None);
    }
}
