use ardesk_core::domain::{Client, Invoice, Reminder};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::Result;

const SAMPLE_DATA: &str = include_str!("../data/sample.json");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SampleData {
    pub(crate) reference_date: NaiveDate,
    pub(crate) clients: Vec<Client>,
    pub(crate) invoices: Vec<Invoice>,
    pub(crate) reminders: Vec<Reminder>,
}

pub(crate) fn load_sample() -> Result<SampleData> {
    Ok(serde_json::from_str(SAMPLE_DATA)?)
}
