use anyhow::Result;
use ardesk_core::view::Facet;
use ardesk_core::{parse_filters, Filters};
use tracing::debug;

pub fn parse_filter_arg<F: Facet>(raw: Option<&str>) -> Result<Filters<F>> {
    let input = raw.unwrap_or_default();
    let filters = parse_filters::<F>(input)?;
    debug!(
        query = %filters.query,
        category = %filters.category.label(),
        "filters parsed"
    );
    Ok(filters)
}

pub fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}
