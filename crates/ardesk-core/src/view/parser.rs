use crate::view::filter::{CategoryFilter, Facet, Filters};
use crate::view::FilterParseError;

const ALL_VALUE: &str = "all";

/// Splits `input` into free text and at most one `key:value` category token.
///
/// Tokens whose key the facet does not own stay part of the search text, so
/// `INV-2024:01` searches for that literal. Unknown or empty values for a
/// known key produce [`CategoryFilter::Unmatched`], which matches nothing.
pub fn parse_filters<F: Facet>(input: &str) -> Result<Filters<F>, FilterParseError> {
    let mut terms: Vec<&str> = Vec::new();
    let mut category: Option<CategoryFilter<F>> = None;

    for token in input.split_whitespace() {
        if let Some((key_raw, value)) = token.split_once(':') {
            let key = key_raw.to_ascii_lowercase();
            if F::KEYS.contains(&key.as_str()) {
                if category.is_some() {
                    return Err(FilterParseError::DuplicateCategory(token.to_string()));
                }
                category = Some(if value.eq_ignore_ascii_case(ALL_VALUE) {
                    CategoryFilter::All
                } else {
                    match F::parse(&key, value) {
                        Some(facet) => CategoryFilter::Only(facet),
                        None => CategoryFilter::Unmatched(token.to_string()),
                    }
                });
                continue;
            }
        }
        terms.push(token);
    }

    Ok(Filters {
        query: terms.join(" "),
        category: category.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_filters;
    use crate::rules::{InvoiceStatus, RiskLevel};
    use crate::view::filter::{CategoryFilter, Filters};
    use crate::view::{FilterParseError, InvoiceFacet};

    #[test]
    fn parse_text_and_category() {
        let filters: Filters<RiskLevel> = parse_filters("acme  corp risk:High").unwrap();
        assert_eq!(filters.query, "acme corp");
        assert_eq!(filters.category, CategoryFilter::Only(RiskLevel::High));
    }

    #[test]
    fn empty_input_is_unfiltered() {
        let filters: Filters<RiskLevel> = parse_filters("   ").unwrap();
        assert!(filters.is_unfiltered());
    }

    #[test]
    fn all_value_clears_category() {
        let filters: Filters<InvoiceFacet> = parse_filters("status:all").unwrap();
        assert_eq!(filters.category, CategoryFilter::All);
    }

    #[test]
    fn unknown_value_is_unmatched_not_error() {
        let filters: Filters<InvoiceFacet> = parse_filters("status:late").unwrap();
        assert_eq!(
            filters.category,
            CategoryFilter::Unmatched("status:late".to_string())
        );
    }

    #[test]
    fn foreign_keys_stay_in_query() {
        let filters: Filters<RiskLevel> = parse_filters("status:overdue").unwrap();
        assert_eq!(filters.query, "status:overdue");
        assert!(filters.category.is_all());
    }

    #[test]
    fn invoice_status_token() {
        let filters: Filters<InvoiceFacet> = parse_filters("INV-2024 STATUS:due-soon").unwrap();
        assert_eq!(filters.query, "INV-2024");
        assert_eq!(
            filters.category,
            CategoryFilter::Only(InvoiceFacet::Status(InvoiceStatus::DueSoon))
        );
    }

    #[test]
    fn empty_value_is_unmatched() {
        let filters: Filters<RiskLevel> = parse_filters("acme risk:").unwrap();
        assert_eq!(filters.query, "acme");
        assert_eq!(filters.category, CategoryFilter::Unmatched("risk:".to_string()));
    }

    #[test]
    fn second_category_is_error() {
        let err = parse_filters::<InvoiceFacet>("status:overdue aging:0-30").unwrap_err();
        assert_eq!(
            err,
            FilterParseError::DuplicateCategory("aging:0-30".to_string())
        );
    }

    #[test]
    fn to_input_parses_back() {
        let filters = Filters::all()
            .with_query("global")
            .with_category(InvoiceFacet::Status(InvoiceStatus::Overdue));
        let parsed: Filters<InvoiceFacet> = parse_filters(&filters.to_input()).unwrap();
        assert_eq!(parsed, filters);
    }
}
