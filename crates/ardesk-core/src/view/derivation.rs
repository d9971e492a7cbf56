use crate::view::filter::{CategoryFilter, Filters};
use crate::view::record::RecordView;

/// Output of one derivation: the visible records (in store order, borrowed
/// from the store) and the summary of the full, unfiltered store.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived<'a, R, S> {
    pub visible: Vec<&'a R>,
    pub total: usize,
    pub summary: S,
}

impl<R, S> Derived<'_, R, S> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

pub fn derive<'a, V: RecordView>(
    view: &V,
    records: &'a [V::Record],
    filters: &Filters<V::Facet>,
) -> Derived<'a, V::Record, V::Summary> {
    let needle = filters.query.to_lowercase();
    let visible = records
        .iter()
        .filter(|record| matches(view, record, &needle, &filters.category))
        .collect();

    Derived {
        visible,
        total: records.len(),
        summary: view.summarize(records),
    }
}

fn matches<V: RecordView>(
    view: &V,
    record: &V::Record,
    needle: &str,
    category: &CategoryFilter<V::Facet>,
) -> bool {
    matches_text(view, record, needle) && matches_category(view, record, category)
}

fn matches_text<V: RecordView>(view: &V, record: &V::Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    view.search_fields(record)
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_category<V: RecordView>(
    view: &V,
    record: &V::Record,
    category: &CategoryFilter<V::Facet>,
) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Only(facet) => view.matches_facet(record, facet),
        CategoryFilter::Unmatched(_) => false,
    }
}
