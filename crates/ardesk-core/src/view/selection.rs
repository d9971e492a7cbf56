use crate::view::filter::{CategoryFilter, Facet, Filters};

/// Whether a view shows its list or the detail panel of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<Id> {
    List,
    Detail(Id),
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Selection::List
    }
}

/// Presentation-owned state of one record view. Navigation never touches the
/// filters, so leaving a detail panel restores the list as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<F, Id> {
    pub filters: Filters<F>,
    pub selection: Selection<Id>,
}

impl<F, Id> Default for ViewState<F, Id> {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            selection: Selection::List,
        }
    }
}

impl<F: Facet, Id> ViewState<F, Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the detail panel; selecting while already in detail replaces it.
    pub fn select(&mut self, id: Id) {
        self.selection = Selection::Detail(id);
    }

    pub fn back(&mut self) {
        self.selection = Selection::List;
    }

    pub fn selected(&self) -> Option<&Id> {
        match &self.selection {
            Selection::Detail(id) => Some(id),
            Selection::List => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self.selection, Selection::Detail(_))
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter<F>) {
        self.filters.category = category;
    }

    pub fn cycle_category(&mut self) {
        self.filters.category = self.filters.category.cycle_next();
    }

    pub fn clear_filters(&mut self) {
        self.filters = Filters::default();
    }
}
