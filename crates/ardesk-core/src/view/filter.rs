use std::fmt;

/// A closed set of categories a record kind can be narrowed to.
pub trait Facet: Clone + PartialEq + fmt::Debug {
    /// Filter keys understood by this facet, e.g. `risk` or `status`.
    const KEYS: &'static [&'static str];

    fn parse(key: &str, value: &str) -> Option<Self>;

    fn key(&self) -> &'static str;

    fn value_label(&self) -> &'static str;

    /// Every selectable value, in the order front ends cycle through them.
    fn options() -> Vec<Self>;

    fn token(&self) -> String {
        format!("{}:{}", self.key(), self.value_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter<F> {
    All,
    Only(F),
    /// A value that names no category; matches no record.
    Unmatched(String),
}

impl<F> Default for CategoryFilter<F> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<F: Facet> CategoryFilter<F> {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(facet) => facet.token(),
            CategoryFilter::Unmatched(raw) => raw.clone(),
        }
    }

    /// All, then each option in turn, then back to All.
    pub fn cycle_next(&self) -> Self {
        let options = F::options();
        let next = match self {
            CategoryFilter::Only(current) => options
                .iter()
                .position(|option| option == current)
                .and_then(|pos| options.get(pos + 1)),
            CategoryFilter::All => options.first(),
            CategoryFilter::Unmatched(_) => None,
        };
        match next {
            Some(facet) => CategoryFilter::Only(facet.clone()),
            None => CategoryFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters<F> {
    pub query: String,
    pub category: CategoryFilter<F>,
}

impl<F> Default for Filters<F> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<F: Facet> Filters<F> {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, facet: F) -> Self {
        self.category = CategoryFilter::Only(facet);
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }

    /// The filter string that parses back to these filters.
    pub fn to_input(&self) -> String {
        let mut parts = Vec::new();
        if !self.query.is_empty() {
            parts.push(self.query.clone());
        }
        if !self.category.is_all() {
            parts.push(self.category.label());
        }
        parts.join(" ")
    }
}
