pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;
pub mod time;
pub mod view;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use rules::*;
pub use view::{derive, parse_filters, CategoryFilter, Derived, Filters, FilterParseError};
