//! Turns request parameters into store filters.

pub mod collection;
pub mod search;

pub use collection::{CatalogCollection, Facet, FacetKind};
pub use search::{SearchTerms, search_filter};
