//! Error types for facet configuration.
//!
//! Filtering itself never fails -- malformed facet data degrades to an empty
//! value set. Errors exist only for building a [`crate::FacetConfig`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacetError {
    #[error("Facet category name must not be empty")]
    EmptyName,

    #[error("Duplicate facet category: {0}")]
    DuplicateFacet(String),
}

pub type Result<T> = std::result::Result<T, FacetError>;
