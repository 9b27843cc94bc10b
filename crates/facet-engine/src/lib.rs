//! # facet-engine
//!
//! Multi-facet filtering for agenda and room listings: value normalization,
//! option extraction, and filter matching over loosely shaped JSON rows.
//!
//! Items are plain `serde_json::Value` objects whose facet attributes may be
//! absent, `null`, a single string, a comma- or newline-joined string, or an
//! array. Both operations are stateless pure transforms; the caller holds
//! the [`FilterSelection`] and mutates it one toggle at a time.
//!
//! Filter semantics: OR within a category, AND across categories. Most
//! categories match on exact values; free-text categories like "goals" use
//! case-insensitive substring containment instead (see [`MatchRule`]).
//!
//! ## Quick start
//!
//! ```rust
//! use facet_engine::{
//!     apply_filters, extract_filter_options, FacetConfig, FacetDef, FilterSelection,
//! };
//! use serde_json::json;
//!
//! let items = vec![
//!     json!({"title": "Opening keynote", "focus": "Adoption, Trust", "level": "all"}),
//!     json!({"title": "Registry deep dive", "focus": ["Interoperability"], "level": "expert"}),
//! ];
//! let config = FacetConfig::new(vec![
//!     FacetDef::exact("focus"),
//!     FacetDef::exact("level"),
//! ]).unwrap();
//!
//! let options = extract_filter_options(&items, &config);
//! assert_eq!(options[0].values, ["Adoption", "Interoperability", "Trust"]);
//!
//! let mut selection = FilterSelection::new();
//! selection.toggle("focus", "Trust");
//! let filtered = apply_filters(&items, &config, &selection);
//! assert_eq!(filtered.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the [`FacetValue`] tagged union and normalization
//! - [`config`] — facet categories and match rules
//! - [`selection`] — caller-held active selections
//! - [`options`] — global option-list extraction
//! - [`filter`] — selection matching
//! - [`error`] — error types

pub mod config;
pub mod error;
pub mod filter;
pub mod options;
pub mod selection;
pub mod value;

pub use config::{FacetConfig, FacetDef, MatchRule};
pub use error::FacetError;
pub use filter::apply_filters;
pub use options::{extract_filter_options, FacetOptions};
pub use selection::FilterSelection;
pub use value::FacetValue;
