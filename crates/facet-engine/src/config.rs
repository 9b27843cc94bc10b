//! Facet category configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FacetError, Result};

/// How values in a category are compared against an active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// Exact equality against the item's normalized values. The rule for
    /// closed vocabularies ("focus", "level", "region").
    #[default]
    Exact,
    /// Case-insensitive substring containment, for free-text prose
    /// categories ("goals") where no closed vocabulary exists. Deliberately
    /// looser than `Exact`; the two must not be unified.
    Contains,
}

/// A named facet category and its match rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDef {
    pub name: String,
    #[serde(default)]
    pub rule: MatchRule,
}

impl FacetDef {
    pub fn exact(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule: MatchRule::Exact,
        }
    }

    pub fn contains(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule: MatchRule::Contains,
        }
    }
}

/// The ordered list of facet categories a listing filters on.
///
/// Category names are keys into the item objects. Names must be non-empty
/// and unique; the order given here is the order option lists come back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FacetDef>", into = "Vec<FacetDef>")]
pub struct FacetConfig {
    facets: Vec<FacetDef>,
}

impl FacetConfig {
    pub fn new(facets: Vec<FacetDef>) -> Result<Self> {
        let mut seen = HashSet::new();
        for facet in &facets {
            if facet.name.trim().is_empty() {
                return Err(FacetError::EmptyName);
            }
            if !seen.insert(facet.name.as_str()) {
                return Err(FacetError::DuplicateFacet(facet.name.clone()));
            }
        }
        Ok(Self { facets })
    }

    pub fn facets(&self) -> &[FacetDef] {
        &self.facets
    }
}

impl TryFrom<Vec<FacetDef>> for FacetConfig {
    type Error = FacetError;

    fn try_from(facets: Vec<FacetDef>) -> Result<Self> {
        Self::new(facets)
    }
}

impl From<FacetConfig> for Vec<FacetDef> {
    fn from(config: FacetConfig) -> Self {
        config.facets
    }
}
