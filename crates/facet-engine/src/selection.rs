//! Caller-held filter state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The active filter selections: category name to chosen values.
///
/// An absent category or an empty value list means "no constraint on this
/// category". The UI mutates one value at a time via [`toggle`](Self::toggle)
/// and resets with [`clear`](Self::clear); the engine only ever reads it.
/// Serializes as a plain `{category: [values]}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    chosen: BTreeMap<String, Vec<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the value if absent, remove it if present. A category left with
    /// no values is dropped entirely.
    pub fn toggle(&mut self, category: &str, value: &str) {
        let values = self.chosen.entry(category.to_string()).or_default();
        match values.iter().position(|v| v == value) {
            Some(idx) => {
                values.remove(idx);
                if values.is_empty() {
                    self.chosen.remove(category);
                }
            }
            None => values.push(value.to_string()),
        }
    }

    /// Replace the selection for one category wholesale.
    pub fn set(&mut self, category: impl Into<String>, values: Vec<String>) {
        let category = category.into();
        if values.is_empty() {
            self.chosen.remove(&category);
        } else {
            self.chosen.insert(category, values);
        }
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// The chosen values for a category; empty when unconstrained.
    pub fn chosen(&self, category: &str) -> &[String] {
        self.chosen.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether no category has an active selection.
    pub fn is_empty(&self) -> bool {
        self.chosen.values().all(Vec::is_empty)
    }
}
