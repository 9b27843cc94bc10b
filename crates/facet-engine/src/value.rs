//! Facet values and their normalization.
//!
//! Source rows carry facet attributes in loose shapes: absent, `null`, a
//! single string, a comma- or newline-joined string, or an array. The tagged
//! [`FacetValue`] replaces ad hoc shape-sniffing at every use site with one
//! coercion point, and [`FacetValue::normalize`] produces the canonical
//! ordered value list that both option extraction and matching consume.

use serde_json::Value;

/// A facet attribute as found on a source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetValue {
    /// Absent, `null`, or an unusable shape.
    Empty,
    /// One raw string, possibly comma/newline-joined.
    Single(String),
    /// An explicit list of raw strings.
    Many(Vec<String>),
}

impl FacetValue {
    /// Coerce any JSON shape into a facet value.
    ///
    /// Strings stay as-is, arrays keep their stringifiable elements, other
    /// scalars (numbers, booleans) are stringified. Objects carry no usable
    /// categorical data and coerce to `Empty`.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => FacetValue::Empty,
            Some(Value::String(s)) => FacetValue::Single(s.clone()),
            Some(Value::Array(items)) => {
                FacetValue::Many(items.iter().filter_map(scalar_to_string).collect())
            }
            Some(other) => match scalar_to_string(other) {
                Some(s) => FacetValue::Single(s),
                None => FacetValue::Empty,
            },
        }
    }

    /// The canonical ordered value list: each raw string split on commas and
    /// newlines, trimmed, empties dropped.
    ///
    /// Order is preserved and per-item duplicates are kept; deduplication
    /// happens only when building the global option list.
    pub fn normalize(&self) -> Vec<String> {
        let raw: &[String] = match self {
            FacetValue::Empty => return Vec::new(),
            FacetValue::Single(s) => std::slice::from_ref(s),
            FacetValue::Many(items) => items,
        };
        raw.iter()
            .flat_map(|s| s.split([',', '\n']))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Stringify a scalar JSON value. `None` for arrays, objects, and `null`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
