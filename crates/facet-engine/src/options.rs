//! Build the global filter-option lists shown beside a listing.

use serde::Serialize;
use serde_json::Value;

use crate::config::FacetConfig;
use crate::value::FacetValue;

/// Distinct values for one facet category, sorted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub category: String,
    pub values: Vec<String>,
}

/// Gather the distinct normalized values per configured category across all
/// items, in the config's category order.
///
/// Values are deduplicated exactly and sorted case-insensitively (spelling
/// breaks ties), so content-equal item collections produce identical option
/// lists regardless of item order. A category nothing in the collection
/// carries comes back with an empty list; callers typically hide that facet.
pub fn extract_filter_options(items: &[Value], config: &FacetConfig) -> Vec<FacetOptions> {
    config
        .facets()
        .iter()
        .map(|facet| {
            let mut values: Vec<String> = Vec::new();
            for item in items {
                for value in FacetValue::from_json(item.get(facet.name.as_str())).normalize() {
                    if !values.contains(&value) {
                        values.push(value);
                    }
                }
            }
            values.sort_by(|a, b| {
                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| a.cmp(b))
            });
            FacetOptions {
                category: facet.name.clone(),
                values,
            }
        })
        .collect()
}
