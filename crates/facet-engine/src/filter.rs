//! Apply active facet selections to an item collection.

use serde_json::Value;

use crate::config::{FacetConfig, MatchRule};
use crate::selection::FilterSelection;
use crate::value::FacetValue;

/// Keep the items matching every active facet selection.
///
/// Within one category the chosen values are alternatives (OR): an item
/// passes if any of its normalized values matches any chosen value under the
/// category's rule. Across categories the selections compound (AND). An item
/// lacking a category entirely is excluded by any active selection on it --
/// absence never satisfies a positive choice. Input order is preserved, and
/// with no active selections the input comes back unchanged. Selections for
/// categories outside the config are ignored.
pub fn apply_filters(
    items: &[Value],
    config: &FacetConfig,
    selection: &FilterSelection,
) -> Vec<Value> {
    items
        .iter()
        .filter(|item| {
            config.facets().iter().all(|facet| {
                let chosen = selection.chosen(&facet.name);
                if chosen.is_empty() {
                    return true;
                }
                let values = FacetValue::from_json(item.get(facet.name.as_str())).normalize();
                matches_any(&values, chosen, facet.rule)
            })
        })
        .cloned()
        .collect()
}

/// Whether any (item value, chosen value) pair matches under the rule.
fn matches_any(values: &[String], chosen: &[String], rule: MatchRule) -> bool {
    match rule {
        MatchRule::Exact => values.iter().any(|v| chosen.iter().any(|c| v == c)),
        MatchRule::Contains => values.iter().any(|v| {
            let v = v.to_lowercase();
            chosen.iter().any(|c| v.contains(&c.to_lowercase()))
        }),
    }
}
