//! Castle facet filtering hook

use dioxus::prelude::*;

use crate::types::Castle;

/// Facets and selection state exposed by [`use_castle_filters`].
#[derive(Clone, Copy)]
pub struct CastleFilters {
    pub available_states: Memo<Vec<String>>,
    pub available_property_conditions: Memo<Vec<String>>,
    pub selected_state: Signal<Option<String>>,
    pub selected_property_condition: Signal<Option<String>>,
    pub filtered_castles: Memo<Vec<Castle>>,
}

impl CastleFilters {
    /// Reset both selectors. Selections survive listing recomputation on
    /// their own, so callers invoke this on a country change.
    pub fn clear(&mut self) {
        self.selected_state.set(None);
        self.selected_property_condition.set(None);
    }
}

/// Derives the state and property-condition facets of the current listing
/// and a filtered view honoring the selected facet values.
pub fn use_castle_filters(castles: ReadOnlySignal<Vec<Castle>>) -> CastleFilters {
    let selected_state = use_signal(|| None::<String>);
    let selected_property_condition = use_signal(|| None::<String>);

    let available_states = use_memo(move || distinct_states(&castles()));
    let available_property_conditions =
        use_memo(move || distinct_property_conditions(&castles()));

    let filtered_castles = use_memo(move || {
        apply_filters(
            &castles(),
            selected_state().as_deref(),
            selected_property_condition().as_deref(),
        )
    });

    CastleFilters {
        available_states,
        available_property_conditions,
        selected_state,
        selected_property_condition,
        filtered_castles,
    }
}

/// Distinct `state` values in first-seen order.
pub fn distinct_states(castles: &[Castle]) -> Vec<String> {
    let mut states = Vec::new();
    for castle in castles {
        if !states.contains(&castle.state) {
            states.push(castle.state.clone());
        }
    }
    states
}

/// Distinct `propertyCondition` values in first-seen order. Records without a
/// condition do not contribute a facet.
pub fn distinct_property_conditions(castles: &[Castle]) -> Vec<String> {
    let mut conditions = Vec::new();
    for castle in castles {
        if let Some(condition) = &castle.property_condition {
            if !conditions.contains(condition) {
                conditions.push(condition.clone());
            }
        }
    }
    conditions
}

/// Records matching every set selector; an unset selector matches everything.
pub fn apply_filters(
    castles: &[Castle],
    state: Option<&str>,
    property_condition: Option<&str>,
) -> Vec<Castle> {
    castles
        .iter()
        .filter(|castle| state.map_or(true, |wanted| castle.state == wanted))
        .filter(|castle| {
            property_condition
                .map_or(true, |wanted| castle.property_condition.as_deref() == Some(wanted))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castle(web_name: &str, state: &str, condition: Option<&str>) -> Castle {
        Castle {
            id: web_name.to_string(),
            country: crate::types::CountryCode::Pt,
            name: web_name.to_string(),
            city: "city".to_string(),
            state: state.to_string(),
            district: None,
            coordinates: None,
            picture_url: "https://example.com/pic.jpg".to_string(),
            sources: vec![],
            contact: None,
            visiting_info: None,
            property_condition: condition.map(str::to_string),
            web_name: web_name.to_string(),
        }
    }

    #[test]
    fn facets_are_distinct_in_first_seen_order() {
        let castles = vec![
            castle("a", "A", Some("X")),
            castle("b", "B", Some("X")),
            castle("c", "A", Some("Y")),
        ];

        assert_eq!(distinct_states(&castles), vec!["A", "B"]);
        assert_eq!(distinct_property_conditions(&castles), vec!["X", "Y"]);
    }

    #[test]
    fn records_without_condition_produce_no_facet() {
        let castles = vec![castle("a", "A", None), castle("b", "B", Some("X"))];

        assert_eq!(distinct_property_conditions(&castles), vec!["X"]);
    }

    #[test]
    fn unset_selectors_match_everything() {
        let castles = vec![castle("a", "A", Some("X")), castle("b", "B", Some("X"))];

        assert_eq!(apply_filters(&castles, None, None), castles);
    }

    #[test]
    fn state_selector_reduces_the_view() {
        let castles = vec![castle("a", "A", Some("X")), castle("b", "B", Some("X"))];

        let filtered = apply_filters(&castles, Some("A"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].web_name, "a");

        // Clearing the selector restores both records.
        assert_eq!(apply_filters(&castles, None, None).len(), 2);
    }

    #[test]
    fn selectors_combine_with_and_semantics() {
        let castles = vec![
            castle("a", "A", Some("X")),
            castle("b", "A", Some("Y")),
            castle("c", "B", Some("X")),
        ];

        let filtered = apply_filters(&castles, Some("A"), Some("X"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].web_name, "a");
    }

    #[test]
    fn condition_selector_never_matches_absent_values() {
        let castles = vec![castle("a", "A", None), castle("b", "A", Some("X"))];

        let filtered = apply_filters(&castles, None, Some("X"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].web_name, "b");
    }
}
