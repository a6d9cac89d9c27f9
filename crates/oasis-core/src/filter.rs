//! Pure filter/sort engine for resource lists.
//!
//! [`filter_and_sort`] is referentially transparent: same list and
//! criteria in, same ordered list out, with the input left untouched.
//! Callers re-invoke it on every criteria change rather than patching
//! prior output.

use serde::{Deserialize, Serialize};

use crate::model::{Cost, Resource};

/// Upper bound on admitted cost tiers, cumulative from `Free`.
///
/// Each ceiling admits every tier at or below it. The widest ceiling
/// is the unconstrained default and also admits resources with no
/// recorded cost; the narrower ones do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CostCeiling {
    /// `Free` only.
    Free,
    /// `Free` and `$`.
    UpToLow,
    /// `Free`, `$`, and `$$`.
    UpToModerate,
    /// Every tier, plus resources with no recorded cost (default).
    UpToHigh,
}

impl CostCeiling {
    /// Whether a resource with the given (possibly absent) cost tier
    /// passes this ceiling.
    pub fn admits(self, cost: Option<Cost>) -> bool {
        match cost {
            Some(cost) => cost <= self.max_tier(),
            None => self == Self::UpToHigh,
        }
    }

    fn max_tier(self) -> Cost {
        match self {
            Self::Free => Cost::Free,
            Self::UpToLow => Cost::Low,
            Self::UpToModerate => Cost::Moderate,
            Self::UpToHigh => Cost::High,
        }
    }
}

impl Default for CostCeiling {
    fn default() -> Self {
        Self::UpToHigh
    }
}

/// Sort key for the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending by uppercase-normalized name.
    #[default]
    Name,
    /// Descending by price tier, most expensive first; resources with
    /// no recorded cost sort last.
    Cost,
}

/// A complete, immutable description of the user's filter selection.
///
/// `None` in an optional field means "unconstrained" -- the UI-level
/// sentinels ("All", empty string) are resolved to `None` before this
/// value is built. Criteria reset to `default()` whenever the active
/// category changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub cost_ceiling: CostCeiling,
    /// Exact language match; a resource with an absent language set
    /// never matches a specific language.
    pub language: Option<String>,
    /// Exact, case-sensitive city match.
    pub city: Option<String>,
    /// Exact subcategory membership.
    pub subcategory: Option<String>,
    pub sort: SortKey,
}

impl FilterCriteria {
    fn matches(&self, resource: &Resource) -> bool {
        self.cost_ceiling.admits(resource.cost)
            && self.matches_language(resource)
            && self.matches_city(resource)
            && self.matches_subcategory(resource)
    }

    fn matches_language(&self, resource: &Resource) -> bool {
        match &self.language {
            None => true,
            Some(wanted) => resource
                .languages
                .as_ref()
                .is_some_and(|langs| langs.iter().any(|l| l == wanted)),
        }
    }

    fn matches_city(&self, resource: &Resource) -> bool {
        match &self.city {
            None => true,
            Some(wanted) => resource.city == *wanted,
        }
    }

    fn matches_subcategory(&self, resource: &Resource) -> bool {
        match &self.subcategory {
            None => true,
            Some(wanted) => resource.subcategory.iter().any(|s| s == wanted),
        }
    }
}

/// Descending price rank: cheaper tiers and then "no recorded cost"
/// sort later under [`SortKey::Cost`].
fn price_rank(cost: Option<Cost>) -> u8 {
    match cost {
        Some(Cost::High) => 0,
        Some(Cost::Moderate) => 1,
        Some(Cost::Low) => 2,
        Some(Cost::Free) => 3,
        None => 4,
    }
}

/// Apply `criteria` to `resources` and return the ordered subset to
/// display.
///
/// Inclusion is the conjunction of the four predicates (cost ceiling,
/// language, city, subcategory); top-level category filtering happens
/// server-side and is not re-checked here. Both sorts are stable, so
/// equal-key resources keep their input order. The input slice is
/// never mutated.
pub fn filter_and_sort(resources: &[Resource], criteria: &FilterCriteria) -> Vec<Resource> {
    let mut out: Vec<Resource> = resources
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::Name => out.sort_by_key(|r| r.name.to_uppercase()),
        SortKey::Cost => out.sort_by_key(|r| price_rank(r.cost)),
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Cost;

    fn resource(name: &str, cost: Option<Cost>) -> Resource {
        Resource {
            id: name.to_lowercase(),
            name: name.into(),
            category: vec!["Legal".into()],
            subcategory: Vec::new(),
            cost,
            languages: None,
            city: String::new(),
            hours: Vec::new(),
            lat: None,
            lng: None,
            description: String::new(),
            address: String::new(),
            address_line2: String::new(),
            apt_unit_suite: String::new(),
            state: String::new(),
            zip: String::new(),
            email: String::new(),
            website: String::new(),
            eligibility: String::new(),
            phone_numbers: Vec::new(),
            required_documents: Vec::new(),
            financial_aid: None,
            contacts: Vec::new(),
            internal_notes: Vec::new(),
        }
    }

    fn names(list: &[Resource]) -> Vec<&str> {
        list.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn filters_then_sorts_by_name() {
        let input = vec![
            resource("Zeta", Some(Cost::Low)),
            resource("Alpha", Some(Cost::Free)),
            resource("Mango", Some(Cost::Moderate)),
        ];
        let criteria = FilterCriteria {
            cost_ceiling: CostCeiling::UpToModerate,
            sort: SortKey::Name,
            ..FilterCriteria::default()
        };
        let out = filter_and_sort(&input, &criteria);
        assert_eq!(names(&out), ["Alpha", "Mango", "Zeta"]);
    }

    #[test]
    fn cost_sort_is_most_expensive_first() {
        let input = vec![
            resource("Zeta", Some(Cost::Low)),
            resource("Alpha", Some(Cost::Free)),
            resource("Mango", Some(Cost::Moderate)),
        ];
        let criteria = FilterCriteria {
            cost_ceiling: CostCeiling::UpToModerate,
            sort: SortKey::Cost,
            ..FilterCriteria::default()
        };
        let out = filter_and_sort(&input, &criteria);
        assert_eq!(names(&out), ["Mango", "Zeta", "Alpha"]);
    }

    #[test]
    fn missing_cost_sorts_last_and_needs_the_widest_ceiling() {
        let input = vec![
            resource("Unpriced", None),
            resource("Cheap", Some(Cost::Free)),
        ];

        let narrow = FilterCriteria {
            cost_ceiling: CostCeiling::UpToModerate,
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_and_sort(&input, &narrow)), ["Cheap"]);

        let wide = FilterCriteria {
            cost_ceiling: CostCeiling::UpToHigh,
            sort: SortKey::Cost,
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_and_sort(&input, &wide)), ["Cheap", "Unpriced"]);
    }

    #[test]
    fn widening_the_ceiling_never_drops_a_resource() {
        let input = vec![
            resource("A", Some(Cost::Free)),
            resource("B", Some(Cost::Low)),
            resource("C", Some(Cost::Moderate)),
            resource("D", Some(Cost::High)),
            resource("E", None),
        ];
        let ceilings = [
            CostCeiling::Free,
            CostCeiling::UpToLow,
            CostCeiling::UpToModerate,
            CostCeiling::UpToHigh,
        ];
        let mut previous: Vec<String> = Vec::new();
        for ceiling in ceilings {
            let criteria = FilterCriteria {
                cost_ceiling: ceiling,
                ..FilterCriteria::default()
            };
            let ids: Vec<String> = filter_and_sort(&input, &criteria)
                .into_iter()
                .map(|r| r.id)
                .collect();
            assert!(
                previous.iter().all(|id| ids.contains(id)),
                "ceiling {ceiling:?} dropped a previously-included resource"
            );
            previous = ids;
        }
        assert_eq!(previous.len(), input.len());
    }

    #[test]
    fn specific_language_excludes_resources_without_languages() {
        let mut with = resource("With", Some(Cost::Free));
        with.languages = Some(vec!["English".into(), "Spanish".into()]);
        let without = resource("Without", Some(Cost::Free));

        let criteria = FilterCriteria {
            language: Some("Spanish".into()),
            ..FilterCriteria::default()
        };
        let out = filter_and_sort(&[with, without], &criteria);
        assert_eq!(names(&out), ["With"]);
    }

    #[test]
    fn city_match_is_exact_and_case_sensitive() {
        let mut urbana = resource("A", Some(Cost::Free));
        urbana.city = "Urbana".into();
        let mut champaign = resource("B", Some(Cost::Free));
        champaign.city = "Champaign".into();

        let criteria = FilterCriteria {
            city: Some("Urbana".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_and_sort(&[urbana.clone(), champaign], &criteria)), ["A"]);

        let lowercased = FilterCriteria {
            city: Some("urbana".into()),
            ..FilterCriteria::default()
        };
        assert!(filter_and_sort(&[urbana], &lowercased).is_empty());
    }

    #[test]
    fn subcategory_matches_membership() {
        let mut visa = resource("Visa Clinic", Some(Cost::Free));
        visa.subcategory = vec!["Visa".into(), "Asylum".into()];
        let other = resource("Other", Some(Cost::Free));

        let criteria = FilterCriteria {
            subcategory: Some("Asylum".into()),
            ..FilterCriteria::default()
        };
        let out = filter_and_sort(&[visa, other], &criteria);
        assert_eq!(names(&out), ["Visa Clinic"]);
    }

    #[test]
    fn name_sort_is_case_insensitive_and_idempotent() {
        let input = vec![
            resource("banana", Some(Cost::Free)),
            resource("Apple", Some(Cost::Free)),
            resource("cherry", Some(Cost::Free)),
        ];
        let criteria = FilterCriteria::default();
        let once = filter_and_sort(&input, &criteria);
        assert_eq!(names(&once), ["Apple", "banana", "cherry"]);
        let twice = filter_and_sort(&once, &criteria);
        assert_eq!(names(&twice), names(&once));
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut first = resource("Same", Some(Cost::Low));
        first.id = "first".into();
        let mut second = resource("Same", Some(Cost::Low));
        second.id = "second".into();

        for sort in [SortKey::Name, SortKey::Cost] {
            let criteria = FilterCriteria {
                sort,
                ..FilterCriteria::default()
            };
            let out = filter_and_sort(&[first.clone(), second.clone()], &criteria);
            let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, ["first", "second"]);
        }
    }

    #[test]
    fn output_ids_are_a_subset_of_input_ids() {
        let input = vec![
            resource("A", Some(Cost::Free)),
            resource("B", None),
            resource("C", Some(Cost::High)),
        ];
        let criteria = FilterCriteria::default();
        let out = filter_and_sort(&input, &criteria);
        assert_eq!(out.len(), 3);
        for r in &out {
            assert_eq!(input.iter().filter(|i| i.id == r.id).count(), 1);
            assert_eq!(out.iter().filter(|o| o.id == r.id).count(), 1);
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![
            resource("Zeta", Some(Cost::Low)),
            resource("Alpha", Some(Cost::Free)),
        ];
        let before = names(&input).join(",");
        let _ = filter_and_sort(&input, &FilterCriteria::default());
        assert_eq!(names(&input).join(","), before);
    }
}
