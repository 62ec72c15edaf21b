//! Filter, search, and pagination state
//!
//! `DirectoryQuery` is a plain state container with pure transition
//! functions; the page controller owns one behind a signal and re-fetches
//! after each mutation. Every filter or search mutation resets the page
//! to 1, so page 1 is the only page a mutation can produce.

use serde::{Deserialize, Serialize};

use crate::types::{Resource, ResourcePage};

/// Records requested per fetch.
pub const PAGE_SIZE: u32 = 25;

const COUNTIES: &[&str] = &[
    "Philadelphia",
    "Berks",
    "Bucks",
    "Chester",
    "Delaware",
    "Lancaster",
    "Montgomery",
    "Schuylkill",
];

const POPULATIONS: &[&str] = &["Men", "Women", "Children", "Adolescents"];

const RESOURCE_TYPES: &[&str] = &[
    "Recovery Support",
    "Family Support",
    "Housing",
    "Transportation",
];

const CATEGORIES: &[&str] = &[
    "Single County Authority",
    "Center of Excellence",
    "Regional Recovery Hub",
    "Recovery Community Organization",
    "Warm Handoff",
    "Treatment with RSS",
    "Family Counseling",
    "Family Peer Support",
    "Family Assistance Program",
    "Family Education Program",
    "Family Resources",
    "Recovery House",
    "Halfway House",
    "Housing Assistance",
    "Affordable Public Transportation",
    "Carpool Service",
    "Medical Assistance Transportation",
    "Recovery Transportation Services",
    "Vehicle Purchase Assistance",
    "Government",
    "Other",
];

/// One filterable axis of the directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    County,
    Population,
    ResourceType,
    Category,
}

impl FilterDimension {
    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::County => "Counties",
            FilterDimension::Population => "Populations Served",
            FilterDimension::ResourceType => "Resource Types",
            FilterDimension::Category => "Categories",
        }
    }

    /// Query parameter name the data service expects for this dimension.
    pub fn query_key(&self) -> &'static str {
        match self {
            FilterDimension::County => "County",
            FilterDimension::Population => "Populations",
            FilterDimension::ResourceType => "Resource Type",
            FilterDimension::Category => "Category",
        }
    }

    /// Fixed, ordered option values offered for this dimension.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterDimension::County => COUNTIES,
            FilterDimension::Population => POPULATIONS,
            FilterDimension::ResourceType => RESOURCE_TYPES,
            FilterDimension::Category => CATEGORIES,
        }
    }

    pub fn variants() -> &'static [FilterDimension] {
        &[
            FilterDimension::County,
            FilterDimension::Population,
            FilterDimension::ResourceType,
            FilterDimension::Category,
        ]
    }
}

/// Everything one fetch against the data service depends on: selected
/// filter values per dimension, the search term, and the page number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    counties: Vec<String>,
    populations: Vec<String>,
    resource_types: Vec<String>,
    categories: Vec<String>,
    search: String,
    page: u32,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            counties: Vec::new(),
            populations: Vec::new(),
            resource_types: Vec::new(),
            categories: Vec::new(),
            search: String::new(),
            page: 1,
        }
    }
}

impl DirectoryQuery {
    /// Currently selected values for one dimension, in selection order.
    pub fn selected(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::County => &self.counties,
            FilterDimension::Population => &self.populations,
            FilterDimension::ResourceType => &self.resource_types,
            FilterDimension::Category => &self.categories,
        }
    }

    fn selected_mut(&mut self, dimension: FilterDimension) -> &mut Vec<String> {
        match dimension {
            FilterDimension::County => &mut self.counties,
            FilterDimension::Population => &mut self.populations,
            FilterDimension::ResourceType => &mut self.resource_types,
            FilterDimension::Category => &mut self.categories,
        }
    }

    /// Add or remove one value from a dimension's selection set. Adding a
    /// value already present, or removing one that is absent, changes
    /// nothing. Unknown values are accepted; the option registry is
    /// advisory. Always resets the page to 1.
    pub fn toggle(&mut self, dimension: FilterDimension, value: &str, included: bool) {
        let selected = self.selected_mut(dimension);
        if included {
            if !selected.iter().any(|v| v == value) {
                selected.push(value.to_string());
            }
        } else {
            selected.retain(|v| v != value);
        }
        self.page = 1;
    }

    /// Replace the search term verbatim and reset the page to 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Advance to the next page without touching filters or search.
    pub fn next_page(&mut self) {
        self.page += 1;
    }
}

/// Accumulated fetch results plus the service-reported row total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub records: Vec<Resource>,
    pub total_rows: u64,
}

impl ResultSet {
    /// Fold one fetched page in. Page 1 replaces the record list (new
    /// filter or search); later pages append (Load More continuation).
    /// The total is clamped so `records.len() <= total_rows` holds even
    /// when the service under-reports.
    pub fn merge_page(&mut self, page: u32, fetched: ResourcePage) {
        if page <= 1 {
            self.records = fetched.list;
        } else {
            self.records.extend(fetched.list);
        }
        self.total_rows = fetched.page_info.total_rows.max(self.records.len() as u64);
    }

    /// Apply one fetch outcome. Success folds the page in; failure is
    /// logged and leaves the previous results untouched, so a failed
    /// continuation never wipes what the user is already seeing.
    pub fn apply<E: std::fmt::Display>(&mut self, page: u32, outcome: Result<ResourcePage, E>) {
        match outcome {
            Ok(fetched) => self.merge_page(page, fetched),
            Err(e) => tracing::error!("failed to fetch resources: {e}"),
        }
    }

    /// Whether the service has more rows than we are showing.
    pub fn has_more(&self) -> bool {
        (self.records.len() as u64) < self.total_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageInfo;

    fn named(name: &str) -> Resource {
        Resource {
            location_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn page_of(names: &[&str], total_rows: u64) -> ResourcePage {
        ResourcePage {
            list: names.iter().map(|n| named(n)).collect(),
            page_info: PageInfo { total_rows },
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut query = DirectoryQuery::default();
        query.toggle(FilterDimension::County, "Bucks", true);
        query.toggle(FilterDimension::County, "Chester", true);
        assert_eq!(query.selected(FilterDimension::County), &["Bucks", "Chester"]);

        query.toggle(FilterDimension::County, "Bucks", false);
        assert_eq!(query.selected(FilterDimension::County), &["Chester"]);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut query = DirectoryQuery::default();
        query.toggle(FilterDimension::Population, "Men", true);
        query.toggle(FilterDimension::Population, "Men", true);
        assert_eq!(query.selected(FilterDimension::Population), &["Men"]);

        query.toggle(FilterDimension::Population, "Women", false);
        assert_eq!(query.selected(FilterDimension::Population), &["Men"]);
    }

    #[test]
    fn test_dimensions_are_independent() {
        let mut query = DirectoryQuery::default();
        query.toggle(FilterDimension::ResourceType, "Housing", true);
        assert!(query.selected(FilterDimension::Category).is_empty());
        assert!(query.selected(FilterDimension::County).is_empty());
    }

    #[test]
    fn test_mutations_reset_page() {
        let mut query = DirectoryQuery::default();
        query.next_page();
        query.next_page();
        assert_eq!(query.page(), 3);

        query.toggle(FilterDimension::Category, "Recovery House", true);
        assert_eq!(query.page(), 1);

        query.next_page();
        query.set_search("peer support");
        assert_eq!(query.page(), 1);
        assert_eq!(query.search(), "peer support");
    }

    #[test]
    fn test_search_is_stored_verbatim() {
        let mut query = DirectoryQuery::default();
        query.set_search("  warm handoff ");
        assert_eq!(query.search(), "  warm handoff ");
    }

    #[test]
    fn test_next_page_keeps_filters() {
        let mut query = DirectoryQuery::default();
        query.toggle(FilterDimension::County, "Berks", true);
        query.next_page();
        assert_eq!(query.page(), 2);
        assert_eq!(query.selected(FilterDimension::County), &["Berks"]);
    }

    #[test]
    fn test_merge_page_one_replaces() {
        let mut results = ResultSet::default();
        results.merge_page(1, page_of(&["A", "B"], 2));
        assert_eq!(results.records.len(), 2);
        assert_eq!(results.total_rows, 2);

        results.merge_page(1, page_of(&["C"], 1));
        assert_eq!(results.records.len(), 1);
        assert_eq!(results.records[0].location_name.as_deref(), Some("C"));
    }

    #[test]
    fn test_merge_later_pages_append() {
        let mut results = ResultSet::default();
        results.merge_page(1, page_of(&["A", "B"], 4));
        results.merge_page(2, page_of(&["C", "D"], 4));
        assert_eq!(results.records.len(), 4);
        assert_eq!(results.records[3].location_name.as_deref(), Some("D"));
        assert!(!results.has_more());
    }

    #[test]
    fn test_total_never_below_shown_records() {
        let mut results = ResultSet::default();
        results.merge_page(1, page_of(&["A", "B"], 4));
        results.merge_page(2, page_of(&["C", "D"], 3));
        assert_eq!(results.total_rows, 4);
        assert!(results.records.len() as u64 <= results.total_rows);
    }

    #[test]
    fn test_has_more_boundaries() {
        let mut results = ResultSet {
            records: (0..25).map(|i| named(&i.to_string())).collect(),
            total_rows: 50,
        };
        assert!(results.has_more());

        results.records = (0..50).map(|i| named(&i.to_string())).collect();
        assert!(!results.has_more());
    }

    #[test]
    fn test_failed_fetch_leaves_results_untouched() {
        let mut results = ResultSet::default();
        results.apply(1, Ok::<_, String>(page_of(&["A", "B"], 4)));
        let before = results.clone();

        results.apply(2, Err("request failed with status 500"));
        assert_eq!(results, before);

        results.apply(1, Err("network error: connection refused"));
        assert_eq!(results, before);
    }

    #[test]
    fn test_stray_extra_page_is_harmless() {
        let mut results = ResultSet::default();
        results.merge_page(1, page_of(&["A"], 1));
        // The server answers an out-of-range page with an empty list.
        results.merge_page(2, page_of(&[], 1));
        assert_eq!(results.records.len(), 1);
        assert!(!results.has_more());
    }
}
