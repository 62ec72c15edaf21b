//! Client for the resource data service
//!
//! The service is a single GET endpoint. Filters are expressed as
//! repeated query parameters, one occurrence per selected value within a
//! dimension; the service ORs values within a dimension and ANDs across
//! dimensions.

use crate::state::{DirectoryQuery, FilterDimension, PAGE_SIZE};
use crate::types::ResourcePage;

/// Endpoint used when `RESOURCE_API_URL` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://hubresourcedatabase.crodican.workers.dev/";

/// Error type for fetches against the data service.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the resource data service.
#[derive(Clone)]
pub struct ResourceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ResourceClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch one page of results for the given query. A non-success
    /// status is an error; a well-formed body missing `list` or
    /// `pageInfo` decodes as an empty page.
    pub async fn fetch_page(&self, query: &DirectoryQuery) -> Result<ResourcePage, FetchError> {
        let pairs = query_pairs(query);
        tracing::debug!(page = query.page(), params = pairs.len(), "fetching resources");

        let response = self.client.get(&self.endpoint).query(&pairs).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.json().await?)
    }
}

/// Compose the query parameters for one fetch: pagination always, one
/// repeated pair per selected filter value, and the search term only
/// when non-empty.
pub fn query_pairs(query: &DirectoryQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("page", query.page().to_string()),
        ("limit", PAGE_SIZE.to_string()),
    ];

    for dimension in FilterDimension::variants() {
        for value in query.selected(*dimension) {
            pairs.push((dimension.query_key(), value.clone()));
        }
    }

    if !query.search().is_empty() {
        pairs.push(("search", query.search().to_string()));
    }

    pairs
}

/// Create a client for server-side requests, honoring `RESOURCE_API_URL`.
#[cfg(feature = "server")]
pub fn server_client() -> ResourceClient {
    let url = std::env::var("RESOURCE_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    ResourceClient::new(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_only_pagination() {
        let pairs = query_pairs(&DirectoryQuery::default());
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("limit", "25".to_string())]
        );
    }

    #[test]
    fn test_selected_values_repeat_the_dimension_key() {
        let mut query = DirectoryQuery::default();
        query.toggle(FilterDimension::County, "Bucks", true);
        query.toggle(FilterDimension::County, "Chester", true);
        query.toggle(FilterDimension::Population, "Women", true);

        let pairs = query_pairs(&query);
        let counties: Vec<_> = pairs
            .iter()
            .filter(|(k, _)| *k == "County")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(counties, ["Bucks", "Chester"]);
        assert!(pairs.contains(&("Populations", "Women".to_string())));
    }

    #[test]
    fn test_dimension_keys_match_service_names() {
        let mut query = DirectoryQuery::default();
        query.toggle(FilterDimension::ResourceType, "Housing", true);
        query.toggle(FilterDimension::Category, "Recovery House", true);

        let pairs = query_pairs(&query);
        assert!(pairs.contains(&("Resource Type", "Housing".to_string())));
        assert!(pairs.contains(&("Category", "Recovery House".to_string())));
    }

    #[test]
    fn test_search_included_only_when_non_empty() {
        let mut query = DirectoryQuery::default();
        assert!(!query_pairs(&query).iter().any(|(k, _)| *k == "search"));

        query.set_search("peer support");
        let pairs = query_pairs(&query);
        assert!(pairs.contains(&("search", "peer support".to_string())));
    }

    #[test]
    fn test_page_advances_in_pairs() {
        let mut query = DirectoryQuery::default();
        query.next_page();
        let pairs = query_pairs(&query);
        assert!(pairs.contains(&("page", "2".to_string())));
        assert!(pairs.contains(&("limit", "25".to_string())));
    }
}
