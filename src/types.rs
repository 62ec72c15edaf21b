//! Type definitions for the resource data service
//!
//! The service keys record fields by display strings ("Location Name",
//! "FULL ADDRESS"), so every field is an optional with a serde rename.
//! Absent fields decode to `None` rather than failing the record.

use serde::{Deserialize, Serialize};

/// One resource listing returned by the data service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: Option<i64>,
    #[serde(rename = "Location Name", default)]
    pub location_name: Option<String>,
    #[serde(rename = "Organization", default)]
    pub organization: Option<String>,
    #[serde(rename = "Website", default)]
    pub website: Option<String>,
    #[serde(rename = "Phone URL", default)]
    pub phone_url: Option<String>,
    #[serde(rename = "PHONE", default)]
    pub phone: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "State", default)]
    pub state: Option<String>,
    #[serde(rename = "ZIP CODE", default)]
    pub zip_code: Option<String>,
    #[serde(rename = "FULL ADDRESS", default)]
    pub full_address: Option<String>,
    #[serde(rename = "Resource Type", default)]
    pub resource_type: Option<String>,
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
    #[serde(rename = "Populations Served", default)]
    pub populations_served: Option<String>,
    #[serde(rename = "COUNTY", default)]
    pub county: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
}

impl Resource {
    /// Populations served as individual badge values. The service stores
    /// them as one comma-joined string.
    pub fn populations(&self) -> Vec<String> {
        self.populations_served
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// `tel:` link for the action rail, when the service provides a
    /// dialable number.
    pub fn tel_link(&self) -> Option<String> {
        self.phone_url.as_ref().map(|p| format!("tel:{p}"))
    }

    /// Google Maps search link built from the full address.
    pub fn maps_link(&self) -> Option<String> {
        self.full_address.as_ref().map(|addr| {
            format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode(addr)
            )
        })
    }

    /// Whether the card has anything to put in its action rail.
    pub fn has_actions(&self) -> bool {
        self.website.is_some() || self.phone_url.is_some() || self.full_address.is_some()
    }
}

/// Pagination metadata reported by the data service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total_rows: u64,
}

/// One page of results. A response missing `list` or `pageInfo` decodes
/// as an empty page with zero total, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePage {
    #[serde(default)]
    pub list: Vec<Resource>,
    #[serde(default)]
    pub page_info: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_display_string_keys() {
        let record: Resource = serde_json::from_value(serde_json::json!({
            "Id": 7,
            "Location Name": "Hope House",
            "Organization": "Hope Org",
            "Phone URL": "+12155550100",
            "FULL ADDRESS": "12 Main St, Media, PA",
            "Populations Served": "Men, Women, Children",
            "COUNTY": "Delaware"
        }))
        .unwrap();

        assert_eq!(record.id, Some(7));
        assert_eq!(record.location_name.as_deref(), Some("Hope House"));
        assert_eq!(record.county.as_deref(), Some("Delaware"));
        assert_eq!(record.website, None);
        assert_eq!(record.phone, None);
    }

    #[test]
    fn test_populations_are_split_and_trimmed() {
        let record = Resource {
            populations_served: Some("Men, Women, Children".to_string()),
            ..Default::default()
        };
        assert_eq!(record.populations(), vec!["Men", "Women", "Children"]);
    }

    #[test]
    fn test_populations_empty_when_absent() {
        let record = Resource::default();
        assert!(record.populations().is_empty());
        assert!(Resource {
            populations_served: Some(" , ".to_string()),
            ..Default::default()
        }
        .populations()
        .is_empty());
    }

    #[test]
    fn test_action_links_absent_without_contact_fields() {
        let record = Resource {
            location_name: Some("No Contact Center".to_string()),
            ..Default::default()
        };
        assert!(!record.has_actions());
        assert_eq!(record.tel_link(), None);
        assert_eq!(record.maps_link(), None);
    }

    #[test]
    fn test_maps_link_is_percent_encoded() {
        let record = Resource {
            full_address: Some("12 Main St, Media, PA".to_string()),
            ..Default::default()
        };
        let link = record.maps_link().unwrap();
        assert!(link.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(link.contains("12%20Main%20St%2C%20Media%2C%20PA"));
    }

    #[test]
    fn test_lenient_page_decode() {
        let page: ResourcePage = serde_json::from_str("{}").unwrap();
        assert!(page.list.is_empty());
        assert_eq!(page.page_info.total_rows, 0);

        let page: ResourcePage = serde_json::from_value(serde_json::json!({
            "list": [{"Location Name": "A"}],
            "pageInfo": {"totalRows": 42}
        }))
        .unwrap();
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.page_info.total_rows, 42);
    }
}
