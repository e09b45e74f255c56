//! Project record schema for the catalog.
//!
//! The seed data historically used the string `"N/A"` for absent links;
//! the `link` serde module keeps that wire form while the in-memory model
//! uses `Option<String>`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a cataloged project.
///
/// Rank order (Live < Beta < InDevelopment) drives status sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Status {
    Live,
    Beta,
    #[serde(rename = "In Development")]
    InDevelopment,
}

impl Status {
    /// Fixed sort rank; lower ranks first in ascending order.
    pub fn rank(self) -> u8 {
        match self {
            Status::Live => 0,
            Status::Beta => 1,
            Status::InDevelopment => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Live => "Live",
            Status::Beta => "Beta",
            Status::InDevelopment => "In Development",
        }
    }

    /// Parse the wire form ("Live", "Beta", "In Development").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Live" => Some(Status::Live),
            "Beta" => Some(Status::Beta),
            "In Development" => Some(Status::InDevelopment),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse popularity tier assigned to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EngagementLevel {
    High,
    Medium,
    Low,
    Emerging,
}

impl EngagementLevel {
    /// Fixed sort rank; High ranks before Emerging.
    pub fn rank(self) -> u8 {
        match self {
            EngagementLevel::High => 0,
            EngagementLevel::Medium => 1,
            EngagementLevel::Low => 2,
            EngagementLevel::Emerging => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EngagementLevel::High => "High",
            EngagementLevel::Medium => "Medium",
            EngagementLevel::Low => "Low",
            EngagementLevel::Emerging => "Emerging",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "High" => Some(EngagementLevel::High),
            "Medium" => Some(EngagementLevel::Medium),
            "Low" => Some(EngagementLevel::Low),
            "Emerging" => Some(EngagementLevel::Emerging),
            _ => None,
        }
    }

    /// The full enumeration, independent of what the data contains.
    pub fn all() -> &'static [EngagementLevel] {
        &[
            EngagementLevel::High,
            EngagementLevel::Medium,
            EngagementLevel::Low,
            EngagementLevel::Emerging,
        ]
    }
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Popularity block attached to each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Popularity {
    pub engagement_level: EngagementLevel,
    /// Free-text evidence for the assigned tier.
    #[serde(default)]
    pub key_indicators: String,
}

/// One cataloged project entry.
///
/// `name` is the unique key within the catalog; uniqueness is enforced at
/// load time by [`crate::catalog::Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub name: String,
    /// Project homepage; absent links appear as "N/A" on the wire.
    #[serde(default, with = "link")]
    #[schema(value_type = String)]
    pub url: Option<String>,
    /// Source repository; absent links appear as "N/A" on the wire.
    #[serde(default, with = "link")]
    #[schema(value_type = String)]
    pub repository_url: Option<String>,
    pub description: String,
    /// Open string, grouped by exact match.
    pub category: String,
    pub status: Status,
    pub open_source: bool,
    pub popularity: Popularity,
    /// Short feature labels in display order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Free-text launch label ("January 2026", "Upcoming").
    #[serde(default)]
    pub launch_approx: String,
    /// Presentation hint; the query engine ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Project {
    /// Case-insensitive substring match over name, description, category,
    /// and every feature label. `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self
                .features
                .iter()
                .any(|f| f.to_lowercase().contains(needle))
    }
}

/// Serde adapter mapping the legacy "N/A" sentinel to `Option::None`.
///
/// Deserialization also treats the empty string as absent; serialization
/// writes "N/A" back out so existing consumers of the feed keep working.
pub mod link {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const SENTINEL: &str = "N/A";

    pub fn serialize<S: Serializer>(value: &Option<String>, ser: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(url) => ser.serialize_str(url),
            None => ser.serialize_str(SENTINEL),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(de)?;
        Ok(raw.filter(|s| !s.is_empty() && s != SENTINEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "Hot Molts",
            "url": "https://www.hotmolts.com/",
            "repository_url": "N/A",
            "description": "Cached frontend for browsing top Moltbook posts.",
            "category": "Aggregator",
            "status": "Live",
            "open_source": false,
            "popularity": {
                "engagement_level": "Medium",
                "key_indicators": "Featured on Hacker News"
            },
            "features": ["Filter by community", "Read-only view"],
            "launch_approx": "February 2026"
        }"#
    }

    #[test]
    fn test_deserialize_project() {
        let project: Project = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(project.name, "Hot Molts");
        assert_eq!(project.status, Status::Live);
        assert_eq!(project.popularity.engagement_level, EngagementLevel::Medium);
        assert_eq!(project.features.len(), 2);
        assert!(project.color.is_none());
    }

    #[test]
    fn test_na_sentinel_maps_to_none() {
        let project: Project = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(project.url.as_deref(), Some("https://www.hotmolts.com/"));
        assert!(project.repository_url.is_none());
    }

    #[test]
    fn test_none_serializes_as_sentinel() {
        let project: Project = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["repository_url"], "N/A");
        assert_eq!(value["url"], "https://www.hotmolts.com/");
    }

    #[test]
    fn test_status_wire_form() {
        let status: Status = serde_json::from_str("\"In Development\"").unwrap();
        assert_eq!(status, Status::InDevelopment);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"In Development\"");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result: Result<Status, _> = serde_json::from_str("\"Abandoned\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_status_ranks_ordered() {
        assert!(Status::Live.rank() < Status::Beta.rank());
        assert!(Status::Beta.rank() < Status::InDevelopment.rank());
    }

    #[test]
    fn test_engagement_ranks_ordered() {
        let ranks: Vec<u8> = EngagementLevel::all().iter().map(|l| l.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [Status::Live, Status::Beta, Status::InDevelopment] {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("live"), None);
    }

    #[test]
    fn test_search_match_case_insensitive() {
        let project: Project = serde_json::from_str(sample_json()).unwrap();
        assert!(project.matches_lowercase("moltbook"));
        assert!(project.matches_lowercase("read-only"));
        assert!(project.matches_lowercase("aggregator"));
        assert!(!project.matches_lowercase("token launchpad"));
    }
}
