//! Catalog of marketing work types a quote can cover

use serde::{Deserialize, Serialize};

/// One entry of the fixed work type catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkType {
    Website,
    #[serde(rename = "SEO")]
    Seo,
    #[serde(rename = "Social Media")]
    SocialMedia,
    Copywriting,
    #[serde(rename = "Media Buying")]
    MediaBuying,
    #[serde(rename = "Marketing Strategy")]
    MarketingStrategy,
    #[serde(rename = "Marketing 1 Day Workshop")]
    MarketingWorkshop,
}

impl WorkType {
    /// Every work type, in display order
    pub const ALL: [WorkType; 7] = [
        WorkType::Website,
        WorkType::Seo,
        WorkType::SocialMedia,
        WorkType::Copywriting,
        WorkType::MediaBuying,
        WorkType::MarketingStrategy,
        WorkType::MarketingWorkshop,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Seo => "SEO",
            Self::SocialMedia => "Social Media",
            Self::Copywriting => "Copywriting",
            Self::MediaBuying => "Media Buying",
            Self::MarketingStrategy => "Marketing Strategy",
            Self::MarketingWorkshop => "Marketing 1 Day Workshop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seven_entries() {
        assert_eq!(WorkType::ALL.len(), 7);
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: std::collections::HashSet<&str> =
            WorkType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), WorkType::ALL.len());
    }

    #[test]
    fn test_catalog_order_matches_ord() {
        let mut sorted = WorkType::ALL;
        sorted.sort();
        assert_eq!(sorted, WorkType::ALL);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&WorkType::MarketingWorkshop).unwrap();
        assert_eq!(json, "\"Marketing 1 Day Workshop\"");
        let parsed: WorkType = serde_json::from_str("\"Social Media\"").unwrap();
        assert_eq!(parsed, WorkType::SocialMedia);
    }
}
