// src/alert.rs
//! Alert categories and the advisory records handed to the dashboard.
//!
//! The record shape (`sender_name`, `event`, `start`, `description`, `tags`)
//! is what the alert panel consumes; labels, advisory texts, and tags are
//! fixed per category so the UI stays stable across runs.

use serde::{Deserialize, Serialize};

/// Origin label attached to every synthesized record.
pub const SENDER_NAME: &str = "Weather Alert Synthesizer";

/// The closed set of advisory categories. At most one alert per category is
/// emitted per synthesis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertCategory {
    ExtremeHeat,
    FreezingConditions,
    ThunderstormWarning,
    HeavyRain,
    SnowWarning,
}

impl AlertCategory {
    /// All categories in display order.
    pub const ALL: [AlertCategory; 5] = [
        AlertCategory::ExtremeHeat,
        AlertCategory::FreezingConditions,
        AlertCategory::ThunderstormWarning,
        AlertCategory::HeavyRain,
        AlertCategory::SnowWarning,
    ];

    /// Display label shown as the record's `event`.
    pub fn event(self) -> &'static str {
        match self {
            AlertCategory::ExtremeHeat => "Extreme Heat",
            AlertCategory::FreezingConditions => "Freezing Conditions",
            AlertCategory::ThunderstormWarning => "Thunderstorm Warning",
            AlertCategory::HeavyRain => "Heavy Rain",
            AlertCategory::SnowWarning => "Snow Warning",
        }
    }

    /// Advisory text shown under the label (ASCII for stable console output).
    pub fn description(self) -> &'static str {
        match self {
            AlertCategory::ExtremeHeat => {
                "Temperatures above 35 degrees C expected. Limit outdoor activity and stay hydrated."
            }
            AlertCategory::FreezingConditions => {
                "Temperatures below freezing expected. Watch for ice on roads and walkways."
            }
            AlertCategory::ThunderstormWarning => {
                "Thunderstorms expected. Seek shelter indoors and stay away from open ground."
            }
            AlertCategory::HeavyRain => {
                "Heavy rainfall expected. Localized flooding is possible in low-lying areas."
            }
            AlertCategory::SnowWarning => {
                "Snowfall expected. Expect slippery roads and reduced visibility."
            }
        }
    }

    pub fn tags(self) -> &'static [&'static str] {
        match self {
            AlertCategory::ExtremeHeat => &["heat", "temperature"],
            AlertCategory::FreezingConditions => &["frost", "temperature"],
            AlertCategory::ThunderstormWarning => &["thunderstorm", "wind"],
            AlertCategory::HeavyRain => &["rain", "flood"],
            AlertCategory::SnowWarning => &["snow", "ice"],
        }
    }
}

/// One advisory record. Created at most once per category per run and never
/// mutated afterwards; `start` is the unix timestamp of the first sample that
/// triggered the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub sender_name: String,
    pub event: String,
    pub start: u64,
    pub description: String,
    pub tags: Vec<String>,
}

impl Alert {
    /// Build the record for `category` first observed at `start`.
    pub fn for_category(category: AlertCategory, start: u64) -> Self {
        Self {
            sender_name: SENDER_NAME.to_string(),
            event: category.event().to_string(),
            start,
            description: category.description().to_string(),
            tags: category.tags().iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_record_shape_matches_dashboard_contract() {
        let a = Alert::for_category(AlertCategory::HeavyRain, 1_755_500_400);
        let v = serde_json::to_value(&a).unwrap();

        assert_eq!(
            v["sender_name"],
            serde_json::json!("Weather Alert Synthesizer")
        );
        assert_eq!(v["event"], serde_json::json!("Heavy Rain"));
        assert_eq!(v["start"], serde_json::json!(1_755_500_400u64));
        assert!(v["description"].is_string());
        assert_eq!(v["tags"], serde_json::json!(["rain", "flood"]));
    }

    #[test]
    fn every_category_carries_label_description_and_tags() {
        for c in AlertCategory::ALL {
            assert!(!c.event().is_empty());
            assert!(!c.description().is_empty());
            assert!(!c.tags().is_empty());
        }
    }
}
