// src/forecast.rs
//! Forecast sample model plus the provider wire shapes it is parsed from.
//!
//! The wire types mirror the 5-day/3-hour forecast payload
//! (`{"list": [{"dt", "main": {"temp"}, "weather": [{"description"}]}, ...]}`).
//! Unknown provider fields are ignored. Samples are produced at this boundary
//! and consumed read-only by the synthesizer and the briefing helpers.

use serde::{Deserialize, Serialize};

/// One forecast point in time. `timestamp` is unix seconds, `temperature_c`
/// degrees Celsius. `condition` carries the provider's free-form description
/// ("light rain", "thunderstorm with hail") when the entry has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: u64,
    pub temperature_c: f64,
    #[serde(default)]
    pub condition: Option<String>,
    /// Precipitation probability in 0..=1. Briefing only; alerting ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_chance: Option<f64>,
    /// Wind speed in m/s. Briefing only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// Wind origin in meteorological degrees. Briefing only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_deg: Option<f64>,
}

impl ForecastSample {
    pub fn new(timestamp: u64, temperature_c: f64) -> Self {
        Self {
            timestamp,
            temperature_c,
            condition: None,
            precipitation_chance: None,
            wind_speed: None,
            wind_deg: None,
        }
    }

    /// Attach a condition description (builder style).
    pub fn with_condition(mut self, text: impl Into<String>) -> Self {
        self.condition = Some(text.into());
        self
    }

    /// Attach wind readings (builder style).
    pub fn with_wind(mut self, speed: f64, deg: f64) -> Self {
        self.wind_speed = Some(speed);
        self.wind_deg = Some(deg);
        self
    }
}

/* ----------------------------
Provider wire shapes
---------------------------- */

/// Top-level forecast payload: `{"list": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour step of the provider payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: u64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionSummary>,
    #[serde(default)]
    pub pop: Option<f64>,
    #[serde(default)]
    pub wind: Option<Wind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionSummary {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub deg: Option<f64>,
}

impl ForecastEntry {
    /// The first `weather` element describes the dominant condition; an empty
    /// array maps to a sample without condition text.
    pub fn into_sample(self) -> ForecastSample {
        let ForecastEntry {
            dt,
            main,
            weather,
            pop,
            wind,
        } = self;
        let condition = weather.into_iter().next().map(|w| w.description);
        let (wind_speed, wind_deg) = match wind {
            Some(w) => (w.speed, w.deg),
            None => (None, None),
        };
        ForecastSample {
            timestamp: dt,
            temperature_c: main.temp,
            condition,
            precipitation_chance: pop,
            wind_speed,
            wind_deg,
        }
    }
}

impl ForecastResponse {
    /// Flatten the payload into samples, preserving list order.
    pub fn into_samples(self) -> Vec<ForecastSample> {
        self.list
            .into_iter()
            .map(ForecastEntry::into_sample)
            .collect()
    }
}
