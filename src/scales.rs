// src/scales.rs
//! Display scales for the supplementary indices shown next to the forecast:
//! UV index, air quality index, and the wind compass. Pure band ladders,
//! total over any finite input.

/// 8-point compass, 45 degrees per sector, north-centered.
pub const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvBand {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvBand {
    /// WHO ladder with inclusive upper edges (2 / 5 / 7 / 10).
    pub fn from_index(value: f64) -> Self {
        if value <= 2.0 {
            UvBand::Low
        } else if value <= 5.0 {
            UvBand::Moderate
        } else if value <= 7.0 {
            UvBand::High
        } else if value <= 10.0 {
            UvBand::VeryHigh
        } else {
            UvBand::Extreme
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UvBand::Low => "Low",
            UvBand::Moderate => "Moderate",
            UvBand::High => "High",
            UvBand::VeryHigh => "Very High",
            UvBand::Extreme => "Extreme",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQualityBand {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityBand {
    /// US 0-500 AQI ladder (50 / 100 / 150 / 200 / 300), inclusive upper edges.
    pub fn from_index(value: f64) -> Self {
        if value <= 50.0 {
            AirQualityBand::Good
        } else if value <= 100.0 {
            AirQualityBand::Moderate
        } else if value <= 150.0 {
            AirQualityBand::UnhealthySensitive
        } else if value <= 200.0 {
            AirQualityBand::Unhealthy
        } else if value <= 300.0 {
            AirQualityBand::VeryUnhealthy
        } else {
            AirQualityBand::Hazardous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AirQualityBand::Good => "Good",
            AirQualityBand::Moderate => "Moderate",
            AirQualityBand::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AirQualityBand::Unhealthy => "Unhealthy",
            AirQualityBand::VeryUnhealthy => "Very Unhealthy",
            AirQualityBand::Hazardous => "Hazardous",
        }
    }
}

/// Nearest compass point for a wind direction in degrees. Degrees outside
/// 0..360 wrap; NaN maps to "N".
pub fn wind_direction(degrees: f64) -> &'static str {
    let sector = ((degrees / 45.0).round() as isize).rem_euclid(8) as usize;
    COMPASS_POINTS[sector]
}
