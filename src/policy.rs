// src/policy.rs
//! Threshold policy for alert synthesis: TOML file + env overrides.
//!
//! Resolution order:
//! 1) $ALERT_POLICY_PATH (error if it points to a missing file)
//! 2) config/alerts.toml when present
//! 3) built-in defaults (35.0 C heat, 0.0 C freeze)
//!
//! Per-field overrides ALERT_HEAT_THRESHOLD_C / ALERT_FREEZE_THRESHOLD_C are
//! applied last; unparseable or non-finite values are ignored.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

// --- env defaults & names ---
pub const DEFAULT_POLICY_PATH: &str = "config/alerts.toml";
pub const DEFAULT_HEAT_THRESHOLD_C: f64 = 35.0;
pub const DEFAULT_FREEZE_THRESHOLD_C: f64 = 0.0;

pub const ENV_POLICY_PATH: &str = "ALERT_POLICY_PATH";
pub const ENV_HEAT_THRESHOLD: &str = "ALERT_HEAT_THRESHOLD_C";
pub const ENV_FREEZE_THRESHOLD: &str = "ALERT_FREEZE_THRESHOLD_C";

/// Tunable temperature bounds. The defaults reproduce the built-in rule table
/// exactly; the keyword rules are not configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertPolicy {
    pub heat_threshold_c: f64,
    pub freeze_threshold_c: f64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            heat_threshold_c: DEFAULT_HEAT_THRESHOLD_C,
            freeze_threshold_c: DEFAULT_FREEZE_THRESHOLD_C,
        }
    }
}

/* ----------------------------
TOML schema
---------------------------- */

#[derive(Debug, Clone, Default, Deserialize)]
struct PolicyFile {
    #[serde(default)]
    thresholds: ThresholdsSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ThresholdsSection {
    #[serde(default = "default_heat")]
    heat_c: f64,
    #[serde(default = "default_freeze")]
    freeze_c: f64,
}

impl Default for ThresholdsSection {
    fn default() -> Self {
        Self {
            heat_c: DEFAULT_HEAT_THRESHOLD_C,
            freeze_c: DEFAULT_FREEZE_THRESHOLD_C,
        }
    }
}

fn default_heat() -> f64 {
    DEFAULT_HEAT_THRESHOLD_C
}

fn default_freeze() -> f64 {
    DEFAULT_FREEZE_THRESHOLD_C
}

impl AlertPolicy {
    /// Parse a policy from a TOML string. Missing fields fall back to the
    /// built-in defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: PolicyFile = toml::from_str(s).context("parsing alert policy TOML")?;
        Ok(Self {
            heat_threshold_c: file.thresholds.heat_c,
            freeze_threshold_c: file.thresholds.freeze_c,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading alert policy from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load using env var + fallbacks, then apply per-field env overrides.
    pub fn load_default() -> Result<Self> {
        let mut policy = if let Ok(p) = std::env::var(ENV_POLICY_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("ALERT_POLICY_PATH points to non-existent path"));
            }
            Self::load_from(&pb)?
        } else {
            let default_path = PathBuf::from(DEFAULT_POLICY_PATH);
            if default_path.exists() {
                Self::load_from(&default_path)?
            } else {
                Self::default()
            }
        };

        policy.apply_env_overrides();
        policy.harden();
        Ok(policy)
    }

    /// Apply ALERT_HEAT_THRESHOLD_C / ALERT_FREEZE_THRESHOLD_C when parseable.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_threshold_env(std::env::var(ENV_HEAT_THRESHOLD).ok()) {
            self.heat_threshold_c = v;
        }
        if let Some(v) = parse_threshold_env(std::env::var(ENV_FREEZE_THRESHOLD).ok()) {
            self.freeze_threshold_c = v;
        }
    }

    // Ensure sane thresholds even if the TOML carried inf/NaN.
    fn harden(&mut self) {
        if !self.heat_threshold_c.is_finite() {
            self.heat_threshold_c = DEFAULT_HEAT_THRESHOLD_C;
        }
        if !self.freeze_threshold_c.is_finite() {
            self.freeze_threshold_c = DEFAULT_FREEZE_THRESHOLD_C;
        }
    }
}

// parse optional float env; non-finite values are rejected
fn parse_threshold_env(raw: Option<String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
