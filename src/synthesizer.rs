// src/synthesizer.rs
//! # Alert Synthesizer
//! Pure, testable pass that maps an ordered slice of forecast samples to
//! deduplicated advisory records. No I/O, safe to call concurrently,
//! suitable for unit tests and offline evaluation.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::alert::{Alert, AlertCategory};
use crate::forecast::ForecastSample;
use crate::policy::AlertPolicy;
use crate::rules::RuleSet;

#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    rules: RuleSet,
}

impl Synthesizer {
    /// Synthesizer with the built-in thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: &AlertPolicy) -> Self {
        Self {
            rules: RuleSet::with_policy(policy),
        }
    }

    /// Scan samples in input order and emit at most one alert per category.
    /// The first triggering sample fixes the alert's `start`; later hits for
    /// the same category are ignored. Output is in category order.
    pub fn synthesize(&self, samples: &[ForecastSample]) -> Vec<Alert> {
        let mut found: BTreeMap<AlertCategory, Alert> = BTreeMap::new();
        for sample in samples {
            for category in self.rules.categories_for(sample) {
                found
                    .entry(category)
                    .or_insert_with(|| Alert::for_category(category, sample.timestamp));
            }
        }
        found.into_values().collect()
    }
}

static DEFAULT_SYNTHESIZER: Lazy<Synthesizer> = Lazy::new(Synthesizer::new);

/// Synthesize with the built-in thresholds (35.0 C heat, 0.0 C freeze).
pub fn synthesize(samples: &[ForecastSample]) -> Vec<Alert> {
    DEFAULT_SYNTHESIZER.synthesize(samples)
}
