// src/rules.rs
//! Trigger table for alert synthesis.
//!
//! Two ordered rule chains are evaluated per sample, each first-match-wins:
//! - temperature thresholds (strict comparisons)
//! - condition-text keywords (case-insensitive substring over normalized text)
//!
//! The chains are independent: one sample can raise one temperature category
//! and one condition category at the same time. A sample without condition
//! text skips the keyword chain only.

use crate::alert::AlertCategory;
use crate::forecast::ForecastSample;
use crate::policy::AlertPolicy;

/// Predicate side of a rule.
#[derive(Debug, Clone)]
pub enum Trigger {
    TemperatureAbove(f64),
    TemperatureBelow(f64),
    /// Matches when every `all` keyword appears and, if `any` is non-empty,
    /// at least one `any` keyword appears. Plain substring semantics: "rain"
    /// also matches inside "rainfall", and negations ("no rain") still match.
    ConditionKeywords {
        all: &'static [&'static str],
        any: &'static [&'static str],
    },
}

#[derive(Debug, Clone)]
pub struct TriggerRule {
    pub category: AlertCategory,
    pub trigger: Trigger,
}

/// The ordered rule table, split into the two chains.
#[derive(Debug, Clone)]
pub struct RuleSet {
    temperature: Vec<TriggerRule>,
    condition: Vec<TriggerRule>,
}

impl RuleSet {
    /// Build the table for the given thresholds. The keyword rules are fixed;
    /// only the temperature bounds are tunable.
    pub fn with_policy(policy: &AlertPolicy) -> Self {
        let temperature = vec![
            TriggerRule {
                category: AlertCategory::ExtremeHeat,
                trigger: Trigger::TemperatureAbove(policy.heat_threshold_c),
            },
            TriggerRule {
                category: AlertCategory::FreezingConditions,
                trigger: Trigger::TemperatureBelow(policy.freeze_threshold_c),
            },
        ];
        let condition = vec![
            TriggerRule {
                category: AlertCategory::ThunderstormWarning,
                trigger: Trigger::ConditionKeywords {
                    all: &["thunderstorm"],
                    any: &[],
                },
            },
            TriggerRule {
                category: AlertCategory::HeavyRain,
                trigger: Trigger::ConditionKeywords {
                    all: &["rain"],
                    any: &["heavy", "intense"],
                },
            },
            TriggerRule {
                category: AlertCategory::SnowWarning,
                trigger: Trigger::ConditionKeywords {
                    all: &["snow"],
                    any: &[],
                },
            },
        ];
        Self {
            temperature,
            condition,
        }
    }

    /// First temperature rule hit, if any. With the default thresholds the two
    /// rules are mutually exclusive; order decides when a policy overlaps them.
    pub fn temperature_category(&self, sample: &ForecastSample) -> Option<AlertCategory> {
        self.temperature
            .iter()
            .find(|r| r.trigger.matches(sample))
            .map(|r| r.category)
    }

    /// First condition rule matched by the sample's text, if any.
    pub fn condition_category(&self, sample: &ForecastSample) -> Option<AlertCategory> {
        self.condition
            .iter()
            .find(|r| r.trigger.matches(sample))
            .map(|r| r.category)
    }

    /// Categories triggered by one sample: the temperature chain first, then
    /// the condition chain. At most one hit per chain.
    pub fn categories_for(&self, sample: &ForecastSample) -> Vec<AlertCategory> {
        let mut out = Vec::with_capacity(2);
        if let Some(c) = self.temperature_category(sample) {
            out.push(c);
        }
        if let Some(c) = self.condition_category(sample) {
            out.push(c);
        }
        out
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_policy(&AlertPolicy::default())
    }
}

impl Trigger {
    fn matches(&self, sample: &ForecastSample) -> bool {
        match self {
            Trigger::TemperatureAbove(limit) => sample.temperature_c > *limit,
            Trigger::TemperatureBelow(limit) => sample.temperature_c < *limit,
            Trigger::ConditionKeywords { all, any } => match sample.condition.as_deref() {
                Some(text) => {
                    // Keyword lists are lowercase ASCII already; normalizing
                    // the text once is enough.
                    let text = normalize(text);
                    all.iter().all(|k| text.contains(k))
                        && (any.is_empty() || any.iter().any(|k| text.contains(k)))
                }
                None => false,
            },
        }
    }
}

/// Lowercase + condensed whitespace, trimmed.
fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        let lc = ch.to_ascii_lowercase();
        if lc.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(lc);
            last_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::ForecastSample;

    fn sample(temp: f64, cond: Option<&str>) -> ForecastSample {
        let s = ForecastSample::new(0, temp);
        match cond {
            Some(c) => s.with_condition(c),
            None => s,
        }
    }

    #[test]
    fn temperature_boundaries_are_strict() {
        let rules = RuleSet::default();
        assert_eq!(rules.temperature_category(&sample(35.0, None)), None);
        assert_eq!(
            rules.temperature_category(&sample(35.1, None)),
            Some(AlertCategory::ExtremeHeat)
        );
        assert_eq!(rules.temperature_category(&sample(0.0, None)), None);
        assert_eq!(
            rules.temperature_category(&sample(-0.1, None)),
            Some(AlertCategory::FreezingConditions)
        );
    }

    #[test]
    fn first_condition_rule_wins() {
        let rules = RuleSet::default();
        assert_eq!(
            rules.condition_category(&sample(10.0, Some("thunderstorm with heavy rain"))),
            Some(AlertCategory::ThunderstormWarning)
        );
    }

    #[test]
    fn rain_needs_a_heavy_or_intense_qualifier() {
        let rules = RuleSet::default();
        assert_eq!(rules.condition_category(&sample(10.0, Some("light rain"))), None);
        assert_eq!(
            rules.condition_category(&sample(10.0, Some("heavy intensity rain"))),
            Some(AlertCategory::HeavyRain)
        );
        assert_eq!(
            rules.condition_category(&sample(10.0, Some("intense rainfall"))),
            Some(AlertCategory::HeavyRain)
        );
    }

    #[test]
    fn matching_is_case_and_whitespace_insensitive() {
        let rules = RuleSet::default();
        assert_eq!(
            rules.condition_category(&sample(10.0, Some("  Heavy   RAIN showers "))),
            Some(AlertCategory::HeavyRain)
        );
        assert_eq!(
            rules.condition_category(&sample(10.0, Some("Light SNOW"))),
            Some(AlertCategory::SnowWarning)
        );
    }

    #[test]
    fn missing_condition_skips_the_keyword_chain_only() {
        let rules = RuleSet::default();
        assert_eq!(rules.condition_category(&sample(40.0, None)), None);
        assert_eq!(
            rules.categories_for(&sample(40.0, None)),
            vec![AlertCategory::ExtremeHeat]
        );
    }

    #[test]
    fn one_sample_can_hit_both_chains() {
        let rules = RuleSet::default();
        assert_eq!(
            rules.categories_for(&sample(-4.0, Some("heavy snow"))),
            vec![
                AlertCategory::FreezingConditions,
                AlertCategory::SnowWarning
            ]
        );
    }

    #[test]
    fn custom_policy_moves_the_thresholds() {
        let policy = AlertPolicy {
            heat_threshold_c: 30.0,
            freeze_threshold_c: 5.0,
        };
        let rules = RuleSet::with_policy(&policy);
        assert_eq!(
            rules.temperature_category(&sample(31.0, None)),
            Some(AlertCategory::ExtremeHeat)
        );
        assert_eq!(
            rules.temperature_category(&sample(4.0, None)),
            Some(AlertCategory::FreezingConditions)
        );
        assert_eq!(rules.temperature_category(&sample(20.0, None)), None);
    }
}
