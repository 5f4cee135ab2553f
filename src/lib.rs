// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod alert;
pub mod api;
pub mod briefing;
pub mod forecast;
pub mod history;
pub mod metrics;
pub mod policy;
pub mod rules;
pub mod scales;
pub mod synthesizer;

// ---- Re-exports for stable public API ----
pub use crate::alert::{Alert, AlertCategory, SENDER_NAME};
pub use crate::forecast::{ForecastResponse, ForecastSample};
pub use crate::policy::AlertPolicy;
pub use crate::synthesizer::{synthesize, Synthesizer};
