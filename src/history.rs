// src/history.rs
//! In-memory log of recent synthesis runs, backing the debug endpoint.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::alert::Alert;

#[derive(Debug, Clone)]
pub struct RunEntry {
    pub ts_unix: u64,
    pub samples_in: usize,
    pub alerts_out: usize,
    // emitted event labels, for quick diagnostics
    pub events: Vec<String>,
}

#[derive(Debug)]
pub struct RunHistory {
    inner: Mutex<Vec<RunEntry>>,
    cap: usize,
}

impl RunHistory {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn record(&self, samples_in: usize, alerts: &[Alert]) {
        let entry = RunEntry {
            ts_unix: now_unix(),
            samples_in,
            alerts_out: alerts.len(),
            events: alerts.iter().map(|a| a.event.clone()).collect(),
        };

        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<RunEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let len = v.len();
        let start = len.saturating_sub(n);
        v[start..].to_vec()
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
