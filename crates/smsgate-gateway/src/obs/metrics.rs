//! Minimal metrics registry for the admission path.
//!
//! No external metrics crate is used; counters with dynamic labels are backed
//! by `DashMap`. Labels are flattened into sorted key vectors to keep
//! deterministic ordering in the rendered output.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use smsgate_core::error::ErrorCode;

use crate::policy::DropReason;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Sum across all label sets.
    pub fn total(&self) -> u64 {
        self.map.iter().map(|r| r.value().load(Ordering::Relaxed)).sum()
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let key = r.key();
            let val = r.value().load(Ordering::Relaxed);
            let label_str = key
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Counters for every admission outcome.
#[derive(Default)]
pub struct AdmissionMetrics {
    pub forwarded: CounterVec,
    pub dropped: CounterVec,
    pub rejected: CounterVec,
    pub fdn_checks: CounterVec,
}

impl AdmissionMetrics {
    pub fn record_forwarded(&self, entry: &str) {
        self.forwarded.inc(&[("entry", entry)]);
    }

    pub fn record_dropped(&self, entry: &str, reason: DropReason) {
        self.dropped.inc(&[("entry", entry), ("reason", reason.as_str())]);
    }

    pub fn record_rejected(&self, entry: &str, code: ErrorCode) {
        self.rejected.inc(&[("entry", entry), ("code", code.as_str())]);
    }

    pub fn record_fdn_check(&self, blocked: bool) {
        let label = if blocked { "true" } else { "false" };
        self.fdn_checks.inc(&[("blocked", label)]);
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.forwarded.render("smsgate_sends_forwarded_total", &mut out);
        self.dropped.render("smsgate_sends_dropped_total", &mut out);
        self.rejected.render("smsgate_sends_rejected_total", &mut out);
        self.fdn_checks.render("smsgate_fdn_checks_total", &mut out);
        out
    }
}
