//! Findings, statistics, score, and verdict
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license
//!
//! Checkers append human-readable findings into three severity buckets.
//! Buckets are append-only and never read until every checker has finished,
//! so partial success in one domain never suppresses problems in another.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Severity of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Pass,
    Warning,
    Critical,
}

/// Corpus-wide statistics gathered during the run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_tokens: usize,
    pub primitive_tokens: usize,
    pub semantic_tokens: usize,
    pub missing_kind: usize,
    pub missing_description: usize,
    pub references_checked: usize,
    pub invalid_references: usize,
}

/// Three-way readiness verdict derived from the buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Zero critical and zero warning findings
    Ready,
    /// Zero critical findings, at least one warning
    ReadyWithWarnings,
    /// At least one critical finding
    NotReady,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Ready => "ready",
            Verdict::ReadyWithWarnings => "ready with warnings",
            Verdict::NotReady => "not ready",
        };
        f.write_str(text)
    }
}

/// The aggregated audit report
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub pass: Vec<String>,
    pub warnings: Vec<String>,
    pub critical: Vec<String>,
    pub stats: Stats,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding into the bucket for `severity`
    pub fn add(&mut self, severity: Severity, finding: impl Into<String>) {
        let bucket = match severity {
            Severity::Pass => &mut self.pass,
            Severity::Warning => &mut self.warnings,
            Severity::Critical => &mut self.critical,
        };
        bucket.push(finding.into());
    }

    pub fn pass(&mut self, finding: impl Into<String>) {
        self.add(Severity::Pass, finding);
    }

    pub fn warn(&mut self, finding: impl Into<String>) {
        self.add(Severity::Warning, finding);
    }

    pub fn critical(&mut self, finding: impl Into<String>) {
        self.add(Severity::Critical, finding);
    }

    /// Total number of findings across all buckets
    pub fn finding_count(&self) -> usize {
        self.pass.len() + self.warnings.len() + self.critical.len()
    }

    /// Number of findings that are problems rather than passes
    pub fn problem_count(&self) -> usize {
        self.warnings.len() + self.critical.len()
    }

    /// Readiness score: `round(100 * pass / (pass + warning + critical))`
    ///
    /// An empty report scores 100: nothing was found wrong.
    pub fn score(&self) -> u32 {
        let total = self.finding_count();
        if total == 0 {
            return 100;
        }
        (100.0 * self.pass.len() as f64 / total as f64).round() as u32
    }

    pub fn verdict(&self) -> Verdict {
        if !self.critical.is_empty() {
            Verdict::NotReady
        } else if !self.warnings.is_empty() {
            Verdict::ReadyWithWarnings
        } else {
            Verdict::Ready
        }
    }

    /// Whether a downstream build may consume the corpus
    pub fn is_ready(&self) -> bool {
        self.critical.is_empty()
    }

    /// Full report as JSON, including the derived score and verdict
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "pass": self.pass,
            "warnings": self.warnings,
            "critical": self.critical,
            "stats": self.stats,
            "score": self.score(),
            "verdict": self.verdict(),
        })
    }
}
