//! Audit orchestration
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license

use crate::checks::{self, PathIndex};
use crate::config::AuditConfig;
use crate::error::Result;
use crate::report::Report;
use crate::tree;
use serde_json::Value;

/// Runs the full audit over a pair of token trees
///
/// Both trees are flattened once; the checkers then run strictly in
/// sequence against the read-only corpus, appending into one report. The
/// run is synchronous and single-pass: every problem the corpus has shows
/// up in the same report.
#[derive(Debug, Clone, Default)]
pub struct Auditor {
    config: AuditConfig,
}

impl Auditor {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audit the primitive and semantic trees and produce the report
    ///
    /// The only error path is a fatal precondition (a tree whose root is
    /// not an object); everything else becomes findings.
    pub fn run(&self, primitive: &Value, semantic: &Value) -> Result<Report> {
        let corpus = tree::collect(primitive, semantic)?;

        let mut report = Report::new();
        report.stats.total_tokens = corpus.tokens.len();
        report.stats.primitive_tokens = corpus.primitive_count;
        report.stats.semantic_tokens = corpus.semantic_count;

        for (layer, path) in &corpus.malformed {
            report.critical(format!(
                "{path}: node in the {layer} tree is neither a group nor a token"
            ));
        }

        let index = PathIndex::build(&corpus.tokens);
        checks::check_values(&corpus.tokens, &mut report);
        checks::check_references(&corpus.tokens, &index, &mut report);
        checks::check_structure(&corpus.tokens, &self.config, &mut report);
        checks::check_completeness(&corpus.tokens, &index, &self.config, &mut report);
        checks::check_quality(&corpus.tokens, &self.config, &mut report);

        Ok(report)
    }
}

/// Convenience entry point using the default configuration
pub fn audit(primitive: &Value, semantic: &Value) -> Result<Report> {
    Auditor::default().run(primitive, semantic)
}
