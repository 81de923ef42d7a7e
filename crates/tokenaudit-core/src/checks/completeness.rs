//! Corpus completeness checks
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license
//!
//! Confirms the corpus carries the content a consumable token set needs:
//! the named essential tokens, full color scales, the minimal interactive
//! states, and the anchor primitives. Everything here is advisory; gaps are
//! warnings, never criticals.

use crate::checks::reference::PathIndex;
use crate::config::AuditConfig;
use crate::report::Report;
use crate::tree::{Layer, Token};
use std::collections::BTreeSet;

pub fn check_completeness(
    tokens: &[Token],
    index: &PathIndex,
    config: &AuditConfig,
    report: &mut Report,
) {
    check_essentials(index, config, report);
    check_scales(tokens, config, report);
    check_states(tokens, config, report);
    check_anchors(index, config, report);
}

/// At least one token must live under each essential path prefix
fn check_essentials(index: &PathIndex, config: &AuditConfig, report: &mut Report) {
    for prefix in &config.essential_prefixes {
        let qualified = format!("{prefix}.");
        let present = index
            .iter()
            .any(|path| path == prefix || path.starts_with(&qualified));
        if !present {
            report.warn(format!("no token matches the essential pattern {prefix}"));
        }
    }
}

/// Each configured color category must carry the full ordered scale
fn check_scales(tokens: &[Token], config: &AuditConfig, report: &mut Report) {
    for category in &config.scale_categories {
        let found: BTreeSet<&str> = tokens
            .iter()
            .filter(|token| {
                token.layer == Layer::Primitive
                    && token.path.len() >= 3
                    && token.path[0] == "color"
                    && &token.path[1] == category
            })
            .map(|token| token.path[2].as_str())
            .collect();
        let missing: Vec<&str> = config
            .scale_steps
            .iter()
            .map(String::as_str)
            .filter(|step| !found.contains(step))
            .collect();
        if missing.is_empty() {
            report.pass(format!(
                "color.{category}: full {}-step scale present",
                config.scale_steps.len()
            ));
        } else {
            report.warn(format!(
                "color.{category}: scale missing step(s) {}",
                missing.join(", ")
            ));
        }
    }
}

/// The semantic layer must exercise each required interactive state
fn check_states(tokens: &[Token], config: &AuditConfig, report: &mut Report) {
    let missing: Vec<&str> = config
        .required_states
        .iter()
        .map(String::as_str)
        .filter(|state| {
            !tokens
                .iter()
                .any(|token| token.layer == Layer::Semantic && token.last_segment() == *state)
        })
        .collect();
    if !missing.is_empty() {
        report.warn(format!(
            "semantic layer exercises no token ending in required state(s) {}",
            missing.join(", ")
        ));
    }
}

/// Specific named primitives must exist verbatim
fn check_anchors(index: &PathIndex, config: &AuditConfig, report: &mut Report) {
    for anchor in &config.anchor_tokens {
        if !index.contains_in(Layer::Primitive, anchor) {
            report.warn(format!("anchor token {anchor} is missing from the primitive layer"));
        }
    }
}
