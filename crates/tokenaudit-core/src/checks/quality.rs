//! Heuristic quality checks on human-authored metadata
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license

use crate::config::AuditConfig;
use crate::report::Report;
use crate::tree::{Layer, Token};
use serde_json::Value;
use std::collections::BTreeSet;

/// A generic description this short says nothing beyond its leading word
const GENERIC_LENGTH_CEILING: usize = 20;

pub fn check_quality(tokens: &[Token], config: &AuditConfig, report: &mut Report) {
    check_descriptions(tokens, config, report);
    check_kind_homogeneity(tokens, report);
    check_contrast_metadata(tokens, config, report);
}

fn check_descriptions(tokens: &[Token], config: &AuditConfig, report: &mut Report) {
    for token in tokens {
        let Some(description) = token.description.as_deref() else {
            report.stats.missing_description += 1;
            report.warn(format!("{}: missing description", token.dotted()));
            continue;
        };
        let trimmed = description.trim();
        if trimmed.chars().count() < config.min_description_len {
            report.warn(format!(
                "{}: description shorter than {} characters",
                token.dotted(),
                config.min_description_len
            ));
            continue;
        }
        let lowered = trimmed.to_lowercase();
        let generic = config.generic_descriptions.iter().find(|word| {
            lowered == **word
                || (lowered.starts_with(&format!("{word} "))
                    && lowered.chars().count() < GENERIC_LENGTH_CEILING)
        });
        if let Some(word) = generic {
            report.warn(format!(
                "{}: description \"{trimmed}\" is generic (starts with \"{word}\")",
                token.dotted()
            ));
        }
    }
}

/// A top-level primitive grouping mixing several kinds usually signals a
/// misfiled token.
fn check_kind_homogeneity(tokens: &[Token], report: &mut Report) {
    let mut groups: Vec<(String, BTreeSet<String>)> = Vec::new();
    for token in tokens {
        if token.layer != Layer::Primitive {
            continue;
        }
        let (Some(group), Some(kind)) = (token.path.first(), &token.kind) else {
            continue;
        };
        match groups.iter_mut().find(|(name, _)| name == group) {
            Some((_, kinds)) => {
                kinds.insert(kind.as_str().to_string());
            }
            None => {
                let mut kinds = BTreeSet::new();
                kinds.insert(kind.as_str().to_string());
                groups.push((group.clone(), kinds));
            }
        }
    }
    for (group, kinds) in groups {
        if kinds.len() > 1 {
            let listed: Vec<&str> = kinds.iter().map(String::as_str).collect();
            report.warn(format!(
                "primitive group {group} mixes value kinds: {}",
                listed.join(", ")
            ));
        }
    }
}

/// Contrast metadata anywhere in the semantic layer is a pass; total absence
/// is a single aggregate warning.
fn check_contrast_metadata(tokens: &[Token], config: &AuditConfig, report: &mut Report) {
    if !config.require_contrast_metadata {
        return;
    }
    let semantic: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.layer == Layer::Semantic)
        .collect();
    if semantic.is_empty() {
        return;
    }
    let present = semantic.iter().any(|token| {
        token
            .extensions
            .as_ref()
            .is_some_and(|extensions| has_contrast_block(extensions))
    });
    if present {
        report.pass("semantic layer carries accessibility contrast metadata".to_string());
    } else {
        report.warn(
            "no semantic token carries a contrast block in $extensions; \
             accessibility metadata is absent across the whole tree"
                .to_string(),
        );
    }
}

fn has_contrast_block(value: &Value) -> bool {
    match value {
        Value::Object(map) => map
            .iter()
            .any(|(key, nested)| key == "contrast" || has_contrast_block(nested)),
        Value::Array(items) => items.iter().any(has_contrast_block),
        _ => false,
    }
}
