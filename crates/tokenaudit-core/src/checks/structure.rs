//! Path depth and naming-convention rules
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license

use crate::config::{AuditConfig, StateDepthTolerance};
use crate::report::Report;
use crate::tree::{Layer, Token};

/// Check every token path against the structural rules
pub fn check_structure(tokens: &[Token], config: &AuditConfig, report: &mut Report) {
    for token in tokens {
        check_layer_prefix(token, report);
        check_depth(token, config, report);
        check_state_suffix(token, config, report);
    }
}

/// Layer is structural context, never a namespace element: a path starting
/// with a literal layer name is a hard naming violation.
fn check_layer_prefix(token: &Token, report: &mut Report) {
    let Some(first) = token.path.first() else {
        return;
    };
    for layer in [Layer::Primitive, Layer::Semantic] {
        if first == layer.name() {
            report.critical(format!(
                "{}: path must not start with the literal layer name \"{}\"",
                token.dotted(),
                layer.name()
            ));
        }
    }
}

/// Depth is a style guideline, never a correctness issue, so violations are
/// warnings. A path one over the guideline earns the extra segment when it
/// ends in a recognized interactive state, subject to the configured
/// tolerance.
fn check_depth(token: &Token, config: &AuditConfig, report: &mut Report) {
    let depth = token.path.len();
    if depth <= config.max_depth {
        return;
    }
    let state_tolerated =
        depth == config.max_depth + 1 && AuditConfig::is_state(token.last_segment());
    if state_tolerated {
        if config.state_depth_tolerance == StateDepthTolerance::Warn {
            report.warn(format!(
                "{}: depth {depth} relies on the state-suffix tolerance (guideline max {})",
                token.dotted(),
                config.max_depth
            ));
        }
        return;
    }
    report.warn(format!(
        "{}: path depth {depth} exceeds the guideline max of {}",
        token.dotted(),
        config.max_depth
    ));
}

/// State-suffixed paths are expected to be exactly `max_depth` segments;
/// mismatches surface candidates for depth cleanup.
fn check_state_suffix(token: &Token, config: &AuditConfig, report: &mut Report) {
    if !AuditConfig::is_state(token.last_segment()) {
        return;
    }
    let depth = token.path.len();
    if depth != config.max_depth {
        report.warn(format!(
            "{}: state-suffixed path expected {} segments, has {depth}",
            token.dotted(),
            config.max_depth
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Kind, TokenValue};
    use serde_json::json;

    fn token(path: &str) -> Token {
        Token {
            path: path.split('.').map(str::to_string).collect(),
            layer: Layer::Semantic,
            kind: Some(Kind::Color),
            value: TokenValue::classify(&json!("{color.base}")),
            description: None,
            extensions: None,
        }
    }

    fn run(paths: &[&str], config: &AuditConfig) -> Report {
        let tokens: Vec<Token> = paths.iter().map(|p| token(p)).collect();
        let mut report = Report::new();
        check_structure(&tokens, config, &mut report);
        report
    }

    fn depth_warnings(report: &Report) -> usize {
        report
            .warnings
            .iter()
            .filter(|finding| finding.contains("exceeds the guideline"))
            .count()
    }

    #[test]
    fn test_max_depth_produces_no_warning() {
        let report = run(&["color.background.brand.default"], &AuditConfig::default());
        assert_eq!(report.finding_count(), 0);
    }

    #[test]
    fn test_one_over_max_depth_is_one_warning() {
        let report = run(&["color.background.brand.subtle.extra"], &AuditConfig::default());
        assert_eq!(depth_warnings(&report), 1);
        assert!(report.critical.is_empty());
    }

    #[test]
    fn test_state_suffix_earns_extended_depth() {
        let report = run(&["color.background.brand.subtle.hover"], &AuditConfig::default());
        assert_eq!(depth_warnings(&report), 0);
        // the length-correlation rule still flags the 5-segment state path
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("expected 4 segments"));
    }

    #[test]
    fn test_state_tolerance_can_be_configured_to_warn() {
        let config =
            AuditConfig::default().with_state_depth_tolerance(StateDepthTolerance::Warn);
        let report = run(&["color.background.brand.subtle.hover"], &config);
        assert!(report
            .warnings
            .iter()
            .any(|finding| finding.contains("state-suffix tolerance")));
    }

    #[test]
    fn test_two_over_max_depth_is_depth_warning_even_with_state() {
        let report = run(
            &["color.background.brand.subtle.muted.hover"],
            &AuditConfig::default(),
        );
        assert_eq!(depth_warnings(&report), 1);
    }

    #[test]
    fn test_layer_prefix_is_critical() {
        let report = run(&["primitive.color.brand.600"], &AuditConfig::default());
        assert_eq!(report.critical.len(), 1);
        assert!(report.critical[0].contains("literal layer name"));
    }

    #[test]
    fn test_short_state_path_gets_correlation_warning() {
        let report = run(&["color.brand.hover"], &AuditConfig::default());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("expected 4 segments"));
    }
}
