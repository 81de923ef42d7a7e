//! End-to-end audit scenarios over full two-layer corpora
//!
//! These tests run the whole pipeline (flatten, index, every checker,
//! aggregate) the way the CLI does, rather than exercising checkers in
//! isolation.

use proptest::prelude::*;
use serde_json::{json, Value};
use tokenaudit_core::{audit, AuditConfig, Auditor, PathIndex, Report, Verdict};

fn hsl_color(hex: &str, description: &str) -> Value {
    json!({
        "$type": "color",
        "$value": {
            "colorSpace": "hsl",
            "components": [243, 75, 59],
            "alpha": 1,
            "hex": hex
        },
        "$description": description
    })
}

fn two_token_corpus(semantic_value: Value) -> (Value, Value) {
    let primitive = json!({
        "color": {
            "brand": {
                "600": hsl_color("4f46e5", "Primary brand indigo for emphasis")
            }
        }
    });
    let semantic = json!({
        "color": {
            "background": {
                "brand": {
                    "default": {
                        "$type": "color",
                        "$value": semantic_value,
                        "$description": "Default brand surface background"
                    }
                }
            }
        }
    });
    (primitive, semantic)
}

fn minimal_audit(primitive: &Value, semantic: &Value) -> Report {
    Auditor::new(AuditConfig::minimal())
        .run(primitive, semantic)
        .unwrap()
}

#[test]
fn scenario_a_clean_two_token_corpus_scores_100() {
    let (primitive, semantic) = two_token_corpus(json!("{color.brand.600}"));
    let report = minimal_audit(&primitive, &semantic);
    assert!(report.critical.is_empty(), "criticals: {:?}", report.critical);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    assert_eq!(report.score(), 100);
    assert_eq!(report.verdict(), Verdict::Ready);
    assert_eq!(report.stats.total_tokens, 2);
    assert_eq!(report.stats.primitive_tokens, 1);
    assert_eq!(report.stats.semantic_tokens, 1);
}

#[test]
fn scenario_b_layer_qualified_reference_is_exactly_one_critical() {
    let (primitive, semantic) = two_token_corpus(json!("{primitive.color.brand.600}"));
    let report = minimal_audit(&primitive, &semantic);
    assert_eq!(report.critical.len(), 1, "criticals: {:?}", report.critical);
    assert!(report.critical[0].contains("layer-qualified"));
    assert_eq!(report.stats.invalid_references, 1);
    assert_eq!(report.verdict(), Verdict::NotReady);
}

#[test]
fn scenario_c_string_dimension_is_exactly_one_critical() {
    let primitive = json!({
        "spacing": {
            "md": {
                "$type": "dimension",
                "$value": "16px",
                "$description": "Medium spacing step of the scale"
            }
        }
    });
    let report = minimal_audit(&primitive, &json!({}));
    assert_eq!(report.critical.len(), 1, "criticals: {:?}", report.critical);
    assert!(report.critical[0].contains("string literal"));
}

#[test]
fn audit_is_idempotent() {
    let (primitive, semantic) = two_token_corpus(json!("{color.brand.600}"));
    let auditor = Auditor::new(AuditConfig::default());
    let first = auditor.run(&primitive, &semantic).unwrap();
    let second = auditor.run(&primitive, &semantic).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.score(), second.score());
}

#[test]
fn cycle_between_two_semantic_tokens_is_one_finding_and_terminates() {
    let semantic = json!({
        "color": {
            "a": {"$type": "color", "$value": "{color.b}", "$description": "references its sibling"},
            "b": {"$type": "color", "$value": "{color.a}", "$description": "references it right back"}
        }
    });
    let report = minimal_audit(&json!({}), &semantic);
    let cycles: Vec<_> = report
        .critical
        .iter()
        .filter(|finding| finding.contains("cycle"))
        .collect();
    assert_eq!(cycles.len(), 1, "criticals: {:?}", report.critical);
}

#[test]
fn indexing_and_reference_checking_agree_on_path_joining() {
    // every reference the resolver accepts must exist verbatim in a flat
    // index built by a direct traversal of the same trees
    let (primitive, semantic) = two_token_corpus(json!("{color.brand.600}"));
    let mut tokens = Vec::new();
    tokenaudit_core::traverse(&primitive, tokenaudit_core::Layer::Primitive, &mut |t| {
        tokens.push(t)
    })
    .unwrap();
    tokenaudit_core::traverse(&semantic, tokenaudit_core::Layer::Semantic, &mut |t| {
        tokens.push(t)
    })
    .unwrap();
    let index = PathIndex::build(&tokens);

    let mut refs = Vec::new();
    for token in &tokens {
        token.value.collect_references(&mut refs);
    }
    assert!(!refs.is_empty());
    for target in refs {
        assert!(index.contains(&target), "unresolved: {target}");
    }
}

#[test]
fn depth_boundary_at_and_over_the_guideline() {
    let deep = |path_tail: &str| {
        let mut tree = json!({"color": {"background": {"brand": {"subtle": {}}}}});
        tree["color"]["background"]["brand"]["subtle"][path_tail] = json!({
            "$type": "color",
            "$value": "{color.brand.600}",
            "$description": "A deliberately deep token path"
        });
        tree
    };
    let primitive = json!({
        "color": {"brand": {"600": hsl_color("4f46e5", "Primary brand indigo for emphasis")}}
    });

    // depth 5 ending in a state: tolerated by default, only the
    // state-length correlation warning remains
    let report = minimal_audit(&primitive, &deep("hover"));
    assert!(!report
        .warnings
        .iter()
        .any(|finding| finding.contains("exceeds the guideline")));

    // depth 5 without a state suffix: exactly one depth warning
    let report = minimal_audit(&primitive, &deep("wash"));
    let depth_warnings: Vec<_> = report
        .warnings
        .iter()
        .filter(|finding| finding.contains("exceeds the guideline"))
        .collect();
    assert_eq!(depth_warnings.len(), 1);
}

#[test]
fn default_config_flags_incomplete_corpus_without_blocking() {
    let (primitive, semantic) = two_token_corpus(json!("{color.brand.600}"));
    let report = audit(&primitive, &semantic).unwrap();
    // two clean tokens, but the corpus lacks scales, anchors, and states
    assert!(report.critical.is_empty());
    assert!(!report.warnings.is_empty());
    assert_eq!(report.verdict(), Verdict::ReadyWithWarnings);
    assert!(report.is_ready());
}

#[test]
fn non_object_root_is_fatal() {
    assert!(audit(&json!(42), &json!({})).is_err());
    assert!(audit(&json!({}), &json!([])).is_err());
}

#[test]
fn malformed_node_is_a_critical_finding_not_an_abort() {
    let primitive = json!({
        "color": {"stray": "just a string where a group should be"}
    });
    let report = minimal_audit(&primitive, &json!({}));
    assert_eq!(report.critical.len(), 1);
    assert!(report.critical[0].contains("neither a group nor a token"));
}

proptest! {
    #[test]
    fn score_is_bounded_and_verdict_is_consistent(
        passes in 0usize..50,
        warnings in 0usize..50,
        criticals in 0usize..50,
    ) {
        let mut report = Report::new();
        for i in 0..passes {
            report.pass(format!("pass {i}"));
        }
        for i in 0..warnings {
            report.warn(format!("warning {i}"));
        }
        for i in 0..criticals {
            report.critical(format!("critical {i}"));
        }
        let score = report.score();
        prop_assert!(score <= 100);
        match report.verdict() {
            Verdict::NotReady => prop_assert!(criticals > 0),
            Verdict::ReadyWithWarnings => prop_assert!(criticals == 0 && warnings > 0),
            Verdict::Ready => {
                prop_assert!(criticals == 0 && warnings == 0);
                prop_assert_eq!(score, 100);
            }
        }
    }
}
