//! Per-kind token value validators
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license
//!
//! One validator per declared kind, dispatched through the closed [`Kind`]
//! enum. Reference-valued tokens are skipped here (the resolver verifies
//! their targets), and kinds without a registered validator pass through
//! unexamined so newer token documents keep auditing.

use crate::report::Report;
use crate::tree::{Kind, Token, TokenValue};
use serde_json::Value;

/// Units the dimension validator recommends
const RECOMMENDED_UNITS: &[&str] = &["px", "em"];

/// Sub-properties a typography composite is expected to carry
const TYPOGRAPHY_PROPERTIES: &[&str] = &[
    "fontFamily",
    "fontSize",
    "fontWeight",
    "lineHeight",
    "letterSpacing",
];

/// Fields every shadow member must carry
const SHADOW_FIELDS: &[&str] = &["offsetX", "offsetY", "blur", "color"];

/// Validate every token's value against its declared kind
pub fn check_values(tokens: &[Token], report: &mut Report) {
    for token in tokens {
        let Some(kind) = &token.kind else {
            report.stats.missing_kind += 1;
            report.critical(format!("{}: missing required $type", token.dotted()));
            continue;
        };
        if token.value.is_reference() {
            // shape lives at the target; the reference resolver checks it
            continue;
        }
        let problems_before = report.problem_count();
        match kind {
            Kind::Color => check_color(token, report),
            Kind::Dimension => check_dimension(token, report),
            Kind::FontFamily => check_font_family(token, report),
            Kind::FontWeight => check_font_weight(token, report),
            Kind::Number => check_number(token, report),
            Kind::Typography => check_typography(token, report),
            Kind::Shadow => check_shadow(token, report),
            // no registered validator: pass through unexamined
            Kind::Duration | Kind::Other(_) => continue,
        }
        if report.problem_count() == problems_before {
            report.pass(format!("{}: {} value well-formed", token.dotted(), kind));
        }
    }
}

fn check_color(token: &Token, report: &mut Report) {
    let path = token.dotted();
    let value = match &token.value {
        TokenValue::Composite(_) => &token.value,
        TokenValue::Literal(Value::String(s)) => {
            report.critical(format!(
                "{path}: color must be an object with colorSpace/components/alpha/hex, got string literal \"{s}\""
            ));
            return;
        }
        _ => {
            report.critical(format!(
                "{path}: color must be an object with colorSpace/components/alpha/hex"
            ));
            return;
        }
    };

    let missing: Vec<&str> = ["colorSpace", "components", "alpha", "hex"]
        .into_iter()
        .filter(|field| value.field(field).is_none())
        .collect();
    if !missing.is_empty() {
        report.critical(format!(
            "{path}: color value missing required field(s) {}",
            missing.join(", ")
        ));
        return;
    }

    // shape lives at the target for reference-valued fields; anything that
    // is neither a literal nor a reference has the wrong fundamental shape
    match value.field("colorSpace") {
        Some(TokenValue::Literal(space)) => match space.as_str() {
            Some("hsl") => {}
            Some(other) => report.critical(format!(
                "{path}: unsupported colorSpace \"{other}\", expected \"hsl\""
            )),
            None => report.critical(format!("{path}: colorSpace must be a string")),
        },
        Some(TokenValue::Reference(_)) | None => {}
        Some(_) => report.critical(format!("{path}: colorSpace must be a string")),
    }

    match value.field("components") {
        Some(TokenValue::Literal(components)) => {
            check_color_components(&path, components, report);
        }
        Some(TokenValue::Reference(_)) | None => {}
        Some(_) => report.critical(format!(
            "{path}: components must be a 3-element array of numbers"
        )),
    }

    match value.field("alpha") {
        Some(TokenValue::Literal(alpha)) => match alpha.as_f64() {
            Some(a) if (0.0..=1.0).contains(&a) => {}
            Some(a) => report.critical(format!("{path}: alpha {a} outside [0, 1]")),
            None => report.critical(format!("{path}: alpha must be a number")),
        },
        Some(TokenValue::Reference(_)) | None => {}
        Some(_) => report.critical(format!("{path}: alpha must be a number")),
    }

    match value.field("hex") {
        Some(TokenValue::Literal(hex)) => match hex.as_str() {
            Some(h) => {
                let digits = h.strip_prefix('#').unwrap_or(h);
                if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    report.critical(format!("{path}: hex \"{h}\" is not 6 hex digits"));
                }
            }
            None => report.critical(format!("{path}: hex must be a string")),
        },
        Some(TokenValue::Reference(_)) | None => {}
        Some(_) => report.critical(format!("{path}: hex must be a string")),
    }
}

fn check_color_components(path: &str, components: &Value, report: &mut Report) {
    let Some(items) = components.as_array() else {
        report.critical(format!("{path}: components must be a 3-element array"));
        return;
    };
    if items.len() != 3 {
        report.critical(format!(
            "{path}: components must have exactly 3 elements, got {}",
            items.len()
        ));
        return;
    }
    let mut values = [0.0; 3];
    for (i, item) in items.iter().enumerate() {
        match item.as_f64() {
            Some(n) => values[i] = n,
            None => {
                report.critical(format!("{path}: components[{i}] is not numeric"));
                return;
            }
        }
    }
    // HSL natural ranges are a guideline, not a contract
    if !(0.0..=360.0).contains(&values[0]) {
        report.warn(format!("{path}: hue {} outside [0, 360]", values[0]));
    }
    for (i, label) in [(1, "saturation"), (2, "lightness")] {
        if !(0.0..=100.0).contains(&values[i]) {
            report.warn(format!("{path}: {label} {} outside [0, 100]", values[i]));
        }
    }
}

fn check_dimension(token: &Token, report: &mut Report) {
    let path = token.dotted();
    let value = match &token.value {
        TokenValue::Composite(_) => &token.value,
        TokenValue::Literal(Value::String(s)) => {
            report.critical(format!(
                "{path}: dimension must be a {{value, unit}} object, got string literal \"{s}\""
            ));
            return;
        }
        _ => {
            report.critical(format!("{path}: dimension must be a {{value, unit}} object"));
            return;
        }
    };

    match value.field("value") {
        Some(TokenValue::Literal(raw)) if raw.is_number() => {}
        Some(TokenValue::Reference(_)) => {}
        Some(_) => report.critical(format!("{path}: dimension value must be numeric")),
        None => report.critical(format!("{path}: dimension missing required field value")),
    }

    match value.field("unit") {
        Some(TokenValue::Literal(raw)) => match raw.as_str() {
            Some(unit) if RECOMMENDED_UNITS.contains(&unit) => {}
            Some(unit) => report.warn(format!(
                "{path}: unit \"{unit}\" is not in the recommended set ({})",
                RECOMMENDED_UNITS.join(", ")
            )),
            None => report.critical(format!("{path}: dimension unit must be a string")),
        },
        Some(TokenValue::Reference(_)) => {}
        Some(_) => report.critical(format!("{path}: dimension unit must be a string")),
        None => report.critical(format!("{path}: dimension missing required field unit")),
    }
}

fn check_font_family(token: &Token, report: &mut Report) {
    match &token.value {
        TokenValue::Literal(Value::Array(items)) => {
            if !items.iter().all(Value::is_string) {
                report.critical(format!(
                    "{}: fontFamily members must all be strings",
                    token.dotted()
                ));
            }
        }
        // arrays that embed references are resolved member by member
        TokenValue::List(_) => {}
        _ => report.critical(format!(
            "{}: fontFamily must be an ordered sequence of strings",
            token.dotted()
        )),
    }
}

fn check_font_weight(token: &Token, report: &mut Report) {
    let path = token.dotted();
    match token.value.as_literal().and_then(Value::as_f64) {
        Some(weight) => check_weight_range(&path, weight, report),
        None => report.critical(format!("{path}: fontWeight must be numeric")),
    }
}

fn check_number(token: &Token, report: &mut Report) {
    let path = token.dotted();
    let Some(number) = token.value.as_literal().and_then(Value::as_f64) else {
        report.critical(format!("{path}: number value is not numeric"));
        return;
    };

    // The declared kind carries no finer discriminator, so the numeric
    // domain is selected by path-segment heuristics.
    if segment_contains(&token.path, "opacity") {
        if !(0.0..=1.0).contains(&number) {
            report.warn(format!("{path}: opacity {number} outside [0, 1]"));
        }
    } else if segment_contains(&token.path, "weight") {
        check_weight_range(&path, number, report);
    } else if segment_contains(&token.path, "lineheight") {
        if !(0.5..=3.0).contains(&number) {
            report.warn(format!(
                "{path}: line-height {number} outside the plausible [0.5, 3] band"
            ));
        }
    }
}

/// Case- and separator-insensitive search over path segments
fn segment_contains(path: &[String], needle: &str) -> bool {
    path.iter().any(|segment| {
        segment
            .to_ascii_lowercase()
            .replace(['-', '_'], "")
            .contains(needle)
    })
}

fn check_weight_range(path: &str, weight: f64, report: &mut Report) {
    if !(100.0..=900.0).contains(&weight) || weight % 100.0 != 0.0 {
        report.warn(format!(
            "{path}: font weight {weight} is not a multiple of 100 in [100, 900]"
        ));
    }
}

fn check_typography(token: &Token, report: &mut Report) {
    let path = token.dotted();
    let TokenValue::Composite(_) = &token.value else {
        report.critical(format!("{path}: typography value must be an object"));
        return;
    };
    let missing: Vec<&str> = TYPOGRAPHY_PROPERTIES
        .iter()
        .copied()
        .filter(|property| token.value.field(property).is_none())
        .collect();
    if !missing.is_empty() {
        report.warn(format!(
            "{path}: typography composite missing recommended propert{} {}",
            if missing.len() == 1 { "y" } else { "ies" },
            missing.join(", ")
        ));
    }
}

fn check_shadow(token: &Token, report: &mut Report) {
    let path = token.dotted();
    match &token.value {
        TokenValue::Composite(_) => check_shadow_member(&path, &token.value, report),
        TokenValue::List(members) => {
            for (i, member) in members.iter().enumerate() {
                check_shadow_member(&format!("{path}[{i}]"), member, report);
            }
        }
        _ => report.critical(format!(
            "{path}: shadow must be an object or a sequence of objects"
        )),
    }
}

fn check_shadow_member(path: &str, member: &TokenValue, report: &mut Report) {
    if !matches!(member, TokenValue::Composite(_)) {
        report.critical(format!("{path}: shadow member must be an object"));
        return;
    }
    let missing: Vec<&str> = SHADOW_FIELDS
        .iter()
        .copied()
        .filter(|field| member.field(field).is_none())
        .collect();
    if !missing.is_empty() {
        report.critical(format!(
            "{path}: shadow member missing required field(s) {}",
            missing.join(", ")
        ));
    }
}
