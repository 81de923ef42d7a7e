//! Reference integrity and cycle detection
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license
//!
//! Builds a flat index of every token path across both layers, then walks
//! every token value (and the `$extensions` side channel) for `{dot.path}`
//! references. References are layer-agnostic by design: a target spelled
//! with a layer prefix is as much a contract violation as one that resolves
//! nowhere. The reference graph is searched for cycles on every run, even
//! though a well-formed corpus is acyclic; silent infinite recursion is not
//! an acceptable failure mode.

use crate::report::Report;
use crate::tree::{reference_target, Layer, Token};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Flat per-layer index of every token's dot-joined path
#[derive(Debug, Default)]
pub struct PathIndex {
    primitive: HashSet<String>,
    semantic: HashSet<String>,
}

impl PathIndex {
    /// Index the canonical paths of an already-collected corpus
    pub fn build(tokens: &[Token]) -> Self {
        let mut index = PathIndex::default();
        for token in tokens {
            index.layer_mut(token.layer).insert(token.dotted());
        }
        index
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut HashSet<String> {
        match layer {
            Layer::Primitive => &mut self.primitive,
            Layer::Semantic => &mut self.semantic,
        }
    }

    /// Whether either layer holds a token at `path`
    pub fn contains(&self, path: &str) -> bool {
        self.primitive.contains(path) || self.semantic.contains(path)
    }

    /// Whether a specific layer holds a token at `path`
    pub fn contains_in(&self, layer: Layer, path: &str) -> bool {
        match layer {
            Layer::Primitive => self.primitive.contains(path),
            Layer::Semantic => self.semantic.contains(path),
        }
    }

    /// Every indexed path, both layers
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.primitive.iter().chain(self.semantic.iter())
    }
}

/// Verify every reference resolves, carries no layer prefix, and closes no cycle
pub fn check_references(tokens: &[Token], index: &PathIndex, report: &mut Report) {
    let mut distinct = HashSet::new();
    // adjacency over resolved references only; kept in token order so the
    // cycle search is deterministic
    let mut adjacency: Vec<(String, Vec<String>)> = Vec::new();

    for token in tokens {
        let mut refs = Vec::new();
        token.value.collect_references(&mut refs);
        if let Some(extensions) = &token.extensions {
            collect_raw_references(extensions, &mut refs);
        }
        if refs.is_empty() {
            continue;
        }

        let mut edges = Vec::new();
        for target in &refs {
            distinct.insert(target.clone());
            if let Some(layer) = layer_prefix(target) {
                report.stats.invalid_references += 1;
                report.critical(format!(
                    "{}: reference {{{target}}} is layer-qualified; references never spell out the \"{layer}\" layer",
                    token.dotted()
                ));
            } else if !index.contains(target) {
                report.stats.invalid_references += 1;
                report.critical(format!(
                    "{}: dangling reference {{{target}}} resolves to no token in either layer",
                    token.dotted()
                ));
            } else {
                report.pass(format!("{}: reference {{{target}}} resolves", token.dotted()));
                edges.push(target.clone());
            }
        }
        adjacency.push((token.dotted(), edges));
    }

    report.stats.references_checked = distinct.len();

    if let Some(cycle) = find_cycle(&adjacency) {
        report.critical(format!("reference cycle detected: {}", cycle.join(" -> ")));
    }
}

/// The layer a reference target illegally starts with, if any
fn layer_prefix(target: &str) -> Option<&'static str> {
    [Layer::Primitive, Layer::Semantic]
        .into_iter()
        .map(Layer::name)
        .find(|name| {
            target
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('.'))
        })
}

/// Collect `{dot.path}` references out of an arbitrary JSON value
///
/// `$extensions` is an opaque side channel, so it stays raw JSON and gets
/// the same recursive delimiter scan the classified values got at parse
/// time.
fn collect_raw_references(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            if let Some(target) = reference_target(s) {
                out.push(target.to_string());
            }
        }
        Value::Object(map) => {
            for (_, nested) in map {
                collect_raw_references(nested, out);
            }
        }
        Value::Array(items) => {
            for nested in items {
                collect_raw_references(nested, out);
            }
        }
        _ => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Gray,
    Black,
}

/// Colored-node depth-first search for the first cycle in the reference graph
fn find_cycle(adjacency: &[(String, Vec<String>)]) -> Option<Vec<String>> {
    let edges: HashMap<&str, &[String]> = adjacency
        .iter()
        .map(|(node, targets)| (node.as_str(), targets.as_slice()))
        .collect();
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    for (node, _) in adjacency {
        if mark_of(&marks, node) == Mark::White {
            let mut stack = Vec::new();
            if let Some(cycle) = visit(node, &edges, &mut marks, &mut stack) {
                return Some(cycle);
            }
        }
    }
    None
}

fn mark_of(marks: &HashMap<&str, Mark>, node: &str) -> Mark {
    marks.get(node).copied().unwrap_or(Mark::White)
}

fn visit<'a>(
    node: &'a str,
    edges: &HashMap<&'a str, &'a [String]>,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    marks.insert(node, Mark::Gray);
    stack.push(node);
    for target in edges.get(node).copied().unwrap_or_default() {
        match mark_of(marks, target) {
            Mark::Gray => {
                // closed back on an in-progress node: slice the cycle out of
                // the visitation stack
                let start = stack
                    .iter()
                    .position(|n| *n == target.as_str())
                    .unwrap_or(0);
                let mut cycle: Vec<String> =
                    stack[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(target.to_string());
                return Some(cycle);
            }
            Mark::White => {
                if let Some(cycle) = visit(target, edges, marks, stack) {
                    return Some(cycle);
                }
            }
            Mark::Black => {}
        }
    }
    stack.pop();
    marks.insert(node, Mark::Black);
    None
}
