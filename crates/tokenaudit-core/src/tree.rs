//! Token tree model, traversal, and loading
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license
//!
//! A token tree is an ordered JSON object in which every key either names a
//! nested group or a token. A node is a token exactly when it carries the
//! reserved `$value` field; all other `$`-prefixed keys are metadata and are
//! never recursed into. Values are classified once, at parse time, into
//! [`TokenValue`] variants so downstream checkers never re-sniff string
//! patterns for references.

use crate::error::{AuditError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

/// Reserved key that marks a node as a token
pub const VALUE_KEY: &str = "$value";
/// Reserved key carrying the declared value kind
pub const TYPE_KEY: &str = "$type";
/// Reserved key carrying the human-readable description
pub const DESCRIPTION_KEY: &str = "$description";
/// Reserved key carrying side-channel metadata
pub const EXTENSIONS_KEY: &str = "$extensions";

const RESERVED_PREFIX: char = '$';

/// Which of the two documents a token was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Primitive,
    Semantic,
}

impl Layer {
    /// Lowercase layer name, as it would appear in an (illegal) path prefix
    pub fn name(self) -> &'static str {
        match self {
            Layer::Primitive => "primitive",
            Layer::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared value kind of a token
///
/// Closed set of the kinds the auditor knows how to validate. Kinds outside
/// this set are carried as [`Kind::Other`] and pass through unexamined, so
/// documents using newer kinds keep validating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    Number,
    Typography,
    Shadow,
    Duration,
    Other(String),
}

impl Kind {
    /// Map a `$type` tag onto a kind
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "color" => Kind::Color,
            "dimension" => Kind::Dimension,
            "fontFamily" => Kind::FontFamily,
            "fontWeight" => Kind::FontWeight,
            "number" => Kind::Number,
            "typography" => Kind::Typography,
            "shadow" => Kind::Shadow,
            "duration" => Kind::Duration,
            other => Kind::Other(other.to_string()),
        }
    }

    /// The tag this kind was declared with
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Color => "color",
            Kind::Dimension => "dimension",
            Kind::FontFamily => "fontFamily",
            Kind::FontWeight => "fontWeight",
            Kind::Number => "number",
            Kind::Typography => "typography",
            Kind::Shadow => "shadow",
            Kind::Duration => "duration",
            Kind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token value, classified once at parse time
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// A `{dot.path}` reference to another token, delimiters stripped
    Reference(String),
    /// A literal scalar or scalar array, shape depends on the kind
    Literal(Value),
    /// An object value whose fields are themselves classified values
    Composite(Vec<(String, TokenValue)>),
    /// An array of non-scalar members, e.g. layered shadows
    List(Vec<TokenValue>),
}

impl TokenValue {
    /// Classify a raw JSON value
    pub fn classify(raw: &Value) -> Self {
        match raw {
            Value::String(s) => match reference_target(s) {
                Some(target) => TokenValue::Reference(target.to_string()),
                None => TokenValue::Literal(raw.clone()),
            },
            Value::Object(map) => TokenValue::Composite(
                map.iter()
                    .map(|(k, v)| (k.clone(), TokenValue::classify(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                let scalar_only = items.iter().all(|item| {
                    !item.is_object()
                        && !item.is_array()
                        && item.as_str().map_or(true, |s| reference_target(s).is_none())
                });
                if scalar_only {
                    TokenValue::Literal(raw.clone())
                } else {
                    TokenValue::List(items.iter().map(TokenValue::classify).collect())
                }
            }
            _ => TokenValue::Literal(raw.clone()),
        }
    }

    /// Whether this value is a reference at its top level
    pub fn is_reference(&self) -> bool {
        matches!(self, TokenValue::Reference(_))
    }

    /// Look up a field of a composite value
    pub fn field(&self, name: &str) -> Option<&TokenValue> {
        match self {
            TokenValue::Composite(fields) => {
                fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// The raw literal, if this is a literal
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            TokenValue::Literal(raw) => Some(raw),
            _ => None,
        }
    }

    /// Collect every reference target in this value, depth first
    pub fn collect_references(&self, out: &mut Vec<String>) {
        match self {
            TokenValue::Reference(target) => out.push(target.clone()),
            TokenValue::Literal(_) => {}
            TokenValue::Composite(fields) => {
                for (_, value) in fields {
                    value.collect_references(out);
                }
            }
            TokenValue::List(items) => {
                for value in items {
                    value.collect_references(out);
                }
            }
        }
    }
}

/// Strip the `{...}` reference delimiters, if present
pub fn reference_target(s: &str) -> Option<&str> {
    s.strip_prefix('{').and_then(|rest| rest.strip_suffix('}'))
}

/// A leaf node of a token tree
#[derive(Debug, Clone)]
pub struct Token {
    /// Non-metadata key segments from the tree root to this node
    pub path: Vec<String>,
    /// Which document the token came from
    pub layer: Layer,
    /// Declared value kind, absent when `$type` is missing
    pub kind: Option<Kind>,
    /// The classified value
    pub value: TokenValue,
    /// Free-text documentation
    pub description: Option<String>,
    /// Raw `$extensions` side channel, if present
    pub extensions: Option<Value>,
}

impl Token {
    /// Dot-joined canonical path
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }

    /// Last path segment
    pub fn last_segment(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }
}

/// Recursively visit every token under `tree`
///
/// `$`-prefixed keys are skipped and never recursed into. Nodes carrying
/// `$value` are tokens; everything else that is an object is a group. The
/// tree is a plain acyclic document, so no cycle protection is needed here
/// (reference-level cycles are the resolver's concern).
pub fn traverse<F>(tree: &Value, layer: Layer, visit: &mut F) -> Result<()>
where
    F: FnMut(Token),
{
    let root = tree
        .as_object()
        .ok_or(AuditError::InvalidRoot { layer })?;
    let mut prefix = Vec::new();
    walk(root, layer, &mut prefix, visit, &mut |_, _| {});
    Ok(())
}

fn walk<F, M>(
    group: &Map<String, Value>,
    layer: Layer,
    prefix: &mut Vec<String>,
    visit: &mut F,
    malformed: &mut M,
) where
    F: FnMut(Token),
    M: FnMut(Layer, String),
{
    for (key, node) in group {
        if key.starts_with(RESERVED_PREFIX) {
            continue;
        }
        prefix.push(key.clone());
        match node.as_object() {
            Some(obj) if obj.contains_key(VALUE_KEY) => {
                visit(parse_token(obj, prefix.clone(), layer));
            }
            Some(obj) => walk(obj, layer, prefix, visit, malformed),
            None => malformed(layer, prefix.join(".")),
        }
        prefix.pop();
    }
}

fn parse_token(obj: &Map<String, Value>, path: Vec<String>, layer: Layer) -> Token {
    Token {
        path,
        layer,
        kind: obj
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .map(Kind::from_tag),
        value: TokenValue::classify(&obj[VALUE_KEY]),
        description: obj
            .get(DESCRIPTION_KEY)
            .and_then(Value::as_str)
            .map(str::to_string),
        extensions: obj.get(EXTENSIONS_KEY).cloned(),
    }
}

/// Both token documents flattened into one corpus
#[derive(Debug, Default)]
pub struct Corpus {
    /// Every token of both layers, in document order (primitive first)
    pub tokens: Vec<Token>,
    /// Token count per layer
    pub primitive_count: usize,
    pub semantic_count: usize,
    /// Dotted paths of nodes that are neither groups nor tokens
    pub malformed: Vec<(Layer, String)>,
}

/// Flatten the primitive and semantic trees into a [`Corpus`]
pub fn collect(primitive: &Value, semantic: &Value) -> Result<Corpus> {
    let mut corpus = Corpus::default();
    for (tree, layer) in [(primitive, Layer::Primitive), (semantic, Layer::Semantic)] {
        let root = tree
            .as_object()
            .ok_or(AuditError::InvalidRoot { layer })?;
        let mut prefix = Vec::new();
        let Corpus {
            tokens,
            primitive_count,
            semantic_count,
            malformed,
        } = &mut corpus;
        walk(
            root,
            layer,
            &mut prefix,
            &mut |token| {
                match layer {
                    Layer::Primitive => *primitive_count += 1,
                    Layer::Semantic => *semantic_count += 1,
                }
                tokens.push(token);
            },
            &mut |layer, path| malformed.push((layer, path)),
        );
    }
    Ok(corpus)
}

/// Read and parse a token document from disk
///
/// Load and parse failures are the fatal precondition of the audit and are
/// the only conditions that abort a run before a report exists.
pub fn load_tree(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AuditError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
