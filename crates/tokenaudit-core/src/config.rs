//! Audit configuration
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license

/// Interactive-state names recognized at the end of a token path
pub const INTERACTIVE_STATES: &[&str] = &[
    "default", "hover", "pressed", "active", "focus", "disabled", "visited", "selected",
];

/// How to treat a path one segment over the depth guideline when its last
/// segment is a recognized interactive state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateDepthTolerance {
    /// No finding at all: state suffixes earn the extra segment
    Allow,
    /// A distinct warning, softer-worded than a true depth violation
    Warn,
}

/// Tunable knobs and required-content lists for an audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Hard maximum path depth guideline
    pub max_depth: usize,
    /// Treatment of `max_depth + 1` paths ending in an interactive state
    pub state_depth_tolerance: StateDepthTolerance,
    /// Path prefixes at least one token must match
    pub essential_prefixes: Vec<String>,
    /// Primitive color categories expected to carry a full scale
    pub scale_categories: Vec<String>,
    /// The ordered scale steps each category must provide
    pub scale_steps: Vec<String>,
    /// Interactive states the semantic layer must exercise
    pub required_states: Vec<String>,
    /// Fully-qualified primitive paths that must exist
    pub anchor_tokens: Vec<String>,
    /// Minimum description length considered non-trivial
    pub min_description_len: usize,
    /// Descriptions equal to (or barely more than) these words are flagged
    pub generic_descriptions: Vec<String>,
    /// Whether total absence of contrast metadata is a warning
    pub require_contrast_metadata: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            max_depth: 4,
            state_depth_tolerance: StateDepthTolerance::Allow,
            essential_prefixes: strings(&[
                "color.text.neutral.base.default",
                "color.background.neutral.base.default",
                "color.border.neutral.base.default",
            ]),
            scale_categories: strings(&["neutral", "brand", "success", "warning", "danger"]),
            scale_steps: strings(&[
                "25", "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
            ]),
            required_states: strings(&["default", "hover", "pressed"]),
            anchor_tokens: strings(&["color.white", "color.black"]),
            min_description_len: 10,
            generic_descriptions: strings(&[
                "color", "token", "value", "background", "border", "text", "style",
            ]),
            require_contrast_metadata: true,
        }
    }
}

impl AuditConfig {
    /// A configuration with no corpus-content expectations
    ///
    /// Value, reference, structural, and documentation checks still run;
    /// the completeness lists and the contrast-metadata requirement are
    /// emptied. Useful for auditing small or partial corpora.
    pub fn minimal() -> Self {
        Self {
            essential_prefixes: Vec::new(),
            scale_categories: Vec::new(),
            required_states: Vec::new(),
            anchor_tokens: Vec::new(),
            require_contrast_metadata: false,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_state_depth_tolerance(mut self, tolerance: StateDepthTolerance) -> Self {
        self.state_depth_tolerance = tolerance;
        self
    }

    /// Whether a path segment names a recognized interactive state
    pub fn is_state(segment: &str) -> bool {
        INTERACTIVE_STATES.contains(&segment)
    }
}
