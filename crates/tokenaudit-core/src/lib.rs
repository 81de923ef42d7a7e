//! Tokenaudit Core - structural and semantic auditor for design token trees
//!
//! This crate validates a two-layer design token corpus: a **primitive**
//! document holding raw values and a **semantic** document holding values
//! that reference primitives (or other semantic tokens). The audit walks
//! both trees and checks:
//!
//! - **Value shapes**: one validator per declared kind (color, dimension,
//!   fontFamily, number, typography, shadow, ...) with hard contract
//!   violations reported as critical and range guidelines as warnings
//! - **Reference integrity**: every `{dot.path}` reference must resolve in
//!   either layer, must not spell out a layer name, and must close no cycle
//! - **Structure**: path depth guidelines, layer-prefix naming violations,
//!   state-suffix conventions
//! - **Completeness**: essential tokens, full color scales, interactive
//!   states, anchor primitives
//! - **Quality**: description substance, per-group kind homogeneity,
//!   accessibility contrast metadata
//!
//! Findings land in three buckets (pass / warning / critical) with a
//! derived readiness score and verdict. The audit never fails fast: the
//! value of a run is the completeness of its report, so every problem in
//! the corpus surfaces in one pass. Only an input that cannot be
//! interpreted as a token tree at all aborts the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tokenaudit_core::{AuditConfig, Auditor};
//!
//! let primitive = json!({
//!     "color": {
//!         "brand": {
//!             "600": {
//!                 "$type": "color",
//!                 "$value": {
//!                     "colorSpace": "hsl",
//!                     "components": [243, 75, 59],
//!                     "alpha": 1,
//!                     "hex": "4f46e5"
//!                 },
//!                 "$description": "Primary brand indigo"
//!             }
//!         }
//!     }
//! });
//! let semantic = json!({
//!     "color": {
//!         "background": {
//!             "brand": {
//!                 "default": {
//!                     "$type": "color",
//!                     "$value": "{color.brand.600}",
//!                     "$description": "Default brand surface background"
//!                 }
//!             }
//!         }
//!     }
//! });
//!
//! let report = Auditor::new(AuditConfig::minimal())
//!     .run(&primitive, &semantic)
//!     .unwrap();
//! assert!(report.is_ready());
//! assert_eq!(report.score(), 100);
//! ```
//!
//! The auditor verifies; it never transforms. Resolving references to
//! literal values and producing platform output (CSS variables, native
//! resources) is a downstream collaborator with its own contract.
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license

pub mod audit;
pub mod checks;
pub mod config;
pub mod error;
pub mod report;
pub mod tree;

// Re-export the types a caller touches for a normal run
pub use audit::{audit, Auditor};
pub use checks::PathIndex;
pub use config::{AuditConfig, StateDepthTolerance, INTERACTIVE_STATES};
pub use error::{AuditError, Result};
pub use report::{Report, Severity, Stats, Verdict};
pub use tree::{load_tree, traverse, Kind, Layer, Token, TokenValue};
