//! The audit checkers
//!
//! Copyright (c) 2025 Tokenaudit Team
//! Licensed under the Apache-2.0 license
//!
//! Each checker reads the flattened corpus and appends findings to the
//! shared [`Report`](crate::report::Report); none of them aborts the run.
//! The [`Auditor`](crate::audit::Auditor) fixes their execution order so
//! reports are reproducible.

pub mod completeness;
pub mod quality;
pub mod reference;
pub mod structure;
pub mod value;

pub use completeness::check_completeness;
pub use quality::check_quality;
pub use reference::{check_references, PathIndex};
pub use structure::check_structure;
pub use value::check_values;
