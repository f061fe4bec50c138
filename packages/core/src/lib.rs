//! Switch expression engine
//!
//! Internal implementation behind the `switch_expr` fluent API: the case table
//! (single-value cases and ordered predicate cases), the runtime-checked
//! [`MatchExpression`], the error taxonomy and the configuration layer.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod cases;
pub mod config;
pub mod error;
pub mod expression;

pub use cases::{CaseFn, CaseTable, MatchKind, PredicateCases, PredicateFn, SingleCases};
pub use config::{ConfigResult, ConfigurationError, SwitchConfig, Validator};
pub use error::{SwitchError, SwitchResult};
pub use expression::MatchExpression;
