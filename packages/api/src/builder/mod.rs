//! Staged switch builder
//!
//! Provides the fluent API for configuring a switch expression and the
//! evaluator it finalizes into.

pub mod cases;
pub mod core;
pub mod evaluator;

pub use self::core::{DefaultNotSet, DefaultSet, SwitchBuilder};
pub use evaluator::Evaluator;
