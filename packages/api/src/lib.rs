//! Switch expressions with a staged fluent builder
//!
//! A switch resolves a test value to a result: an exact-match case for an
//! equal key wins, otherwise the first matching predicate case in
//! registration order, otherwise the default case. The builder only exposes
//! case registration and resolution after a default case is registered, so
//! every resolvable switch has a fallback.
//!
//! ```
//! use switch_expr::Switch;
//!
//! let size = Switch::start()
//!     .default_case(|_| "other")
//!     .single(1, |_| "one")
//!     .predicate(|x: &i32| *x > 10, |_| "big")
//!     .build();
//!
//! assert_eq!(size.resolve_with(1), "one");
//! assert_eq!(size.resolve_with(20), "big");
//! assert_eq!(size.resolve_with(5), "other");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::{DefaultNotSet, DefaultSet, Evaluator, SwitchBuilder};

// Re-export important types from the engine package
pub use switch_expr_core::{
    CaseFn, ConfigurationError, MatchExpression, MatchKind, PredicateFn, SwitchConfig, SwitchError,
    SwitchResult, Validator,
};

/// Main entry point providing static builder methods
pub struct Switch;

impl Switch {
    /// Start a switch over `value`
    ///
    /// The returned builder only accepts a default case.
    #[must_use]
    pub fn create<T, R>(value: T) -> SwitchBuilder<T, R> {
        SwitchBuilder::new(Some(value), &SwitchConfig::default())
    }

    /// Start a switch without a test value
    ///
    /// Supply values later through `resolve_with`, `apply` or `set_value`.
    #[must_use]
    pub fn start<T, R>() -> SwitchBuilder<T, R> {
        SwitchBuilder::new(None, &SwitchConfig::default())
    }

    /// Start a switch without a test value, using `config`
    ///
    /// # Errors
    ///
    /// Returns `SwitchError::Configuration` if `config` fails validation.
    pub fn configured<T, R>(config: &SwitchConfig) -> SwitchResult<SwitchBuilder<T, R>> {
        Self::validated(None, config)
    }

    /// Start a switch over `value`, using `config`
    ///
    /// # Errors
    ///
    /// Returns `SwitchError::Configuration` if `config` fails validation.
    pub fn create_configured<T, R>(
        value: T,
        config: &SwitchConfig,
    ) -> SwitchResult<SwitchBuilder<T, R>> {
        Self::validated(Some(value), config)
    }

    fn validated<T, R>(
        value: Option<T>,
        config: &SwitchConfig,
    ) -> SwitchResult<SwitchBuilder<T, R>> {
        if let Err(error) = config.validate() {
            log::warn!("rejected switch configuration: {error}");
            return Err(error.into());
        }
        Ok(SwitchBuilder::new(value, config))
    }
}

/// Start a switch over `value`
///
/// Shorthand for `Switch::create(value)`
#[must_use]
pub fn create<T, R>(value: T) -> SwitchBuilder<T, R> {
    Switch::create(value)
}

/// Start a switch without a test value
///
/// Shorthand for `Switch::start()`
#[must_use]
pub fn start<T, R>() -> SwitchBuilder<T, R> {
    Switch::start()
}
