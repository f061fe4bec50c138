//! Runtime-checked match expression
//!
//! [`MatchExpression`] is one mutable structure holding a case table and an
//! optional default. It suits configurations assembled incrementally, where
//! the staged builder's compile-time guarantee is not available; a missing
//! default surfaces as [`SwitchError::MissingDefault`] at resolution time.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::cases::{CaseFn, CaseTable, MatchKind};
use crate::config::{ConfigResult, SwitchConfig, Validator};
use crate::error::{SwitchError, SwitchResult};

pub struct MatchExpression<T, R> {
    cases: CaseTable<T, R>,
    default: Option<CaseFn<T, R>>,
}

impl<T, R> MatchExpression<T, R> {
    /// Create an empty expression with no default case
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(CaseTable::new(), None)
    }

    /// Create an empty expression with storage sized per `config`
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCapacity` if a capacity hint is
    /// out of range.
    pub fn with_config(config: &SwitchConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(CaseTable::with_config(config), None))
    }

    /// Assemble an expression from an existing case table and default
    #[must_use]
    pub fn from_parts(cases: CaseTable<T, R>, default: Option<CaseFn<T, R>>) -> Self {
        Self { cases, default }
    }

    /// Set the fallback function, replacing any previous one
    pub fn default_case<F>(&mut self, function: F) -> &mut Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        if self.default.replace(Arc::new(function)).is_some() {
            tracing::debug!(
                target: "switch_expr::expression",
                "default case overwritten; last registration wins"
            );
        }
        self
    }

    /// Append a predicate case
    pub fn predicate<P, F>(&mut self, predicate: P, function: F) -> &mut Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.cases.predicate(predicate, function);
        self
    }

    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    #[must_use]
    pub fn single_case_count(&self) -> usize {
        self.cases.singles().len()
    }

    #[must_use]
    pub fn predicate_case_count(&self) -> usize {
        self.cases.predicates().len()
    }

    #[must_use]
    pub fn cases(&self) -> &CaseTable<T, R> {
        &self.cases
    }
}

impl<T: Hash + Eq, R> MatchExpression<T, R> {
    /// Register an exact-match case, replacing any function bound to an
    /// equal key
    pub fn single<F>(&mut self, key: T, function: F) -> &mut Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.cases.single(key, function);
        self
    }

    /// Resolve `value`: an equal single key first, then the first matching
    /// predicate, then the default.
    ///
    /// # Errors
    ///
    /// Returns `SwitchError::MissingDefault` if no case matches and no
    /// default case was registered.
    pub fn resolve(&self, value: &T) -> SwitchResult<R> {
        let (kind, function) = match self.cases.find(value) {
            Some(found) => found,
            None => (
                MatchKind::Default,
                self.default.as_ref().ok_or(SwitchError::MissingDefault)?,
            ),
        };
        tracing::trace!(target: "switch_expr::expression", "resolved via {}", kind);
        Ok(function(value))
    }
}

impl<T, R> Default for MatchExpression<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R> Clone for MatchExpression<T, R> {
    fn clone(&self) -> Self {
        Self {
            cases: self.cases.clone(),
            default: self.default.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for MatchExpression<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchExpression")
            .field("cases", &self.cases)
            .field("default", &self.default.is_some())
            .finish()
    }
}
