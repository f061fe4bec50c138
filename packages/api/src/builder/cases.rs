//! Case registration for `SwitchBuilder`
//!
//! The default case moves a builder out of the `DefaultNotSet` stage; single
//! and predicate cases, resolution and `build` only exist afterwards.

use std::hash::Hash;
use std::sync::Arc;

use switch_expr_core::{MatchKind, SwitchError, SwitchResult};

use super::core::{DefaultNotSet, DefaultSet, SwitchBuilder};
use super::evaluator::Evaluator;

impl<T, R> SwitchBuilder<T, R, DefaultNotSet> {
    /// Register the fallback used when no other case matches
    ///
    /// # Arguments
    /// * `function` - Called with the test value when nothing else matched
    ///
    /// # Returns
    /// `SwitchBuilder<T, R, DefaultSet<T, R>>` for registering further cases
    ///
    /// # Examples
    /// ```
    /// use switch_expr::Switch;
    ///
    /// let label = Switch::create(7)
    ///     .default_case(|_| "other")
    ///     .resolve();
    /// assert_eq!(label, Ok("other"));
    /// ```
    #[must_use]
    pub fn default_case<F>(self, function: F) -> SwitchBuilder<T, R, DefaultSet<T, R>>
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        SwitchBuilder {
            cases: self.cases,
            value: self.value,
            state: DefaultSet {
                default: Arc::new(function),
            },
            debug_enabled: self.debug_enabled,
        }
    }
}

impl<T, R> SwitchBuilder<T, R, DefaultSet<T, R>> {
    /// Replace the fallback function; the last registration wins
    #[must_use]
    pub fn default_case<F>(mut self, function: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        tracing::debug!(
            target: "switch_expr::builder",
            "default case overwritten; last registration wins"
        );
        self.state.default = Arc::new(function);
        self
    }

    /// Register a predicate case
    ///
    /// Predicates are tested in registration order after exact matches; the
    /// first one returning true selects `function`.
    #[must_use]
    pub fn predicate<P, F>(mut self, predicate: P, function: F) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.cases.predicate(predicate, function);
        self
    }

    /// Finalize the configuration into a resolution-only [`Evaluator`]
    #[must_use]
    pub fn build(self) -> Evaluator<T, R> {
        if self.debug_enabled {
            log::debug!(
                "switch built with {} single case(s) and {} predicate case(s)",
                self.cases.singles().len(),
                self.cases.predicates().len()
            );
        }
        Evaluator::new(self)
    }
}

impl<T: Hash + Eq, R> SwitchBuilder<T, R, DefaultSet<T, R>> {
    /// Register an exact-match case
    ///
    /// Registering an equal key again replaces the earlier function.
    #[must_use]
    pub fn single<F>(mut self, key: T, function: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.cases.single(key, function);
        self
    }

    /// Resolve the stored test value
    ///
    /// # Errors
    ///
    /// Returns `SwitchError::MissingTestValue` if the switch was started
    /// without a value and none has been set since.
    pub fn resolve(&self) -> SwitchResult<R> {
        if let Some(value) = &self.value {
            Ok(self.dispatch(value))
        } else {
            if self.debug_enabled {
                log::debug!("switch resolved without a test value");
            }
            Err(SwitchError::MissingTestValue)
        }
    }

    /// Resolve `value` without touching the stored test value
    #[allow(clippy::needless_pass_by_value)]
    pub fn resolve_with(&self, value: T) -> R {
        self.dispatch(&value)
    }

    pub(crate) fn dispatch(&self, value: &T) -> R {
        let (kind, function) = self
            .cases
            .find(value)
            .unwrap_or((MatchKind::Default, &self.state.default));
        if self.debug_enabled {
            log::debug!("switch resolved via {kind}");
        }
        function(value)
    }
}
