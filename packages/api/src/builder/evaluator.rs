//! Resolution-only view of a configured switch
//!
//! An [`Evaluator`] wraps the builder it was built from without copying any
//! case. It can be resolved any number of times and doubles as a plain
//! `T -> R` function for iterator adapters.

use std::fmt;
use std::hash::Hash;

use switch_expr_core::{MatchExpression, SwitchResult};

use super::core::{DefaultSet, SwitchBuilder};

/// A finalized switch expression
///
/// Value-taking resolution (`resolve_with`, `apply`, `as_fn`) never mutates
/// the evaluator, so a shared `&Evaluator` can be used from several threads
/// when `T` is `Sync`.
pub struct Evaluator<T, R> {
    inner: SwitchBuilder<T, R, DefaultSet<T, R>>,
}

impl<T, R> Evaluator<T, R> {
    pub(crate) fn new(inner: SwitchBuilder<T, R, DefaultSet<T, R>>) -> Self {
        Self { inner }
    }

    /// The stored test value used by `resolve()`
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.inner.value.as_ref()
    }

    /// Replace the stored test value
    pub fn set_value(&mut self, value: T) {
        self.inner.value = Some(value);
    }

    /// Replace the stored test value
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn with_value(mut self, value: T) -> Self {
        self.set_value(value);
        self
    }

    #[must_use]
    pub fn single_case_count(&self) -> usize {
        self.inner.cases.singles().len()
    }

    #[must_use]
    pub fn predicate_case_count(&self) -> usize {
        self.inner.cases.predicates().len()
    }

    /// Single-case keys in registration order
    pub fn single_keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.cases.singles().keys()
    }

    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.inner.debug_enabled
    }

    /// Convert into the runtime-checked engine representation
    ///
    /// The resulting [`MatchExpression`] shares every case function and the
    /// default with this evaluator. The stored test value is dropped.
    #[must_use]
    pub fn into_expression(self) -> MatchExpression<T, R> {
        let SwitchBuilder { cases, state, .. } = self.inner;
        MatchExpression::from_parts(cases, Some(state.default))
    }
}

impl<T: Hash + Eq, R> Evaluator<T, R> {
    /// Resolve the stored test value
    ///
    /// # Errors
    ///
    /// Returns `SwitchError::MissingTestValue` if no test value is set.
    pub fn resolve(&self) -> SwitchResult<R> {
        self.inner.resolve()
    }

    /// Resolve `value`
    ///
    /// The stored test value is left as it was, so successive calls are
    /// independent of each other.
    pub fn resolve_with(&self, value: T) -> R {
        self.inner.resolve_with(value)
    }

    /// Function-call form of [`resolve_with`](Self::resolve_with)
    pub fn apply(&self, value: T) -> R {
        self.resolve_with(value)
    }

    /// Borrow the evaluator as a `T -> R` closure
    ///
    /// # Examples
    /// ```
    /// use switch_expr::Switch;
    ///
    /// let parity = Switch::start()
    ///     .default_case(|_| "odd")
    ///     .predicate(|n: &u8| n % 2 == 0, |_| "even")
    ///     .build();
    ///
    /// let labels: Vec<_> = [1u8, 2, 3].into_iter().map(parity.as_fn()).collect();
    /// assert_eq!(labels, ["odd", "even", "odd"]);
    /// ```
    pub fn as_fn(&self) -> impl Fn(T) -> R + '_ {
        move |value| self.resolve_with(value)
    }

    /// Lazily resolve every value of `values`, in order
    pub fn resolve_all<I>(&self, values: I) -> impl Iterator<Item = R>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(move |value| self.resolve_with(value))
    }
}

impl<T: Clone, R> Clone for Evaluator<T, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Evaluator<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("value", &self.inner.value)
            .field("cases", &self.inner.cases)
            .field("debug_enabled", &self.inner.debug_enabled)
            .finish()
    }
}
