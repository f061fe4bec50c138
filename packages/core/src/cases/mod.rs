//! Case storage and lookup
//!
//! A [`CaseTable`] pairs exact-match cases with ordered predicate cases and
//! finds the function a test value dispatches to. Exact matches always win
//! over predicates; among predicates the first registered match wins.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::config::SwitchConfig;

pub mod predicate;
pub mod single;

pub use predicate::PredicateCases;
pub use single::SingleCases;

/// Shared handle to a case function.
pub type CaseFn<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync + 'static>;

/// Shared handle to a case predicate.
pub type PredicateFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync + 'static>;

/// Which branch of a switch produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The test value equals a registered key
    Single,
    /// The predicate at this registration index was the first to match
    Predicate(usize),
    /// Nothing matched
    Default,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Single => f.write_str("single case"),
            MatchKind::Predicate(index) => write!(f, "predicate case #{index}"),
            MatchKind::Default => f.write_str("default case"),
        }
    }
}

/// Single-value and predicate cases of one switch expression
pub struct CaseTable<T, R> {
    singles: SingleCases<T, R>,
    predicates: PredicateCases<T, R>,
}

impl<T, R> CaseTable<T, R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            singles: SingleCases::new(),
            predicates: PredicateCases::new(),
        }
    }

    /// Create a table with room preallocated per the config's capacity hints
    #[must_use]
    pub fn with_config(config: &SwitchConfig) -> Self {
        Self {
            singles: SingleCases::with_capacity(config.single_capacity),
            predicates: PredicateCases::with_capacity(config.predicate_capacity),
        }
    }

    #[must_use]
    pub fn singles(&self) -> &SingleCases<T, R> {
        &self.singles
    }

    #[must_use]
    pub fn predicates(&self) -> &PredicateCases<T, R> {
        &self.predicates
    }

    /// Append a predicate case. Predicates are never deduplicated.
    pub fn predicate<P, F>(&mut self, predicate: P, function: F)
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.predicates.push(Arc::new(predicate), Arc::new(function));
    }
}

impl<T: Hash + Eq, R> CaseTable<T, R> {
    /// Register an exact-match case, replacing any function already bound
    /// to an equal key
    pub fn single<F>(&mut self, key: T, function: F)
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        if self.singles.insert(key, Arc::new(function)).is_some() {
            tracing::debug!(
                target: "switch_expr::cases",
                "single case overwritten; last registration wins"
            );
        }
    }

    /// Find the case function `value` dispatches to, if any.
    ///
    /// Returns `None` when the caller must fall back to its default case.
    pub fn find(&self, value: &T) -> Option<(MatchKind, &CaseFn<T, R>)> {
        if let Some(function) = self.singles.get(value) {
            tracing::trace!(target: "switch_expr::cases", "matched single case");
            return Some((MatchKind::Single, function));
        }

        let found = self
            .predicates
            .first_match(value)
            .map(|(index, function)| (MatchKind::Predicate(index), function));

        if let Some((kind, _)) = found {
            tracing::trace!(target: "switch_expr::cases", "matched {}", kind);
        } else {
            tracing::trace!(target: "switch_expr::cases", "no case matched");
        }
        found
    }
}

impl<T, R> Default for CaseTable<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R> Clone for CaseTable<T, R> {
    fn clone(&self) -> Self {
        Self {
            singles: self.singles.clone(),
            predicates: self.predicates.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for CaseTable<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseTable")
            .field("singles", &self.singles)
            .field("predicates", &self.predicates)
            .finish()
    }
}
