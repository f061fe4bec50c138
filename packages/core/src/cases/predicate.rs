//! Ordered predicate cases.

use std::fmt;

use super::{CaseFn, PredicateFn};

/// Append-only sequence of `(predicate, function)` pairs, tested in
/// registration order.
pub struct PredicateCases<T, R> {
    cases: Vec<(PredicateFn<T>, CaseFn<T, R>)>,
}

impl<T, R> PredicateCases<T, R> {
    #[must_use]
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cases: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, predicate: PredicateFn<T>, function: CaseFn<T, R>) {
        self.cases.push((predicate, function));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Index and function of the first predicate that accepts `value`.
    /// Predicates after it are not called.
    pub fn first_match(&self, value: &T) -> Option<(usize, &CaseFn<T, R>)> {
        self.cases
            .iter()
            .enumerate()
            .find(|(_, (predicate, _))| predicate(value))
            .map(|(index, (_, function))| (index, function))
    }
}

impl<T, R> Default for PredicateCases<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Clone for PredicateCases<T, R> {
    fn clone(&self) -> Self {
        Self {
            cases: self.cases.clone(),
        }
    }
}

impl<T, R> fmt::Debug for PredicateCases<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateCases")
            .field("len", &self.cases.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn equivalent_predicates_are_all_kept() {
        let mut cases: PredicateCases<i32, i32> = PredicateCases::new();
        cases.push(Arc::new(|x: &i32| *x > 0), Arc::new(|_: &i32| 1));
        cases.push(Arc::new(|x: &i32| *x > 0), Arc::new(|_: &i32| 2));

        assert_eq!(cases.len(), 2);
        let (index, function) = cases.first_match(&7).expect("both predicates accept 7");
        assert_eq!(index, 0);
        assert_eq!(function(&7), 1);
    }

    #[test]
    fn no_predicate_matches() {
        let mut cases: PredicateCases<i32, i32> = PredicateCases::with_capacity(4);
        cases.push(Arc::new(|x: &i32| *x < 0), Arc::new(|_: &i32| -1));

        assert!(cases.first_match(&3).is_none());
        let empty: PredicateCases<i32, i32> = PredicateCases::default();
        assert!(empty.first_match(&3).is_none());
    }
}
