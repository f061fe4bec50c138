//! Exact-match cases keyed by the test value.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use super::CaseFn;

/// Insertion-ordered map from key to case function.
///
/// Re-inserting an existing key replaces its function but keeps the key's
/// original position.
pub struct SingleCases<T, R> {
    functions: IndexMap<T, CaseFn<T, R>>,
}

impl<T, R> SingleCases<T, R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            functions: IndexMap::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered keys, in the order they were first inserted
    pub fn keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.functions.keys()
    }
}

impl<T: Hash + Eq, R> SingleCases<T, R> {
    /// Bind `function` to `key`, returning the function it replaced
    pub fn insert(&mut self, key: T, function: CaseFn<T, R>) -> Option<CaseFn<T, R>> {
        self.functions.insert(key, function)
    }

    #[must_use]
    pub fn get(&self, key: &T) -> Option<&CaseFn<T, R>> {
        self.functions.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.functions.contains_key(key)
    }
}

impl<T, R> Default for SingleCases<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R> Clone for SingleCases<T, R> {
    fn clone(&self) -> Self {
        Self {
            functions: self.functions.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for SingleCases<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.functions.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn reinsert_replaces_function_and_keeps_position() {
        let mut cases: SingleCases<&str, u8> = SingleCases::new();
        assert!(cases.insert("a", Arc::new(|_: &&str| 1_u8)).is_none());
        assert!(cases.insert("b", Arc::new(|_: &&str| 2_u8)).is_none());
        assert!(cases.insert("a", Arc::new(|_: &&str| 3_u8)).is_some());

        assert_eq!(cases.len(), 2);
        assert_eq!(cases.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        let function = cases.get(&"a").expect("key a is registered");
        assert_eq!(function(&"a"), 3);
    }

    #[test]
    fn lookup_uses_equality_not_identity() {
        let mut cases: SingleCases<String, usize> = SingleCases::new();
        cases.insert(String::from("key"), Arc::new(String::len));

        let probe = "key".to_string();
        assert!(cases.contains(&probe));
        assert!(!cases.contains(&"other".to_string()));
    }

    #[test]
    fn debug_lists_keys_in_insertion_order() {
        let mut cases: SingleCases<i32, ()> = SingleCases::new();
        cases.insert(3, Arc::new(|_: &i32| ()));
        cases.insert(1, Arc::new(|_: &i32| ()));
        assert_eq!(format!("{cases:?}"), "{3, 1}");
    }
}
