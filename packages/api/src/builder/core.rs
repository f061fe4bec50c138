//! Core `SwitchBuilder` structures and base functionality
//!
//! Contains the main `SwitchBuilder` struct, its state types, and the
//! methods available in every stage.

use std::fmt;

use switch_expr_core::{CaseFn, CaseTable, SwitchConfig};

/// State marker indicating no default case has been registered
#[derive(Debug, Clone, Copy)]
pub struct DefaultNotSet;

/// State indicating a default case has been registered
///
/// Carries the default function itself, so a builder in this state always
/// has a fallback to resolve with.
pub struct DefaultSet<T, R> {
    pub(crate) default: CaseFn<T, R>,
}

impl<T, R> Clone for DefaultSet<T, R> {
    fn clone(&self) -> Self {
        Self {
            default: self.default.clone(),
        }
    }
}

impl<T, R> fmt::Debug for DefaultSet<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultSet")
    }
}

/// Fluent builder for a switch expression
///
/// Type parameter `S` tracks the configuration stage:
/// - `DefaultNotSet`: only `default_case` is available
/// - `DefaultSet`: cases can be registered, the switch resolved or built
///
/// # Examples
///
/// Registering the default case unlocks the remaining stage:
/// ```
/// use switch_expr::Switch;
///
/// let builder = Switch::create(1).default_case(|_| 0).single(1, |_| 1);
/// assert_eq!(builder.resolve(), Ok(1));
/// assert_eq!(builder.build().resolve_with(2), 0);
/// ```
///
/// Without a default case a switch cannot be resolved:
/// ```compile_fail
/// use switch_expr::Switch;
///
/// let _ = Switch::create::<i32, i32>(1).resolve();
/// ```
///
/// nor can other cases be registered:
/// ```compile_fail
/// use switch_expr::Switch;
///
/// let _ = Switch::start::<i32, i32>().single(1, |_| 1);
/// ```
///
/// nor can it be built:
/// ```compile_fail
/// use switch_expr::Switch;
///
/// let _ = Switch::start::<i32, i32>().build();
/// ```
pub struct SwitchBuilder<T, R, S = DefaultNotSet> {
    /// Exact-match and predicate cases registered so far
    pub(crate) cases: CaseTable<T, R>,
    /// Test value used by `resolve()`
    pub(crate) value: Option<T>,
    /// Type state - stores actual state data, not just a marker
    pub(crate) state: S,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl<T, R> SwitchBuilder<T, R, DefaultNotSet> {
    pub(crate) fn new(value: Option<T>, config: &SwitchConfig) -> Self {
        Self {
            cases: CaseTable::with_config(config),
            value,
            state: DefaultNotSet,
            debug_enabled: config.debug_enabled,
        }
    }
}

impl<T, R, S> SwitchBuilder<T, R, S> {
    /// Enable debug logging for this switch
    ///
    /// When enabled, every resolution logs which branch produced the result.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// The stored test value, if one has been set
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T: Clone, R, S: Clone> Clone for SwitchBuilder<T, R, S> {
    fn clone(&self) -> Self {
        Self {
            cases: self.cases.clone(),
            value: self.value.clone(),
            state: self.state.clone(),
            debug_enabled: self.debug_enabled,
        }
    }
}

impl<T, R, S> fmt::Debug for SwitchBuilder<T, R, S>
where
    T: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchBuilder")
            .field("value", &self.value)
            .field("cases", &self.cases)
            .field("state", &self.state)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
