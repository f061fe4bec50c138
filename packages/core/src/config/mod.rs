//! Switch configuration
//!
//! Preallocation hints and the diagnostics flag applied when a builder is
//! started, plus the validation rules they must satisfy.

pub mod validation;

pub use validation::{ConfigResult, ConfigurationError, Validator, MAX_PREALLOCATED_CASES};

/// Settings applied to a switch expression when it is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchConfig {
    /// Log every resolution (which branch fired) at debug level.
    pub debug_enabled: bool,
    /// Number of single-value cases to preallocate room for.
    pub single_capacity: usize,
    /// Number of predicate cases to preallocate room for.
    pub predicate_capacity: usize,
}

impl SwitchConfig {
    /// Enable resolution logging
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Preallocate room for `singles` single-value cases and `predicates`
    /// predicate cases
    #[must_use]
    pub fn capacity(mut self, singles: usize, predicates: usize) -> Self {
        self.single_capacity = singles;
        self.predicate_capacity = predicates;
        self
    }
}

impl Validator for SwitchConfig {
    fn validate(&self) -> ConfigResult<()> {
        validation::validate_capacity(self.single_capacity, "single_capacity")?;
        validation::validate_capacity(self.predicate_capacity, "predicate_capacity")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SwitchConfig::default().validate().is_ok());
        assert!(!SwitchConfig::default().debug_enabled);
    }

    #[test]
    fn oversized_capacity_is_rejected() {
        let config = SwitchConfig::default().capacity(16, MAX_PREALLOCATED_CASES + 1);
        let err = config.validate().expect_err("capacity above the limit must fail");
        assert!(err.to_string().contains("predicate_capacity"));
    }

    #[test]
    fn builder_methods_set_fields() {
        let config = SwitchConfig::default().debug().capacity(3, 2);
        assert!(config.debug_enabled);
        assert_eq!(config.single_capacity, 3);
        assert_eq!(config.predicate_capacity, 2);
    }
}
