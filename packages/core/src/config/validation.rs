//! Configuration validation rules.

/// Largest case count a config may ask to preallocate.
pub const MAX_PREALLOCATED_CASES: usize = 4096;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidCapacity` if a preallocation hint
    /// exceeds [`MAX_PREALLOCATED_CASES`].
    fn validate(&self) -> ConfigResult<()>;
}

/// Validate a preallocation hint
///
/// # Errors
///
/// Returns `ConfigurationError::InvalidCapacity` if `capacity` exceeds
/// [`MAX_PREALLOCATED_CASES`].
pub fn validate_capacity(capacity: usize, name: &str) -> ConfigResult<()> {
    if capacity > MAX_PREALLOCATED_CASES {
        return Err(ConfigurationError::InvalidCapacity(format!(
            "{name} cannot exceed {MAX_PREALLOCATED_CASES} (got {capacity})"
        )));
    }
    Ok(())
}
