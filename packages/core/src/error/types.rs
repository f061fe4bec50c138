use crate::config::ConfigurationError;

/// A Result alias where the Err case is [`SwitchError`].
pub type SwitchResult<T> = std::result::Result<T, SwitchError>;

/// Failures raised by the switch machinery itself.
///
/// Errors produced by user case functions are never wrapped in this type:
/// a case function returning `Result` hands its value back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwitchError {
    /// Nothing matched and no default case was ever registered.
    #[error("no case matched and no default case is registered")]
    MissingDefault,

    /// `resolve()` was called on an expression started without a test value.
    #[error("no test value is set; supply one with resolve_with or set_value")]
    MissingTestValue,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl SwitchError {
    /// Returns true if this error comes from an invalid `SwitchConfig`.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, SwitchError::Configuration(_))
    }
}
