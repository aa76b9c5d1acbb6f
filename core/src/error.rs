use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigError),
    #[error("It is not allowed to discover cells outside of the mine field")]
    OutOfBounds,
    #[error("Only fields with a game in progress accept new moves")]
    IllegalState,
    #[error("Predefined map must be a non-empty rectangle")]
    InvalidMapShape,
    #[error("Field snapshot does not match its configuration")]
    InvalidSnapshot,
}

/// Why a [`FieldConfig`](crate::FieldConfig) was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("requested mine field size is incorrect")]
    EmptyField,
    #[error("mines, opened cells and mine field size should be balanced")]
    Unbalanced,
    #[error("discoverable radius can not be negative")]
    NegativeRadius,
    #[error("requested values exceed the supported field limits")]
    TooLarge,
}

impl From<ConfigError> for FieldError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

pub type Result<T> = core::result::Result<T, FieldError>;
