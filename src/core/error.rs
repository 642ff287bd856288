//! Error types.
//!
//! Only setup can fail. Everything that goes wrong during play (a click on a
//! face-up card, a third click while a pair is pending) is a silent no-op
//! reported through [`RevealOutcome`](crate::session::RevealOutcome).

use thiserror::Error;

/// Top-level error returned by the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported board size {0}; expected one of 4, 6, 8")]
    UnsupportedBoardSize(usize),
    #[error("cannot parse board size '{0}'; expected 4x4, 6x6 or 8x8")]
    UnparsableBoardSize(String),
    #[error("image pool too small: need {required} images, have {available}")]
    ImagePoolTooSmall { required: usize, available: usize },
    #[error("image pool too large: at most {maximum} images, have {available}")]
    ImagePoolTooLarge { maximum: usize, available: usize },
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
    #[error("invalid timing: {0}")]
    InvalidTiming(String),
}

/// Convenience alias.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::from(ConfigError::ImagePoolTooSmall {
            required: 8,
            available: 4,
        });
        assert_eq!(
            err.to_string(),
            "invalid configuration: image pool too small: need 8 images, have 4"
        );

        let err = GameError::from(ConfigError::UnsupportedBoardSize(5));
        assert!(err.to_string().contains("unsupported board size 5"));
    }
}
