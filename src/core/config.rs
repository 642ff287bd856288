//! Game configuration types.
//!
//! - `BoardSize`: The board edges a player can pick (4×4, 6×6, 8×8)
//! - `CardStyle`: How large the renderer should draw cards for a size
//! - `GameConfig`: Image pool size and the pauses between game steps
//!
//! Delays are chosen by the embedding application, never by the player.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of flag images shipped with the game.
pub const DEFAULT_IMAGE_POOL: usize = 32;

/// Largest pool whose ids all fit in an [`ImageId`](super::ImageId).
pub const MAX_IMAGE_POOL: usize = u16::MAX as usize + 1;

/// Font size relative to card size.
const FONT_SCALE: f32 = 4.0 / 7.0;

/// A supported board edge length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    Four,
    Six,
    Eight,
}

impl BoardSize {
    /// Every size, in the order a size selector lists them.
    pub const ALL: [BoardSize; 3] = [BoardSize::Four, BoardSize::Six, BoardSize::Eight];

    /// Look up the size for an edge length.
    pub fn from_edge(edge: usize) -> Result<Self, ConfigError> {
        match edge {
            4 => Ok(BoardSize::Four),
            6 => Ok(BoardSize::Six),
            8 => Ok(BoardSize::Eight),
            other => Err(ConfigError::UnsupportedBoardSize(other)),
        }
    }

    /// Edge length N of the N×N grid.
    #[must_use]
    pub const fn edge(self) -> usize {
        match self {
            BoardSize::Four => 4,
            BoardSize::Six => 6,
            BoardSize::Eight => 8,
        }
    }

    /// Total number of cards (N²).
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.edge() * self.edge()
    }

    /// Number of pairs, which is also the number of distinct images needed.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Card dimensions for this size. Bigger boards get smaller cards.
    #[must_use]
    pub fn card_style(self) -> CardStyle {
        let card_px = match self {
            BoardSize::Four => 96,
            BoardSize::Six => 70,
            BoardSize::Eight => 54,
        };
        CardStyle::new(card_px)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.edge())
    }
}

impl FromStr for BoardSize {
    type Err = ConfigError;

    /// Parses selector labels like `"6x6"`. A bare edge (`"6"`) is accepted
    /// too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || ConfigError::UnparsableBoardSize(s.to_string());
        let trimmed = s.trim();
        let edge = match trimmed.split_once(|c: char| matches!(c, 'x' | 'X' | '×')) {
            Some((rows, cols)) => {
                let rows: usize = rows.trim().parse().map_err(|_| unparsable())?;
                let cols: usize = cols.trim().parse().map_err(|_| unparsable())?;
                if rows != cols {
                    return Err(unparsable());
                }
                rows
            }
            None => trimmed.parse().map_err(|_| unparsable())?,
        };
        Self::from_edge(edge)
    }
}

/// Rendering dimensions for one card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    /// Width and height of a card in pixels.
    pub card_px: u32,
    /// Font size of the face-down glyph in pixels.
    pub font_px: f32,
}

impl CardStyle {
    /// Style for a card `card_px` pixels wide.
    #[must_use]
    pub fn new(card_px: u32) -> Self {
        Self {
            card_px,
            font_px: card_px as f32 * FONT_SCALE,
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use std::time::Duration;
/// use flag_pairs::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_image_pool(40)
///     .with_resolve_delay(Duration::from_millis(600));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How many distinct images exist to draw pairs from.
    pub image_pool_size: usize,

    /// Pause between the second reveal and the pair's resolution.
    pub resolve_delay: Duration,

    /// Pause between victory and the return to setup.
    pub victory_delay: Duration,

    /// Length of a card flip animation.
    pub flip_duration: Duration,

    /// Point within the flip where the face swaps.
    pub face_swap_at: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            image_pool_size: DEFAULT_IMAGE_POOL,
            resolve_delay: Duration::from_millis(1000),
            victory_delay: Duration::from_millis(500),
            flip_duration: Duration::from_millis(400),
            face_swap_at: Duration::from_millis(100),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image pool size.
    #[must_use]
    pub fn with_image_pool(mut self, size: usize) -> Self {
        self.image_pool_size = size;
        self
    }

    /// Set the delay before a revealed pair resolves.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Set the delay between victory and the return to setup.
    #[must_use]
    pub fn with_victory_delay(mut self, delay: Duration) -> Self {
        self.victory_delay = delay;
        self
    }

    /// Set the flip animation timing. The face swaps `face_swap_at` into a
    /// flip lasting `duration`.
    #[must_use]
    pub fn with_flip(mut self, duration: Duration, face_swap_at: Duration) -> Self {
        self.flip_duration = duration;
        self.face_swap_at = face_swap_at;
        self
    }

    /// Check the configuration is usable.
    ///
    /// Rejects an empty or oversized image pool, a face swap after the flip
    /// ends, and a resolve delay shorter than the flip.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_pool_size == 0 {
            return Err(ConfigError::ImagePoolTooSmall {
                required: 1,
                available: 0,
            });
        }
        if self.image_pool_size > MAX_IMAGE_POOL {
            return Err(ConfigError::ImagePoolTooLarge {
                maximum: MAX_IMAGE_POOL,
                available: self.image_pool_size,
            });
        }
        if self.face_swap_at > self.flip_duration {
            return Err(ConfigError::InvalidTiming(format!(
                "face swap at {:?} is after the flip ends at {:?}",
                self.face_swap_at, self.flip_duration
            )));
        }
        // A mismatch starts the hide flip at resolution; the show flip must
        // be over by then.
        if self.resolve_delay < self.flip_duration {
            return Err(ConfigError::InvalidTiming(format!(
                "resolve delay {:?} is shorter than the flip {:?}",
                self.resolve_delay, self.flip_duration
            )));
        }
        Ok(())
    }

    /// Check the image pool can fill a board of `size`.
    pub fn check_pool(&self, size: BoardSize) -> Result<(), ConfigError> {
        if self.image_pool_size < size.pair_count() {
            return Err(ConfigError::ImagePoolTooSmall {
                required: size.pair_count(),
                available: self.image_pool_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_counts() {
        assert_eq!(BoardSize::Four.card_count(), 16);
        assert_eq!(BoardSize::Four.pair_count(), 8);
        assert_eq!(BoardSize::Six.pair_count(), 18);
        assert_eq!(BoardSize::Eight.pair_count(), 32);
    }

    #[test]
    fn test_board_size_from_edge() {
        for size in BoardSize::ALL {
            assert_eq!(BoardSize::from_edge(size.edge()), Ok(size));
        }
        assert_eq!(
            BoardSize::from_edge(5),
            Err(ConfigError::UnsupportedBoardSize(5))
        );
    }

    #[test]
    fn test_board_size_labels() {
        let labels: Vec<String> = BoardSize::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["4x4", "6x6", "8x8"]);

        assert_eq!("6x6".parse::<BoardSize>(), Ok(BoardSize::Six));
        assert_eq!(" 8 X 8 ".parse::<BoardSize>(), Ok(BoardSize::Eight));
        assert_eq!("4".parse::<BoardSize>(), Ok(BoardSize::Four));
    }

    #[test]
    fn test_board_size_parse_errors() {
        assert_eq!(
            "4x6".parse::<BoardSize>(),
            Err(ConfigError::UnparsableBoardSize("4x6".to_string()))
        );
        assert_eq!(
            "big".parse::<BoardSize>(),
            Err(ConfigError::UnparsableBoardSize("big".to_string()))
        );
        assert_eq!(
            "10x10".parse::<BoardSize>(),
            Err(ConfigError::UnsupportedBoardSize(10))
        );
    }

    #[test]
    fn test_card_style() {
        let style = BoardSize::Six.card_style();
        assert_eq!(style.card_px, 70);
        assert!((style.font_px - 40.0).abs() < 1e-4);

        assert_eq!(BoardSize::Four.card_style().card_px, 96);
        assert_eq!(BoardSize::Eight.card_style().card_px, 54);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.image_pool_size, 32);
        assert_eq!(config.resolve_delay, Duration::from_millis(1000));
        assert_eq!(config.victory_delay, Duration::from_millis(500));
        assert!(config.validate().is_ok());
        for size in BoardSize::ALL {
            assert!(config.check_pool(size).is_ok());
        }
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_image_pool(10)
            .with_victory_delay(Duration::from_millis(50))
            .with_flip(Duration::from_millis(200), Duration::from_millis(50));

        assert_eq!(config.image_pool_size, 10);
        assert_eq!(config.victory_delay, Duration::from_millis(50));
        assert_eq!(config.flip_duration, Duration::from_millis(200));
        assert!(config.check_pool(BoardSize::Four).is_ok());
        assert_eq!(
            config.check_pool(BoardSize::Six),
            Err(ConfigError::ImagePoolTooSmall {
                required: 18,
                available: 10
            })
        );
    }

    #[test]
    fn test_invalid_timing() {
        let config =
            GameConfig::new().with_flip(Duration::from_millis(100), Duration::from_millis(300));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTiming(_))
        ));
    }

    #[test]
    fn test_resolve_shorter_than_flip() {
        let config = GameConfig::new().with_resolve_delay(Duration::from_millis(250));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTiming(_))
        ));

        // Equal is fine: the show flip finishes as the pair resolves.
        let config = GameConfig::new().with_resolve_delay(Duration::from_millis(400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pool_limits() {
        let config = GameConfig::new().with_image_pool(MAX_IMAGE_POOL);
        assert!(config.validate().is_ok());

        let config = GameConfig::new().with_image_pool(MAX_IMAGE_POOL + 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ImagePoolTooLarge {
                maximum: 65536,
                available: 65537
            })
        );
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_image_pool(20);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
