//! Random board generation.
//!
//! 1. Draw `N²/2` distinct images from the pool, uniformly without replacement
//! 2. Put each drawn image on two cards
//! 3. Shuffle the cards (Fisher-Yates)
//! 4. Lay them out row-major
//!
//! Generation either returns a complete board or an error; it never touches
//! anything outside its own locals.

use tracing::debug;

use super::layout::Board;
use crate::core::{BoardSize, ConfigError, GameError, GameRng, ImageId, MAX_IMAGE_POOL};

impl Board {
    /// Generate a shuffled board of `size` from `image_pool_size` images.
    ///
    /// ```
    /// use flag_pairs::board::Board;
    /// use flag_pairs::core::{BoardSize, GameRng};
    ///
    /// let mut rng = GameRng::new(42);
    /// let board = Board::generate(BoardSize::Four, 32, &mut rng).unwrap();
    /// assert_eq!(board.len(), 16);
    /// assert_eq!(board.pairs().len(), 8);
    /// ```
    pub fn generate(
        size: BoardSize,
        image_pool_size: usize,
        rng: &mut GameRng,
    ) -> Result<Board, ConfigError> {
        let pairs = size.pair_count();
        if image_pool_size < pairs {
            return Err(ConfigError::ImagePoolTooSmall {
                required: pairs,
                available: image_pool_size,
            });
        }
        if image_pool_size > MAX_IMAGE_POOL {
            return Err(ConfigError::ImagePoolTooLarge {
                maximum: MAX_IMAGE_POOL,
                available: image_pool_size,
            });
        }

        let drawn = rng.sample_distinct(image_pool_size, pairs);

        let mut images: Vec<ImageId> = drawn
            .into_iter()
            .flat_map(|i| {
                let image = ImageId::new(i as u16);
                [image, image]
            })
            .collect();
        rng.shuffle(&mut images);

        debug!(%size, image_pool_size, seed = rng.seed(), "generated board");
        Board::from_images(size, images)
    }
}

/// Generate a board from a raw edge length.
///
/// Unsupported edges and pools smaller than `size*size/2` are reported as
/// [`GameError::InvalidConfiguration`].
pub fn generate(size: usize, image_pool_size: usize, rng: &mut GameRng) -> Result<Board, GameError> {
    let size = BoardSize::from_edge(size)?;
    Ok(Board::generate(size, image_pool_size, rng)?)
}
