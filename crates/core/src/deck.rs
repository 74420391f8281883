//! Deck builder - paired face tokens in shuffled order
//!
//! Pure function over an injected RNG: the first `total / 2` faces of the
//! pool are duplicated and shuffled, so the same seed always deals the same
//! layout. Pool coverage is validated here; the grid downstream can assume
//! the pairing invariant holds.

use crate::config::ConfigError;
use crate::rng::SessionRng;
use crate::types::FaceId;

/// Build a shuffled deck of `total_cards` face tokens
///
/// Faces are taken from the front of a pool of `face_pool` distinct values,
/// each duplicated once. Fails when the card count is odd, below 2, or the
/// pool cannot cover `total_cards / 2` pairs.
pub fn build(
    total_cards: u16,
    face_pool: u16,
    rng: &mut SessionRng,
) -> Result<Vec<FaceId>, ConfigError> {
    if total_cards < 2 || total_cards % 2 != 0 {
        return Err(ConfigError::InvalidCardCount { total: total_cards });
    }

    let pairs = total_cards / 2;
    if face_pool < pairs {
        return Err(ConfigError::InsufficientFaces {
            required: pairs,
            available: face_pool,
        });
    }

    let mut deck = Vec::with_capacity(total_cards as usize);
    for face in 0..pairs {
        deck.push(FaceId(face));
        deck.push(FaceId(face));
    }

    rng.shuffle(&mut deck);
    Ok(deck)
}
