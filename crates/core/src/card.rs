//! Card module - one face value plus visibility and matched flags
//!
//! A card is deliberately dumb: it knows nothing about the session, the
//! resolver, or its own position. Matched is a terminal state; once set, the
//! card stays face-up and ignores every further transition.

use crate::types::{CardView, FaceId};

/// Smallest stateful unit of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    face: FaceId,
    revealed: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            revealed: false,
            matched: false,
        }
    }

    /// Rebuild a card in an arbitrary state (snapshot restore path)
    pub fn from_parts(face: FaceId, revealed: bool, matched: bool) -> Self {
        // A matched card is face-up no matter what the input claims
        Self {
            face,
            revealed: revealed || matched,
            matched,
        }
    }

    pub fn face(&self) -> FaceId {
        self.face
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Turn the card face-up; no-op once matched
    pub fn reveal(&mut self) {
        if self.matched {
            return;
        }
        self.revealed = true;
    }

    /// Turn the card face-down; no-op once matched
    pub fn hide(&mut self) {
        if self.matched {
            return;
        }
        self.revealed = false;
    }

    /// Commit the card to its terminal matched state
    pub fn set_matched(&mut self) {
        self.matched = true;
        self.revealed = true;
    }

    /// Adapter-facing copy of the card's state
    pub fn view(&self) -> CardView {
        CardView {
            face: self.face,
            revealed: self.revealed,
            matched: self.matched,
        }
    }
}
