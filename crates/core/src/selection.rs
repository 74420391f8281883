//! Selection buffer - at most two pending picks
//!
//! Holds indices into the grid, never card copies or back-references. The
//! session layers the reject rules (matched, already revealed, resolving,
//! finished) on top; this type only enforces the two-slot capacity.

use arrayvec::ArrayVec;

use crate::types::CardId;

/// Ordered buffer of 0, 1, or 2 pending card picks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionBuffer {
    picks: ArrayVec<CardId, 2>,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// A full buffer means a pair is waiting on the resolver
    pub fn is_full(&self) -> bool {
        self.picks.is_full()
    }

    /// Whether the card index is already buffered
    pub fn contains(&self, id: CardId) -> bool {
        self.picks.contains(&id)
    }

    /// The lone pending pick, if exactly one is buffered
    pub fn pending_single(&self) -> Option<CardId> {
        if self.picks.len() == 1 {
            Some(self.picks[0])
        } else {
            None
        }
    }

    /// Append a pick; rejected (false) when the buffer is full
    pub fn push(&mut self, id: CardId) -> bool {
        self.picks.try_push(id).is_ok()
    }

    /// Drain the buffered pair once both picks are in
    pub fn take_pair(&mut self) -> Option<(CardId, CardId)> {
        if !self.picks.is_full() {
            return None;
        }
        let pair = (self.picks[0], self.picks[1]);
        self.picks.clear();
        Some(pair)
    }

    /// Drop every buffered pick
    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
