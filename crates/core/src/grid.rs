//! Grid module - the ordered card layout for one session
//!
//! Cards live in a flat vector in row-major order (index = y * columns + x).
//! Components address cards by index only; the grid hands out references and
//! never copies card state around.

use crate::card::Card;
use crate::types::{CardId, CardView, FaceId};

/// Rectangular card layout backed by flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cards in row-major order (y * columns + x)
    cards: Vec<Card>,
    columns: u8,
    rows: u8,
}

impl Grid {
    /// Build a grid of face-down cards from a shuffled deck
    pub fn from_deck(columns: u8, rows: u8, deck: Vec<FaceId>) -> Self {
        let cards = deck.into_iter().map(Card::new).collect();
        Self {
            cards,
            columns,
            rows,
        }
    }

    /// Rebuild a grid from explicit card states (snapshot restore path)
    pub fn from_cards(columns: u8, rows: u8, cards: Vec<Card>) -> Self {
        Self {
            cards,
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of cards on the grid
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get card at index
    /// Returns None if out of bounds
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Get mutable card at index
    /// Returns None if out of bounds
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id)
    }

    /// Convert a card index to (column, row) coordinates
    /// Returns None if out of bounds
    pub fn position(&self, id: CardId) -> Option<(u8, u8)> {
        if id >= self.cards.len() {
            return None;
        }
        let x = (id % self.columns as usize) as u8;
        let y = (id / self.columns as usize) as u8;
        Some((x, y))
    }

    /// Iterate cards in grid order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Write adapter-facing card views into a reusable buffer
    pub fn write_views(&self, out: &mut Vec<CardView>) {
        out.clear();
        out.extend(self.cards.iter().map(Card::view));
    }

    /// Collect adapter-facing card views in grid order
    pub fn views(&self) -> Vec<CardView> {
        self.cards.iter().map(Card::view).collect()
    }
}
