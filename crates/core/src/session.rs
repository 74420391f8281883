//! Session module - the complete game session state machine
//!
//! Ties together deck, grid, selection buffer, resolver, and timer. Hosts
//! drive it with exactly two calls: `select` on player input and `tick` with
//! elapsed wall time. Everything else (match commits, win/timeout detection,
//! event emission) happens inside those two.

use arrayvec::ArrayVec;

use crate::card::Card;
use crate::config::{ConfigError, SessionConfig};
use crate::deck;
use crate::grid::Grid;
use crate::resolver::Resolver;
use crate::rng::SessionRng;
use crate::selection::SelectionBuffer;
use crate::snapshot::{CardSnapshot, RestoreError, SessionSnapshot, SnapshotBlocked};
use crate::timer::CountdownTimer;
use crate::types::{
    CardId, CardView, SelectOutcome, SessionEvent, SessionView, MAX_EVENTS_PER_TICK,
};

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    config: SessionConfig,
    selection: SelectionBuffer,
    resolver: Resolver,
    timer: CountdownTimer,
    rng: SessionRng,
    /// Monotonic play-through id (increments on restart).
    episode: u32,
    score: u32,
    matches_found: u32,
    finished: bool,
    /// Events queued since the last drain (consumed by adapters).
    events: ArrayVec<SessionEvent, MAX_EVENTS_PER_TICK>,
}

impl Session {
    /// Create a new session from a validated config and RNG seed
    pub fn new(config: SessionConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SessionRng::new(seed);
        let deck = deck::build(config.total_cards(), config.face_pool, &mut rng)?;

        Ok(Self {
            grid: Grid::from_deck(config.columns, config.rows, deck),
            config,
            selection: SelectionBuffer::new(),
            resolver: Resolver::new(),
            timer: CountdownTimer::new(config.timer_limit),
            rng,
            episode: 0,
            score: 0,
            matches_found: 0,
            finished: false,
            events: ArrayVec::new(),
        })
    }

    /// Rebuild a session from a snapshot; cards are not re-shuffled
    pub fn restore(snapshot: &SessionSnapshot) -> Result<Self, RestoreError> {
        snapshot.validate()?;

        let config = snapshot.config();
        let cards = snapshot
            .cards
            .iter()
            .map(|c| Card::from_parts(c.face, c.revealed, c.matched))
            .collect();

        Ok(Self {
            grid: Grid::from_cards(config.columns, config.rows, cards),
            config,
            selection: SelectionBuffer::new(),
            resolver: Resolver::new(),
            timer: CountdownTimer::new(snapshot.time_remaining),
            rng: SessionRng::new(snapshot.seed),
            episode: 0,
            score: snapshot.score,
            matches_found: snapshot.matches_found,
            finished: snapshot.finished,
            events: ArrayVec::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn columns(&self) -> u8 {
        self.grid.columns()
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn matches_found(&self) -> u32 {
        self.matches_found
    }

    pub fn total_matches(&self) -> u32 {
        self.config.total_matches()
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn is_resolving(&self) -> bool {
        self.resolver.is_resolving()
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Current RNG state (continues into the next restart's shuffle)
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Number of picks currently buffered (0, 1, or 2)
    pub fn pending_picks(&self) -> usize {
        self.selection.len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Adapter-facing state of one card
    pub fn card(&self, id: CardId) -> Option<CardView> {
        self.grid.get(id).map(|c| c.view())
    }

    /// Attempt to pick a card
    ///
    /// Silent no-op (`Ignored`) when the session is finished, a resolution
    /// is pending, the id is out of range, or the card is matched or already
    /// revealed. The already-revealed rule is what rejects picking the same
    /// card twice in one buffer cycle.
    pub fn select(&mut self, card: CardId) -> SelectOutcome {
        if self.finished || self.resolver.is_resolving() {
            return SelectOutcome::Ignored;
        }

        let Some(target) = self.grid.get(card) else {
            return SelectOutcome::Ignored;
        };
        if target.matched() || target.revealed() {
            return SelectOutcome::Ignored;
        }

        // Cannot be full here while idle, but handle it as a reject anyway
        if !self.selection.push(card) {
            return SelectOutcome::Ignored;
        }

        if let Some(picked) = self.grid.get_mut(card) {
            picked.reveal();
        }

        if self.selection.is_full() {
            self.resolver.arm(self.config.resolution_delay_ms);
            SelectOutcome::ReadyToResolve
        } else {
            SelectOutcome::Pending
        }
    }

    /// Advance session time
    ///
    /// The resolver countdown runs before the session timer, so a resolution
    /// completing in the same delta as a timeout commits first; if it wins
    /// the session, the timer never fires.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.finished {
            return;
        }

        if self.resolver.advance(elapsed_ms) {
            self.resolve_pair();
        }
        if self.finished {
            return;
        }

        self.timer.advance(elapsed_ms);
        if self.timer.expired() {
            self.finished = true;
            self.emit(SessionEvent::SessionTimedOut);
        }
    }

    /// Compare and commit the buffered pair
    fn resolve_pair(&mut self) {
        let Some((first, second)) = self.selection.take_pair() else {
            return;
        };

        let matched = match (self.grid.get(first), self.grid.get(second)) {
            (Some(a), Some(b)) => a.face() == b.face(),
            _ => false,
        };

        if matched {
            if let Some(card) = self.grid.get_mut(first) {
                card.set_matched();
            }
            if let Some(card) = self.grid.get_mut(second) {
                card.set_matched();
            }
            self.matches_found += 1;
            self.score += self.config.match_points;

            if self.matches_found == self.total_matches() {
                self.finished = true;
                self.emit(SessionEvent::SessionWon);
            }
        } else {
            if let Some(card) = self.grid.get_mut(first) {
                card.hide();
            }
            if let Some(card) = self.grid.get_mut(second) {
                card.hide();
            }
        }

        self.emit(SessionEvent::ResolutionComplete { matched });
    }

    fn emit(&mut self, event: SessionEvent) {
        // Keep the newest events if adapters stop draining
        if self.events.try_push(event).is_err() {
            self.events.remove(0);
            let _ = self.events.try_push(event);
        }
    }

    /// Take and clear the queued events
    pub fn take_events(&mut self) -> ArrayVec<SessionEvent, MAX_EVENTS_PER_TICK> {
        std::mem::take(&mut self.events)
    }

    /// Throw the current play-through away and deal a fresh shuffle
    ///
    /// Buffered picks and the in-flight resolution die with the replaced
    /// state. The RNG continues from its current state, so consecutive
    /// restarts deal different layouts deterministically.
    pub fn restart(&mut self) {
        let seed = self.rng.seed();
        let next_episode = self.episode.wrapping_add(1);

        // Config was validated at creation; the rebuild cannot fail
        if let Ok(next) = Self::new(self.config, seed) {
            *self = next;
            self.episode = next_episode;
        }
    }

    /// Capture a plain-data snapshot for persistence
    ///
    /// Only legal while the resolver is idle. A lone buffered pick is rolled
    /// back to face-down in the captured data (the buffer itself is never
    /// persisted), so the pick is discarded rather than half-saved; the live
    /// session is not touched.
    pub fn snapshot(&self) -> Result<SessionSnapshot, SnapshotBlocked> {
        if self.resolver.is_resolving() {
            return Err(SnapshotBlocked);
        }

        let mut cards: Vec<CardSnapshot> = self.grid.iter().map(CardSnapshot::from).collect();
        if let Some(pending) = self.selection.pending_single() {
            if let Some(card) = cards.get_mut(pending) {
                if !card.matched {
                    card.revealed = false;
                }
            }
        }

        Ok(SessionSnapshot {
            columns: self.grid.columns(),
            rows: self.grid.rows(),
            score: self.score,
            time_remaining: self.timer.remaining(),
            matches_found: self.matches_found,
            finished: self.finished,
            seed: self.rng.seed(),
            timer_limit: self.config.timer_limit,
            match_points: self.config.match_points,
            resolution_delay_ms: self.config.resolution_delay_ms,
            face_pool: self.config.face_pool,
            cards,
        })
    }

    /// Render-facing state, available at any instant
    pub fn view(&self) -> SessionView {
        let mut view = SessionView::default();
        self.view_into(&mut view);
        view
    }

    /// Write render-facing state into a reusable buffer
    pub fn view_into(&self, out: &mut SessionView) {
        out.columns = self.grid.columns();
        out.rows = self.grid.rows();
        out.score = self.score;
        out.time_remaining = self.timer.remaining();
        out.matches_found = self.matches_found;
        out.total_matches = self.total_matches();
        out.finished = self.finished;
        out.resolving = self.resolver.is_resolving();
        out.episode = self.episode;
        self.grid.write_views(&mut out.cards);
    }
}
