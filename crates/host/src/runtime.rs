//! Host runtime integration.
//!
//! Bridges sync callers with the async tick loop. The session lives on a
//! tokio task that owns it exclusively; callers talk to it over a command
//! channel and receive session events over a broadcast channel, so no lock
//! ever guards session state.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use flipmatch_core::{ConfigError, Session, SessionConfig};
use flipmatch_persist::{PersistError, SlotStore};
use flipmatch_types::{CardId, SelectOutcome, SessionEvent, SessionView, TICK_MS};

/// Commands queued ahead of the loop draining them
const MAX_PENDING_COMMANDS: usize = 32;
/// Events buffered per subscriber before the stream lags
const EVENT_CAPACITY: usize = 64;

/// Errors from host operations.
#[derive(Debug, Error)]
pub enum HostError {
    /// Session parameters were rejected.
    #[error("session configuration rejected: {0}")]
    Config(#[from] ConfigError),

    /// A save or load failed.
    #[error("persistence failed: {0}")]
    Persist(#[from] PersistError),

    /// The tokio runtime could not start.
    #[error("host runtime could not start: {0}")]
    Runtime(#[from] std::io::Error),

    /// The session task is gone.
    #[error("session task stopped")]
    ChannelClosed,
}

/// Host configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub session: SessionConfig,
    pub seed: u32,
    pub save_dir: PathBuf,
    pub tick_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            seed: 1,
            save_dir: PathBuf::from("saves"),
            tick_ms: u64::from(TICK_MS),
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let session = SessionConfig {
            columns: env::var("FLIPMATCH_COLUMNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.session.columns),
            rows: env::var("FLIPMATCH_ROWS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.session.rows),
            timer_limit: env::var("FLIPMATCH_TIMER_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.session.timer_limit),
            match_points: env::var("FLIPMATCH_MATCH_POINTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.session.match_points),
            resolution_delay_ms: env::var("FLIPMATCH_RESOLUTION_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.session.resolution_delay_ms),
            face_pool: env::var("FLIPMATCH_FACE_POOL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.session.face_pool),
        };

        let seed = env::var("FLIPMATCH_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let save_dir = env::var("FLIPMATCH_SAVE_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(defaults.save_dir);

        let tick_ms = env::var("FLIPMATCH_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tick_ms);

        Self {
            session,
            seed,
            save_dir,
            tick_ms,
        }
    }
}

/// Command delivered to the session task.
#[derive(Debug)]
enum HostCommand {
    Select {
        card: CardId,
        reply: oneshot::Sender<SelectOutcome>,
    },
    Restart,
    Save {
        slot: u8,
        reply: oneshot::Sender<Result<(), PersistError>>,
    },
    Load {
        slot: u8,
        reply: oneshot::Sender<Result<bool, PersistError>>,
    },
    View {
        reply: oneshot::Sender<SessionView>,
    },
    Shutdown,
}

/// Running host instance.
pub struct SessionHost {
    _rt: Runtime,
    _task: JoinHandle<()>,
    cmd_tx: mpsc::Sender<HostCommand>,
    events_tx: broadcast::Sender<SessionEvent>,
    events_rx: broadcast::Receiver<SessionEvent>,
}

impl SessionHost {
    /// Start a host from environment variables.
    pub fn spawn_from_env() -> Result<Self, HostError> {
        Self::spawn(HostConfig::from_env())
    }

    /// Start a host and its session task.
    pub fn spawn(config: HostConfig) -> Result<Self, HostError> {
        let session = Session::new(config.session, config.seed)?;
        let store = SlotStore::open(&config.save_dir)?;

        let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>(MAX_PENDING_COMMANDS);
        let (events_tx, events_rx) = broadcast::channel::<SessionEvent>(EVENT_CAPACITY);

        info!(
            columns = session.columns(),
            rows = session.rows(),
            seed = config.seed,
            tick_ms = config.tick_ms,
            "session host starting"
        );

        let rt = Runtime::new()?;
        let tick = Duration::from_millis(config.tick_ms.max(1));
        let task = rt.spawn(run_session(session, store, tick, cmd_rx, events_tx.clone()));

        Ok(Self {
            _rt: rt,
            _task: task,
            cmd_tx,
            events_tx,
            events_rx,
        })
    }

    /// Attempt to pick a card.
    pub fn select(&self, card: CardId) -> Result<SelectOutcome, HostError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(HostCommand::Select {
            card,
            reply: reply_tx,
        })?;
        reply_rx.blocking_recv().map_err(|_| HostError::ChannelClosed)
    }

    /// Throw the play-through away and deal a fresh shuffle.
    ///
    /// Also clears the active save slot, if any.
    pub fn restart(&self) -> Result<(), HostError> {
        self.send(HostCommand::Restart)
    }

    /// Save the session into a slot.
    pub fn save(&self, slot: u8) -> Result<(), HostError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(HostCommand::Save {
            slot,
            reply: reply_tx,
        })?;
        reply_rx
            .blocking_recv()
            .map_err(|_| HostError::ChannelClosed)?
            .map_err(HostError::from)
    }

    /// Replace the session from a slot. Returns false when the slot is empty.
    pub fn load(&self, slot: u8) -> Result<bool, HostError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(HostCommand::Load {
            slot,
            reply: reply_tx,
        })?;
        reply_rx
            .blocking_recv()
            .map_err(|_| HostError::ChannelClosed)?
            .map_err(HostError::from)
    }

    /// Fetch the current render-facing state.
    pub fn view(&self) -> Result<SessionView, HostError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(HostCommand::View { reply: reply_tx })?;
        reply_rx.blocking_recv().map_err(|_| HostError::ChannelClosed)
    }

    /// Poll for the next session event without blocking.
    pub fn try_next_event(&mut self) -> Option<SessionEvent> {
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "event stream lagged");
                }
                Err(_) => return None,
            }
        }
    }

    /// Open an independent event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events_tx.subscribe()
    }

    /// Stop the session task.
    pub fn shutdown(self) {}

    fn send(&self, cmd: HostCommand) -> Result<(), HostError> {
        self.cmd_tx
            .blocking_send(cmd)
            .map_err(|_| HostError::ChannelClosed)
    }
}

impl Drop for SessionHost {
    fn drop(&mut self) {
        // Best effort; dropping the runtime cancels the task regardless
        let _ = self.cmd_tx.try_send(HostCommand::Shutdown);
    }
}

/// Background task that owns the session.
async fn run_session(
    mut session: Session,
    store: SlotStore,
    tick: Duration,
    mut cmd_rx: mpsc::Receiver<HostCommand>,
    events_tx: broadcast::Sender<SessionEvent>,
) {
    let delta_ms = tick.as_millis() as u32;
    let mut ticker = tokio::time::interval(tick);
    let mut active_slot: Option<u8> = None;

    // The interval yields once immediately; consume that so the first
    // delta the session sees is a full period
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                session.tick(delta_ms);
                for event in session.take_events() {
                    debug!(event = event.as_str(), "session event");
                    let _ = events_tx.send(event);
                }
            }
            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else { break };
                match cmd {
                    HostCommand::Select { card, reply } => {
                        let outcome = session.select(card);
                        debug!(card, outcome = ?outcome, "pick handled");
                        let _ = reply.send(outcome);
                    }
                    HostCommand::Restart => {
                        session.restart();
                        if let Some(slot) = active_slot.take() {
                            if let Err(error) = store.delete(slot) {
                                warn!(slot, error = %error, "could not clear save slot");
                            } else {
                                debug!(slot, "save slot cleared");
                            }
                        }
                        info!(episode = session.episode(), "session restarted");
                    }
                    HostCommand::Save { slot, reply } => {
                        let result = store.save_session(slot, &session);
                        match &result {
                            Ok(()) => {
                                active_slot = Some(slot);
                                info!(slot, "session saved");
                            }
                            Err(error) => warn!(slot, error = %error, "save refused"),
                        }
                        let _ = reply.send(result);
                    }
                    HostCommand::Load { slot, reply } => {
                        match store.load_session(slot) {
                            Ok(Some(loaded)) => {
                                session = loaded;
                                active_slot = Some(slot);
                                info!(slot, "session loaded");
                                let _ = reply.send(Ok(true));
                            }
                            Ok(None) => {
                                debug!(slot, "slot is empty");
                                let _ = reply.send(Ok(false));
                            }
                            Err(error) => {
                                warn!(slot, error = %error, "load failed");
                                let _ = reply.send(Err(error));
                            }
                        }
                    }
                    HostCommand::View { reply } => {
                        let _ = reply.send(session.view());
                    }
                    HostCommand::Shutdown => break,
                }
            }
        }
    }
}
