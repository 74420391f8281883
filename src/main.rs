//! Headless session runner (default binary).
//!
//! Spawns a session host, solves the grid by reading card faces from the
//! view, and exercises a save slot along the way. Configuration comes from
//! `FLIPMATCH_*` environment variables; logs go to stderr via tracing.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flipmatch::host::{HostConfig, SessionHost};
use flipmatch::types::{SessionEvent, SessionView};

fn main() -> Result<()> {
    init_tracing();

    let mut config = HostConfig::from_env();
    if std::env::var("FLIPMATCH_SEED").is_err() {
        config.seed = seed_from_clock();
    }

    info!(
        columns = config.session.columns,
        rows = config.session.rows,
        seed = config.seed,
        "starting session"
    );

    let mut host = SessionHost::spawn(config)?;
    let result = run(&mut host);
    host.shutdown();
    result
}

fn run(host: &mut SessionHost) -> Result<()> {
    let mut saved = false;

    loop {
        while let Some(event) = host.try_next_event() {
            info!(event = event.as_str(), "session event");
            match event {
                SessionEvent::SessionWon => {
                    let view = host.view()?;
                    info!(score = view.score, time_remaining = view.time_remaining, "grid solved");
                    return Ok(());
                }
                SessionEvent::SessionTimedOut => {
                    let view = host.view()?;
                    info!(score = view.score, matches = view.matches_found, "ran out of time");
                    return Ok(());
                }
                SessionEvent::ResolutionComplete { .. } => {}
            }
        }

        let view = host.view()?;
        if view.finished {
            // The terminal event is still in flight; pick it up next pass
            thread::sleep(Duration::from_millis(20));
            continue;
        }

        if !view.resolving {
            // Save once at the halfway mark, while the capture is legal
            if !saved && view.matches_found >= view.total_matches / 2 {
                host.save(1)?;
                info!(slot = 1, matches = view.matches_found, "progress saved");
                saved = true;
            }

            if let Some((first, second)) = next_pair(&view) {
                debug!(first, second, "picking pair");
                host.select(first)?;
                host.select(second)?;
            }
        }

        thread::sleep(Duration::from_millis(20));
    }
}

/// First face-down pair sharing a face
fn next_pair(view: &SessionView) -> Option<(usize, usize)> {
    let cards = &view.cards;
    for i in 0..cards.len() {
        if cards[i].matched || cards[i].revealed {
            continue;
        }
        for j in (i + 1)..cards.len() {
            if !cards[j].matched && !cards[j].revealed && cards[i].face == cards[j].face {
                return Some((i, j));
            }
        }
    }
    None
}

fn seed_from_clock() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos()
}

/// Configure tracing subscribers so `RUST_LOG` controls verbosity.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
