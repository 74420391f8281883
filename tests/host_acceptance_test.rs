//! Acceptance tests for the session host
//!
//! These drive a real host task over its command channel, with short tick
//! and resolution intervals so resolutions land within the polling windows.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use flipmatch::core::SessionConfig;
use flipmatch::host::{HostConfig, SessionHost};
use flipmatch::types::{SessionEvent, SessionView};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "flipmatch-acceptance-{}-{}",
        tag,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn fast_host(tag: &str, columns: u8, rows: u8) -> SessionHost {
    let config = HostConfig {
        session: SessionConfig {
            columns,
            rows,
            resolution_delay_ms: 30,
            ..SessionConfig::default()
        },
        seed: 4321,
        save_dir: temp_dir(tag),
        tick_ms: 5,
    };
    SessionHost::spawn(config).expect("host failed to start")
}

/// First face-down pair sharing a face, read off the view
fn pair_from_view(view: &SessionView) -> (usize, usize) {
    for i in 0..view.cards.len() {
        let a = &view.cards[i];
        if a.matched || a.revealed {
            continue;
        }
        for j in (i + 1)..view.cards.len() {
            let b = &view.cards[j];
            if !b.matched && !b.revealed && a.face == b.face {
                return (i, j);
            }
        }
    }
    panic!("no pair left in view");
}

fn wait_for_event(host: &mut SessionHost, deadline: Duration) -> Option<SessionEvent> {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if let Some(event) = host.try_next_event() {
            return Some(event);
        }
        thread::sleep(Duration::from_millis(5));
    }
    None
}

#[test]
fn host_resolves_a_pair_and_emits_the_event() {
    let mut host = fast_host("resolve", 4, 2);

    let view = host.view().unwrap();
    let (first, second) = pair_from_view(&view);
    assert!(host.select(first).unwrap().accepted());
    assert!(host.select(second).unwrap().accepted());

    let event = wait_for_event(&mut host, Duration::from_secs(2)).expect("no event arrived");
    assert_eq!(event, SessionEvent::ResolutionComplete { matched: true });

    let view = host.view().unwrap();
    assert_eq!(view.matches_found, 1);
    assert_eq!(view.score, 5);
    assert!(view.cards[first].matched);

    host.shutdown();
}

#[test]
fn host_plays_a_small_grid_to_the_win() {
    let mut host = fast_host("win", 2, 2);
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut won = false;

    while !won && Instant::now() < deadline {
        while let Some(event) = host.try_next_event() {
            if event == SessionEvent::SessionWon {
                won = true;
            }
        }
        if won {
            break;
        }

        let view = host.view().unwrap();
        if !view.resolving && !view.finished {
            let (first, second) = pair_from_view(&view);
            host.select(first).unwrap();
            host.select(second).unwrap();
        }
        thread::sleep(Duration::from_millis(5));
    }

    assert!(won, "session did not reach the win in time");
    let view = host.view().unwrap();
    assert!(view.finished);
    assert_eq!(view.matches_found, view.total_matches);

    host.shutdown();
}

#[test]
fn subscribed_stream_sees_resolution_events() {
    let mut host = fast_host("subscribe", 4, 2);
    let mut stream = host.subscribe();

    let view = host.view().unwrap();
    let (first, second) = pair_from_view(&view);
    host.select(first).unwrap();
    host.select(second).unwrap();

    // Wait on the async stream without touching the blocking facade
    let event = tokio_test::block_on(async {
        tokio::time::timeout(Duration::from_secs(2), stream.recv())
            .await
            .expect("stream timed out")
            .expect("stream closed")
    });
    assert_eq!(event, SessionEvent::ResolutionComplete { matched: true });

    // The host's own polling receiver saw the same event
    assert_eq!(
        wait_for_event(&mut host, Duration::from_secs(1)),
        Some(SessionEvent::ResolutionComplete { matched: true })
    );

    host.shutdown();
}

#[test]
fn saved_slot_survives_a_host_restart() {
    let dir = temp_dir("survive");

    let score = {
        let mut host = SessionHost::spawn(HostConfig {
            session: SessionConfig {
                columns: 4,
                rows: 2,
                resolution_delay_ms: 30,
                ..SessionConfig::default()
            },
            seed: 777,
            save_dir: dir.clone(),
            tick_ms: 5,
        })
        .unwrap();

        let view = host.view().unwrap();
        let (first, second) = pair_from_view(&view);
        host.select(first).unwrap();
        host.select(second).unwrap();
        wait_for_event(&mut host, Duration::from_secs(2)).expect("no resolution");

        host.save(1).unwrap();
        let score = host.view().unwrap().score;
        host.shutdown();
        score
    };

    let host = SessionHost::spawn(HostConfig {
        session: SessionConfig::default(),
        seed: 1,
        save_dir: dir,
        tick_ms: 60_000,
    })
    .unwrap();

    assert!(host.load(1).unwrap());
    let view = host.view().unwrap();
    assert_eq!(view.score, score);
    assert_eq!(view.matches_found, 1);
    assert_eq!(view.columns, 4);
    assert_eq!(view.rows, 2);

    host.shutdown();
}
