// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks across persistence and the feed interaction model.

use iced_reels::catalog::{format_count, sample_feed};
use iced_reels::config::{self, Config};
use iced_reels::feed::{Effect, Pager, DRAG_THRESHOLD};
use iced_reels::session::{self, UserSession};
use tempfile::tempdir;

#[test]
fn preferences_round_trip_through_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        start_muted: Some(false),
        autoplay: Some(true),
    };
    config::save_to_path(&config, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert!(!loaded.start_muted());
    assert!(loaded.autoplay());

    dir.close().expect("failed to close temp dir");
}

#[test]
fn session_lifecycle_sign_in_restart_sign_out() {
    let dir = tempdir().expect("failed to create temp dir");
    let base = Some(dir.path().to_path_buf());

    // Fresh install: signed out.
    let (initial, warning) = session::load_from(base.clone());
    assert!(initial.is_none());
    assert!(warning.is_none());

    // Sign in, then simulate a restart.
    let user = UserSession::new("johndoe", "John Doe");
    assert!(session::save_to(&user, base.clone()).is_none());
    let (restored, warning) = session::load_from(base.clone());
    assert_eq!(restored, Some(user));
    assert!(warning.is_none());

    // Sign out removes the entry.
    session::clear_from(base.clone());
    let (after, _) = session::load_from(base);
    assert!(after.is_none());

    dir.close().expect("failed to close temp dir");
}

#[test]
fn corrupt_session_entry_never_blocks_startup() {
    let dir = tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("session.cbor"), b"\xff\xff not cbor")
        .expect("failed to write corrupt entry");

    let (session, warning) = session::load_from(Some(dir.path().to_path_buf()));
    assert!(session.is_none());
    assert!(warning.is_some());
}

#[test]
fn pager_walks_the_sample_feed_end_to_end() {
    let items = sample_feed();
    let mut pager = Pager::new(items.len());
    assert_eq!(pager.current_index(), Some(0));

    // Wheel all the way down, then past the end.
    for expected in 1..items.len() {
        assert_eq!(
            pager.on_wheel(1.0),
            Effect::Focused {
                previous: expected - 1,
                current: expected,
            }
        );
    }
    assert_eq!(pager.on_wheel(1.0), Effect::None);
    assert_eq!(pager.current_index(), Some(items.len() - 1));

    // Drag back up one item.
    pager.begin_drag(200.0);
    let effect = pager.update_drag(200.0 + DRAG_THRESHOLD + 1.0);
    assert_eq!(
        effect,
        Effect::Focused {
            previous: items.len() - 1,
            current: items.len() - 2,
        }
    );
    pager.end_drag();
}

#[test]
fn sample_feed_counters_format_like_the_ui() {
    let items = sample_feed();
    let first = &items[0];

    assert_eq!(first.id, "1");
    assert_eq!(format_count(first.like_count), "12.4K");

    for item in &items {
        assert!(!item.media_url.is_empty());
        assert!(!item.author.is_empty());
    }
}
