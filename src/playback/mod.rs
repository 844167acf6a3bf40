// SPDX-License-Identifier: MPL-2.0
//! Playback model for the feed's media surfaces.
//!
//! Commands are fire-and-forget and infallible: a playback effect that
//! cannot take hold is silently ignored and never blocks an index
//! transition. The feed component is responsible for issuing resume/pause
//! exactly once per focus transition; the [`Player`] itself is a dumb,
//! idempotent registry.

pub mod state;

pub use state::PlaybackState;

use std::collections::HashMap;

/// Per-item media surface the player tracks.
#[derive(Debug, Clone, Copy, Default)]
struct Surface {
    state: PlaybackState,
    muted: bool,
}

/// Registry of media surfaces keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct Player {
    surfaces: HashMap<String, Surface>,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts or resumes playback for `id`.
    pub fn resume(&mut self, id: &str) {
        let surface = self.surfaces.entry(id.to_string()).or_default();
        surface.state = surface.state.resumed();
    }

    /// Pauses playback for `id`. Pausing an item that never played is a
    /// no-op.
    pub fn pause(&mut self, id: &str) {
        if let Some(surface) = self.surfaces.get_mut(id) {
            surface.state = surface.state.paused();
        }
    }

    /// Applies the mute flag to `id` immediately, regardless of whether
    /// the item currently has focus or is playing.
    pub fn set_muted(&mut self, id: &str, muted: bool) {
        let surface = self.surfaces.entry(id.to_string()).or_default();
        surface.muted = muted;
    }

    #[must_use]
    pub fn is_playing(&self, id: &str) -> bool {
        self.surfaces
            .get(id)
            .is_some_and(|surface| surface.state.is_playing())
    }

    #[must_use]
    pub fn is_muted(&self, id: &str) -> bool {
        self.surfaces.get(id).is_some_and(|surface| surface.muted)
    }

    #[must_use]
    pub fn state(&self, id: &str) -> PlaybackState {
        self.surfaces
            .get(id)
            .map(|surface| surface.state)
            .unwrap_or_default()
    }

    /// Number of surfaces currently playing. The feed's focus wiring keeps
    /// this at most one.
    #[must_use]
    pub fn playing_count(&self) -> usize {
        self.surfaces
            .values()
            .filter(|surface| surface.state.is_playing())
            .count()
    }

    /// Drops all surfaces, e.g. when the feed screen unmounts.
    pub fn reset(&mut self) {
        self.surfaces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_then_pause_round_trip() {
        let mut player = Player::new();
        player.resume("1");
        assert!(player.is_playing("1"));

        player.pause("1");
        assert!(!player.is_playing("1"));
        assert_eq!(player.state("1"), PlaybackState::Paused);
    }

    #[test]
    fn pause_on_unknown_item_is_a_no_op() {
        let mut player = Player::new();
        player.pause("ghost");
        assert_eq!(player.state("ghost"), PlaybackState::Stopped);
    }

    #[test]
    fn mute_applies_without_focus() {
        let mut player = Player::new();
        player.set_muted("1", false);
        assert!(!player.is_muted("1"));
        assert!(!player.is_playing("1"));

        player.set_muted("1", true);
        assert!(player.is_muted("1"));
    }

    #[test]
    fn playing_count_tracks_active_surfaces() {
        let mut player = Player::new();
        player.resume("1");
        player.resume("2");
        player.pause("1");
        assert_eq!(player.playing_count(), 1);
    }

    #[test]
    fn reset_drops_everything() {
        let mut player = Player::new();
        player.resume("1");
        player.reset();
        assert_eq!(player.playing_count(), 0);
        assert_eq!(player.state("1"), PlaybackState::Stopped);
    }
}
