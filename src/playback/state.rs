// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for a single feed item.

/// Playback lifecycle of one media surface.
///
/// The app has no real decoder; the machine exists so the focus wiring has
/// something concrete and observable to drive, and so the card view can
/// render the correct play/pause affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Never started. Initial state after mounting.
    #[default]
    Stopped,
    /// Actively playing.
    Playing,
    /// Paused after having played.
    Paused,
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Transition for a resume command. Idempotent: resuming an already
    /// playing item stays playing.
    #[must_use]
    pub fn resumed(self) -> Self {
        Self::Playing
    }

    /// Transition for a pause command. A stopped item stays stopped; it
    /// never played, so there is nothing to pause.
    #[must_use]
    pub fn paused(self) -> Self {
        match self {
            Self::Stopped => Self::Stopped,
            Self::Playing | Self::Paused => Self::Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stopped() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
    }

    #[test]
    fn resume_is_idempotent() {
        let state = PlaybackState::Stopped.resumed();
        assert!(state.is_playing());
        assert!(state.resumed().is_playing());
    }

    #[test]
    fn pause_after_play_is_paused() {
        let state = PlaybackState::Playing.paused();
        assert!(state.is_paused());
        assert!(state.paused().is_paused());
    }

    #[test]
    fn pausing_a_stopped_item_keeps_it_stopped() {
        assert_eq!(PlaybackState::Stopped.paused(), PlaybackState::Stopped);
    }
}
