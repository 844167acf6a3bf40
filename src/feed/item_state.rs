// SPDX-License-Identifier: MPL-2.0
//! Per-item interaction state.
//!
//! State is keyed by the stable item identifier rather than list position,
//! so a reordered sequence can never alias one item's like flag onto
//! another. Entries are created lazily on first access and the whole map is
//! discarded when the feed screen unmounts; nothing here persists.

use std::collections::HashMap;

/// Interaction state scoped to a single feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUiState {
    liked: bool,
    /// Counter value the item mounted with; the displayed value derives
    /// from it and the liked flag.
    base_like_count: u64,
    muted: bool,
}

impl ItemUiState {
    #[must_use]
    pub fn new(base_like_count: u64, muted: bool) -> Self {
        Self {
            liked: false,
            base_like_count,
            muted,
        }
    }

    #[must_use]
    pub fn liked(&self) -> bool {
        self.liked
    }

    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// The counter to display: base count plus one while liked. A simple
    /// symmetric adjustment, never a server-confirmed value.
    #[must_use]
    pub fn like_count(&self) -> u64 {
        if self.liked {
            self.base_like_count.saturating_add(1)
        } else {
            self.base_like_count
        }
    }

    /// Flips the liked flag. Returns the new value.
    pub fn toggle_like(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    /// Flips the muted flag. Returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// Map from stable item id to its UI state.
#[derive(Debug, Clone, Default)]
pub struct ItemStates {
    /// Mute flag given to newly created entries.
    start_muted: bool,
    states: HashMap<String, ItemUiState>,
}

impl ItemStates {
    #[must_use]
    pub fn new(start_muted: bool) -> Self {
        Self {
            start_muted,
            states: HashMap::new(),
        }
    }

    /// Returns the state for `id`, creating it with `base_like_count` and
    /// the configured mute default on first access.
    pub fn entry(&mut self, id: &str, base_like_count: u64) -> &mut ItemUiState {
        self.states
            .entry(id.to_string())
            .or_insert_with(|| ItemUiState::new(base_like_count, self.start_muted))
    }

    /// Read-only lookup; `None` until the item has been interacted with.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ItemUiState> {
        self.states.get(id)
    }

    /// Drops the state for items evicted from the visible window.
    pub fn evict(&mut self, id: &str) {
        self.states.remove(id);
    }

    /// Drops all per-item state, e.g. when the feed screen unmounts.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
