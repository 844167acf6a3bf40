// SPDX-License-Identifier: MPL-2.0
//! Feed core: focus tracking over the item sequence and per-item UI state.
//!
//! The [`pager`] owns the single "active index" and is the only writer of
//! it; [`item_state`] owns per-item interaction flags keyed by stable item
//! id. Both are pure state machines with no rendering concerns, which keeps
//! the gesture semantics unit-testable without a window.

pub mod item_state;
pub mod pager;

pub use item_state::{ItemStates, ItemUiState};
pub use pager::{Effect, Pager, DRAG_THRESHOLD};
