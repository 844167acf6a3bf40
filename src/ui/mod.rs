// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each screen is a self-contained component (`State` / `Message`, plus an
//! `Event` enum where the parent must react); shared visual constants live
//! in [`design_tokens`] and [`styles`].

pub mod auth;
pub mod design_tokens;
pub mod discover;
pub mod feed;
pub mod navbar;
pub mod notifications;
pub mod profile;
pub mod styles;
