// SPDX-License-Identifier: MPL-2.0
//! `iced_reels` is a short-form vertical video feed application built with
//! the Iced GUI framework.
//!
//! Everything is driven by static mock data and local component state: a
//! scroll-snap feed with per-item playback focus, a discovery screen, a
//! profile screen, and bottom navigation. The only on-disk state is the
//! signed-in session entry and a small preferences file.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod playback;
pub mod session;
pub mod ui;
