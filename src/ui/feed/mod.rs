// SPDX-License-Identifier: MPL-2.0
//! Feed screen component encapsulating state, raw event routing, and the
//! scroll-snap presentation.
//!
//! The component owns the [`Pager`], the per-item UI state map, and the
//! playback model. Gestures flow one way: raw input updates the pager, a
//! focus effect drives exactly one pause and at most one resume, and the
//! visual scroll position is a pure function of the focused index,
//! animated over a fixed duration.

pub mod card;

use crate::catalog::FeedItem;
use crate::config::Config;
use crate::feed::{self, ItemStates, Pager};
use crate::playback::Player;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar};
use iced::widget::{operation, Column, Container, Id, Scrollable, Space, Stack};
use iced::{
    alignment::{Horizontal, Vertical},
    event, mouse, touch, window, Element, Length, Task,
};
use std::time::{Duration, Instant};

/// Identifier used for the feed scrollable widget.
pub const SCROLLABLE_ID: &str = "feed-scrollable";

/// Duration of the snap animation after a focus transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Messages consumed by the feed component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw runtime event forwarded by the app subscription.
    RawEvent(event::Event),
    /// A card control was pressed.
    Card { index: usize, message: card::Message },
    /// Animation frame while a snap transition is running.
    Tick(Instant),
}

/// An in-flight snap animation from a fixed offset toward the focused
/// item's offset.
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f32,
    started_at: Instant,
}

/// Feed screen state.
#[derive(Debug)]
pub struct State {
    items: Vec<FeedItem>,
    pager: Pager,
    item_states: ItemStates,
    player: Player,
    autoplay: bool,
    viewport_height: f32,
    cursor_y: Option<f32>,
    transition: Option<Transition>,
}

impl State {
    /// Mounts the feed over `items`. The first item gains focus
    /// immediately, which issues its single resume effect when autoplay is
    /// enabled.
    #[must_use]
    pub fn new(items: Vec<FeedItem>, config: &Config, viewport_height: f32) -> Self {
        let mut state = Self {
            pager: Pager::new(items.len()),
            item_states: ItemStates::new(config.start_muted()),
            player: Player::new(),
            autoplay: config.autoplay(),
            viewport_height,
            cursor_y: None,
            transition: None,
            items,
        };

        if let Some(index) = state.pager.current_index() {
            state.mount_focus(index);
        }

        state
    }

    /// The item currently eligible to play media, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<&FeedItem> {
        self.pager
            .current_index()
            .and_then(|index| self.items.get(index))
    }

    /// Whether a snap animation is running; gates the tick subscription.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Height of the card viewport, kept in sync with window resizes.
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Pauses the active item, e.g. when the shell switches away without
    /// dropping the component yet.
    pub fn pause_active(&mut self) {
        if let Some(item) = self.active_item() {
            let id = item.id.to_string();
            self.player.pause(&id);
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RawEvent(raw) => self.handle_raw_event(&raw),
            Message::Card { index, message } => {
                self.handle_card_message(index, message);
                Task::none()
            }
            Message::Tick(now) => self.advance_animation(now),
        }
    }

    /// Routes runtime events into pager operations. All state transitions
    /// here are synchronous; the returned task only repositions the
    /// scrollable.
    fn handle_raw_event(&mut self, raw: &event::Event) -> Task<Message> {
        match raw {
            event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let effect = self.pager.on_wheel(wheel_delta_down(delta));
                self.apply_pager_effect(effect)
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(y) = self.cursor_y {
                    self.pager.begin_drag(y);
                }
                Task::none()
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_y = Some(position.y);
                let effect = self.pager.update_drag(position.y);
                self.apply_pager_effect(effect)
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.pager.end_drag();
                Task::none()
            }
            event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.pager.begin_drag(position.y);
                Task::none()
            }
            event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                let effect = self.pager.update_drag(position.y);
                self.apply_pager_effect(effect)
            }
            event::Event::Touch(touch::Event::FingerLifted { .. })
            | event::Event::Touch(touch::Event::FingerLost { .. }) => {
                self.pager.end_drag();
                Task::none()
            }
            event::Event::Window(window::Event::Resized(size)) => {
                self.viewport_height = (size.height - sizing::NAVBAR_HEIGHT).max(1.0);
                // Re-align instantly; resizing should not animate.
                self.transition = None;
                self.snap_task(self.target_offset())
            }
            _ => Task::none(),
        }
    }

    fn handle_card_message(&mut self, index: usize, message: card::Message) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        let id = item.id;
        let base_likes = item.like_count;

        match message {
            card::Message::ToggleLike => {
                self.item_states.entry(id, base_likes).toggle_like();
            }
            card::Message::ToggleMute => {
                let muted = self.item_states.entry(id, base_likes).toggle_mute();
                // Mute applies immediately, focused or not.
                self.player.set_muted(id, muted);
            }
        }
    }

    /// Reacts to a focus transition: one pause for the item losing focus,
    /// at most one resume for the item gaining it, and a snap animation
    /// toward the new offset. Called once per transition, never per
    /// render.
    fn apply_pager_effect(&mut self, effect: feed::Effect) -> Task<Message> {
        let feed::Effect::Focused { previous, current } = effect else {
            return Task::none();
        };

        if let Some(item) = self.items.get(previous) {
            self.player.pause(item.id);
        }
        self.mount_focus(current);

        let now = Instant::now();
        self.transition = Some(Transition {
            from: self.scroll_offset(now),
            started_at: now,
        });
        self.snap_task(self.scroll_offset(now))
    }

    /// Ensures per-item state exists for the newly focused index and
    /// issues its resume effect.
    fn mount_focus(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        let id = item.id;
        let muted = self.item_states.entry(id, item.like_count).muted();
        self.player.set_muted(id, muted);
        if self.autoplay {
            self.player.resume(id);
        }
    }

    fn advance_animation(&mut self, now: Instant) -> Task<Message> {
        let Some(transition) = self.transition else {
            return Task::none();
        };

        if now.duration_since(transition.started_at) >= TRANSITION_DURATION {
            self.transition = None;
            return self.snap_task(self.target_offset());
        }

        self.snap_task(self.scroll_offset(now))
    }

    /// Final resting offset for the focused index.
    fn target_offset(&self) -> f32 {
        let index = self.pager.current_index().unwrap_or(0);
        index as f32 * self.viewport_height
    }

    /// Visual scroll offset at `now`: the target offset, or an eased
    /// interpolation toward it while a transition is running.
    #[must_use]
    pub fn scroll_offset(&self, now: Instant) -> f32 {
        let target = self.target_offset();
        let Some(transition) = self.transition else {
            return target;
        };

        let elapsed = now.duration_since(transition.started_at);
        if elapsed >= TRANSITION_DURATION {
            return target;
        }

        let progress = elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32();
        transition.from + (target - transition.from) * ease_out_cubic(progress)
    }

    /// Builds the task repositioning the scrollable at `offset`.
    fn snap_task(&self, offset: f32) -> Task<Message> {
        let max_offset = self.max_offset();
        let relative_y = if max_offset > 0.0 {
            (offset / max_offset).clamp(0.0, 1.0)
        } else {
            0.0
        };

        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: relative_y,
            },
        )
    }

    fn max_offset(&self) -> f32 {
        (self.items.len().saturating_sub(1)) as f32 * self.viewport_height
    }

    /// Render the feed: the card column inside a hidden-scrollbar
    /// scrollable, with the progress rail floating on the right edge.
    pub fn view(&self) -> Element<'_, Message> {
        if self.items.is_empty() {
            return empty_state();
        }

        let active_index = self.pager.current_index().unwrap_or(0);

        let mut column = Column::new().width(Length::Fill);
        for (index, item) in self.items.iter().enumerate() {
            let ui_state = self.item_states.get(item.id);
            let ctx = card::ViewContext {
                item,
                is_active: index == active_index,
                is_playing: self.player.is_playing(item.id),
                liked: ui_state.is_some_and(|s| s.liked()),
                like_count: ui_state.map_or(item.like_count, |s| s.like_count()),
                muted: ui_state.map_or(true, |s| s.muted()),
                height: self.viewport_height,
            };
            column = column.push(
                card::view(ctx).map(move |message| Message::Card { index, message }),
            );
        }

        let scrollable = Scrollable::new(column)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Vertical(Scrollbar::hidden()));

        Stack::new()
            .push(scrollable)
            .push(self.progress_rail(active_index))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// One slim segment per item, brightened for the focused one.
    fn progress_rail(&self, active_index: usize) -> Element<'_, Message> {
        let mut rail = Column::new().spacing(spacing::XS);
        for index in 0..self.items.len() {
            rail = rail.push(
                Container::new(
                    Space::new()
                        .width(Length::Fixed(sizing::RAIL_SEGMENT_WIDTH))
                        .height(Length::Fixed(sizing::RAIL_SEGMENT_HEIGHT)),
                )
                .style(styles::container::rail_segment(index == active_index)),
            );
        }

        Container::new(rail)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .padding(spacing::XS)
            .into()
    }
}

fn empty_state<'a>() -> Element<'a, Message> {
    Container::new(
        iced::widget::Text::new("Nothing to watch yet")
            .size(crate::ui::design_tokens::typography::TITLE_SM),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::app_background)
    .into()
}

/// Normalizes a wheel delta into the pager's convention: positive means
/// scrolling down, toward the next item. Iced reports upward wheel motion
/// as positive `y`, hence the negation; pixel deltas are scaled to
/// line-sized steps.
fn wheel_delta_down(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y,
        mouse::ScrollDelta::Pixels { y, .. } => -y / 120.0,
    }
}

fn ease_out_cubic(progress: f32) -> f32 {
    let inverted = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inverted * inverted * inverted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_feed;
    use iced::Point;

    fn test_state() -> State {
        State::new(sample_feed(), &Config::default(), 600.0)
    }

    fn wheel_down() -> event::Event {
        event::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        })
    }

    fn wheel_up() -> event::Event {
        event::Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        })
    }

    #[test]
    fn mounting_resumes_only_the_first_item() {
        let state = test_state();
        assert!(state.player().is_playing("1"));
        assert_eq!(state.player().playing_count(), 1);
    }

    #[test]
    fn wheel_down_moves_focus_and_playback() {
        let mut state = test_state();
        let _ = state.update(Message::RawEvent(wheel_down()));

        assert_eq!(state.pager().current_index(), Some(1));
        assert!(!state.player().is_playing("1"));
        assert!(state.player().is_playing("2"));
        assert_eq!(state.player().playing_count(), 1);
    }

    #[test]
    fn wheel_storm_keeps_a_single_playing_item() {
        let mut state = test_state();
        for _ in 0..10 {
            let _ = state.update(Message::RawEvent(wheel_down()));
        }
        for _ in 0..3 {
            let _ = state.update(Message::RawEvent(wheel_up()));
        }

        assert_eq!(state.pager().current_index(), Some(0));
        assert_eq!(state.player().playing_count(), 1);
        assert!(state.player().is_playing("1"));
    }

    #[test]
    fn unchanged_focus_issues_no_new_resume() {
        let mut state = test_state();
        // At the first item, scrolling up is a boundary no-op: playback
        // state must be untouched.
        state.player.pause("1");
        let _ = state.update(Message::RawEvent(wheel_up()));
        assert!(!state.player().is_playing("1"));
    }

    #[test]
    fn drag_sequence_transitions_once() {
        let mut state = test_state();

        let press = event::Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(100.0, 500.0),
        });
        let moved = event::Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position: Point::new(100.0, 420.0),
        });
        let lifted = event::Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(1),
            position: Point::new(100.0, 420.0),
        });

        let _ = state.update(Message::RawEvent(press));
        let _ = state.update(Message::RawEvent(moved));
        let _ = state.update(Message::RawEvent(lifted));

        assert_eq!(state.pager().current_index(), Some(1));
        assert!(state.player().is_playing("2"));
    }

    #[test]
    fn mouse_drag_uses_tracked_cursor_position() {
        let mut state = test_state();

        let hover = event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(100.0, 500.0),
        });
        let press = event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let drag = event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(100.0, 440.0),
        });
        let release = event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));

        let _ = state.update(Message::RawEvent(hover));
        let _ = state.update(Message::RawEvent(press));
        let _ = state.update(Message::RawEvent(drag));
        let _ = state.update(Message::RawEvent(release));

        assert_eq!(state.pager().current_index(), Some(1));
    }

    #[test]
    fn like_toggle_adjusts_displayed_count() {
        let mut state = test_state();
        let base = state.items[0].like_count;

        let _ = state.update(Message::Card {
            index: 0,
            message: card::Message::ToggleLike,
        });
        assert_eq!(state.item_states.get("1").unwrap().like_count(), base + 1);

        let _ = state.update(Message::Card {
            index: 0,
            message: card::Message::ToggleLike,
        });
        assert_eq!(state.item_states.get("1").unwrap().like_count(), base);
    }

    #[test]
    fn media_tap_toggles_mute_and_applies_to_player() {
        let mut state = test_state();
        assert!(state.item_states.entry("1", 0).muted());

        let _ = state.update(Message::Card {
            index: 0,
            message: card::Message::ToggleMute,
        });
        assert!(!state.item_states.get("1").unwrap().muted());
        assert!(!state.player().is_muted("1"));
    }

    #[test]
    fn mute_applies_to_unfocused_items_too() {
        let mut state = test_state();
        let _ = state.update(Message::Card {
            index: 2,
            message: card::Message::ToggleMute,
        });
        assert!(!state.item_states.get("3").unwrap().muted());
        assert!(!state.player().is_playing("3"));
    }

    #[test]
    fn transition_offset_moves_toward_target() {
        let mut state = test_state();
        let _ = state.update(Message::RawEvent(wheel_down()));
        assert!(state.is_animating());

        let started = state.transition.expect("transition running").started_at;
        let midway = started + Duration::from_millis(150);
        let offset = state.scroll_offset(midway);
        assert!(offset > 0.0);
        assert!(offset <= 600.0);

        let after = started + TRANSITION_DURATION;
        assert_eq!(state.scroll_offset(after), 600.0);
    }

    #[test]
    fn animation_finishes_and_clears_transition() {
        let mut state = test_state();
        let _ = state.update(Message::RawEvent(wheel_down()));

        let started = state.transition.expect("transition running").started_at;
        let _ = state.update(Message::Tick(started + TRANSITION_DURATION));
        assert!(!state.is_animating());
    }

    #[test]
    fn resize_realigns_without_animating() {
        let mut state = test_state();
        let _ = state.update(Message::RawEvent(wheel_down()));

        let resized = event::Event::Window(window::Event::Resized(iced::Size::new(400.0, 864.0)));
        let _ = state.update(Message::RawEvent(resized));

        assert!(!state.is_animating());
        assert_eq!(state.scroll_offset(Instant::now()), 800.0);
    }

    #[test]
    fn empty_feed_has_no_active_item() {
        let state = State::new(Vec::new(), &Config::default(), 600.0);
        assert!(state.active_item().is_none());
        assert_eq!(state.player().playing_count(), 0);
    }

    #[test]
    fn ease_out_cubic_is_monotonic_and_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.75));
    }
}
