// SPDX-License-Identifier: MPL-2.0
//! Focus pager for the vertical feed.
//!
//! Translates two input channels — discrete drag gestures and wheel ticks —
//! into clamped index transitions with identical semantics. The pager is
//! the single writer of the active index; everything downstream (playback
//! focus, scroll position) derives from the [`Effect`] it returns.

/// Minimum drag distance, in logical pixels, before a drag commits a
/// transition. A delta exactly at the threshold does not transition.
pub const DRAG_THRESHOLD: f32 = 50.0;

/// Result of feeding an input event to the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The focused index moved. `previous` loses playback focus and
    /// `current` gains it.
    Focused { previous: usize, current: usize },
}

impl Effect {
    /// Returns true if the focus actually moved.
    #[must_use]
    pub fn focus_changed(&self) -> bool {
        matches!(self, Effect::Focused { .. })
    }
}

/// Maintains the focused index over a fixed-length item sequence.
///
/// Invariant: `current_index` stays inside `[0, len - 1]` whenever
/// `len > 0`. On an empty sequence every operation is a no-op and there is
/// no focused item.
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    len: usize,
    current: usize,
    /// Vertical coordinate where the active drag started, if any.
    drag_origin: Option<f32>,
}

impl Pager {
    /// Creates a pager over `len` items, focused on the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            drag_origin: None,
        }
    }

    /// Number of items in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The focused index, or `None` on an empty sequence.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Records the drag origin and arms the gesture.
    pub fn begin_drag(&mut self, origin_y: f32) {
        if self.len == 0 {
            return;
        }
        self.drag_origin = Some(origin_y);
    }

    /// Advances the gesture with the current pointer position.
    ///
    /// Once the accumulated delta exceeds [`DRAG_THRESHOLD`] the index
    /// moves one step in the signed direction of the delta and the gesture
    /// disarms, so a single continuous drag yields at most one transition.
    pub fn update_drag(&mut self, current_y: f32) -> Effect {
        let Some(origin) = self.drag_origin else {
            return Effect::None;
        };

        let delta = origin - current_y;
        if delta.abs() <= DRAG_THRESHOLD {
            return Effect::None;
        }

        self.drag_origin = None;
        if delta > 0.0 {
            // Swipe up: next item.
            self.step(1)
        } else {
            self.step(-1)
        }
    }

    /// Ends the gesture without committing anything further.
    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    /// Applies a wheel tick. Positive `delta_y` means scrolling down
    /// (toward the next item); there is no magnitude threshold.
    pub fn on_wheel(&mut self, delta_y: f32) -> Effect {
        if delta_y > 0.0 {
            self.step(1)
        } else if delta_y < 0.0 {
            self.step(-1)
        } else {
            Effect::None
        }
    }

    /// Moves the index one step, clamped to the sequence bounds. Attempts
    /// to move past either boundary leave the index unchanged — no
    /// wraparound.
    fn step(&mut self, direction: i32) -> Effect {
        if self.len == 0 {
            return Effect::None;
        }

        let previous = self.current;
        let next = if direction > 0 {
            previous.saturating_add(1).min(self.len - 1)
        } else {
            previous.saturating_sub(1)
        };

        if next == previous {
            return Effect::None;
        }

        self.current = next;
        Effect::Focused {
            previous,
            current: next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pager_focuses_first_item() {
        let pager = Pager::new(3);
        assert_eq!(pager.current_index(), Some(0));
        assert!(!pager.is_dragging());
    }

    #[test]
    fn empty_pager_has_no_focus_and_ignores_input() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.current_index(), None);

        pager.begin_drag(100.0);
        assert!(!pager.is_dragging());
        assert_eq!(pager.update_drag(0.0), Effect::None);
        assert_eq!(pager.on_wheel(3.0), Effect::None);
        assert_eq!(pager.current_index(), None);
    }

    #[test]
    fn wheel_down_advances_and_clamps_at_end() {
        let mut pager = Pager::new(3);
        assert_eq!(
            pager.on_wheel(1.0),
            Effect::Focused {
                previous: 0,
                current: 1
            }
        );
        assert!(pager.on_wheel(1.0).focus_changed());
        // Already at the last item: boundary no-op.
        assert_eq!(pager.on_wheel(1.0), Effect::None);
        assert_eq!(pager.current_index(), Some(2));
    }

    #[test]
    fn wheel_up_retreats_and_clamps_at_start() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.on_wheel(-1.0), Effect::None);
        assert_eq!(pager.current_index(), Some(0));

        pager.on_wheel(1.0);
        assert_eq!(
            pager.on_wheel(-1.0),
            Effect::Focused {
                previous: 1,
                current: 0
            }
        );
    }

    #[test]
    fn zero_wheel_delta_is_a_no_op() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.on_wheel(0.0), Effect::None);
    }

    #[test]
    fn wheel_storm_never_leaves_bounds() {
        let mut pager = Pager::new(4);
        let deltas = [3.0, -1.0, 5.0, 5.0, 5.0, 5.0, -2.0, 9.0, -4.0, -4.0, -4.0];
        for delta in deltas {
            pager.on_wheel(delta);
            let index = pager.current_index().expect("non-empty pager has focus");
            assert!(index < 4);
        }
    }

    #[test]
    fn drag_below_threshold_does_not_transition() {
        let mut pager = Pager::new(3);
        pager.begin_drag(200.0);
        assert_eq!(pager.update_drag(160.0), Effect::None);
        assert!(pager.is_dragging());
        pager.end_drag();
        assert_eq!(pager.current_index(), Some(0));
    }

    #[test]
    fn drag_exactly_at_threshold_does_not_transition() {
        let mut pager = Pager::new(3);
        pager.begin_drag(200.0);
        assert_eq!(pager.update_drag(150.0), Effect::None);
        assert!(pager.is_dragging());
    }

    #[test]
    fn swipe_up_advances_once_per_drag() {
        let mut pager = Pager::new(3);
        pager.begin_drag(300.0);
        assert_eq!(
            pager.update_drag(240.0),
            Effect::Focused {
                previous: 0,
                current: 1
            }
        );
        // Gesture disarmed: further movement in the same drag is ignored.
        assert!(!pager.is_dragging());
        assert_eq!(pager.update_drag(100.0), Effect::None);
        assert_eq!(pager.current_index(), Some(1));
    }

    #[test]
    fn swipe_down_retreats() {
        let mut pager = Pager::new(3);
        pager.on_wheel(1.0);

        pager.begin_drag(100.0);
        assert_eq!(
            pager.update_drag(180.0),
            Effect::Focused {
                previous: 1,
                current: 0
            }
        );
    }

    #[test]
    fn swipe_past_boundary_disarms_without_moving() {
        let mut pager = Pager::new(3);
        pager.begin_drag(100.0);
        // Swipe down at the first item: no previous item to go to.
        assert_eq!(pager.update_drag(200.0), Effect::None);
        assert!(!pager.is_dragging());
        assert_eq!(pager.current_index(), Some(0));
    }

    #[test]
    fn end_drag_clears_the_gesture() {
        let mut pager = Pager::new(3);
        pager.begin_drag(100.0);
        pager.end_drag();
        assert!(!pager.is_dragging());
        // Movement after the gesture ended does nothing.
        assert_eq!(pager.update_drag(0.0), Effect::None);
    }

    #[test]
    fn update_without_begin_is_a_no_op() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.update_drag(0.0), Effect::None);
    }

    #[test]
    fn single_item_sequence_never_transitions() {
        let mut pager = Pager::new(1);
        assert_eq!(pager.on_wheel(1.0), Effect::None);
        assert_eq!(pager.on_wheel(-1.0), Effect::None);

        pager.begin_drag(500.0);
        assert_eq!(pager.update_drag(0.0), Effect::None);
        assert_eq!(pager.current_index(), Some(0));
    }
}
