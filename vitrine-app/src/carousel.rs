//! Slide-index carousel engine shared by the testimonial and case-study
//! sections.
//!
//! A carousel owns its slide index and viewport-derived cards-per-view; the
//! views derive everything else (dots, disabled controls, track offsets)
//! from it, so the invariants live in one place:
//!
//! - `1 <= cards_per_view <= 3`
//! - `total_slides >= 1`, even for an empty track
//! - `0 <= current_slide < total_slides`

use iced::widget::scrollable;

/// Behavior at the first/last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Wrap from the last slide back to the first and vice versa.
    Circular,
    /// Stop at the boundaries; the view disables the blocked control.
    Linear,
}

/// How the horizontal track offset is computed from the slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMode {
    /// Advance by whole cards: `slide * (card_width + gap) * cards_per_view`.
    PerCard,
    /// Advance by whole pages: `slide * track_width`.
    PerPage,
}

/// Window-width thresholds mapping to cards per slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub two_up: f32,
    pub three_up: f32,
}

impl Breakpoints {
    /// Number of cards shown side by side at `width`.
    ///
    /// Pure function of the width; always in `{1, 2, 3}` and monotone
    /// non-decreasing as the window grows.
    pub fn cards_per_view(&self, width: f32) -> usize {
        if width >= self.three_up {
            3
        } else if width >= self.two_up {
            2
        } else {
            1
        }
    }
}

/// Swipe direction resolved from a completed horizontal gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Tracks the horizontal start position of an in-flight pointer gesture.
///
/// Only the start and end positions matter; vertical motion is not
/// evaluated and sub-threshold travel resolves to `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Complete the gesture, resolving it to a navigation step if the
    /// travel exceeded the threshold. Clears the tracker either way.
    pub fn finish(&mut self, x: f32, threshold: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta.abs() > threshold {
            if delta > 0.0 {
                Some(SwipeDirection::Next)
            } else {
                Some(SwipeDirection::Prev)
            }
        } else {
            None
        }
    }
}

/// State for one carousel instance.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Scrollable widget ID for programmatic track scrolling.
    pub track_id: scrollable::Id,
    /// Boundary behavior of `next()`/`prev()`.
    pub wrap: WrapMode,
    /// Track offset strategy.
    pub offset: OffsetMode,
    /// Width thresholds for the cards-per-view computation.
    pub breakpoints: Breakpoints,
    /// Gap between adjacent cards in the track.
    pub gap: f32,
    visible_count: usize,
    cards_per_view: usize,
    current_slide: usize,
}

impl CarouselState {
    pub fn new(
        track_id: scrollable::Id,
        wrap: WrapMode,
        offset: OffsetMode,
        breakpoints: Breakpoints,
        gap: f32,
        visible_count: usize,
        window_width: f32,
    ) -> Self {
        Self {
            track_id,
            wrap,
            offset,
            breakpoints,
            gap,
            visible_count,
            cards_per_view: breakpoints.cards_per_view(window_width),
            current_slide: 0,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of slides; at least one even when the track is empty, so an
    /// empty filter result still renders a valid (degenerate) carousel.
    pub fn total_slides(&self) -> usize {
        self.visible_count.div_ceil(self.cards_per_view).max(1)
    }

    /// Jump to `index`, silently clamped into `[0, total_slides - 1]`.
    pub fn go_to_slide(&mut self, index: usize) {
        self.current_slide = index.min(self.total_slides() - 1);
    }

    pub fn next(&mut self) {
        let total = self.total_slides();
        let target = match self.wrap {
            WrapMode::Circular => (self.current_slide + 1) % total,
            WrapMode::Linear => self.current_slide + 1,
        };
        self.go_to_slide(target);
    }

    pub fn prev(&mut self) {
        let total = self.total_slides();
        let target = match self.wrap {
            WrapMode::Circular => (self.current_slide + total - 1) % total,
            WrapMode::Linear => self.current_slide.saturating_sub(1),
        };
        self.go_to_slide(target);
    }

    /// Whether the "previous" control is usable. Always true for circular
    /// carousels; false at the first slide of a linear one.
    pub fn can_go_prev(&self) -> bool {
        match self.wrap {
            WrapMode::Circular => true,
            WrapMode::Linear => self.current_slide > 0,
        }
    }

    /// Whether the "next" control is usable. Always true for circular
    /// carousels; false at the last slide of a linear one.
    pub fn can_go_next(&self) -> bool {
        match self.wrap {
            WrapMode::Circular => true,
            WrapMode::Linear => self.current_slide + 1 < self.total_slides(),
        }
    }

    /// Recompute cards-per-view for a new window width and return to the
    /// first slide.
    pub fn handle_resize(&mut self, window_width: f32) {
        self.cards_per_view = self.breakpoints.cards_per_view(window_width);
        self.current_slide = 0;
    }

    /// Replace the visible card count (after a filter change) and return to
    /// the first slide.
    pub fn set_visible_count(&mut self, visible_count: usize) {
        self.visible_count = visible_count;
        self.current_slide = 0;
    }

    /// Width of one card laid out in a track of `track_width`.
    pub fn card_width(&self, track_width: f32) -> f32 {
        let per_view = self.cards_per_view as f32;
        ((track_width - self.gap * (per_view - 1.0)) / per_view).max(0.0)
    }

    /// Horizontal offset of the track for the current slide.
    pub fn track_offset(&self, track_width: f32) -> f32 {
        let slide = self.current_slide as f32;
        match self.offset {
            OffsetMode::PerCard => {
                let step = self.card_width(track_width) + self.gap;
                slide * step * self.cards_per_view as f32
            }
            OffsetMode::PerPage => slide * track_width,
        }
    }

    /// The scroll command that moves the track to the current slide.
    pub fn scroll_task<Message: Send + 'static>(
        &self,
        track_width: f32,
    ) -> iced::Task<Message> {
        scrollable::scroll_to(
            self.track_id.clone(),
            scrollable::AbsoluteOffset {
                x: self.track_offset(track_width),
                y: 0.0,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Breakpoints, CarouselState, OffsetMode, SwipeDirection, SwipeTracker,
        WrapMode,
    };
    use iced::widget::scrollable;

    const TESTIMONIAL_BREAKPOINTS: Breakpoints = Breakpoints {
        two_up: 768.0,
        three_up: 1024.0,
    };

    fn circular(visible: usize, width: f32) -> CarouselState {
        CarouselState::new(
            scrollable::Id::unique(),
            WrapMode::Circular,
            OffsetMode::PerCard,
            TESTIMONIAL_BREAKPOINTS,
            24.0,
            visible,
            width,
        )
    }

    fn linear(visible: usize, width: f32) -> CarouselState {
        CarouselState::new(
            scrollable::Id::unique(),
            WrapMode::Linear,
            OffsetMode::PerPage,
            Breakpoints {
                two_up: 768.0,
                three_up: 1100.0,
            },
            24.0,
            visible,
            width,
        )
    }

    #[test]
    fn cards_per_view_is_bounded_and_monotone() {
        let mut last = 0;
        for width in (0..2000).step_by(10) {
            let per_view =
                TESTIMONIAL_BREAKPOINTS.cards_per_view(width as f32);
            assert!((1..=3).contains(&per_view));
            assert!(per_view >= last);
            last = per_view;
        }
    }

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(TESTIMONIAL_BREAKPOINTS.cards_per_view(767.9), 1);
        assert_eq!(TESTIMONIAL_BREAKPOINTS.cards_per_view(768.0), 2);
        assert_eq!(TESTIMONIAL_BREAKPOINTS.cards_per_view(1024.0), 3);

        let case_study = Breakpoints {
            two_up: 768.0,
            three_up: 1100.0,
        };
        assert_eq!(case_study.cards_per_view(1024.0), 2);
        assert_eq!(case_study.cards_per_view(1100.0), 3);
    }

    #[test]
    fn total_slides_is_at_least_one() {
        let state = circular(0, 1280.0);
        assert_eq!(state.total_slides(), 1);
        assert_eq!(state.current_slide(), 0);

        let state = circular(7, 1280.0);
        // 7 cards, 3 per view
        assert_eq!(state.total_slides(), 3);
    }

    #[test]
    fn go_to_slide_clamps_out_of_range_input() {
        let mut state = circular(6, 1280.0);
        state.go_to_slide(99);
        assert_eq!(state.current_slide(), state.total_slides() - 1);
        state.go_to_slide(0);
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn go_to_slide_is_idempotent() {
        let mut state = circular(6, 800.0);
        state.go_to_slide(2);
        let first_offset = state.track_offset(720.0);
        let first_slide = state.current_slide();
        state.go_to_slide(2);
        assert_eq!(state.track_offset(720.0), first_offset);
        assert_eq!(state.current_slide(), first_slide);
    }

    #[test]
    fn circular_next_wraps_back_to_start() {
        let mut state = circular(6, 1280.0);
        let total = state.total_slides();
        for _ in 0..total {
            state.next();
        }
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn circular_prev_wraps_to_last_slide() {
        let mut state = circular(6, 1280.0);
        state.prev();
        assert_eq!(state.current_slide(), state.total_slides() - 1);
    }

    #[test]
    fn linear_prev_at_first_slide_is_a_no_op() {
        let mut state = linear(6, 1280.0);
        assert!(!state.can_go_prev());
        state.prev();
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn linear_next_stops_at_last_slide() {
        let mut state = linear(4, 1280.0);
        let total = state.total_slides();
        for _ in 0..total + 3 {
            state.next();
        }
        assert_eq!(state.current_slide(), total - 1);
        assert!(!state.can_go_next());
        assert!(state.can_go_prev());
    }

    #[test]
    fn resize_recomputes_cards_per_view_and_resets_slide() {
        let mut state = circular(6, 1280.0);
        state.go_to_slide(1);
        state.handle_resize(500.0);
        assert_eq!(state.cards_per_view(), 1);
        assert_eq!(state.current_slide(), 0);
        // The card count itself is untouched by a resize.
        assert_eq!(state.visible_count(), 6);
        assert_eq!(state.total_slides(), 6);
    }

    #[test]
    fn empty_track_keeps_invariants_through_navigation() {
        let mut state = linear(0, 1280.0);
        state.next();
        state.prev();
        state.go_to_slide(5);
        assert_eq!(state.total_slides(), 1);
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn per_card_offset_steps_by_card_and_gap_times_cards_per_view() {
        let mut state = circular(6, 800.0); // 2 per view
        state.go_to_slide(1);
        let track_width = 720.0;
        let card = state.card_width(track_width);
        assert_eq!(state.track_offset(track_width), (card + 24.0) * 2.0);
    }

    #[test]
    fn per_page_offset_steps_by_track_width() {
        let mut state = linear(8, 1280.0);
        state.go_to_slide(2);
        assert_eq!(state.track_offset(1000.0), 2000.0);
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(251.0, 50.0), None);
    }

    #[test]
    fn swipe_past_threshold_resolves_direction() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(249.0, 50.0), Some(SwipeDirection::Next));

        tracker.begin(300.0);
        assert_eq!(tracker.finish(351.0, 50.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn swipe_finish_without_begin_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(100.0, 50.0), None);
    }
}
