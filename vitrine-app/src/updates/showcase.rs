//! Handlers for carousel and filter messages.

use iced::Task;

use crate::carousel::SwipeDirection;
use crate::constants::carousel::SWIPE_THRESHOLD;
use crate::messages::AppMessage;
use crate::messages::showcase::Message;
use crate::state::{Page, State};

pub fn update(state: &mut State, message: Message) -> Task<AppMessage> {
    match message {
        Message::TestimonialPrev => {
            state.testimonials.carousel.prev();
            sync_testimonial_track(state)
        }
        Message::TestimonialNext | Message::AutoplayTick => {
            state.testimonials.carousel.next();
            sync_testimonial_track(state)
        }
        Message::TestimonialDot(index) => {
            state.testimonials.carousel.go_to_slide(index);
            sync_testimonial_track(state)
        }
        Message::PointerEntered => {
            state.testimonials.pointer_over = true;
            Task::none()
        }
        Message::PointerExited => {
            state.testimonials.pointer_over = false;
            Task::none()
        }
        Message::PointerMoved(x) => {
            state.testimonials.cursor_x = x;
            Task::none()
        }
        Message::PointerPressed => {
            let anchor = state.testimonials.cursor_x;
            state.testimonials.swipe.begin(anchor);
            Task::none()
        }
        Message::PointerReleased => {
            let end = state.testimonials.cursor_x;
            finish_swipe(state, end)
        }
        Message::TouchBegan(x) => {
            // Touch arrives through the global event stream; it only drives
            // the testimonial carousel while that carousel is on screen.
            if state.page == Page::Home {
                state.testimonials.swipe.begin(x);
            }
            Task::none()
        }
        Message::TouchEnded(x) => {
            if state.page == Page::Home {
                finish_swipe(state, x)
            } else {
                Task::none()
            }
        }
        Message::CaseStudyPrev => {
            state.case_studies.carousel.prev();
            sync_case_study_track(state)
        }
        Message::CaseStudyNext => {
            state.case_studies.carousel.next();
            sync_case_study_track(state)
        }
        Message::CaseStudyDot(index) => {
            state.case_studies.carousel.go_to_slide(index);
            sync_case_study_track(state)
        }
        Message::FilterSelected(filter) => {
            let window_width = state.window_width;
            state.case_studies.apply_filter(
                filter,
                &state.content.case_studies,
                window_width,
            );
            sync_case_study_track(state)
        }
    }
}

fn finish_swipe(state: &mut State, end_x: f32) -> Task<AppMessage> {
    match state.testimonials.swipe.finish(end_x, SWIPE_THRESHOLD) {
        Some(SwipeDirection::Next) => {
            state.testimonials.carousel.next();
            sync_testimonial_track(state)
        }
        Some(SwipeDirection::Prev) => {
            state.testimonials.carousel.prev();
            sync_testimonial_track(state)
        }
        None => Task::none(),
    }
}

/// Scroll the testimonial track to the current slide.
pub fn sync_testimonial_track(state: &State) -> Task<AppMessage> {
    state
        .testimonials
        .carousel
        .scroll_task(state.track_width())
}

/// Scroll the case-study track to the current slide.
pub fn sync_case_study_track(state: &State) -> Task<AppMessage> {
    state
        .case_studies
        .carousel
        .scroll_task(state.track_width())
}

#[cfg(test)]
mod tests {
    use super::{Message, update};
    use crate::content::studio_content;
    use crate::state::{Page, State};
    use vitrine_config::Preferences;
    use vitrine_model::{Category, CategoryFilter};

    fn state() -> State {
        State::new(&Preferences::default(), studio_content(), 1280.0, 720.0)
    }

    #[test]
    fn filter_selects_only_matching_case_studies_in_order() {
        let mut state = state();
        let _ = update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Web)),
        );

        let visible: Vec<_> = state.visible_case_studies().collect();
        assert!(!visible.is_empty());
        assert!(
            visible
                .iter()
                .all(|case_study| case_study.category == Category::Web)
        );

        // Original relative order is preserved.
        let expected: Vec<_> = state
            .content
            .case_studies
            .iter()
            .filter(|case_study| case_study.category == Category::Web)
            .collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn filter_resets_slide_and_regenerates_dots() {
        let mut state = state();
        state.case_studies.carousel.go_to_slide(2);

        let _ = update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Motion)),
        );

        assert_eq!(state.case_studies.carousel.current_slide(), 0);
        let matching = state
            .content
            .case_studies
            .iter()
            .filter(|case_study| case_study.category == Category::Motion)
            .count();
        assert_eq!(
            state.case_studies.carousel.total_slides(),
            matching
                .div_ceil(state.case_studies.carousel.cards_per_view())
                .max(1)
        );
    }

    #[test]
    fn all_filter_restores_full_collection_order() {
        let mut state = state();
        let original: Vec<_> =
            state.content.case_studies.clone();

        let _ = update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Print)),
        );
        let _ = update(
            &mut state,
            Message::FilterSelected(CategoryFilter::All),
        );

        let visible: Vec<_> =
            state.visible_case_studies().cloned().collect();
        assert_eq!(visible, original);
    }

    #[test]
    fn empty_filter_result_is_a_valid_degenerate_state() {
        let mut state = state();
        // Remove every print case study, then filter for it.
        state
            .content
            .case_studies
            .retain(|case_study| case_study.category != Category::Print);

        let _ = update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Print)),
        );

        assert_eq!(state.visible_case_studies().count(), 0);
        assert_eq!(state.case_studies.carousel.total_slides(), 1);
        assert_eq!(state.case_studies.carousel.current_slide(), 0);
        assert!(!state.case_studies.carousel.can_go_prev());
        assert!(!state.case_studies.carousel.can_go_next());
    }

    #[test]
    fn autoplay_tick_advances_circularly() {
        let mut state = state();
        let total = state.testimonials.carousel.total_slides();
        for _ in 0..total {
            let _ = update(&mut state, Message::AutoplayTick);
        }
        assert_eq!(state.testimonials.carousel.current_slide(), 0);
    }

    #[test]
    fn pointer_hover_marks_autoplay_paused() {
        let mut state = state();
        let _ = update(&mut state, Message::PointerEntered);
        assert!(state.testimonials.pointer_over);
        let _ = update(&mut state, Message::PointerExited);
        assert!(!state.testimonials.pointer_over);
    }

    #[test]
    fn mouse_swipe_uses_tracked_cursor_positions() {
        let mut state = state();
        let _ = update(&mut state, Message::PointerMoved(400.0));
        let _ = update(&mut state, Message::PointerPressed);
        let _ = update(&mut state, Message::PointerMoved(340.0));
        let _ = update(&mut state, Message::PointerReleased);
        assert_eq!(state.testimonials.carousel.current_slide(), 1);
    }

    #[test]
    fn sub_threshold_swipe_does_not_navigate() {
        let mut state = state();
        let _ = update(&mut state, Message::TouchBegan(300.0));
        let _ = update(&mut state, Message::TouchEnded(251.0));
        assert_eq!(state.testimonials.carousel.current_slide(), 0);
    }

    #[test]
    fn touch_swipe_navigates_past_threshold() {
        let mut state = state();
        let _ = update(&mut state, Message::TouchBegan(300.0));
        let _ = update(&mut state, Message::TouchEnded(249.0));
        assert_eq!(state.testimonials.carousel.current_slide(), 1);

        let _ = update(&mut state, Message::TouchBegan(249.0));
        let _ = update(&mut state, Message::TouchEnded(300.0));
        assert_eq!(state.testimonials.carousel.current_slide(), 0);
    }

    #[test]
    fn touch_is_ignored_away_from_the_home_page() {
        let mut state = state();
        state.page = Page::Work;
        let _ = update(&mut state, Message::TouchBegan(300.0));
        let _ = update(&mut state, Message::TouchEnded(200.0));
        assert_eq!(state.testimonials.carousel.current_slide(), 0);
    }

    #[test]
    fn case_study_navigation_respects_linear_bounds() {
        let mut state = state();
        let total = state.case_studies.carousel.total_slides();
        for _ in 0..total + 2 {
            let _ = update(&mut state, Message::CaseStudyNext);
        }
        assert_eq!(
            state.case_studies.carousel.current_slide(),
            total - 1
        );
        assert!(!state.case_studies.carousel.can_go_next());
    }
}
