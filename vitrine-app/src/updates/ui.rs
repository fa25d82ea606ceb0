//! Handlers for navigation, theming, and window messages.

use iced::Task;
use vitrine_config::Preferences;

use crate::messages::AppMessage;
use crate::messages::ui::Message;
use crate::state::{Page, State};
use crate::updates::showcase;

pub fn update(state: &mut State, message: Message) -> Task<AppMessage> {
    match message {
        Message::WindowResized(size) => {
            state.window_width = size.width;
            state.testimonials.carousel.handle_resize(size.width);
            state.case_studies.carousel.handle_resize(size.width);
            Task::batch([
                showcase::sync_testimonial_track(state),
                showcase::sync_case_study_track(state),
            ])
        }
        Message::NavigateTo(page) => {
            state.page = page;
            state.nav.drawer_open = false;
            // Freshly shown tracks start at offset zero; nudge them back to
            // the slide the state remembers.
            match page {
                Page::Home => showcase::sync_testimonial_track(state),
                Page::Work => showcase::sync_case_study_track(state),
                _ => Task::none(),
            }
        }
        Message::ToggleNavDrawer => {
            state.nav.drawer_open = !state.nav.drawer_open;
            Task::none()
        }
        Message::CloseNavDrawer => {
            state.nav.drawer_open = false;
            Task::none()
        }
        Message::ToggleTheme => {
            state.theme_choice = state.theme_choice.toggled();
            let preferences = Preferences {
                theme: state.theme_choice.as_str().to_string(),
            };
            if let Err(err) = preferences.save() {
                log::warn!("failed to persist theme preference: {err}");
            }
            Task::none()
        }
        Message::PageScrolled(viewport) => {
            let reveal_line =
                viewport.absolute_offset().y + viewport.bounds().height;
            state.reveal.observe(reveal_line);
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::{Message, update};
    use crate::content::studio_content;
    use crate::state::{Page, State};
    use crate::theme::ThemeChoice;
    use vitrine_config::Preferences;

    fn state() -> State {
        State::new(&Preferences::default(), studio_content(), 1280.0, 720.0)
    }

    #[test]
    fn resize_resets_both_carousels() {
        let mut state = state();
        state.testimonials.carousel.go_to_slide(1);
        state.case_studies.carousel.go_to_slide(2);

        let _ = update(&mut state, Message::WindowResized(Size::new(500.0, 700.0)));

        assert_eq!(state.testimonials.carousel.current_slide(), 0);
        assert_eq!(state.case_studies.carousel.current_slide(), 0);
        assert_eq!(state.testimonials.carousel.cards_per_view(), 1);
        assert_eq!(state.case_studies.carousel.cards_per_view(), 1);
    }

    #[test]
    fn dot_count_tracks_total_slides_after_resize() {
        let mut state = state();
        let _ = update(&mut state, Message::WindowResized(Size::new(500.0, 700.0)));
        assert_eq!(
            state.testimonials.carousel.total_slides(),
            state.content.testimonials.len()
        );
    }

    #[test]
    fn navigation_closes_the_drawer() {
        let mut state = state();
        state.nav.drawer_open = true;
        let _ = update(&mut state, Message::NavigateTo(Page::Work));
        assert_eq!(state.page, Page::Work);
        assert!(!state.nav.drawer_open);
    }

    #[test]
    fn drawer_toggles_and_closes() {
        let mut state = state();
        let _ = update(&mut state, Message::ToggleNavDrawer);
        assert!(state.nav.drawer_open);
        let _ = update(&mut state, Message::CloseNavDrawer);
        assert!(!state.nav.drawer_open);
    }

    #[test]
    fn theme_toggles_between_blue_and_white() {
        let mut state = state();
        assert_eq!(state.theme_choice, ThemeChoice::Blue);
        let _ = update(&mut state, Message::ToggleTheme);
        assert_eq!(state.theme_choice, ThemeChoice::White);
        let _ = update(&mut state, Message::ToggleTheme);
        assert_eq!(state.theme_choice, ThemeChoice::Blue);
    }
}
