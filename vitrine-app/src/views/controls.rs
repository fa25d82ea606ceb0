//! Shared carousel controls: navigation buttons, indicator dots, and the
//! hidden-scrollbar track direction.

use iced::Length;
use iced::widget::{Space, button, container, row, scrollable, text};

use crate::carousel::CarouselState;
use crate::constants::carousel::DOT_SIZE;
use crate::messages::AppMessage;
use crate::theme;

/// Horizontal track with the scrollbar fully hidden; the track is moved
/// programmatically, not by the user.
pub fn horizontal_track() -> scrollable::Direction {
    scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new().width(0).scroller_width(0),
    )
}

/// A prev/next arrow. Passing `None` renders the disabled state.
pub fn nav_button(
    glyph: &'static str,
    on_press: Option<AppMessage>,
) -> iced::Element<'static, AppMessage> {
    button(text(glyph).size(20))
        .on_press_maybe(on_press)
        .padding([4, 12])
        .style(theme::Button::CarouselNav.style())
        .into()
}

/// One indicator dot per slide, with the active one highlighted. The row is
/// rebuilt from the carousel state on every render, so the dot count always
/// matches the slide count.
pub fn dot_row(
    carousel: &CarouselState,
    on_select: impl Fn(usize) -> AppMessage,
) -> iced::Element<'static, AppMessage> {
    let mut dots = row![].spacing(8);
    for index in 0..carousel.total_slides() {
        let active = index == carousel.current_slide();
        dots = dots.push(
            button(Space::new(0, 0))
                .width(Length::Fixed(DOT_SIZE))
                .height(Length::Fixed(DOT_SIZE))
                .padding(0)
                .style(theme::Button::Dot { active }.style())
                .on_press(on_select(index)),
        );
    }

    container(dots).width(Length::Fill).center_x(Length::Fill).into()
}
