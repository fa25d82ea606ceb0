//! Testimonial carousel: circular navigation, autoplay pause on hover, and
//! pointer swipes.

use iced::widget::{Space, column, mouse_area, row, scrollable, text};
use iced::{Alignment, Length};

use crate::messages::{AppMessage, showcase};
use crate::state::State;
use crate::views::{cards, controls};

pub fn view(state: &State) -> iced::Element<'_, AppMessage> {
    let carousel = &state.testimonials.carousel;
    let card_width = carousel.card_width(state.track_width());

    let mut track_row = row![].spacing(carousel.gap);
    for testimonial in &state.content.testimonials {
        track_row =
            track_row.push(cards::testimonial_card(testimonial, card_width));
    }

    let track = scrollable(track_row)
        .id(carousel.track_id.clone())
        .direction(controls::horizontal_track())
        .width(Length::Fill);

    let heading = row![
        text("What clients say").size(28),
        Space::with_width(Length::Fill),
        controls::nav_button(
            "‹",
            carousel
                .can_go_prev()
                .then_some(showcase::Message::TestimonialPrev.into()),
        ),
        Space::with_width(8),
        controls::nav_button(
            "›",
            carousel
                .can_go_next()
                .then_some(showcase::Message::TestimonialNext.into()),
        ),
    ]
    .align_y(Alignment::Center);

    let dots = controls::dot_row(carousel, |index| {
        showcase::Message::TestimonialDot(index).into()
    });

    let content = column![heading, track, dots].spacing(20);

    // The mouse area is the "carousel region": hovering suspends autoplay,
    // and press/release bracket a horizontal swipe.
    mouse_area(content)
        .on_enter(showcase::Message::PointerEntered.into())
        .on_exit(showcase::Message::PointerExited.into())
        .on_move(|point| showcase::Message::PointerMoved(point.x).into())
        .on_press(showcase::Message::PointerPressed.into())
        .on_release(showcase::Message::PointerReleased.into())
        .into()
}
