//! Work page: category filter bar and the linear case-study carousel.

use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Length};

use vitrine_model::CategoryFilter;

use crate::constants::page::GUTTER;
use crate::messages::{AppMessage, showcase};
use crate::state::State;
use crate::theme;
use crate::views::{cards, controls};

pub fn view(state: &State) -> iced::Element<'_, AppMessage> {
    let content = column![
        text("Selected work").size(34),
        text("A cross-section of recent projects. Filter by discipline.")
            .size(16),
        filter_bar(state),
        case_study_carousel(state),
    ]
    .spacing(28)
    .padding([40.0, GUTTER]);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn filter_bar(state: &State) -> iced::Element<'_, AppMessage> {
    let mut chips = row![].spacing(10);
    for filter in CategoryFilter::all() {
        chips = chips.push(
            iced::widget::button(text(filter.label()).size(14))
                .on_press(AppMessage::Showcase(
                    showcase::Message::FilterSelected(filter),
                ))
                .padding([6, 14])
                .style(
                    theme::Button::FilterChip {
                        active: state.case_studies.filter == filter,
                    }
                    .style(),
                ),
        );
    }
    chips.into()
}

fn case_study_carousel(state: &State) -> iced::Element<'_, AppMessage> {
    let carousel = &state.case_studies.carousel;
    let track_width = state.track_width();
    let card_width = carousel.card_width(track_width);

    let heading = row![
        text("Case studies").size(24),
        Space::with_width(Length::Fill),
        controls::nav_button(
            "‹",
            carousel
                .can_go_prev()
                .then_some(showcase::Message::CaseStudyPrev.into()),
        ),
        Space::with_width(8),
        controls::nav_button(
            "›",
            carousel
                .can_go_next()
                .then_some(showcase::Message::CaseStudyNext.into()),
        ),
    ]
    .align_y(Alignment::Center);

    let track: iced::Element<'_, AppMessage> = if state
        .case_studies
        .visible
        .is_empty()
    {
        // A zero-match filter still renders a valid single empty slide.
        container(text("No case studies in this discipline yet.").size(15))
            .style(theme::Container::EmptyTrack.style())
            .width(Length::Fill)
            .padding(48)
            .center_x(Length::Fill)
            .into()
    } else {
        // One fixed-width page per slide keeps the page-offset math exact:
        // the track moves by whole track widths.
        let visible: Vec<_> = state.visible_case_studies().collect();
        let mut pages = row![];
        for chunk in visible.chunks(carousel.cards_per_view()) {
            let mut page_row = row![].spacing(carousel.gap);
            for &case_study in chunk {
                page_row =
                    page_row.push(cards::case_study_card(case_study, card_width));
            }
            pages = pages
                .push(container(page_row).width(Length::Fixed(track_width)));
        }

        scrollable(pages)
            .id(carousel.track_id.clone())
            .direction(controls::horizontal_track())
            .width(Length::Fill)
            .into()
    };

    let dots = controls::dot_row(carousel, |index| {
        showcase::Message::CaseStudyDot(index).into()
    });

    column![heading, track, dots]
        .spacing(20)
        .width(Length::Fill)
        .into()
}
