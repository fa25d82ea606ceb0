//! Studio page: who we are.

use iced::Length;
use iced::widget::{column, container, row, scrollable, text};

use crate::constants::page::GUTTER;
use crate::messages::AppMessage;
use crate::state::State;
use crate::theme;

pub fn view(_state: &State) -> iced::Element<'_, AppMessage> {
    let value = |title: &'static str, body: &'static str| {
        container(column![text(title).size(16), text(body).size(14)].spacing(6))
            .style(theme::Container::Card.style())
            .padding(20)
            .width(Length::Fill)
    };

    let content = column![
        text("The studio").size(34),
        text(
            "Nine people, two time zones, one shared dislike of decks that \
             say nothing. We have shipped identities, websites, and films \
             for clients from single-origin roasters to research labs.",
        )
        .size(16),
        row![
            value("Small on purpose", "Every project gets senior hands."),
            value("Shown early", "Work in progress beats work in secret."),
            value("Built to last", "We design systems, not one-offs."),
        ]
        .spacing(24),
    ]
    .spacing(28)
    .padding([40.0, GUTTER])
    .max_width(1100);

    scrollable(content).width(Length::Fill).height(Length::Fill).into()
}
