//! Contact page.

use iced::Length;
use iced::widget::{column, scrollable, text};

use crate::constants::page::GUTTER;
use crate::messages::AppMessage;
use crate::state::State;

pub fn view(_state: &State) -> iced::Element<'_, AppMessage> {
    let content = column![
        text("Say hello").size(34),
        text("We read everything sent to hello@vitrine.studio.").size(16),
        text(
            "Tell us about the project, the timeline, and what success \
             looks like in a year. Short briefs welcome; honest ones \
             preferred.",
        )
        .size(15),
    ]
    .spacing(18)
    .padding([40.0, GUTTER])
    .max_width(760);

    scrollable(content).width(Length::Fill).height(Length::Fill).into()
}
