//! Root view composition.

use iced::Length;
use iced::widget::{Stack, column};

use crate::messages::AppMessage;
use crate::state::{Page, State};
use crate::views;

/// Composes the header, the active page, and the drawer overlay.
pub fn view(state: &State) -> iced::Element<'_, AppMessage> {
    let page = match state.page {
        Page::Home => views::home::view(state),
        Page::Work => views::work::view(state),
        Page::Studio => views::studio::view(state),
        Page::Contact => views::contact::view(state),
    };

    let base = column![views::header::view(state), page]
        .width(Length::Fill)
        .height(Length::Fill);

    if state.nav.drawer_open {
        Stack::new()
            .push(base)
            .push(views::drawer::overlay(state))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        base.into()
    }
}
