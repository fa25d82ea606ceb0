//! Compact-width navigation drawer and its dimming overlay.

use iced::widget::{Space, Stack, button, column, container, mouse_area, row, text};
use iced::{Alignment, Length};

use crate::constants::drawer::WIDTH;
use crate::messages::{AppMessage, ui};
use crate::state::{Page, State};
use crate::theme;

/// The overlay layer stacked above the page while the drawer is open.
/// Clicking the scrim, the close control, or any link closes the drawer.
pub fn overlay(state: &State) -> iced::Element<'_, AppMessage> {
    let scrim = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::Container::Overlay.style()),
    )
    .on_press(AppMessage::Ui(ui::Message::CloseNavDrawer));

    let close = button(text("✕").size(16))
        .on_press(AppMessage::Ui(ui::Message::CloseNavDrawer))
        .padding([4, 10])
        .style(theme::Button::HeaderIcon.style());

    let mut links = column![].spacing(4);
    for page in Page::all() {
        links = links.push(
            button(text(page.label()).size(16))
                .on_press(AppMessage::Ui(ui::Message::NavigateTo(*page)))
                .padding([8, 12])
                .width(Length::Fill)
                .style(
                    theme::Button::NavTab {
                        active: state.page == *page,
                    }
                    .style(),
                ),
        );
    }

    let panel = container(
        column![
            row![Space::with_width(Length::Fill), close]
                .align_y(Alignment::Center),
            Space::with_height(12),
            links,
        ],
    )
    .style(theme::Container::Drawer.style())
    .width(Length::Fixed(WIDTH))
    .height(Length::Fill)
    .padding(16);

    Stack::new()
        .push(scrim)
        .push(
            row![Space::with_width(Length::Fill), panel]
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
