//! Top navigation bar: brand mark, page tabs (or the drawer toggle at
//! compact widths), and the theme toggle.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Length};

use crate::constants::header::HEIGHT;
use crate::messages::{AppMessage, ui};
use crate::state::{Page, State};
use crate::theme;

pub fn view(state: &State) -> iced::Element<'_, AppMessage> {
    let brand = text("Vitrine").size(20);

    let theme_toggle = button(
        text(state.theme_choice.toggle_label()).size(13),
    )
    .on_press(AppMessage::Ui(ui::Message::ToggleTheme))
    .padding([6, 12])
    .style(theme::Button::HeaderIcon.style());

    let bar = if state.is_compact() {
        let menu_toggle = button(text("☰").size(18))
            .on_press(AppMessage::Ui(ui::Message::ToggleNavDrawer))
            .padding([4, 10])
            .style(theme::Button::HeaderIcon.style());

        row![
            brand,
            Space::with_width(Length::Fill),
            theme_toggle,
            Space::with_width(8),
            menu_toggle,
        ]
        .align_y(Alignment::Center)
    } else {
        let mut tabs = row![].spacing(4);
        for page in Page::all() {
            tabs = tabs.push(nav_tab(*page, state.page == *page));
        }

        row![
            brand,
            Space::with_width(Length::Fill),
            tabs,
            Space::with_width(16),
            theme_toggle,
        ]
        .align_y(Alignment::Center)
    };

    container(bar)
        .style(theme::Container::Header.style())
        .width(Length::Fill)
        .height(Length::Fixed(HEIGHT))
        .padding([0, 16])
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

fn nav_tab(page: Page, active: bool) -> iced::Element<'static, AppMessage> {
    button(text(page.label()).size(14))
        .on_press(AppMessage::Ui(ui::Message::NavigateTo(page)))
        .padding([6, 12])
        .style(theme::Button::NavTab { active }.style())
        .into()
}
