//! Home page: hero, services, testimonials, and a contact banner, each
//! revealed as the page scrolls down to it.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Length};

use crate::constants::page::{GUTTER, SECTION_SPACING};
use crate::messages::{AppMessage, ui};
use crate::state::{HomeSection, Page, State};
use crate::theme;
use crate::views::testimonials;

pub fn view(state: &State) -> iced::Element<'_, AppMessage> {
    let sections = column![
        reveal(state, HomeSection::Hero, hero()),
        reveal(state, HomeSection::Services, services()),
        reveal(state, HomeSection::Testimonials, testimonials::view(state)),
        reveal(state, HomeSection::Contact, contact_banner()),
    ]
    .spacing(SECTION_SPACING)
    .padding([40.0, GUTTER]);

    scrollable(sections)
        .on_scroll(|viewport| {
            AppMessage::Ui(ui::Message::PageScrolled(viewport))
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Wrap a section so it renders dimmed until the scroll position reaches
/// it; once revealed it stays revealed.
fn reveal<'a>(
    state: &State,
    section: HomeSection,
    content: iced::Element<'a, AppMessage>,
) -> iced::Element<'a, AppMessage> {
    let style = if state.reveal.is_revealed(section) {
        theme::Container::RevealedSection
    } else {
        theme::Container::HiddenSection
    };

    container(content).style(style.style()).width(Length::Fill).into()
}

fn hero() -> iced::Element<'static, AppMessage> {
    column![
        text("Design that earns its keep.").size(42),
        text(
            "Vitrine is a small studio for brands, websites, and films that \
             do a real job of work. We keep teams small and opinions strong.",
        )
        .size(17),
        button(text("See the work").size(15))
            .on_press(AppMessage::Ui(ui::Message::NavigateTo(Page::Work)))
            .padding([10, 18])
            .style(theme::Button::Primary.style()),
    ]
    .spacing(18)
    .max_width(760)
    .into()
}

fn services() -> iced::Element<'static, AppMessage> {
    let service = |title: &'static str, body: &'static str| {
        container(column![text(title).size(18), text(body).size(14)].spacing(8))
            .style(theme::Container::Card.style())
            .padding(20)
            .width(Length::Fill)
    };

    column![
        text("What we do").size(28),
        row![
            service(
                "Identity",
                "Naming, brand systems, and guidelines teams actually use.",
            ),
            service(
                "Digital",
                "Marketing sites and product surfaces, designed and built.",
            ),
            service(
                "Motion",
                "Launch films, exhibit loops, and everything that moves.",
            ),
        ]
        .spacing(24),
    ]
    .spacing(20)
    .into()
}

fn contact_banner() -> iced::Element<'static, AppMessage> {
    column![
        text("Have a project in mind?").size(28),
        text("Tell us what you are making and where it is stuck.").size(15),
        button(text("Start a conversation").size(15))
            .on_press(AppMessage::Ui(ui::Message::NavigateTo(Page::Contact)))
            .padding([10, 18])
            .style(theme::Button::Primary.style()),
    ]
    .spacing(14)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}
