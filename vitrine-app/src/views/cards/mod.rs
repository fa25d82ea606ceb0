//! Card components for the testimonial and case-study carousels.

use iced::widget::{Space, column, container, row, text};
use iced::{Length, Theme};

use vitrine_model::{CaseStudy, Testimonial};

use crate::messages::AppMessage;
use crate::theme;

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

pub fn testimonial_card(
    testimonial: &Testimonial,
    width: f32,
) -> iced::Element<'_, AppMessage> {
    container(
        column![
            text(format!("\u{201c}{}\u{201d}", testimonial.quote)).size(15),
            Space::with_height(Length::Fill),
            text(testimonial.author.as_str()).size(14),
            text(testimonial.role.as_str()).size(12).style(muted),
        ]
        .spacing(8),
    )
    .style(theme::Container::Card.style())
    .padding(24)
    .width(Length::Fixed(width))
    .height(Length::Fixed(220.0))
    .into()
}

pub fn case_study_card(
    case_study: &CaseStudy,
    width: f32,
) -> iced::Element<'_, AppMessage> {
    let badge = container(text(case_study.category.label()).size(12))
        .padding([2, 10])
        .style(theme::Container::Badge.style());

    container(
        column![
            row![badge, Space::with_width(Length::Fill)],
            text(case_study.title.as_str()).size(18),
            text(case_study.client.as_str()).size(13).style(muted),
            Space::with_height(4),
            text(case_study.summary.as_str()).size(14),
        ]
        .spacing(8),
    )
    .style(theme::Container::Card.style())
    .padding(24)
    .width(Length::Fixed(width))
    .height(Length::Fixed(240.0))
    .into()
}
