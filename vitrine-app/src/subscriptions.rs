//! Root-level subscription composition.

use iced::{Subscription, keyboard, touch};

use crate::constants::carousel::AUTOPLAY_INTERVAL;
use crate::messages::{AppMessage, showcase, ui};
use crate::state::{Page, State};

/// Composes all subscriptions into a single batch.
pub fn subscription(state: &State) -> Subscription<AppMessage> {
    let mut subscriptions = vec![
        // Always track window resizes; breakpoints depend on them.
        iced::window::resize_events()
            .map(|(_id, size)| AppMessage::Ui(ui::Message::WindowResized(size))),
        keyboard::on_key_press(handle_key_press),
        iced::event::listen_with(handle_event),
    ];

    // The autoplay timer exists only while the testimonial carousel is on
    // screen and the pointer is outside it. Pausing removes the
    // subscription entirely, so the pending tick is cancelled rather than
    // deferred, and there is never more than one timer.
    if state.page == Page::Home && !state.testimonials.pointer_over {
        subscriptions.push(
            iced::time::every(AUTOPLAY_INTERVAL)
                .map(|_| AppMessage::Showcase(showcase::Message::AutoplayTick)),
        );
    }

    Subscription::batch(subscriptions)
}

fn handle_key_press(
    key: keyboard::Key,
    _modifiers: keyboard::Modifiers,
) -> Option<AppMessage> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            Some(AppMessage::Ui(ui::Message::CloseNavDrawer))
        }
        _ => None,
    }
}

fn handle_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<AppMessage> {
    match event {
        iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(AppMessage::Showcase(showcase::Message::TouchBegan(
                position.x,
            )))
        }
        iced::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(AppMessage::Showcase(showcase::Message::TouchEnded(
                position.x,
            )))
        }
        _ => None,
    }
}
