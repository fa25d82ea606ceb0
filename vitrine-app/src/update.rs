//! Root-level update routing.

use iced::Task;

use crate::messages::AppMessage;
use crate::state::State;
use crate::updates;

/// Routes a message to its domain handler.
pub fn update(state: &mut State, message: AppMessage) -> Task<AppMessage> {
    log::trace!("handling {}", message.name());

    match message {
        AppMessage::Ui(message) => updates::ui::update(state, message),
        AppMessage::Showcase(message) => {
            updates::showcase::update(state, message)
        }
    }
}
