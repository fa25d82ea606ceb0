//! Routed application messages.
//!
//! Messages are grouped per concern and routed through [`AppMessage`], so
//! update handlers and subscriptions stay scoped to their own enum.

pub mod showcase;
pub mod ui;

/// The main message router.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Navigation, theming, window and page-scroll concerns.
    Ui(ui::Message),

    /// Carousel and filter concerns.
    Showcase(showcase::Message),
}

// Automatic routing from domain messages
impl From<ui::Message> for AppMessage {
    fn from(message: ui::Message) -> Self {
        AppMessage::Ui(message)
    }
}

impl From<showcase::Message> for AppMessage {
    fn from(message: showcase::Message) -> Self {
        AppMessage::Showcase(message)
    }
}

impl AppMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ui(message) => message.name(),
            Self::Showcase(message) => message.name(),
        }
    }
}
