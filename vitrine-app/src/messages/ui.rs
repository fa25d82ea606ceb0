//! Messages for navigation, theming, and window concerns.

use iced::Size;
use iced::widget::scrollable;

use crate::state::Page;

#[derive(Debug, Clone)]
pub enum Message {
    /// The window was resized; both carousels recompute their layout.
    WindowResized(Size),

    /// A navigation tab or drawer link was activated.
    NavigateTo(Page),

    /// The compact-width navigation toggle was pressed.
    ToggleNavDrawer,

    /// The drawer close control, its overlay, or Escape was pressed.
    CloseNavDrawer,

    /// The theme toggle was pressed.
    ToggleTheme,

    /// The home page scrolled; drives section reveals.
    PageScrolled(scrollable::Viewport),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::WindowResized(_) => "Ui::WindowResized",
            Self::NavigateTo(_) => "Ui::NavigateTo",
            Self::ToggleNavDrawer => "Ui::ToggleNavDrawer",
            Self::CloseNavDrawer => "Ui::CloseNavDrawer",
            Self::ToggleTheme => "Ui::ToggleTheme",
            Self::PageScrolled(_) => "Ui::PageScrolled",
        }
    }
}
