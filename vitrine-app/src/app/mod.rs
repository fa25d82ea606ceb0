//! Application wiring: builds and runs the iced program.

use iced::{Settings, Size, Task, Theme};

use vitrine_config::Preferences;

use crate::content;
use crate::messages::AppMessage;
use crate::state::State;
use crate::{subscriptions, update, view};

/// Initial window dimensions; also seeds the breakpoint computation before
/// the first resize event arrives.
const INITIAL_WIDTH: f32 = 1280.0;
const INITIAL_HEIGHT: f32 = 720.0;

/// Build and run the Vitrine application.
pub fn run() -> iced::Result {
    iced::application("Vitrine Studio", update::update, view::view)
        .settings(default_settings())
        .window(window_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .run_with(boot)
}

fn boot() -> (State, Task<AppMessage>) {
    let preferences = Preferences::load();
    log::debug!("loaded theme preference: {}", preferences.theme);

    let state = State::new(
        &preferences,
        content::studio_content(),
        INITIAL_WIDTH,
        INITIAL_HEIGHT,
    );

    (state, Task::none())
}

fn default_settings() -> Settings {
    Settings {
        id: Some("vitrine".to_string()),
        antialiasing: true,
        ..Settings::default()
    }
}

fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(INITIAL_WIDTH, INITIAL_HEIGHT),
        min_size: Some(Size::new(480.0, 360.0)),
        resizable: true,
        decorations: true,
        ..iced::window::Settings::default()
    }
}

fn app_theme(state: &State) -> Theme {
    state.theme_choice.theme()
}
