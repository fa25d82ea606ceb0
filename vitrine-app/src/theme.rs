//! Theme palettes and widget styles.
//!
//! Vitrine ships two themes: the default deep-blue brand look and a white
//! variant. The stored preference is a plain string; anything other than
//! `"white"` resolves to blue, so stale or unknown values never break
//! startup.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// The persisted theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Blue,
    White,
}

impl ThemeChoice {
    // Brand colors shared by both palettes
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.0, 0.5, 1.0); // #0080FF
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4); // #00CC66
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // #FF3333

    // Blue palette
    const BLUE_BACKGROUND: Color = Color::from_rgb(0.043, 0.071, 0.125); // #0B1220
    const BLUE_TEXT: Color = Color::from_rgb(0.949, 0.961, 0.980); // #F2F5FA

    // White palette
    const WHITE_BACKGROUND: Color = Color::from_rgb(0.969, 0.973, 0.980); // #F7F8FA
    const WHITE_TEXT: Color = Color::from_rgb(0.086, 0.129, 0.243); // #16213E

    /// Resolve a stored preference string. Unknown values fall back to the
    /// blue default rather than failing.
    pub fn from_stored(value: &str) -> Self {
        if value == "white" {
            ThemeChoice::White
        } else {
            ThemeChoice::Blue
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Blue => "blue",
            ThemeChoice::White => "white",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeChoice::Blue => ThemeChoice::White,
            ThemeChoice::White => ThemeChoice::Blue,
        }
    }

    /// Label for the toggle control, naming the theme a press switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeChoice::Blue => "Switch to white theme",
            ThemeChoice::White => "Switch to blue theme",
        }
    }

    fn palette(&self) -> Palette {
        match self {
            ThemeChoice::Blue => Palette {
                background: Self::BLUE_BACKGROUND,
                text: Self::BLUE_TEXT,
                primary: Self::ACCENT_BLUE,
                success: Self::SUCCESS,
                danger: Self::ERROR,
            },
            ThemeChoice::White => Palette {
                background: Self::WHITE_BACKGROUND,
                text: Self::WHITE_TEXT,
                primary: Self::ACCENT_BLUE,
                success: Self::SUCCESS,
                danger: Self::ERROR,
            },
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::custom(format!("Vitrine {}", self.as_str()), self.palette())
    }
}

// Container styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Container {
    Header,
    Card,
    Badge,
    Drawer,
    Overlay,
    EmptyTrack,
    RevealedSection,
    HiddenSection,
}

impl Container {
    pub fn style(self) -> impl Fn(&Theme) -> container::Style {
        move |theme: &Theme| {
            let palette = theme.extended_palette();
            match self {
                Container::Header => container::Style {
                    text_color: Some(palette.background.base.text),
                    background: Some(Background::Color(
                        palette.background.weak.color,
                    )),
                    border: Border::default(),
                    shadow: Shadow::default(),
                },
                Container::Card => container::Style {
                    text_color: Some(palette.background.base.text),
                    background: Some(Background::Color(
                        palette.background.weak.color,
                    )),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow::default(),
                },
                Container::Badge => container::Style {
                    text_color: Some(palette.primary.weak.text),
                    background: Some(Background::Color(
                        palette.primary.weak.color,
                    )),
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 10.0.into(),
                    },
                    shadow: Shadow::default(),
                },
                Container::Drawer => container::Style {
                    text_color: Some(palette.background.base.text),
                    background: Some(Background::Color(
                        palette.background.base.color,
                    )),
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 0.0.into(),
                    },
                    shadow: Shadow::default(),
                },
                Container::Overlay => container::Style {
                    text_color: None,
                    background: Some(Background::Color(Color {
                        a: 0.55,
                        ..Color::BLACK
                    })),
                    border: Border::default(),
                    shadow: Shadow::default(),
                },
                Container::EmptyTrack => container::Style {
                    text_color: Some(palette.background.strong.text),
                    background: None,
                    border: Border {
                        color: palette.background.strong.color,
                        width: 1.0,
                        radius: 8.0.into(),
                    },
                    shadow: Shadow::default(),
                },
                Container::RevealedSection => container::Style {
                    text_color: Some(palette.background.base.text),
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                },
                // No animation engine: unrevealed sections simply render
                // with dimmed text until the scroll position reaches them.
                Container::HiddenSection => container::Style {
                    text_color: Some(Color {
                        a: 0.25,
                        ..palette.background.base.text
                    }),
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                },
            }
        }
    }
}

// Button styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    NavTab { active: bool },
    FilterChip { active: bool },
    CarouselNav,
    Dot { active: bool },
    HeaderIcon,
}

impl Button {
    pub fn style(self) -> impl Fn(&Theme, button::Status) -> button::Style {
        move |theme: &Theme, status: button::Status| {
            let palette = theme.extended_palette();
            match self {
                Button::Primary => {
                    let background = match status {
                        button::Status::Hovered => palette.primary.strong.color,
                        _ => palette.primary.base.color,
                    };
                    button::Style {
                        background: Some(Background::Color(background)),
                        text_color: palette.primary.base.text,
                        border: Border {
                            radius: 6.0.into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    }
                }
                Button::NavTab { active } => {
                    let text_color = if active {
                        palette.primary.base.color
                    } else {
                        palette.background.base.text
                    };
                    button::Style {
                        background: match status {
                            button::Status::Hovered => Some(Background::Color(
                                palette.background.weak.color,
                            )),
                            _ => None,
                        },
                        text_color,
                        border: Border {
                            radius: 6.0.into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    }
                }
                Button::FilterChip { active } => {
                    let (background, text_color) = if active {
                        (palette.primary.base.color, palette.primary.base.text)
                    } else {
                        match status {
                            button::Status::Hovered => (
                                palette.background.strong.color,
                                palette.background.base.text,
                            ),
                            _ => (
                                palette.background.weak.color,
                                palette.background.base.text,
                            ),
                        }
                    };
                    button::Style {
                        background: Some(Background::Color(background)),
                        text_color,
                        border: Border {
                            radius: 16.0.into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    }
                }
                Button::CarouselNav => match status {
                    button::Status::Disabled => button::Style {
                        background: Some(Background::Color(
                            palette.background.weak.color,
                        )),
                        text_color: palette.background.strong.text,
                        border: Border {
                            radius: 6.0.into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    },
                    button::Status::Hovered => button::Style {
                        background: Some(Background::Color(
                            palette.background.strong.color,
                        )),
                        text_color: palette.background.base.text,
                        border: Border {
                            radius: 6.0.into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    },
                    _ => button::Style {
                        background: Some(Background::Color(
                            palette.background.weak.color,
                        )),
                        text_color: palette.background.base.text,
                        border: Border {
                            radius: 6.0.into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    },
                },
                Button::Dot { active } => {
                    let color = if active {
                        palette.primary.base.color
                    } else {
                        palette.background.strong.color
                    };
                    button::Style {
                        background: Some(Background::Color(color)),
                        text_color: palette.background.base.text,
                        border: Border {
                            radius: 5.0.into(),
                            ..Border::default()
                        },
                        shadow: Shadow::default(),
                    }
                }
                Button::HeaderIcon => button::Style {
                    background: match status {
                        button::Status::Hovered => Some(Background::Color(
                            palette.background.strong.color,
                        )),
                        _ => None,
                    },
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    shadow: Shadow::default(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeChoice;

    #[test]
    fn toggling_twice_returns_to_the_default() {
        let start = ThemeChoice::default();
        assert_eq!(start, ThemeChoice::Blue);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn stored_strings_round_trip() {
        for choice in [ThemeChoice::Blue, ThemeChoice::White] {
            assert_eq!(ThemeChoice::from_stored(choice.as_str()), choice);
        }
    }

    #[test]
    fn unknown_stored_value_falls_back_to_blue() {
        assert_eq!(ThemeChoice::from_stored("mauve"), ThemeChoice::Blue);
        assert_eq!(ThemeChoice::from_stored(""), ThemeChoice::Blue);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(
            ThemeChoice::Blue.toggle_label(),
            "Switch to white theme"
        );
        assert_eq!(
            ThemeChoice::White.toggle_label(),
            "Switch to blue theme"
        );
    }
}
