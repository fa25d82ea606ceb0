//! Centralized layout and timing constants for the Vitrine showcase
//!
//! This module defines the breakpoint, spacing, and timing values shared
//! across the application so both carousel instances and the navigation
//! shell stay consistent.

/// Responsive breakpoints, in logical pixels of window width.
pub mod breakpoints {
    /// Width at which any carousel shows two cards per slide.
    pub const TWO_UP: f32 = 768.0;

    /// Width at which the testimonial carousel shows three cards per slide.
    pub const TESTIMONIAL_THREE_UP: f32 = 1024.0;

    /// Width at which the case-study carousel shows three cards per slide.
    /// Case-study cards are wider, so the third column arrives later.
    pub const CASE_STUDY_THREE_UP: f32 = 1100.0;

    /// Below this width the navigation tabs collapse into the drawer.
    pub const NAV_COMPACT: f32 = 900.0;
}

/// Carousel geometry and input thresholds.
pub mod carousel {
    use std::time::Duration;

    /// Horizontal gap between adjacent cards in a track.
    pub const CARD_GAP: f32 = 24.0;

    /// Autoplay advance interval for the testimonial carousel.
    pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

    /// Minimum horizontal travel for a gesture to count as a swipe.
    /// Sub-threshold motion is ignored entirely.
    pub const SWIPE_THRESHOLD: f32 = 50.0;

    /// Diameter of a slide indicator dot.
    pub const DOT_SIZE: f32 = 10.0;
}

/// Page chrome constants.
pub mod page {
    /// Horizontal gutter on each side of page content.
    pub const GUTTER: f32 = 40.0;

    /// Vertical spacing between home-page sections.
    pub const SECTION_SPACING: f32 = 72.0;
}

/// Header constants.
pub mod header {
    /// Fixed height of the header in pixels.
    pub const HEIGHT: f32 = 56.0;
}

/// Navigation drawer constants.
pub mod drawer {
    /// Width of the drawer panel.
    pub const WIDTH: f32 = 260.0;
}
