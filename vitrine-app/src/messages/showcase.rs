//! Messages for the testimonial and case-study carousels.

use vitrine_model::CategoryFilter;

#[derive(Debug, Clone)]
pub enum Message {
    // Testimonial carousel
    TestimonialPrev,
    TestimonialNext,
    TestimonialDot(usize),
    /// Autoplay timer fired. The subscription only exists while the pointer
    /// is outside the carousel, so a tick always advances.
    AutoplayTick,
    PointerEntered,
    PointerExited,
    /// Cursor moved inside the carousel region; x is the anchor for
    /// mouse-driven swipes.
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
    /// Touch gesture start/end anywhere on the page, in window coordinates.
    TouchBegan(f32),
    TouchEnded(f32),

    // Case-study carousel
    CaseStudyPrev,
    CaseStudyNext,
    CaseStudyDot(usize),
    FilterSelected(CategoryFilter),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TestimonialPrev => "Showcase::TestimonialPrev",
            Self::TestimonialNext => "Showcase::TestimonialNext",
            Self::TestimonialDot(_) => "Showcase::TestimonialDot",
            Self::AutoplayTick => "Showcase::AutoplayTick",
            Self::PointerEntered => "Showcase::PointerEntered",
            Self::PointerExited => "Showcase::PointerExited",
            Self::PointerMoved(_) => "Showcase::PointerMoved",
            Self::PointerPressed => "Showcase::PointerPressed",
            Self::PointerReleased => "Showcase::PointerReleased",
            Self::TouchBegan(_) => "Showcase::TouchBegan",
            Self::TouchEnded(_) => "Showcase::TouchEnded",
            Self::CaseStudyPrev => "Showcase::CaseStudyPrev",
            Self::CaseStudyNext => "Showcase::CaseStudyNext",
            Self::CaseStudyDot(_) => "Showcase::CaseStudyDot",
            Self::FilterSelected(_) => "Showcase::FilterSelected",
        }
    }
}
