//! Root application state.

use std::collections::HashSet;

use iced::widget::scrollable;
use vitrine_config::Preferences;
use vitrine_model::{CaseStudy, CategoryFilter};

use crate::carousel::{
    Breakpoints, CarouselState, OffsetMode, SwipeTracker, WrapMode,
};
use crate::constants::{breakpoints, carousel, page};
use crate::content::ShowcaseContent;
use crate::theme::ThemeChoice;

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Work,
    Studio,
    Contact,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Work, Page::Studio, Page::Contact]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Work => "Work",
            Page::Studio => "Studio",
            Page::Contact => "Contact",
        }
    }
}

/// Home-page sections that reveal as the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeSection {
    Hero,
    Services,
    Testimonials,
    Contact,
}

impl HomeSection {
    pub fn all() -> &'static [HomeSection] {
        &[
            HomeSection::Hero,
            HomeSection::Services,
            HomeSection::Testimonials,
            HomeSection::Contact,
        ]
    }

    /// Scroll depth (top of viewport plus its height) at which the section
    /// counts as reached.
    fn reveal_point(&self) -> f32 {
        match self {
            HomeSection::Hero => 0.0,
            HomeSection::Services => 560.0,
            HomeSection::Testimonials => 1180.0,
            HomeSection::Contact => 1760.0,
        }
    }
}

/// Which home sections have been scrolled into view.
///
/// Reveals are one-way: once a section is seen it stays revealed for the
/// rest of the session.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed: HashSet<HomeSection>,
}

impl RevealState {
    /// Record that the viewport now extends down to `reveal_line` and mark
    /// every section reached by it.
    pub fn observe(&mut self, reveal_line: f32) {
        for section in HomeSection::all() {
            if reveal_line >= section.reveal_point() {
                self.revealed.insert(*section);
            }
        }
    }

    pub fn is_revealed(&self, section: HomeSection) -> bool {
        self.revealed.contains(&section)
    }
}

/// Navigation chrome state.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    /// Whether the compact-width drawer is open.
    pub drawer_open: bool,
}

/// State of the testimonial section on the home page.
#[derive(Debug, Clone)]
pub struct TestimonialSectionState {
    pub carousel: CarouselState,
    /// True while the pointer is over the carousel region; suspends
    /// autoplay by removing its timer subscription.
    pub pointer_over: bool,
    pub swipe: SwipeTracker,
    /// Last known cursor x inside the carousel, used as the anchor for
    /// mouse-driven swipes.
    pub cursor_x: f32,
}

impl TestimonialSectionState {
    fn new(count: usize, window_width: f32) -> Self {
        Self {
            carousel: CarouselState::new(
                scrollable::Id::new("testimonial-track"),
                WrapMode::Circular,
                OffsetMode::PerCard,
                Breakpoints {
                    two_up: breakpoints::TWO_UP,
                    three_up: breakpoints::TESTIMONIAL_THREE_UP,
                },
                carousel::CARD_GAP,
                count,
                window_width,
            ),
            pointer_over: false,
            swipe: SwipeTracker::default(),
            cursor_x: 0.0,
        }
    }
}

/// State of the case-study section on the work page.
#[derive(Debug, Clone)]
pub struct CaseStudySectionState {
    pub carousel: CarouselState,
    pub filter: CategoryFilter,
    /// Indices into the full case-study collection that pass the active
    /// filter, in original presentation order.
    pub visible: Vec<usize>,
}

impl CaseStudySectionState {
    fn new(collection: &[CaseStudy], window_width: f32) -> Self {
        let mut state = Self {
            carousel: CarouselState::new(
                scrollable::Id::new("case-study-track"),
                WrapMode::Linear,
                OffsetMode::PerPage,
                Breakpoints {
                    two_up: breakpoints::TWO_UP,
                    three_up: breakpoints::CASE_STUDY_THREE_UP,
                },
                carousel::CARD_GAP,
                collection.len(),
                window_width,
            ),
            filter: CategoryFilter::default(),
            visible: Vec::new(),
        };
        state.apply_filter(CategoryFilter::default(), collection, window_width);
        state
    }

    /// Select `filter`, rebuild the visible subset in presentation order,
    /// refresh the cards-per-view for the current window, and reset the
    /// carousel to its first slide.
    pub fn apply_filter(
        &mut self,
        filter: CategoryFilter,
        collection: &[CaseStudy],
        window_width: f32,
    ) {
        self.filter = filter;
        self.visible = collection
            .iter()
            .enumerate()
            .filter(|(_, case_study)| filter.matches(&case_study.category))
            .map(|(index, _)| index)
            .collect();
        self.carousel.handle_resize(window_width);
        self.carousel.set_visible_count(self.visible.len());
    }
}

/// Root state of the application.
#[derive(Debug, Clone)]
pub struct State {
    pub page: Page,
    pub window_width: f32,
    pub theme_choice: ThemeChoice,
    pub nav: NavState,
    pub reveal: RevealState,
    pub content: ShowcaseContent,
    pub testimonials: TestimonialSectionState,
    pub case_studies: CaseStudySectionState,
}

impl State {
    pub fn new(
        preferences: &Preferences,
        content: ShowcaseContent,
        window_width: f32,
        window_height: f32,
    ) -> Self {
        let testimonials =
            TestimonialSectionState::new(content.testimonials.len(), window_width);
        let case_studies =
            CaseStudySectionState::new(&content.case_studies, window_width);

        let mut reveal = RevealState::default();
        // Sections above the fold are visible immediately.
        reveal.observe(window_height);

        Self {
            page: Page::Home,
            window_width,
            theme_choice: ThemeChoice::from_stored(&preferences.theme),
            nav: NavState::default(),
            reveal,
            content,
            testimonials,
            case_studies,
        }
    }

    /// Width available to a carousel track at the current window size.
    pub fn track_width(&self) -> f32 {
        (self.window_width - page::GUTTER * 2.0).max(0.0)
    }

    /// Whether the navigation tabs have collapsed into the drawer.
    pub fn is_compact(&self) -> bool {
        self.window_width < breakpoints::NAV_COMPACT
    }

    pub fn visible_case_studies(
        &self,
    ) -> impl Iterator<Item = &CaseStudy> + '_ {
        self.case_studies
            .visible
            .iter()
            .filter_map(|index| self.content.case_studies.get(*index))
    }
}

#[cfg(test)]
mod tests {
    use super::{HomeSection, RevealState};

    #[test]
    fn reveals_are_one_way() {
        let mut reveal = RevealState::default();
        reveal.observe(1200.0);
        assert!(reveal.is_revealed(HomeSection::Testimonials));

        // Scrolling back up never hides a section again.
        reveal.observe(0.0);
        assert!(reveal.is_revealed(HomeSection::Testimonials));
        assert!(!reveal.is_revealed(HomeSection::Contact));
    }

    #[test]
    fn hero_is_revealed_from_the_start() {
        let mut reveal = RevealState::default();
        reveal.observe(720.0);
        assert!(reveal.is_revealed(HomeSection::Hero));
        assert!(reveal.is_revealed(HomeSection::Services));
        assert!(!reveal.is_revealed(HomeSection::Contact));
    }
}
