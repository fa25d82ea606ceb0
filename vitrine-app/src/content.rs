//! Compiled-in showcase content.
//!
//! The collections are fixed at startup; filtering and navigation derive
//! views over them without ever mutating the source order.

use vitrine_model::{CaseStudy, Category, Testimonial};

/// The studio's display content, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ShowcaseContent {
    pub testimonials: Vec<Testimonial>,
    pub case_studies: Vec<CaseStudy>,
}

/// Build the content shipped with the application.
pub fn studio_content() -> ShowcaseContent {
    ShowcaseContent {
        testimonials: vec![
            Testimonial::new(
                "They turned a vague brief into a brand we are genuinely proud of. \
                 Every review felt like a conversation, not a checkpoint.",
                "Maren Olsen",
                "Founder, Fjordlight Coffee",
            ),
            Testimonial::new(
                "The new site cut our onboarding questions in half. The team kept \
                 asking the questions we had not thought to ask ourselves.",
                "Priya Nair",
                "Head of Product, Loopwell",
            ),
            Testimonial::new(
                "Fast, opinionated, and right far more often than not. The launch \
                 film still does the heavy lifting in our sales calls.",
                "Tomás Rivera",
                "Marketing Director, Arcadia Labs",
            ),
            Testimonial::new(
                "Working with them felt like adding a senior design team overnight. \
                 Deadlines held, and the details were never an afterthought.",
                "Hannah Beck",
                "COO, Nordwind Travel",
            ),
            Testimonial::new(
                "They listened first and designed second. Our members noticed the \
                 difference within a week of the relaunch.",
                "Samuel Adeyemi",
                "Community Lead, Brickhouse Studio",
            ),
            Testimonial::new(
                "The identity system has survived three product launches without a \
                 single workaround. That is the quietest possible compliment.",
                "Ingrid Kaufmann",
                "Brand Manager, Veldt & Co",
            ),
        ],
        case_studies: vec![
            CaseStudy::new(
                "A Lighthouse for Fjordlight",
                "Fjordlight Coffee",
                "Full identity and packaging system for a roastery going \
                 national, built around a single beam of warm light.",
                Category::Branding,
            ),
            CaseStudy::new(
                "Loopwell, Untangled",
                "Loopwell",
                "Marketing site and design system that explains a complex \
                 scheduling product in one scroll.",
                Category::Web,
            ),
            CaseStudy::new(
                "Sixty Seconds of Arcadia",
                "Arcadia Labs",
                "Launch film and motion toolkit introducing a research lab to \
                 an audience outside academia.",
                Category::Motion,
            ),
            CaseStudy::new(
                "Nordwind, Plotted by Hand",
                "Nordwind Travel",
                "Print collateral and route maps for a slow-travel operator, \
                 drawn with more patience than any itinerary deserves.",
                Category::Print,
            ),
            CaseStudy::new(
                "Brickhouse Reassembled",
                "Brickhouse Studio",
                "Rebrand for a co-working space growing from one building \
                 into a neighborhood.",
                Category::Branding,
            ),
            CaseStudy::new(
                "Veldt & Co Storefront",
                "Veldt & Co",
                "E-commerce build with editorial product pages that read like \
                 a field journal.",
                Category::Web,
            ),
            CaseStudy::new(
                "Tides, Animated",
                "Harbor Museum",
                "Exhibit loops and wayfinding motion for a maritime museum's \
                 new wing.",
                Category::Motion,
            ),
            CaseStudy::new(
                "The Annual, Rebound",
                "Veldt & Co",
                "A yearly report redesigned as an object people keep on the \
                 shelf instead of the recycling bin.",
                Category::Print,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::studio_content;
    use vitrine_model::Category;

    #[test]
    fn every_category_has_at_least_one_case_study() {
        let content = studio_content();
        for category in Category::all() {
            assert!(
                content
                    .case_studies
                    .iter()
                    .any(|case_study| case_study.category == *category),
                "no case study tagged {category}"
            );
        }
    }

    #[test]
    fn content_is_non_empty() {
        let content = studio_content();
        assert!(!content.testimonials.is_empty());
        assert!(!content.case_studies.is_empty());
    }
}
