use crate::category::Category;

/// A client quote shown in the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

impl Testimonial {
    pub fn new(
        quote: impl Into<String>,
        author: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            role: role.into(),
        }
    }
}

/// A portfolio entry shown in the case-study carousel.
///
/// The `category` tag drives the work-page filter; presentation order of a
/// collection is significant and preserved through filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseStudy {
    pub title: String,
    pub client: String,
    pub summary: String,
    pub category: Category,
}

impl CaseStudy {
    pub fn new(
        title: impl Into<String>,
        client: impl Into<String>,
        summary: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            client: client.into(),
            summary: summary.into(),
            category,
        }
    }
}
