use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Work categories a case study can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Branding,
    Web,
    Motion,
    Print,
}

impl Category {
    pub fn all() -> &'static [Category] {
        use Category::*;
        &[Branding, Web, Motion, Print]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Branding => "Branding",
            Category::Web => "Web",
            Category::Motion => "Motion",
            Category::Print => "Print",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .find(|category| category.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// The active selection of the work-page filter bar.
///
/// Exactly one filter is active at a time; `All` is the initial selection
/// and matches every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter bar entries in presentation order, `All` first.
    pub fn all() -> Vec<CategoryFilter> {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Category::all().iter().copied().map(CategoryFilter::Only));
        filters
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryFilter};

    #[test]
    fn category_labels_round_trip() {
        for category in Category::all() {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert!("Sculpture".parse::<Category>().is_err());
    }

    #[test]
    fn all_filter_matches_every_category() {
        for category in Category::all() {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn only_filter_matches_its_own_category() {
        let filter = CategoryFilter::Only(Category::Web);
        assert!(filter.matches(&Category::Web));
        assert!(!filter.matches(&Category::Print));
    }

    #[test]
    fn filter_bar_lists_all_first() {
        let filters = CategoryFilter::all();
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters.len(), Category::all().len() + 1);
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
