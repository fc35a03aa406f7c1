//! Query analysis result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Review domain categories a query can be about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Service,
    Atmosphere,
    Price,
    Location,
    Timing,
}

impl Category {
    /// Get the name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Service => "service",
            Category::Atmosphere => "atmosphere",
            Category::Price => "price",
            Category::Location => "location",
            Category::Timing => "timing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detected emotional lean of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// What the query author appears to be after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SeekingRecommendation,
    SeekingWarnings,
    #[default]
    GeneralSearch,
}

/// Score for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
}

/// Lightweight analysis of a cleaned query.
///
/// `main_category` is `None` when nothing in the query matched the
/// category vocabulary; callers render that as "general".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub main_category: Option<Category>,
    pub sentiment: Sentiment,
    pub intent: Intent,
    /// Categories that scored above zero, in lexicon definition order.
    pub category_scores: Vec<CategoryScore>,
}

impl QueryAnalysis {
    /// Human-readable main category, with "general" standing in for none.
    pub fn main_category_label(&self) -> &'static str {
        self.main_category.map(|c| c.name()).unwrap_or("general")
    }
}
