//! Case-insensitive substring search over a FAQ catalog.
//!
//! `filter` is a pure function of `(catalog, query)`: it borrows the catalog,
//! never reorders it, and drops categories left without matches. The view it
//! returns carries the "Showing X of Y" counts the page renders above the
//! results.

use crate::catalog::{Category, CategoryId, FaqCatalog, Question};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Categories and questions that survived a query, plus both counts.
pub struct FilteredCatalog<'a> {
    /// Lower-cased, trimmed query; `None` when the query was blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub categories: Vec<FilteredCategory<'a>>,
    pub total_questions: usize,
    pub filtered_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A surviving category with only its matching questions, in catalog order.
pub struct FilteredCategory<'a> {
    pub id: &'a CategoryId,
    pub name: &'a str,
    pub description: &'a str,
    pub questions: Vec<&'a Question>,
}

impl<'a> FilteredCatalog<'a> {
    /// True when no question matched.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// `Showing X of Y questions`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} questions",
            self.filtered_questions, self.total_questions
        )
    }

    /// Iterate matching `(category, question)` pairs in display order.
    pub fn questions(&self) -> impl Iterator<Item = (&FilteredCategory<'a>, &'a Question)> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter().map(move |q| (c, *q)))
    }
}

impl<'a> FilteredCategory<'a> {
    fn new(category: &'a Category, questions: Vec<&'a Question>) -> Self {
        Self {
            id: &category.id,
            name: &category.name,
            description: &category.description,
            questions,
        }
    }
}

/// Filter a whole catalog by `query`.
pub fn filter<'a>(catalog: &'a FaqCatalog, query: &str) -> FilteredCatalog<'a> {
    filter_categories(&catalog.categories, query)
}

/// Filter an ordered run of categories by `query`.
///
/// A blank query (after trimming) returns every category and question. Any
/// other query keeps questions whose question or answer text contains it,
/// ignoring case. Matching is plain substring containment, so "cast" also
/// matches "forecast".
pub fn filter_categories<'a>(categories: &'a [Category], query: &str) -> FilteredCatalog<'a> {
    let total_questions = count_questions(categories);
    let needle = normalize_query(query);

    let filtered: Vec<FilteredCategory<'a>> = match needle.as_deref() {
        None => categories
            .iter()
            .map(|c| FilteredCategory::new(c, c.questions.iter().collect()))
            .collect(),
        Some(needle) => categories
            .iter()
            .filter_map(|c| {
                let matching: Vec<&Question> = c
                    .questions
                    .iter()
                    .filter(|q| question_matches(q, needle))
                    .collect();
                if matching.is_empty() {
                    None
                } else {
                    Some(FilteredCategory::new(c, matching))
                }
            })
            .collect(),
    };

    let filtered_questions = filtered.iter().map(|c| c.questions.len()).sum();
    debug!(
        query = needle.as_deref().unwrap_or(""),
        total_questions, filtered_questions, "filtered faq catalog"
    );

    FilteredCatalog {
        query: needle,
        categories: filtered,
        total_questions,
        filtered_questions,
    }
}

/// Narrow the search to one category, keeping the catalog's own slice.
///
/// Returns `None` for unknown ids. Feed the result to `filter_categories`;
/// counts are then relative to the chosen category.
pub fn restrict_to_category<'a>(
    catalog: &'a FaqCatalog,
    id: &CategoryId,
) -> Option<&'a [Category]> {
    let pos = catalog.categories.iter().position(|c| &c.id == id)?;
    Some(&catalog.categories[pos..=pos])
}

/// Trim and lower-case a raw query; `None` when nothing is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether `question` matches an already-normalized `needle`.
pub fn question_matches(question: &Question, needle: &str) -> bool {
    question.question.to_lowercase().contains(needle)
        || question.answer.to_lowercase().contains(needle)
}

fn count_questions(categories: &[Category]) -> usize {
    categories.iter().map(|c| c.questions.len()).sum()
}
