//! Deserializable representation of `content/faq.json`.
//!
//! The types mirror the catalog schema so the filter, the exporter and the
//! tests work with typed records instead of ad-hoc JSON. Use `FaqIndex` when the
//! catalog must be validated and looked up by id; use these structs directly
//! when a catalog is built in code.

use crate::catalog::identity::{CatalogKey, CategoryId, QuestionId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Full FAQ catalog as stored on disk.
///
/// Category order is display order and is preserved by every operation in
/// the crate.
pub struct FaqCatalog {
    #[serde(rename = "schema_version")]
    pub key: CatalogKey,
    #[serde(default)]
    pub title: Option<String>,
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A named group of questions.
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One question/answer record. Answers may hold several paragraphs separated
/// by blank lines.
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
}

impl FaqCatalog {
    /// Count of every question across all categories.
    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Iterate `(category, question)` pairs in display order.
    pub fn questions(&self) -> impl Iterator<Item = (&Category, &Question)> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter().map(move |q| (c, q)))
    }
}

impl Question {
    /// Answer text split into its paragraphs.
    pub fn paragraphs(&self) -> crate::paragraphs::Paragraphs<'_> {
        crate::paragraphs::split_on_blank_lines(&self.answer)
    }
}

/// Read and parse a catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<FaqCatalog> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: FaqCatalog =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(catalog)
}
