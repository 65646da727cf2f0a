//! Flattened FAQ records and schema.org `FAQPage` markup.
//!
//! The page embeds one `FAQPage` object built from every question in the
//! unfiltered catalog. Records are produced in catalog traversal order and
//! answers have their whitespace normalized so the markup holds single-line
//! text.

use crate::catalog::{CategoryId, FaqCatalog};
use serde::Serialize;
use tracing::debug;

const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One question flattened out of its category.
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
    pub category_id: CategoryId,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize)]
/// schema.org `FAQPage` object.
pub struct FaqPage<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<FaqEntry<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: FaqAnswer<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqAnswer<'a> {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: &'a str,
}

/// Flatten the full catalog into records, categories first, then questions.
pub fn flatten_catalog(catalog: &FaqCatalog) -> Vec<FaqRecord> {
    let records: Vec<FaqRecord> = catalog
        .questions()
        .map(|(category, question)| FaqRecord {
            question: question.question.clone(),
            answer: normalize_whitespace(&question.answer),
            category_id: category.id.clone(),
            category_name: category.name.clone(),
        })
        .collect();
    debug!(records = records.len(), "flattened faq catalog");
    records
}

/// Replace every run of whitespace, newlines included, with one space.
///
/// Leading and trailing runs become a single space rather than being removed.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Build the `FAQPage` object: one `Question` entry per record, in order.
pub fn generate_faq_schema(records: &[FaqRecord]) -> FaqPage<'_> {
    FaqPage {
        context: SCHEMA_ORG_CONTEXT,
        kind: "FAQPage",
        main_entity: records
            .iter()
            .map(|record| FaqEntry {
                kind: "Question",
                name: &record.question,
                accepted_answer: FaqAnswer {
                    kind: "Answer",
                    text: &record.answer,
                },
            })
            .collect(),
    }
}
