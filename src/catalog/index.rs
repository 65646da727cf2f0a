//! Indexed view of a FAQ catalog instance.
//!
//! The index enforces the expected catalog schema version and the id
//! uniqueness rules, then provides lookup by category and question id. It
//! refuses catalogs with any invariant violation so binaries cannot publish a
//! page from a broken catalog.

use crate::catalog::load_catalog_from_path;
use crate::catalog::{CatalogKey, Category, CategoryId, FaqCatalog, Question, QuestionId};
use crate::schema_loader::{SchemaLoadOptions, load_json_schema, schema_version_from_file};
use crate::validation::{read_json, validate_catalog};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

// Only one catalog format exists; unknown versions are rejected outright.
const DEFAULT_SCHEMA_VERSION: &str = "faq_catalog_v1";
const CATALOG_SCHEMA_FILE: &str = "schema/faq_catalog.schema.json";

#[derive(Debug)]
/// FAQ catalog plus derived indexes keyed by category and question id.
pub struct FaqIndex {
    catalog: FaqCatalog,
    by_category: BTreeMap<CategoryId, usize>,
    by_question: BTreeMap<QuestionId, (usize, usize)>,
}

impl FaqIndex {
    /// Load and validate the catalog from disk.
    ///
    /// Validates the file against the catalog schema, checks the schema
    /// version, rejects duplicate or malformed ids, and builds the lookups.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;

        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        validate_schema_version(&catalog.key)?;
        let index = Self::from_catalog(catalog)?;
        debug!(
            path = %path.display(),
            categories = index.catalog.categories.len(),
            questions = index.by_question.len(),
            "loaded faq catalog"
        );
        Ok(index)
    }

    /// Index a catalog built in memory. Skips the JSON Schema check but
    /// enforces every catalog invariant.
    pub fn from_catalog(catalog: FaqCatalog) -> Result<Self> {
        let errors = validate_catalog(&catalog);
        if !errors.is_empty() {
            bail!("invalid faq catalog:\n{}", errors.join("\n"));
        }

        let mut by_category = BTreeMap::new();
        let mut by_question = BTreeMap::new();
        for (cat_idx, category) in catalog.categories.iter().enumerate() {
            by_category.insert(category.id.clone(), cat_idx);
            for (q_idx, question) in category.questions.iter().enumerate() {
                by_question.insert(question.id.clone(), (cat_idx, q_idx));
            }
        }

        Ok(Self {
            catalog,
            by_category,
            by_question,
        })
    }

    /// The catalog key declared in the loaded file.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog.key
    }

    /// Access the underlying catalog in display order.
    pub fn catalog(&self) -> &FaqCatalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> FaqCatalog {
        self.catalog
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.by_category
            .get(id)
            .map(|&idx| &self.catalog.categories[idx])
    }

    /// Resolve a question and the category that holds it.
    pub fn question(&self, id: &QuestionId) -> Option<(&Category, &Question)> {
        self.by_question.get(id).map(|&(cat_idx, q_idx)| {
            let category = &self.catalog.categories[cat_idx];
            (category, &category.questions[q_idx])
        })
    }

    /// Iterates question ids in stable (sorted) order.
    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.by_question.keys()
    }
}

fn validate_schema_version(key: &CatalogKey) -> Result<()> {
    if key.0.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(&key.0) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            key.0,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    BTreeSet::from_iter([default_catalog_schema_version()])
}

fn default_catalog_schema_version() -> String {
    schema_version_from_file(&canonical_catalog_schema_path())
        .unwrap_or_else(|| DEFAULT_SCHEMA_VERSION.to_string())
}

fn canonical_catalog_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(CATALOG_SCHEMA_FILE)
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_value = read_json(catalog_path)?;

    let catalog_version = catalog_value
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let schema_path = resolve_catalog_schema_path(catalog_path);
    let allowed = allowed_schema_versions();
    let schema = load_json_schema(
        &schema_path,
        SchemaLoadOptions {
            allowed_versions: Some(&allowed),
            expected_version: Some(&catalog_version),
            patch_schema_version_const: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("loading catalog schema {}", schema_path.display()))?;

    if let Err(errors) = schema.compiled.validate(&catalog_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "faq catalog {} failed schema validation:\n{}",
            catalog_path.display(),
            details
        );
    }
    Ok(())
}

/// Schema that governs `catalog_path`: the sibling `schema/` directory of the
/// catalog's content root when present, otherwise the crate's own copy.
pub fn resolve_catalog_schema_path(catalog_path: &Path) -> PathBuf {
    if let Some(base) = catalog_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join(CATALOG_SCHEMA_FILE);
        if candidate.exists() {
            return candidate;
        }
    }

    canonical_catalog_schema_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn write_catalog(value: &Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        serde_json::to_writer(&mut file, value).unwrap();
        file
    }

    fn sample_value() -> Value {
        json!({
            "schema_version": "faq_catalog_v1",
            "title": "Fixture",
            "categories": [
                {
                    "id": "general",
                    "name": "General",
                    "description": "Basics",
                    "questions": [
                        {"id": "q1", "question": "What EPC rating do I need?", "answer": "E or above."},
                        {"id": "q2", "question": "Does this apply to all properties?", "answer": "Most lets."}
                    ]
                },
                {
                    "id": "costs",
                    "name": "Costs",
                    "description": "Spending",
                    "questions": [
                        {"id": "q3", "question": "How much will it cost?", "answer": "Up to the cost cap."}
                    ]
                }
            ]
        })
    }

    #[test]
    fn load_indexes_categories_and_questions() {
        let file = write_catalog(&sample_value());
        let index = FaqIndex::load(file.path()).expect("fixture catalog loads");
        assert_eq!(index.key().0, "faq_catalog_v1");

        let (category, question) = index.question(&QuestionId::from("q3")).unwrap();
        assert_eq!(category.id.as_str(), "costs");
        assert_eq!(question.question, "How much will it cost?");

        assert_eq!(
            index.category(&CategoryId::from("general")).map(|c| c.questions.len()),
            Some(2)
        );
        let ids: Vec<&str> = index.question_ids().map(QuestionId::as_str).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn load_rejects_duplicate_question_ids_across_categories() {
        let mut value = sample_value();
        value["categories"][1]["questions"][0]["id"] = json!("q1");
        let file = write_catalog(&value);
        let err = FaqIndex::load(file.path()).expect_err("duplicate id should fail");
        assert!(err.to_string().contains("duplicate question id 'q1'"), "{err:#}");
    }

    #[test]
    fn load_rejects_unknown_schema_version() {
        let mut value = sample_value();
        value["schema_version"] = json!("faq_catalog_v0");
        let file = write_catalog(&value);
        let err = FaqIndex::load(file.path()).expect_err("unknown version should fail");
        assert!(format!("{err:#}").contains("faq_catalog_v0"));
    }

    #[test]
    fn load_rejects_schema_violations() {
        let mut value = sample_value();
        value["categories"][0]["questions"][0]
            .as_object_mut()
            .unwrap()
            .remove("answer");
        let file = write_catalog(&value);
        let err = FaqIndex::load(file.path()).expect_err("missing answer should fail");
        assert!(format!("{err:#}").contains("failed schema validation"));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog: FaqCatalog = serde_json::from_value(json!({
            "schema_version": "faq_catalog_v1",
            "categories": []
        }))
        .unwrap();
        let index = FaqIndex::from_catalog(catalog).unwrap();
        assert_eq!(index.catalog().total_questions(), 0);
        assert_eq!(index.question_ids().count(), 0);
    }
}
