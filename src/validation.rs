//! Invariant checks for FAQ catalogs.
//!
//! Used by `faq-lint` and the index loader. Checks return a list of issues
//! rather than short-circuiting so authors see every problem in one pass.

use crate::catalog::{FaqCatalog, is_valid_token};
use crate::schema_loader::{SchemaLoadOptions, load_json_schema};
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Check id uniqueness, id format, and required text on a parsed catalog.
pub fn validate_catalog(catalog: &FaqCatalog) -> Vec<String> {
    let mut errors = Vec::new();
    if !is_valid_token(&catalog.key.0) {
        errors.push(format!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got '{}'",
            catalog.key.0
        ));
    }

    let mut category_ids = BTreeSet::new();
    let mut question_ids = BTreeSet::new();
    for category in &catalog.categories {
        let cat = category.id.as_str();
        if !is_valid_token(cat) {
            errors.push(format!("category id '{cat}' must match ^[A-Za-z0-9_.-]+$"));
        }
        if !category_ids.insert(cat) {
            errors.push(format!("duplicate category id '{cat}'"));
        }
        if category.name.trim().is_empty() {
            errors.push(format!("category '{cat}' has an empty name"));
        }

        for question in &category.questions {
            let qid = question.id.as_str();
            if !is_valid_token(qid) {
                errors.push(format!(
                    "question id '{qid}' in category '{cat}' must match ^[A-Za-z0-9_.-]+$"
                ));
            }
            // Question ids are global, not scoped to their category.
            if !question_ids.insert(qid) {
                errors.push(format!("duplicate question id '{qid}' in category '{cat}'"));
            }
            if question.question.trim().is_empty() {
                errors.push(format!("question '{qid}' has empty question text"));
            }
            if question.answer.trim().is_empty() {
                errors.push(format!("question '{qid}' has an empty answer"));
            }
        }
    }
    errors
}

/// Validate a catalog file against a JSON Schema and the catalog invariants.
///
/// Schema violations and invariant violations are both returned as issues.
/// Errors are reserved for files that cannot be read or parsed at all.
pub fn validate_catalog_file(catalog_path: &Path, schema_path: &Path) -> Result<Vec<String>> {
    let value = read_json(catalog_path)?;
    let mut errors = schema_errors(&value, schema_path)?;

    // Only typed checks are meaningful once the shape is right.
    if errors.is_empty() {
        match serde_json::from_value::<FaqCatalog>(value) {
            Ok(catalog) => errors.extend(validate_catalog(&catalog)),
            Err(err) => errors.push(format!("{}: {err}", catalog_path.display())),
        }
    }
    Ok(errors)
}

/// Schema violations for an already-parsed catalog value, one message each.
pub(crate) fn schema_errors(value: &Value, schema_path: &Path) -> Result<Vec<String>> {
    let schema = load_json_schema(schema_path, SchemaLoadOptions::default())
        .with_context(|| format!("loading catalog schema {}", schema_path.display()))?;
    let errors = match schema.compiled.validate(value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect(),
    };
    Ok(errors)
}

pub(crate) fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).with_context(|| format!("opening catalog {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing catalog {}", path.display()))
}
