//! Shared library for the FAQ catalog tools.
//!
//! The crate exposes the catalog types, the query filter behind the FAQ page's
//! search box, and the flatten/export step that feeds the page's `FAQPage`
//! structured data. Public functions here also form the contract the binaries
//! depend on: content-root discovery and catalog path resolution.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod filter;
pub mod logging;
pub mod paragraphs;
mod schema_loader;
pub mod structured_data;
pub mod validation;

pub use catalog::{
    CatalogKey, Category, CategoryId, FaqCatalog, FaqIndex, Question, QuestionId,
    load_catalog_from_path, resolve_catalog_schema_path,
};
pub use filter::{
    FilteredCatalog, FilteredCategory, filter, filter_categories, normalize_query,
    restrict_to_category,
};
pub use paragraphs::{Paragraphs, split_on_blank_lines};
pub use structured_data::{
    FaqPage, FaqRecord, flatten_catalog, generate_faq_schema, normalize_whitespace,
};
pub use validation::{validate_catalog, validate_catalog_file};

pub const DEFAULT_CATALOG_PATH: &str = "content/faq.json";
pub const CATALOG_SCHEMA_PATH: &str = "schema/faq_catalog.schema.json";

/// Returns true when `candidate` holds both the catalog and its schema.
fn is_content_root(candidate: &Path) -> bool {
    candidate.join(DEFAULT_CATALOG_PATH).is_file() && candidate.join(CATALOG_SCHEMA_PATH).is_file()
}

/// Verifies that an explicit root hint points at a real content root.
fn root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_content_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_content_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the content root.
///
/// Search order: honor `FAQ_ROOT` if it points at a real root, fall back to
/// climbing up from the current executable, then use the build-time hint.
pub fn find_content_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("FAQ_ROOT") {
        if let Some(root) = root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("FAQ_ROOT_HINT") {
        if let Some(root) = root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate the FAQ content root ({DEFAULT_CATALOG_PATH} and {CATALOG_SCHEMA_PATH}). Set FAQ_ROOT or pass --catalog."
    );
}

/// Default catalog location under a content root.
pub fn default_catalog_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CATALOG_PATH)
}

/// Resolve which catalog file a binary should read.
///
/// An explicit `--catalog` path wins, then a non-empty `FAQ_CATALOG`, then the
/// default catalog under the discovered content root.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let chosen = match explicit {
        Some(path) => path.to_path_buf(),
        None => match env::var("FAQ_CATALOG") {
            Ok(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
            _ => default_catalog_path(&find_content_root()?),
        },
    };

    if !chosen.is_file() {
        bail!("FAQ catalog not found: {}", chosen.display());
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_root_requires_catalog_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_content_root(dir.path()));
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join(DEFAULT_CATALOG_PATH), "{}").unwrap();
        assert!(!is_content_root(dir.path()));
        fs::create_dir_all(dir.path().join("schema")).unwrap();
        fs::write(dir.path().join(CATALOG_SCHEMA_PATH), "{}").unwrap();
        assert!(is_content_root(dir.path()));
        assert!(search_upwards(&dir.path().join("content")).is_some());
    }

    #[test]
    fn explicit_catalog_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("faq.json");
        let err = resolve_catalog_path(Some(missing.as_path())).expect_err("missing file");
        assert!(err.to_string().contains("FAQ catalog not found"));

        fs::write(&missing, "{}").unwrap();
        assert_eq!(resolve_catalog_path(Some(missing.as_path())).unwrap(), missing);
    }

    #[test]
    fn empty_hint_is_ignored() {
        assert!(root_from_hint("").is_none());
    }
}
