//! FAQ catalog wiring.
//!
//! This module wraps the JSON catalog under `content/faq.json` so callers can
//! load a validated snapshot and refer to entries by stable ids. Types here
//! mirror the schema fields; callers use `FaqIndex` for validated loading and
//! id lookups.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{CatalogKey, CategoryId, QuestionId, is_valid_token};
pub use index::{FaqIndex, resolve_catalog_schema_path};
pub use model::{Category, FaqCatalog, Question};

pub use model::load_catalog_from_path;
