use serde::{Deserialize, Serialize};
use std::fmt;

/// Versioned key for a catalog file (e.g., `faq_catalog_v1`).
///
/// Read from the catalog's `schema_version` field and checked against the
/// versions the shipped schema accepts.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogKey(pub String);

/// Stable identifier for a category. Unique across the catalog.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

/// Stable identifier for a question. Unique across the whole catalog, not just
/// within its category.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        CategoryId(value.to_string())
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        QuestionId(value.to_string())
    }
}

/// Returns true when `value` is a non-empty `^[A-Za-z0-9_.-]+$` token.
///
/// Shared by catalog keys and entry ids so every identifier in a catalog file
/// follows the same rule.
pub fn is_valid_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_transparently() {
        let key = CatalogKey("faq_catalog_v1".to_string());
        let serialized = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized, "\"faq_catalog_v1\"");
        let parsed: CatalogKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, key);

        let id = QuestionId::from("mees-minimum-rating");
        let serialized_id = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized_id, "\"mees-minimum-rating\"");
        let parsed_id: QuestionId = serde_json::from_str(&serialized_id).unwrap();
        assert_eq!(parsed_id, id);
    }

    #[test]
    fn token_rule_rejects_spaces_and_empty() {
        assert!(is_valid_token("general"));
        assert!(is_valid_token("q1.cost-cap_2"));
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("cost cap"));
        assert!(!is_valid_token("costs/2025"));
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(CategoryId::from("costs").to_string(), "costs");
        assert_eq!(QuestionId::from("q3").as_str(), "q3");
    }
}
