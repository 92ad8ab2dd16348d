//! Term value types: the records a content store delivers.

use serde::{Deserialize, Serialize};

/// Identifier of a term within one collection.
pub type TermId = u64;

/// A single taxonomy entry (e.g. a category) as fetched from a content store.
///
/// `parent` is `None` for top-level terms. Wire formats conventionally encode
/// "no parent" as `0`; (de)serialization maps that sentinel onto `None` so the
/// rest of the crate never has to know about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    #[serde(default, with = "parent_sentinel")]
    pub parent: Option<TermId>,
    pub name: String,
}

impl Term {
    /// A top-level term.
    pub fn root(id: TermId, name: impl Into<String>) -> Self {
        Self {
            id,
            parent: None,
            name: name.into(),
        }
    }

    /// A term nested under `parent`.
    pub fn child_of(id: TermId, parent: TermId, name: impl Into<String>) -> Self {
        Self {
            id,
            parent: Some(parent),
            name: name.into(),
        }
    }
}

/// Maps the `0` wire sentinel onto `Option::None` and back.
mod parent_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TermId;

    pub fn serialize<S>(parent: &Option<TermId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(parent.unwrap_or(0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TermId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = TermId::deserialize(deserializer)?;
        Ok(if raw == 0 { None } else { Some(raw) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_zero_parent_when_deserializing_then_maps_to_none() {
        let term: Term = serde_json::from_str(r#"{"id": 7, "parent": 0, "name": "Fruit"}"#)
            .expect("valid term json");
        assert_eq!(term, Term::root(7, "Fruit"));
    }

    #[test]
    fn given_missing_parent_when_deserializing_then_maps_to_none() {
        let term: Term =
            serde_json::from_str(r#"{"id": 7, "name": "Fruit"}"#).expect("valid term json");
        assert_eq!(term.parent, None);
    }

    #[test]
    fn given_root_term_when_serializing_then_writes_zero_sentinel() {
        let json = serde_json::to_string(&Term::root(7, "Fruit")).expect("serializable");
        assert!(json.contains(r#""parent":0"#), "got: {}", json);
    }

    #[test]
    fn given_nested_term_when_round_tripping_then_parent_survives() {
        let term = Term::child_of(12, 7, "Apple");
        let json = serde_json::to_string(&term).expect("serializable");
        let back: Term = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, term);
    }
}
