//! Name resolution.
//!
//! A [`NameResolver`] turns `(edition, collector id)` pairs into canonical card
//! names. The deck only owns batching and failure policy; how names are looked
//! up is up to the implementation. [`CardCatalog`] is an in-memory one.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardKey;

/// Why a batch could not be resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no card found for ({edition}) {collector_id}")]
    NotFound {
        edition: String,
        collector_id: String,
    },
    #[error("name resolver unavailable: {0}")]
    Unavailable(String),
}

impl ResolveError {
    pub fn not_found(key: &CardKey) -> Self {
        ResolveError::NotFound {
            edition: key.edition.clone(),
            collector_id: key.collector_id.clone(),
        }
    }
}

/// Resolves canonical card names by printing.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Returns one name per key, in order. A single unknown key fails the whole batch.
    async fn resolve(&self, batch: &[CardKey]) -> Result<Vec<String>, ResolveError>;
}

/// One printing of a catalog file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub set: String,
    pub collector_number: String,
    pub name: String,
}

/// In-memory name resolver keyed by normalized edition and collector id.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    names: HashMap<CardKey, String>,
}

impl CardCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edition: &str, collector_id: &str, name: impl Into<String>) {
        self.names
            .insert(CardKey::new(edition, collector_id), name.into());
    }

    pub fn with(mut self, edition: &str, collector_id: &str, name: impl Into<String>) -> Self {
        self.insert(edition, collector_id, name);
        self
    }

    /// Loads a catalog from a JSON array of `{ "set", "collector_number", "name" }` records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(entries.into_iter().collect())
    }

    pub fn get(&self, key: &CardKey) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<CatalogEntry> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = CardCatalog::new();
        for entry in iter {
            catalog.insert(&entry.set, &entry.collector_number, entry.name);
        }
        catalog
    }
}

#[async_trait]
impl NameResolver for CardCatalog {
    async fn resolve(&self, batch: &[CardKey]) -> Result<Vec<String>, ResolveError> {
        batch
            .iter()
            .map(|key| {
                self.get(key)
                    .map(str::to_string)
                    .ok_or_else(|| ResolveError::not_found(key))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_from_json_normalizes_keys() {
        let catalog = CardCatalog::from_json(
            r#"[
                {"set": "eld", "collector_number": "254", "name": "Island"},
                {"set": "dar", "collector_number": "168", "name": "Llanowar Elves"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&CardKey::new("ELD", "254")), Some("Island"));
        assert_eq!(catalog.get(&CardKey::new("DOM", "168")), Some("Llanowar Elves"));
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(CardCatalog::from_json("{\"set\": 1}").is_err());
    }

    #[tokio::test]
    async fn batch_fails_on_first_unknown_key() {
        let catalog = CardCatalog::new().with("ELD", "254", "Island");
        let batch = [CardKey::new("ELD", "254"), CardKey::new("ELD", "999")];
        assert_eq!(
            catalog.resolve(&batch).await,
            Err(ResolveError::NotFound {
                edition: "ELD".into(),
                collector_id: "999".into()
            })
        );
        assert_eq!(
            catalog.resolve(&batch[..1]).await,
            Ok(vec!["Island".to_string()])
        );
    }
}
