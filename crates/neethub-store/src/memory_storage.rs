use crate::traits::*;
use async_trait::async_trait;
use dashmap::DashMap;
use neethub_core::{NeetHubError, Result};
use serde_json::Value;
use std::cmp::Ordering;
use tracing::debug;

/// In-process document store.
///
/// Keeps each collection as a vector in insertion order. Used for local
/// development (`STORE_URL=memory`) and tests.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: DashMap<Collection, Vec<Value>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents across every collection.
    pub fn total_documents(&self) -> usize {
        self.collections.iter().map(|c| c.value().len()).sum()
    }
}

fn ensure_object(doc: &Value) -> Result<()> {
    if doc.is_object() {
        Ok(())
    } else {
        Err(NeetHubError::InvalidOperation(
            "documents must be JSON objects".into(),
        ))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: Collection, doc: Value) -> Result<()> {
        ensure_object(&doc)?;
        self.collections.entry(collection).or_default().push(doc);
        debug!(collection = %collection, "inserted document");
        Ok(())
    }

    async fn insert_many(&self, collection: Collection, docs: Vec<Value>) -> Result<usize> {
        for doc in &docs {
            ensure_object(doc)?;
        }
        let written = docs.len();
        self.collections.entry(collection).or_default().extend(docs);
        Ok(written)
    }

    async fn find_one(&self, collection: Collection, filter: &Filter) -> Result<Option<Value>> {
        Ok(self
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| filter.matches(d)).cloned()))
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
        options: &FindOptions,
    ) -> Result<Vec<Value>> {
        let mut out: Vec<Value> = match self.collections.get(&collection) {
            Some(docs) => docs.iter().filter(|d| filter.matches(d)).cloned().collect(),
            None => Vec::new(),
        };

        if let Some((field, order)) = options.sort {
            out.sort_by(|a, b| {
                let ord = match (a.get(field), b.get(field)) {
                    (Some(x), Some(y)) => compare_values(x, y).unwrap_or(Ordering::Equal),
                    (Some(_), None) => Ordering::Greater,
                    (None, Some(_)) => Ordering::Less,
                    (None, None) => Ordering::Equal,
                };
                match order {
                    SortOrder::Ascending => ord,
                    SortOrder::Descending => ord.reverse(),
                }
            });
        }

        if let Some(limit) = options.limit {
            out.truncate(limit);
        }
        Ok(out)
    }

    async fn update_one(&self, collection: Collection, filter: &Filter, set: Value) -> Result<bool> {
        let Value::Object(fields) = set else {
            return Err(NeetHubError::InvalidOperation(
                "update must be a JSON object".into(),
            ));
        };

        let Some(mut docs) = self.collections.get_mut(&collection) else {
            return Ok(false);
        };
        let Some(doc) = docs.iter_mut().find(|d| filter.matches(d)) else {
            return Ok(false);
        };
        if let Value::Object(target) = doc {
            for (k, v) in fields {
                target.insert(k, v);
            }
        }
        Ok(true)
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<usize> {
        Ok(self
            .collections
            .get(&collection)
            .map(|docs| docs.iter().filter(|d| filter.matches(d)).count())
            .unwrap_or(0))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_then_find_in_insertion_order() {
        let store = MemoryDocumentStore::new();
        for i in 0..3 {
            store
                .insert(Collection::PracticeSessions, json!({"id": i.to_string(), "userId": "u"}))
                .await
                .unwrap();
        }
        store
            .insert(Collection::PracticeSessions, json!({"id": "x", "userId": "other"}))
            .await
            .unwrap();

        let found = store
            .find(
                Collection::PracticeSessions,
                &Filter::new().eq("userId", "u"),
                &FindOptions::limit(100),
            )
            .await
            .unwrap();
        let ids: Vec<_> = found.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[tokio::test]
    async fn newest_first_sorts_and_limits() {
        let store = MemoryDocumentStore::new();
        for ts in ["2026-01-02", "2026-01-03", "2026-01-01"] {
            store
                .insert(Collection::ChatMessages, json!({"userId": "u", "createdAt": ts}))
                .await
                .unwrap();
        }
        let found = store
            .find(
                Collection::ChatMessages,
                &Filter::new(),
                &FindOptions::newest_first("createdAt", 2),
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0]["createdAt"], "2026-01-03");
        assert_eq!(found[1]["createdAt"], "2026-01-02");
    }

    #[tokio::test]
    async fn update_merges_fields_into_first_match() {
        let store = MemoryDocumentStore::new();
        store
            .insert(Collection::SyllabusProgress, json!({"id": "p1", "status": "in_progress"}))
            .await
            .unwrap();
        let updated = store
            .update_one(
                Collection::SyllabusProgress,
                &Filter::new().eq("id", "p1"),
                json!({"status": "completed"}),
            )
            .await
            .unwrap();
        assert!(updated);
        let doc = store
            .find_one(Collection::SyllabusProgress, &Filter::new().eq("id", "p1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc["status"], "completed");

        let missing = store
            .update_one(Collection::SyllabusProgress, &Filter::new().eq("id", "nope"), json!({}))
            .await
            .unwrap();
        assert!(!missing);
    }

    #[tokio::test]
    async fn non_object_documents_are_rejected() {
        let store = MemoryDocumentStore::new();
        assert!(store.insert(Collection::Users, json!([1, 2])).await.is_err());
        assert_eq!(store.total_documents(), 0);
    }
}
