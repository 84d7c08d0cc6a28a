use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use uuid::Uuid;

use super::{
    Collection, Document, DocumentStore, FieldPath, Filter, Predicate, StoreResult,
    StoredDocument,
};

/// Process-local store; documents live for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(body: Document) -> StoredDocument {
        let now = Utc::now();
        StoredDocument {
            id: Uuid::new_v4(),
            body,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> StoreResult<Vec<StoredDocument>> {
        let collections = self.collections.read();
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| eval_filter(&doc.body, filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> StoreResult<Option<StoredDocument>> {
        let collections = self.collections.read();
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn insert(&self, collection: Collection, body: Document) -> StoreResult<StoredDocument> {
        let doc = Self::stamp(body);
        self.collections
            .write()
            .entry(collection)
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn insert_many(
        &self,
        collection: Collection,
        bodies: Vec<Document>,
    ) -> StoreResult<Vec<StoredDocument>> {
        let docs: Vec<StoredDocument> = bodies.into_iter().map(Self::stamp).collect();
        self.collections
            .write()
            .entry(collection)
            .or_default()
            .extend(docs.iter().cloned());
        Ok(docs)
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Document,
    ) -> StoreResult<Option<StoredDocument>> {
        let mut collections = self.collections.write();
        let Some(doc) = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
        else {
            return Ok(None);
        };
        doc.body.extend(patch);
        doc.updated_at = Utc::now();
        Ok(Some(doc.clone()))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> StoreResult<Option<StoredDocument>> {
        let mut collections = self.collections.write();
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(None);
        };
        Ok(docs
            .iter()
            .position(|doc| doc.id == id)
            .map(|index| docs.remove(index)))
    }

    async fn delete_all(&self, collection: Collection) -> StoreResult<u64> {
        let removed = self
            .collections
            .write()
            .remove(&collection)
            .map(|docs| docs.len())
            .unwrap_or(0);
        Ok(removed as u64)
    }

    async fn distinct(
        &self,
        collection: Collection,
        field: FieldPath,
        filter: &Filter,
    ) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read();
        let mut values: Vec<Value> = Vec::new();
        let matching = collections
            .get(&collection)
            .into_iter()
            .flatten()
            .filter(|doc| eval_filter(&doc.body, filter));

        for doc in matching {
            let candidates = match get_path(&doc.body, field) {
                Some(Value::Array(items)) => items.iter().collect::<Vec<_>>(),
                Some(value) => vec![value],
                None => Vec::new(),
            };
            for candidate in candidates {
                if !candidate.is_null() && !values.iter().any(|seen| values_equal(seen, candidate))
                {
                    values.push(candidate.clone());
                }
            }
        }

        values.sort_by(compare_values);
        Ok(values)
    }
}

pub fn eval_filter(doc: &Document, filter: &Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::And(children) => children.iter().all(|f| eval_filter(doc, f)),
        Filter::Or(children) => children.iter().any(|f| eval_filter(doc, f)),
        Filter::Field { path, predicate } => match get_path(doc, *path) {
            Some(value) => eval_predicate(value, predicate),
            None => false,
        },
    }
}

fn eval_predicate(value: &Value, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Eq(expected) => matches_value(value, expected),
        Predicate::In(expected) => expected.iter().any(|e| matches_value(value, e)),
        Predicate::Contains(text) => value
            .as_str()
            .is_some_and(|s| contains_ignore_case(s, text)),
        Predicate::AnyElementContains(text) => value.as_array().is_some_and(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .any(|s| contains_ignore_case(s, text))
        }),
        Predicate::Gte(bound) => value.as_f64().is_some_and(|n| n >= *bound),
        Predicate::Lte(bound) => value.as_f64().is_some_and(|n| n <= *bound),
    }
}

/// Array fields match when any element does.
fn matches_value(value: &Value, expected: &Value) -> bool {
    match value {
        Value::Array(items) if !expected.is_array() => {
            items.iter().any(|item| values_equal(item, expected))
        }
        _ => values_equal(value, expected),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn get_path<'a>(doc: &'a Document, path: FieldPath) -> Option<&'a Value> {
    let mut segments = path.segments();
    let mut current = doc.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Ordering used for distinct values: null < string < number < bool < array < object.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .unwrap_or(f64::NAN)
            .total_cmp(&y.as_f64().unwrap_or(f64::NAN)),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::String(_) => 1,
        Value::Number(_) => 2,
        Value::Bool(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
