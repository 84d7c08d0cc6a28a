use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

pub mod filter;
pub mod memory;
pub mod postgres;

pub use filter::{FieldPath, Filter, Predicate};
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Body of a stored document, without its id and timestamps.
pub type Document = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Wishlist,
    Cart,
    Addresses,
}

impl Collection {
    pub fn as_table(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Wishlist => "wishlist_items",
            Collection::Cart => "cart_items",
            Collection::Addresses => "addresses",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("document {id} in {table} does not match its schema: {source}")]
    Corrupt {
        table: &'static str,
        id: Uuid,
        source: serde_json::Error,
    },

    #[error("{0} must serialize to a JSON object")]
    NotAnObject(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: Document,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredDocument {
    pub fn decode<T: DeserializeOwned>(self, collection: Collection) -> StoreResult<Record<T>> {
        let data = serde_json::from_value(Value::Object(self.body)).map_err(|source| {
            StoreError::Corrupt {
                table: collection.as_table(),
                id: self.id,
                source,
            }
        })?;
        Ok(Record {
            id: self.id,
            data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// A typed document as it is returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Record<T> {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub data: T,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persistence boundary over the four document collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short name of the adapter, reported by the health check.
    fn backend(&self) -> &'static str;

    async fn ping(&self) -> StoreResult<()>;

    /// Matching documents in insertion order.
    async fn find(&self, collection: Collection, filter: &Filter)
    -> StoreResult<Vec<StoredDocument>>;

    async fn find_by_id(&self, collection: Collection, id: Uuid)
    -> StoreResult<Option<StoredDocument>>;

    async fn insert(&self, collection: Collection, body: Document) -> StoreResult<StoredDocument>;

    /// Inserts every body or none of them.
    async fn insert_many(
        &self,
        collection: Collection,
        bodies: Vec<Document>,
    ) -> StoreResult<Vec<StoredDocument>>;

    /// Shallow-merges `patch` into the document and returns the updated version.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        patch: Document,
    ) -> StoreResult<Option<StoredDocument>>;

    async fn delete_by_id(&self, collection: Collection, id: Uuid)
    -> StoreResult<Option<StoredDocument>>;

    /// Returns the number of removed documents.
    async fn delete_all(&self, collection: Collection) -> StoreResult<u64>;

    /// Distinct non-null values at `field` among matching documents, arrays
    /// flattened, in ascending order.
    async fn distinct(
        &self,
        collection: Collection,
        field: FieldPath,
        filter: &Filter,
    ) -> StoreResult<Vec<Value>>;
}

/// Ids that do not parse can never match a stored document.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

fn to_document<T: Serialize>(value: &T, what: &'static str) -> StoreResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject(what)),
    }
}

/// Typed view of one collection.
pub struct Documents<'a, T> {
    store: &'a dyn DocumentStore,
    collection: Collection,
    marker: PhantomData<fn() -> T>,
}

impl<'a, T> Documents<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: &'a dyn DocumentStore, collection: Collection) -> Self {
        Self {
            store,
            collection,
            marker: PhantomData,
        }
    }

    pub async fn find(&self, filter: &Filter) -> StoreResult<Vec<Record<T>>> {
        self.store
            .find(self.collection, filter)
            .await?
            .into_iter()
            .map(|doc| doc.decode(self.collection))
            .collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Record<T>>> {
        self.store
            .find_by_id(self.collection, id)
            .await?
            .map(|doc| doc.decode(self.collection))
            .transpose()
    }

    pub async fn insert(&self, value: &T) -> StoreResult<Record<T>> {
        let body = to_document(value, self.collection.as_table())?;
        self.store
            .insert(self.collection, body)
            .await?
            .decode(self.collection)
    }

    pub async fn insert_many(&self, values: &[T]) -> StoreResult<Vec<Record<T>>> {
        let bodies = values
            .iter()
            .map(|value| to_document(value, self.collection.as_table()))
            .collect::<StoreResult<Vec<_>>>()?;
        self.store
            .insert_many(self.collection, bodies)
            .await?
            .into_iter()
            .map(|doc| doc.decode(self.collection))
            .collect()
    }

    pub async fn update_by_id(&self, id: Uuid, patch: Document) -> StoreResult<Option<Record<T>>> {
        self.store
            .update_by_id(self.collection, id, patch)
            .await?
            .map(|doc| doc.decode(self.collection))
            .transpose()
    }

    pub async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<Record<T>>> {
        self.store
            .delete_by_id(self.collection, id)
            .await?
            .map(|doc| doc.decode(self.collection))
            .transpose()
    }

    pub async fn delete_all(&self) -> StoreResult<u64> {
        self.store.delete_all(self.collection).await
    }

    pub async fn distinct(&self, field: FieldPath, filter: &Filter) -> StoreResult<Vec<Value>> {
        self.store.distinct(self.collection, field, filter).await
    }
}
