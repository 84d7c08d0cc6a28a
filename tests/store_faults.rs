mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;
use storefront_api::{
    routes::app,
    state::AppState,
    store::{
        Collection, Document, DocumentStore, FieldPath, Filter, StoreError, StoreResult,
        StoredDocument,
    },
};
use uuid::Uuid;

use common::{delete, get, post};

/// Store whose every call fails as an unreachable database would.
struct UnavailableStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    fn backend(&self) -> &'static str {
        "unavailable"
    }

    async fn ping(&self) -> StoreResult<()> {
        unavailable()
    }

    async fn find(&self, _: Collection, _: &Filter) -> StoreResult<Vec<StoredDocument>> {
        unavailable()
    }

    async fn find_by_id(&self, _: Collection, _: Uuid) -> StoreResult<Option<StoredDocument>> {
        unavailable()
    }

    async fn insert(&self, _: Collection, _: Document) -> StoreResult<StoredDocument> {
        unavailable()
    }

    async fn insert_many(&self, _: Collection, _: Vec<Document>) -> StoreResult<Vec<StoredDocument>> {
        unavailable()
    }

    async fn update_by_id(
        &self,
        _: Collection,
        _: Uuid,
        _: Document,
    ) -> StoreResult<Option<StoredDocument>> {
        unavailable()
    }

    async fn delete_by_id(&self, _: Collection, _: Uuid) -> StoreResult<Option<StoredDocument>> {
        unavailable()
    }

    async fn delete_all(&self, _: Collection) -> StoreResult<u64> {
        unavailable()
    }

    async fn distinct(&self, _: Collection, _: FieldPath, _: &Filter) -> StoreResult<Vec<Value>> {
        unavailable()
    }
}

fn failing_app() -> axum::Router {
    app(AppState::new(Arc::new(UnavailableStore)))
}

fn assert_server_error(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Server error: "), "{message}");
    assert!(message.contains("pool timed out"), "{message}");
}

#[tokio::test]
async fn list_routes_report_store_faults_as_server_errors() {
    let app = failing_app();
    for uri in ["/products", "/cart/products", "/product/list?search=laptop", "/collection/laptops"] {
        let (status, body) = get(&app, uri).await;
        assert_server_error(status, &body);
    }
}

#[tokio::test]
async fn delete_routes_report_store_faults_as_server_errors() {
    let app = failing_app();
    let id = Uuid::new_v4();
    for uri in [format!("/cart/product/{id}"), format!("/address/{id}"), "/cart/products/delete".to_string()] {
        let (status, body) = delete(&app, &uri).await;
        assert_server_error(status, &body);
    }
}

#[tokio::test]
async fn writes_report_store_faults_as_server_errors() {
    let app = failing_app();
    let (status, body) = post(&app, "/address", common::address()).await;
    assert_server_error(status, &body);
}

#[tokio::test]
async fn health_reports_unreachable_store() {
    let app = failing_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["store"], "unavailable");
}
