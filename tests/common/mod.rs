#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storefront_api::{routes::app, state::AppState};
use tower::ServiceExt;

pub fn test_app() -> Router {
    app(AppState::in_memory())
}

/// Sends one request through the router and decodes the JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn galaxy() -> Value {
    json!({
        "collectionType": "mobiles&tablets",
        "subCollectionType": "mobile",
        "modelName": "Samsung Galaxy S23 5G",
        "modelSubContent": "8GB RAM, 128GB Storage",
        "rating": 4.5,
        "mrp": 89999,
        "discount": 40,
        "productImageUrl": "https://images.example.com/galaxy.webp",
        "highlights": ["8 GB RAM | 128 GB ROM", "Supports 5G network"],
        "warranty": "1 Year Manufacturer Warranty",
        "features": {
            "brand": "samsung",
            "ram": "8 GB",
            "internalStorage": "128 GB",
            "processor": "snapdragon"
        }
    })
}

pub fn ipad() -> Value {
    json!({
        "collectionType": "mobiles&tablets",
        "subCollectionType": "tablet",
        "modelName": "Apple iPad Air",
        "modelSubContent": "Wi-Fi, 64GB",
        "rating": 4.7,
        "mrp": 59900,
        "discount": 15,
        "productImageUrl": "https://images.example.com/ipad.webp",
        "highlights": ["64 GB ROM", "4G LTE"],
        "warranty": "1 Year Apple Warranty",
        "features": {
            "brand": "apple",
            "ram": "8 GB",
            "internalStorage": "64 GB",
            "processor": "apple"
        }
    })
}

pub fn vivobook() -> Value {
    json!({
        "collectionType": "laptops",
        "subCollectionType": "laptop",
        "modelName": "ASUS Vivobook 15",
        "modelSubContent": "Intel Core i5 12th Gen",
        "rating": 4.2,
        "mrp": 62990,
        "discount": 28,
        "productImageUrl": "https://images.example.com/vivobook.webp",
        "warranty": "1 Year Onsite Warranty",
        "features": {
            "brand": "asus",
            "ram": 16,
            "ssd": 512,
            "type": "thin and light laptop",
            "processorBrand": "intel"
        }
    })
}

pub fn legion() -> Value {
    json!({
        "collectionType": "laptops",
        "subCollectionType": "gaming laptop",
        "modelName": "Lenovo Legion 5 Pro",
        "modelSubContent": "AMD Ryzen 7, 32GB RAM",
        "rating": 4.6,
        "mrp": 154990,
        "discount": 22,
        "productImageUrl": "https://images.example.com/legion.webp",
        "warranty": "1 Year Onsite Warranty",
        "features": {
            "brand": "lenovo",
            "ram": 32,
            "ssd": 1024,
            "type": "gaming laptop",
            "processorBrand": "amd"
        }
    })
}

pub fn address() -> Value {
    json!({
        "name": "Asha Rao",
        "contactNumber": "9876543210",
        "pincode": "560001",
        "locality": "MG Road",
        "address": "12, Brigade Towers",
        "city": "Bengaluru",
        "state": "Karnataka",
        "addressType": "home"
    })
}

/// App with the four sample products already seeded.
pub async fn seeded_app() -> Router {
    let app = test_app();
    let (status, _) = post(
        &app,
        "/seedProduct/allProducts",
        json!([galaxy(), ipad(), vivobook(), legion()]),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    app
}

pub fn model_names(products: &Value) -> Vec<String> {
    products
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["modelName"].as_str().unwrap().to_string())
        .collect()
}
