mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

const MISSING_ID: &str = "7b0c6b1e-3a4f-4a53-9f59-3c4a6c8e2d10";

#[tokio::test]
async fn empty_lists_are_not_found() {
    let app = test_app();
    for uri in ["/wishlist", "/cart/products", "/address"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["error"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn wishlist_add_list_remove() {
    let app = test_app();
    let (status, item) = post(&app, "/wishlist/wishlistProduct", ipad()).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = item["_id"].as_str().unwrap().to_string();

    let (status, list) = get(&app, "/wishlist").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(model_names(&list), vec!["Apple iPad Air"]);

    let (status, body) = delete(&app, &format!("/wishlist/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted successfully.");
    assert_eq!(body["product"]["_id"], json!(id));

    let (status, _) = delete(&app, &format!("/wishlist/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wishlist_rejects_incomplete_products() {
    let app = test_app();
    let mut product = ipad();
    product.as_object_mut().unwrap().remove("features");
    let (status, _) = post(&app, "/wishlist/wishlistProduct", product).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_quantity_is_replaced() {
    let app = test_app();
    let mut product = galaxy();
    product["quantity"] = json!(1);
    let (status, item) = post(&app, "/cart/product", product).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["quantity"], json!(1));
    let id = item["_id"].as_str().unwrap().to_string();

    let (status, body) = put(&app, &format!("/cart/product/{id}"), json!({ "quantity": 3 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product update successfully.");
    assert_eq!(body["product"]["quantity"], json!(3));
    assert_eq!(body["product"]["modelName"], "Samsung Galaxy S23 5G");

    let (_, list) = get(&app, "/cart/products").await;
    assert_eq!(list[0]["quantity"], json!(3));
}

#[tokio::test]
async fn cart_quantity_defaults_to_zero() {
    let app = test_app();
    let (status, item) = post(&app, "/cart/product", vivobook()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["quantity"], json!(0));
}

#[tokio::test]
async fn cart_quantity_update_requires_an_integer() {
    let app = test_app();
    let (_, item) = post(&app, "/cart/product", galaxy()).await;
    let uri = format!("/cart/product/{}", item["_id"].as_str().unwrap());

    let (status, _) = put(&app, &uri, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(&app, &uri, json!({ "quantity": "three" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(&app, &format!("/cart/product/{MISSING_ID}"), json!({ "quantity": 2 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cart_single_delete_and_clear() {
    let app = test_app();
    let (_, first) = post(&app, "/cart/product", galaxy()).await;
    post(&app, "/cart/product", vivobook()).await;
    post(&app, "/cart/product", legion()).await;

    let id = first["_id"].as_str().unwrap();
    let (status, body) = delete(&app, &format!("/cart/product/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["modelName"], "Samsung Galaxy S23 5G");

    let (status, body) = delete(&app, "/cart/products/delete").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted all products from cart.");
    assert_eq!(body["deletedCount"], json!(2));

    let (status, _) = get(&app, "/cart/products").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = delete(&app, "/cart/products/delete").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], json!(0));
}

#[tokio::test]
async fn deleting_unknown_ids_is_not_found_everywhere() {
    let app = seeded_app().await;
    for id in [MISSING_ID, "not-an-id"] {
        for uri in [
            format!("/wishlist/{id}"),
            format!("/cart/product/{id}"),
            format!("/address/{id}"),
        ] {
            let (status, body) = delete(&app, &uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(body["error"].is_string(), "{uri}");
        }
    }
}

#[tokio::test]
async fn address_lifecycle() {
    let app = test_app();
    let (status, created) = post(&app, "/address", address()).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["_id"].as_str().unwrap().to_string();

    let (status, body) = put(&app, &format!("/address/{id}"), json!({ "city": "Mysuru" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Address updated successfully.");
    assert_eq!(body["address"]["city"], "Mysuru");
    assert_eq!(body["address"]["name"], "Asha Rao");

    let (_, list) = get(&app, "/address").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["city"], "Mysuru");

    let (status, body) = delete(&app, &format!("/address/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully deleted address");

    let (status, body) = get(&app, "/address").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Address not found.");
}

#[tokio::test]
async fn address_requires_every_field() {
    let app = test_app();
    let mut incomplete = address();
    incomplete.as_object_mut().unwrap().remove("pincode");
    let (status, _) = post(&app, "/address", incomplete).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut blank = address();
    blank["city"] = json!("");
    let (status, _) = post(&app, "/address", blank).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn address_update_rejects_blank_fields_and_unknown_ids() {
    let app = test_app();
    let (_, created) = post(&app, "/address", address()).await;
    let id = created["_id"].as_str().unwrap();

    let (status, body) = put(&app, &format!("/address/{id}"), json!({ "city": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid input."), "{message}");

    let (status, body) = put(&app, &format!("/address/{MISSING_ID}"), json!({ "city": "Pune" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Failed to update. Address not found.");
}
