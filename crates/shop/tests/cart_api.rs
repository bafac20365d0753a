mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn new_user_gets_an_empty_cart() {
    let app = TestApp::seeded();

    let (status, body) = app.call(Method::GET, "/cart/", Some(1), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user_id"], 1);
    assert_eq!(body["data"]["items"], json!([]));
    assert_eq!(body["data"]["total_quantity"], 0);
}

#[tokio::test]
async fn adding_the_same_variant_twice_merges_the_line() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(
            Method::POST,
            "/cart/add-to-cart/",
            Some(1),
            Some(json!({"variant_id": 1, "quantity": 2})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Item added to cart.");
    assert_eq!(body["data"]["quantity"], 2);

    let (_, body) = app
        .call(
            Method::POST,
            "/cart/add-to-cart/",
            Some(1),
            Some(json!({"variant_id": 1})),
        )
        .await;
    assert_eq!(body["data"]["quantity"], 3);

    let (_, cart) = app.call(Method::GET, "/cart/", Some(1), None).await;
    let items = cart["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["sku"], "SKU-1");
    assert_eq!(items[0]["product_name"], "iPhone 15");
    assert_eq!(items[0]["price"], 1600.0);
    assert_eq!(cart["data"]["total_quantity"], 3);
}

#[tokio::test]
async fn cart_lines_show_the_charged_price() {
    let app = TestApp::seeded();
    app.db.add_variant(2, 1, 3, 1000.0, Some(800.0));

    app.call(
        Method::POST,
        "/cart/add-to-cart/",
        Some(1),
        Some(json!({"variant_id": 2, "quantity": 1})),
    )
    .await;

    let (_, cart) = app.call(Method::GET, "/cart/", Some(1), None).await;
    assert_eq!(cart["data"]["items"][0]["price"], 800.0);
}

#[tokio::test]
async fn adding_an_unknown_variant_is_not_found() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(
            Method::POST,
            "/cart/add-to-cart/",
            Some(1),
            Some(json!({"variant_id": 42, "quantity": 1})),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product variant does not exist.");
}

#[tokio::test]
async fn items_can_only_be_removed_from_own_cart() {
    let app = TestApp::seeded();

    let (_, added) = app
        .call(
            Method::POST,
            "/cart/add-to-cart/",
            Some(1),
            Some(json!({"variant_id": 1, "quantity": 1})),
        )
        .await;
    let item_id = added["data"]["id"].clone();

    let (status, body) = app
        .call(
            Method::POST,
            "/cart/remove-from-cart/",
            Some(2),
            Some(json!({"cart_item_id": item_id})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item is not in the cart.");

    let (status, _) = app
        .call(
            Method::POST,
            "/cart/remove-from-cart/",
            Some(1),
            Some(json!({"cart_item_id": item_id})),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, cart) = app.call(Method::GET, "/cart/", Some(1), None).await;
    assert_eq!(cart["data"]["items"], json!([]));
}

#[tokio::test]
async fn quantity_update_replaces_the_line_quantity() {
    let app = TestApp::seeded();

    app.call(
        Method::POST,
        "/cart/add-to-cart/",
        Some(1),
        Some(json!({"variant_id": 1, "quantity": 1})),
    )
    .await;

    let (status, body) = app
        .call(
            Method::PATCH,
            "/cart/update-quantity/",
            Some(1),
            Some(json!({"variant_id": 1, "quantity": 4})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item quantity updated.");
    assert_eq!(body["data"]["quantity"], 4);
}

#[tokio::test]
async fn quantity_update_rejects_bad_input() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(
            Method::PATCH,
            "/cart/update-quantity/",
            Some(1),
            Some(json!({"variant_id": 1, "quantity": 0})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "quantity: Quantity must be greater than or equal to 1"
    );

    let (status, body) = app
        .call(
            Method::PATCH,
            "/cart/update-quantity/",
            Some(1),
            Some(json!({"variant_id": 1, "quantity": 2})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item is not in the cart.");
}

#[tokio::test]
async fn cart_requires_a_token() {
    let app = TestApp::seeded();

    let (status, _) = app.call(Method::GET, "/cart/", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
