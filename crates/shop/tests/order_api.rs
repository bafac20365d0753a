mod common;

use axum::http::{Method, StatusCode};
use common::{FakeKafka, ORDERS_LINK, PaymentBehavior, TestApp};
use serde_json::{Value, json};
use shared::domain::ORDER_CONFIRMATION_TOPIC;

fn order_body(variant_id: i32, quantity: i32, payment: &str) -> Value {
    json!({
        "variant_id": variant_id,
        "quantity": quantity,
        "ship_address": "12 Nguyen Hue, District 1",
        "payment": payment,
    })
}

fn with_code(mut body: Value, code: &str) -> Value {
    body["discount_code"] = json!(code);
    body
}

#[tokio::test]
async fn cod_order_is_persisted_and_stock_decremented() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 2, "COD")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Order placed successfully");

    let order = &body["data"];
    assert_eq!(order["user_id"], 1);
    assert_eq!(order["payment"], "COD");
    assert!(order.get("short_link").is_none());
    assert_eq!(order["order_details"][0]["quantity"], 2);
    assert_eq!(order["order_details"][0]["price"], 3200.0);
    assert_eq!(order["order_details"][0]["status"], "Pending");

    assert_eq!(app.db.stock_of(1), 3);
    assert_eq!(app.cache.invalidated(), vec![1]);
    assert!(app.payment.amounts().is_empty());
}

#[tokio::test]
async fn compare_at_price_is_what_gets_charged() {
    let app = TestApp::seeded();
    app.db.add_variant(2, 1, 10, 1000.0, Some(800.0));

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(2, 2, "COD")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["order_details"][0]["price"], 1600.0);
}

#[tokio::test]
async fn percent_and_money_discounts_apply() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(
            Method::POST,
            "/order/",
            Some(1),
            Some(with_code(order_body(1, 1, "COD"), "SALE10")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["order_details"][0]["price"], 1440.0);
    assert_eq!(body["data"]["discount_id"], 1);

    let (status, body) = app
        .call(
            Method::POST,
            "/order/",
            Some(1),
            Some(with_code(order_body(1, 1, "COD"), "MINUS200")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["order_details"][0]["price"], 1400.0);
    assert_eq!(body["data"]["discount_id"], 2);
}

#[tokio::test]
async fn expired_or_unknown_codes_are_rejected_without_side_effects() {
    let app = TestApp::seeded();

    for code in ["EXPIRED", "NOPE"] {
        let (status, body) = app
            .call(
                Method::POST,
                "/order/",
                Some(1),
                Some(with_code(order_body(1, 1, "COD"), code)),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "code {code}");
        assert_eq!(body["message"], "Invalid or expired discount code.");
    }

    assert_eq!(app.db.stock_of(1), 5);
    assert_eq!(app.db.order_count(), 0);
    assert!(app.kafka.sent().is_empty());
}

#[tokio::test]
async fn blank_discount_code_means_no_discount() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(
            Method::POST,
            "/order/",
            Some(1),
            Some(with_code(order_body(1, 1, "COD"), "  ")),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["order_details"][0]["price"], 1600.0);
    assert_eq!(body["data"]["discount_id"], Value::Null);
}

#[tokio::test]
async fn ordering_more_than_stock_fails() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 6, "COD")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not enough stock for this variant.");
    assert_eq!(app.db.stock_of(1), 5);
    assert_eq!(app.db.order_count(), 0);
}

#[tokio::test]
async fn whole_stock_can_be_bought() {
    let app = TestApp::seeded();

    let (status, _) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 5, "COD")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.db.stock_of(1), 0);
}

#[tokio::test]
async fn unknown_variant_is_not_found() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(99, 1, "COD")))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Variant not found");
}

#[tokio::test]
async fn malformed_bodies_are_rejected_before_the_service() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 0, "COD")))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"]["quantity"].is_array());

    let (status, body) = app
        .call(
            Method::POST,
            "/order/",
            Some(1),
            Some(json!({"variant_id": 1, "quantity": "two", "ship_address": "x", "payment": "COD"})),
        )
        .await;
    assert!(status.is_client_error());
    assert_eq!(body["error"], "Invalid JSON");

    assert_eq!(app.db.order_count(), 0);
}

#[tokio::test]
async fn accepted_momo_payment_marks_detail_done_and_returns_link() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "MoMo")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["short_link"], "https://pay.test/abc");
    assert_eq!(body["data"]["order_details"][0]["status"], "Done");
    assert_eq!(app.payment.amounts(), vec![1600]);
    assert_eq!(app.db.details()[0].status, "Done");
}

#[tokio::test]
async fn momo_amount_is_truncated_to_whole_units() {
    let app = TestApp::seeded();
    app.db.add_variant(2, 1, 10, 999.99, None);

    let (status, _) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(2, 1, "MoMo")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.payment.amounts(), vec![999]);
}

#[tokio::test]
async fn failed_momo_setup_still_creates_the_order() {
    for behavior in [PaymentBehavior::Decline, PaymentBehavior::Unreachable] {
        let app = TestApp::with(behavior, FakeKafka::default());
        app.seed();

        let (status, body) = app
            .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "MoMo")))
            .await;

        assert_eq!(status, StatusCode::CREATED, "{behavior:?}");
        assert!(body["data"].get("short_link").is_none());
        assert_eq!(body["data"]["order_details"][0]["status"], "Pending");
        assert_eq!(app.db.stock_of(1), 4);
        assert_eq!(app.db.order_count(), 1);
    }
}

#[tokio::test]
async fn status_update_failure_after_payment_keeps_order_pending() {
    let app = TestApp::seeded();
    app.db.fail_status_updates();

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "MoMo")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["short_link"], "https://pay.test/abc");
    assert_eq!(body["data"]["order_details"][0]["status"], "Pending");
}

#[tokio::test]
async fn confirmation_email_is_queued() {
    let app = TestApp::seeded();

    let (_, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "COD")))
        .await;
    let order_id = body["data"]["id"].as_i64().unwrap();

    let sent = app.kafka.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, ORDER_CONFIRMATION_TOPIC);
    assert_eq!(sent[0].1, order_id.to_string());

    let email = &app.kafka.emails()[0];
    assert_eq!(email.to, "alice@example.com");
    assert_eq!(email.subject, "Order Confirmation");
    assert_eq!(email.data.link, ORDERS_LINK);
    assert!(email.data.message.contains(&format!("- Order ID: {order_id}")));
    assert!(email.data.message.contains("- Total Price: $1600.00"));
}

#[tokio::test]
async fn broker_outage_does_not_fail_the_purchase() {
    let app = TestApp::with(PaymentBehavior::Accept, FakeKafka::down());
    app.seed();

    let (status, _) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "COD")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.db.order_count(), 1);
}

#[tokio::test]
async fn user_without_email_gets_no_confirmation() {
    let app = TestApp::seeded();
    app.db.add_user(3, "carol", "", None);

    let (status, _) = app
        .call(Method::POST, "/order/", Some(3), Some(order_body(1, 1, "COD")))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(app.kafka.sent().is_empty());
}

#[tokio::test]
async fn concurrent_orders_for_the_last_unit_sell_it_once() {
    let app = TestApp::seeded();
    app.db.add_variant(2, 1, 1, 1200.0, None);

    let (first, second) = tokio::join!(
        app.call(Method::POST, "/order/", Some(1), Some(order_body(2, 1, "COD"))),
        app.call(Method::POST, "/order/", Some(2), Some(order_body(2, 1, "COD"))),
    );

    let mut statuses = vec![first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::BAD_REQUEST]);

    assert_eq!(app.db.stock_of(2), 0);
    assert_eq!(app.db.order_count(), 1);
}

#[tokio::test]
async fn stock_sold_after_the_read_is_caught_by_the_store() {
    let app = TestApp::seeded();
    app.db.add_variant(2, 1, 1, 1200.0, None);
    app.db.report_stale_stock(2, 5);

    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(2, 2, "MoMo")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not enough stock for this variant.");

    assert_eq!(app.db.stock_of(2), 1);
    assert_eq!(app.db.order_count(), 0);
    assert!(app.kafka.sent().is_empty());
    assert!(app.payment.amounts().is_empty());
    assert!(app.cache.invalidated().is_empty());
}

#[tokio::test]
async fn ship_date_without_offset_or_time_is_accepted() {
    let app = TestApp::seeded();

    let mut naive = order_body(1, 1, "COD");
    naive["ship_date"] = json!("2025-03-01T10:00:00");
    let (status, body) = app.call(Method::POST, "/order/", Some(1), Some(naive)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["ship_date"], "2025-03-01 10:00:00");

    let mut date_only = order_body(1, 1, "COD");
    date_only["ship_date"] = json!("2025-03-01");
    let (status, body) = app
        .call(Method::POST, "/order/", Some(1), Some(date_only))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["ship_date"], "2025-03-01 00:00:00");
}

#[tokio::test]
async fn my_orders_lists_only_own_orders_newest_first() {
    let app = TestApp::seeded();

    let (_, first) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "COD")))
        .await;
    let (_, second) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "COD")))
        .await;
    app.call(Method::POST, "/order/", Some(2), Some(order_body(1, 1, "COD")))
        .await;

    let (status, body) = app.call(Method::GET, "/order/my-orders/", Some(1), None).await;

    assert_eq!(status, StatusCode::OK);
    let orders = body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["id"], second["data"]["id"]);
    assert_eq!(orders[1]["id"], first["data"]["id"]);
    assert_eq!(orders[0]["order_details"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn order_endpoints_require_a_token() {
    let app = TestApp::seeded();

    let (status, body) = app
        .call(Method::POST, "/order/", None, Some(order_body(1, 1, "COD")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "You are not logged in, please provide token");

    let (status, _) = app.call(Method::GET, "/order/my-orders/", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(app.db.order_count(), 0);
}

#[tokio::test]
async fn check_order_matches_by_id_and_phone() {
    let app = TestApp::seeded();

    let (_, placed) = app
        .call(Method::POST, "/order/", Some(1), Some(order_body(1, 1, "COD")))
        .await;
    let order_id = placed["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .call(
            Method::POST,
            "/order/check-order/",
            None,
            Some(json!({"phone_number": "0901234567", "order_code": order_id})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], order_id);
    assert_eq!(body["data"]["order_details"][0]["quantity"], 1);

    let (status, _) = app
        .call(
            Method::POST,
            "/order/check-order/",
            None,
            Some(json!({"phone_number": "0901234567", "order_code": order_id.to_string()})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .call(
            Method::POST,
            "/order/check-order/",
            None,
            Some(json!({"phone_number": "0907654321", "order_code": order_id})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found or phone number does not match.");
}

#[tokio::test]
async fn check_order_requires_both_fields() {
    let app = TestApp::seeded();

    for payload in [
        json!({"order_code": 1}),
        json!({"phone_number": "0901234567"}),
        json!({"phone_number": "", "order_code": 1}),
        json!({"phone_number": "0901234567", "order_code": ""}),
    ] {
        let (status, body) = app
            .call(Method::POST, "/order/check-order/", None, Some(payload))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Phone number and order code are required.");
    }

    let (status, body) = app
        .call(
            Method::POST,
            "/order/check-order/",
            None,
            Some(json!({"phone_number": "0901234567", "order_code": "abc"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Order code must be a number.");
}
