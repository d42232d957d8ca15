//! HTTP-level integration tests for order placement, tracking, and status
//! management.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, get_auth, post_json, put_json_auth};
use sqlx::PgPool;

/// Standard wizard submission against the seeded catalog
/// (base 1500, fabric 2500/m).
fn order_body(fabric_id: i64, garment_id: i64) -> serde_json::Value {
    serde_json::json!({
        "customer": {
            "name": "Asha Rao",
            "phone": "9876543210",
            "email": "asha@example.com"
        },
        "fabric_id": fabric_id,
        "garment_id": garment_id,
        "customizations": {
            "options": {"collar": "Button Down"},
            "lining": false
        },
        "measurements": {"method": "manual", "chest": 40, "waist": 34},
        "urgent": false
    })
}

// ---------------------------------------------------------------------------
// Placement and pricing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn placing_an_order_prices_it_server_side(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/orders", order_body(fabric_id, garment_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    // 1500 base + 2500 * 2m fabric.
    assert_eq!(json["breakdown"]["total"], 6500);
    assert_eq!(json["breakdown"]["base_price"], 1500);
    assert_eq!(json["breakdown"]["fabric_cost"], 5000);
    assert_eq!(json["order"]["price"], 6500);
    assert_eq!(json["order"]["status"], "confirmed");

    let tracking_id = json["order"]["tracking_id"].as_str().unwrap();
    assert!(tracking_id.starts_with("RT"));
    assert_eq!(tracking_id.len(), 8);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn lining_home_visit_and_urgency_surcharges_stack(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let mut body = order_body(fabric_id, garment_id);
    body["customizations"]["lining"] = serde_json::json!(true);
    body["measurements"]["method"] = serde_json::json!("home_visit");
    body["urgent"] = serde_json::json!(true);

    let app = common::build_test_app(pool);
    let json = body_json(post_json(app, "/api/v1/orders", body).await).await;

    // 1500 + 5000 + 300 lining + 200 home visit + 500 urgent.
    assert_eq!(json["breakdown"]["lining_surcharge"], 300);
    assert_eq!(json["breakdown"]["home_visit_surcharge"], 200);
    assert_eq!(json["breakdown"]["urgent_surcharge"], 500);
    assert_eq!(json["breakdown"]["total"], 7500);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn urgent_orders_get_the_short_turnaround(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let mut body = order_body(fabric_id, garment_id);
    body["urgent"] = serde_json::json!(true);

    let app = common::build_test_app(pool);
    let json = body_json(post_json(app, "/api/v1/orders", body).await).await;

    let expected = chrono::Utc::now().date_naive() + chrono::Days::new(7);
    assert_eq!(
        json["order"]["estimated_completion"],
        expected.to_string().as_str()
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_customization_option_is_rejected(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let mut body = order_body(fabric_id, garment_id);
    body["customizations"]["options"] = serde_json::json!({"collar": "Mandarin"});

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/orders", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn insufficient_stock_rejects_the_order(pool: PgPool) {
    // One meter in stock, the order needs two.
    let fabric_id = common::seed_fabric(&pool, 1, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/orders", order_body(fabric_id, garment_id)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing persisted.
    let app = common::build_test_app(pool);
    let orders = body_json(get_auth(app, "/api/v1/admin/orders", &admin_token()).await).await;
    assert_eq!(orders, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_customer_details_are_rejected(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let mut body = order_body(fabric_id, garment_id);
    body["customer"]["email"] = serde_json::json!("not-an-email");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/orders", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn tracking_returns_projection_with_breakdown_and_step(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let app = common::build_test_app(pool.clone());
    let placed = body_json(
        post_json(app, "/api/v1/orders", order_body(fabric_id, garment_id)).await,
    )
    .await;
    let tracking_id = placed["order"]["tracking_id"].as_str().unwrap().to_string();
    let order_id = placed["order"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/orders/track/{tracking_id}")).await).await;
    assert_eq!(json["order"]["customer_name"], "Asha Rao");
    assert_eq!(json["order"]["fabric_name"], "Premium Silk");
    assert_eq!(json["breakdown"]["total"], 6500);
    assert_eq!(json["step_index"], 0);

    // Advance the order and confirm the step index follows.
    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        &format!("/api/v1/admin/orders/{order_id}/status"),
        &admin_token(),
        serde_json::json!({"status": "ready"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/orders/track/{tracking_id}")).await).await;
    assert_eq!(json["order"]["status"], "ready");
    assert_eq!(json["step_index"], 6);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_and_malformed_tracking_ids_return_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/orders/track/RT000000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/orders/track/not-a-tracking-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Admin status management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn status_walks_the_whole_lifecycle(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;
    let garment_id = common::seed_garment(&pool, 1500).await;

    let app = common::build_test_app(pool.clone());
    let placed = body_json(
        post_json(app, "/api/v1/orders", order_body(fabric_id, garment_id)).await,
    )
    .await;
    let order_id = placed["order"]["id"].as_i64().unwrap();

    for status in [
        "fabric_ready",
        "cutting",
        "stitching",
        "embroidery",
        "quality_check",
        "ready",
        "completed",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = put_json_auth(
            app,
            &format!("/api/v1/admin/orders/{order_id}/status"),
            &admin_token(),
            serde_json::json!({"status": status}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "setting {status}");
        let json = body_json(response).await;
        assert_eq!(json["status"], status);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_updates_require_admin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/admin/orders/1/status",
        "not-a-valid-token",
        serde_json::json!({"status": "ready"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_update_for_unknown_order_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/admin/orders/999999/status",
        &admin_token(),
        serde_json::json!({"status": "ready"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
