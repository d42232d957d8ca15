//! HTTP-level integration tests for the fabric and garment catalog.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth,
    token_with_role,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Public catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_catalog_lists_as_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/fabrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/garments").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn featured_fabrics_list_first(pool: PgPool) {
    let token = admin_token();
    for (name, featured) in [("Plain Cotton", false), ("Golden Silk", true)] {
        let app = common::build_test_app(pool.clone());
        post_json_auth(
            app,
            "/api/v1/admin/fabrics",
            &token,
            serde_json::json!({
                "name": name,
                "material": "Cotton",
                "color": "White",
                "price_per_meter": 800,
                "stock_meters": 50,
                "featured": featured
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/fabrics").await).await;
    assert_eq!(json[0]["name"], "Golden Silk");
    assert_eq!(json[1]["name"], "Plain Cotton");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_fabric_disappears_from_public_views(pool: PgPool) {
    let fabric_id = common::seed_fabric(&pool, 50, 2500).await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(
        app,
        &format!("/api/v1/admin/fabrics/{fabric_id}"),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone from the public list and detail view.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/fabrics").await).await;
    assert_eq!(json, serde_json::json!([]));

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/fabrics/{fabric_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Still visible to the admin list.
    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/admin/fabrics", &admin_token()).await).await;
    assert_eq!(json[0]["is_active"], false);
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_fabric_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/fabrics",
        &admin_token(),
        serde_json::json!({
            "name": "Linen",
            "material": "Linen",
            "color": "Beige",
            "price_per_meter": 1200,
            "stock_meters": 30
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Linen");
    assert_eq!(json["is_active"], true);
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_fabric_with_nonpositive_price_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/fabrics",
        &admin_token(),
        serde_json::json!({
            "name": "Freebie",
            "material": "Cotton",
            "color": "White",
            "price_per_meter": 0,
            "stock_meters": 10
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_garment_applies_partial_fields(pool: PgPool) {
    let garment_id = common::seed_garment(&pool, 1500).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/garments/{garment_id}"),
        &admin_token(),
        serde_json::json!({"base_price": 1800}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["base_price"], 1800);
    // Untouched fields survive.
    assert_eq!(json["name"], "Classic Shirt");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_unknown_garment_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/admin/garments/999999",
        &admin_token(),
        serde_json::json!({"base_price": 1800}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Authorization gating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_require_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/fabrics").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_non_admin_roles(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/fabrics", &token_with_role("viewer")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}
