//! HTTP-level integration tests for staff login.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

use atelier_api::auth::password::hash_password;
use atelier_db::repositories::UserRepo;

async fn seed_admin(pool: &PgPool, email: &str, password: &str) {
    let hash = hash_password(password).expect("hashing");
    UserRepo::create_admin(pool, email, &hash)
        .await
        .expect("admin insert");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_a_working_access_token(pool: PgPool) {
    seed_admin(&pool, "owner@atelier.test", "measure-twice-cut-once").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({
            "email": "owner@atelier.test",
            "password": "measure-twice-cut-once"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "owner@atelier.test");
    assert_eq!(json["user"]["role"], "admin");
    assert!(json["expires_in"].as_i64().unwrap() > 0);

    // The issued token opens an admin route.
    let token = json["access_token"].as_str().unwrap();
    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/admin/orders", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_returns_401(pool: PgPool) {
    seed_admin(&pool, "owner@atelier.test", "measure-twice-cut-once").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({
            "email": "owner@atelier.test",
            "password": "wrong"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    // The message must not reveal which half was wrong.
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_email_returns_the_same_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({
            "email": "nobody@atelier.test",
            "password": "whatever"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}
