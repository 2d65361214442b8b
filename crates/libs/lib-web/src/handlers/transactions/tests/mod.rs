//! # Transaction Handler Tests
//!
//! Transaction engine behavior observed through the HTTP API.

mod update;

use crate::services::AssetService;
use crate::test_utils::{
    bearer, bitcoin_request, create_user, read_json, request, send, setup_test_db, test_app,
};
use axum::http::StatusCode;
use axum::Router;
use lib_core::DbPool;
use serde_json::{json, Value};

struct Ctx {
    app: Router,
    pool: DbPool,
    auth: String,
    user_id: i64,
    asset_id: i64,
}

async fn ctx() -> Ctx {
    let pool = setup_test_db().await;
    let user = create_user(&pool, "trader@example.com", "trader", "secret1").await;
    let asset = AssetService::new(pool.clone())
        .create(bitcoin_request())
        .await
        .expect("Asset creation should succeed");

    Ctx {
        app: test_app(pool.clone()),
        pool,
        auth: bearer(user.id),
        user_id: user.id,
        asset_id: asset.id,
    }
}

/// POST a transaction body and return the status with the parsed body.
async fn post_transaction(ctx: &Ctx, body: Value) -> (StatusCode, Value) {
    let response = send(
        &ctx.app,
        request("POST", "/api/v1/transactions", Some(&ctx.auth), Some(&body)),
    )
    .await;
    let status = response.status();
    (status, read_json(response).await)
}

/// Create a buy of `amount` at `price` and return its id.
async fn create_buy(ctx: &Ctx, amount: f64, price: f64) -> i64 {
    let (status, body) = post_transaction(
        ctx,
        json!({ "asset_id": ctx.asset_id, "type": "buy", "amount": amount, "price": price }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_i64().expect("Transaction id")
}
