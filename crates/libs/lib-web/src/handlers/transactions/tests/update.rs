//! # Update and Delete Transaction Tests

use super::*;

async fn put(ctx: &Ctx, id: i64, body: Value) -> (StatusCode, Value) {
    let response = send(
        &ctx.app,
        request(
            "PUT",
            &format!("/api/v1/transactions/{id}"),
            Some(&ctx.auth),
            Some(&body),
        ),
    )
    .await;
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn test_price_only_update_recomputes_with_stored_amount() {
    // Arrange
    let ctx = ctx().await;
    let id = create_buy(&ctx, 2.0, 100.0).await;

    // Act
    let (status, body) = put(&ctx, id, json!({ "price": 150 })).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 2.0);
    assert_eq!(body["price"], 150.0);
    assert_eq!(body["total_value"], 300.0);
}

#[tokio::test]
async fn test_amount_update_to_zero() {
    // Arrange
    let ctx = ctx().await;
    let id = create_buy(&ctx, 2.0, 100.0).await;

    // Act
    let (status, body) = put(&ctx, id, json!({ "amount": 0 })).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 0.0);
    assert_eq!(body["total_value"], 0.0);
}

#[tokio::test]
async fn test_status_update_keeps_values() {
    // Arrange
    let ctx = ctx().await;
    let id = create_buy(&ctx, 0.5, 50000.0).await;

    // Act
    let (status, body) = put(&ctx, id, json!({ "status": "completed", "type": "transfer" })).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["type"], "transfer");
    assert_eq!(body["total_value"], 25000.0);
}

#[tokio::test]
async fn test_update_rejects_bad_values() {
    // Arrange
    let ctx = ctx().await;
    let id = create_buy(&ctx, 1.0, 1.0).await;

    for body in [
        json!({ "status": "settled" }),
        json!({ "amount": -2 }),
        json!({ "price": "free" }),
    ] {
        // Act
        let (status, _) = put(&ctx, id, body.clone()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body} should be rejected");
    }
}

#[tokio::test]
async fn test_update_rejects_overflowing_total() {
    // Arrange
    let ctx = ctx().await;
    let id = create_buy(&ctx, 1e200, 1.0).await;

    // Act
    let (status, body) = put(&ctx, id, json!({ "price": 1e200 })).await;

    // Assert
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Total value is out of range");

    let get = send(
        &ctx.app,
        request::<()>("GET", &format!("/api/v1/transactions/{id}"), Some(&ctx.auth), None),
    )
    .await;
    let stored = read_json(get).await;
    assert_eq!(stored["price"], 1.0);
    assert_eq!(stored["total_value"], 1e200);
}

#[tokio::test]
async fn test_update_missing_transaction() {
    // Arrange
    let ctx = ctx().await;

    // Act
    let (status, body) = put(&ctx, 404, json!({ "price": 1 })).await;

    // Assert
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
async fn test_delete_transaction() {
    // Arrange
    let ctx = ctx().await;
    let id = create_buy(&ctx, 1.0, 1.0).await;
    let uri = format!("/api/v1/transactions/{id}");

    // Act
    let response = send(&ctx.app, request::<()>("DELETE", &uri, Some(&ctx.auth), None)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["message"], "Transaction deleted successfully");

    let get = send(&ctx.app, request::<()>("GET", &uri, Some(&ctx.auth), None)).await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let (status, _) = put(&ctx, id, json!({ "price": 2 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
