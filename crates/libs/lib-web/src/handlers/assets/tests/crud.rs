//! # Asset CRUD Tests

use super::*;
use crate::test_utils::raw_request;
use lib_core::dto::CreateAssetRequest;
use serde_json::json;

#[tokio::test]
async fn test_create_asset() {
    // Arrange
    let (app, auth) = signed_in_app().await;

    // Act
    let response = send(
        &app,
        request("POST", "/api/v1/assets", Some(&auth), Some(&bitcoin_request())),
    )
    .await;

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["symbol"], "BTC");
    assert_eq!(body["type"], "cryptocurrency");
    assert_eq!(body["price"], 50000.0);
    assert_eq!(body["is_active"], true);
}

#[tokio::test]
async fn test_create_asset_duplicate_symbol() {
    // Arrange
    let (app, auth) = signed_in_app().await;
    create_bitcoin(&app, &auth).await;

    // Act
    let response = send(
        &app,
        request("POST", "/api/v1/assets", Some(&auth), Some(&bitcoin_request())),
    )
    .await;

    // Assert
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_asset_validation() {
    // Arrange
    let (app, auth) = signed_in_app().await;
    let negative = CreateAssetRequest {
        price: -1.0,
        ..bitcoin_request()
    };
    let unnamed = CreateAssetRequest {
        name: "  ".to_string(),
        ..bitcoin_request()
    };

    for req in [negative, unnamed] {
        // Act
        let response = send(&app, request("POST", "/api/v1/assets", Some(&auth), Some(&req))).await;

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let list = send(&app, request::<()>("GET", "/api/v1/assets", Some(&auth), None)).await;
    assert_eq!(read_json(list).await, json!([]));
}

#[tokio::test]
async fn test_create_asset_missing_type_field() {
    // Arrange
    let (app, auth) = signed_in_app().await;

    // Act
    let response = send(
        &app,
        raw_request(
            "POST",
            "/api/v1/assets",
            Some(&auth),
            r#"{"name":"Bitcoin","symbol":"BTC","price":1}"#,
        ),
    )
    .await;

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_asset_price_to_zero() {
    // Arrange
    let (app, auth) = signed_in_app().await;
    let id = create_bitcoin(&app, &auth).await;

    // Act
    let response = send(
        &app,
        request(
            "PUT",
            &format!("/api/v1/assets/{id}"),
            Some(&auth),
            Some(&json!({ "price": 0 })),
        ),
    )
    .await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["price"], 0.0);
    assert_eq!(body["name"], "Bitcoin");
}

#[tokio::test]
async fn test_asset_bad_id_and_missing() {
    // Arrange
    let (app, auth) = signed_in_app().await;

    // Act
    let bad = send(&app, request::<()>("GET", "/api/v1/assets/x1", Some(&auth), None)).await;
    let missing = send(&app, request::<()>("GET", "/api/v1/assets/42", Some(&auth), None)).await;

    // Assert
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(bad).await["message"], "Asset ID must be a valid number");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_asset_keeps_symbol_reserved() {
    // Arrange
    let (app, auth) = signed_in_app().await;
    let id = create_bitcoin(&app, &auth).await;
    let uri = format!("/api/v1/assets/{id}");

    // Act
    let response = send(&app, request::<()>("DELETE", &uri, Some(&auth), None)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["message"], "Asset deleted successfully");

    let get = send(&app, request::<()>("GET", &uri, Some(&auth), None)).await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let update = send(
        &app,
        request("PUT", &uri, Some(&auth), Some(&json!({ "price": 1 }))),
    )
    .await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let recreate = send(
        &app,
        request("POST", "/api/v1/assets", Some(&auth), Some(&bitcoin_request())),
    )
    .await;
    assert_eq!(recreate.status(), StatusCode::CONFLICT);
}
