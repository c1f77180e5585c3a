//! End-to-end API tests against an open (passwordless) instance.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use rand::rngs::OsRng;
use rand::RngCore;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

use investfolio_server::api::app_router;
use investfolio_server::build_state;
use investfolio_server::config::Config;

async fn build_open_router() -> (axum::Router, tempfile::TempDir) {
    let tmp = tempdir().unwrap();
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        password_hash: None,
        secret_key: secret.to_vec(),
        thb_per_usd: dec!(30),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn portfolio_and_holding_crud_flow() {
    let (app, _tmp) = build_open_router().await;

    // Starts empty
    let (status, body) = send(&app, Method::GET, "/api/v1/portfolios", None).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));

    // Create a portfolio
    let (status, portfolio) = send(
        &app,
        Method::POST,
        "/api/v1/portfolios",
        Some(json!({ "name": "Thai Stocks" })),
    )
    .await;
    assert_eq!(status, 200);
    let portfolio_id = portfolio["id"].as_str().unwrap().to_string();
    assert_eq!(portfolio["name"], "Thai Stocks");

    // Add a holding; portfolio binding comes from the path
    let (status, holding) = send(
        &app,
        Method::POST,
        &format!("/api/v1/portfolios/{portfolio_id}/holdings"),
        Some(json!({
            "name": "Bangkok Bank",
            "ticker": "bbl",
            "assetType": "stock",
            "shares": 100,
            "averageCost": 130.0,
            "currentPrice": 140.0
        })),
    )
    .await;
    assert_eq!(status, 200);
    let holding_id = holding["id"].as_str().unwrap().to_string();
    assert_eq!(holding["portfolioId"], portfolio_id.as_str());
    // Ticker is normalized to uppercase, currencies default to THB
    assert_eq!(holding["ticker"], "BBL");
    assert_eq!(holding["averageCostCurrency"], "THB");

    // A USD holding in the same portfolio
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/portfolios/{portfolio_id}/holdings"),
        Some(json!({
            "name": "Vanguard S&P 500",
            "ticker": "VOO",
            "assetType": "etf",
            "shares": 2,
            "averageCost": 100,
            "averageCostCurrency": "USD",
            "currentPrice": 110,
            "currentPriceCurrency": "USD"
        })),
    )
    .await;
    assert_eq!(status, 200);

    // List holdings
    let (status, holdings) = send(
        &app,
        Method::GET,
        &format!("/api/v1/portfolios/{portfolio_id}/holdings"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(holdings.as_array().unwrap().len(), 2);

    // Summary converts USD at the configured rate (30):
    // market = 100*140 + 2*110*30 = 20600; cost = 100*130 + 2*100*30 = 19000
    let (status, summary) = send(
        &app,
        Method::GET,
        &format!("/api/v1/portfolios/{portfolio_id}/summary"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(summary["holdingsCount"], 2);
    assert_eq!(summary["currency"], "THB");
    assert_eq!(summary["marketValue"].as_f64().unwrap(), 20600.0);
    assert_eq!(summary["costBasis"].as_f64().unwrap(), 19000.0);
    assert_eq!(summary["gainLoss"].as_f64().unwrap(), 1600.0);

    // Allocation: ETF 6600 (32.04%), Stock 14000 (67.96%)
    let (status, allocation) = send(
        &app,
        Method::GET,
        &format!("/api/v1/portfolios/{portfolio_id}/allocation"),
        None,
    )
    .await;
    assert_eq!(status, 200);
    let slices = allocation["slices"].as_array().unwrap();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0]["assetType"], "stock");
    assert_eq!(slices[0]["weightPct"].as_f64().unwrap(), 67.96);
    assert_eq!(slices[1]["assetType"], "etf");
    assert_eq!(slices[1]["weightPct"].as_f64().unwrap(), 32.04);

    // Update the first holding
    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/v1/holdings",
        Some(json!({
            "id": holding_id,
            "name": "Bangkok Bank",
            "ticker": "BBL",
            "assetType": "stock",
            "shares": 50,
            "averageCost": 130.0,
            "currentPrice": 145.0
        })),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["shares"].as_f64().unwrap(), 50.0);

    // Delete the holding, then the portfolio
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/holdings/{holding_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/portfolios/{portfolio_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, portfolios) = send(&app, Method::GET, "/api/v1/portfolios", None).await;
    assert_eq!(portfolios, json!([]));
}

#[tokio::test]
async fn per_portfolio_summaries_cover_every_portfolio() {
    let (app, _tmp) = build_open_router().await;

    let (_, a) = send(&app, Method::POST, "/api/v1/portfolios", Some(json!({ "name": "A" }))).await;
    let (_, _b) = send(&app, Method::POST, "/api/v1/portfolios", Some(json!({ "name": "B" }))).await;

    send(
        &app,
        Method::POST,
        &format!("/api/v1/portfolios/{}/holdings", a["id"].as_str().unwrap()),
        Some(json!({
            "name": "PTT",
            "assetType": "stock",
            "shares": 10,
            "averageCost": 30,
            "currentPrice": 33
        })),
    )
    .await;

    let (status, summaries) = send(&app, Method::GET, "/api/v1/portfolios/summaries", None).await;
    assert_eq!(status, 200);
    let summaries = summaries.as_array().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0]["marketValue"].as_f64().unwrap(), 330.0);
    // The empty portfolio still reports zeros
    assert_eq!(summaries[1]["holdingsCount"], 0);
    assert_eq!(summaries[1]["marketValue"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn missing_records_map_to_404() {
    let (app, _tmp) = build_open_router().await;

    let (status, _) = send(&app, Method::GET, "/api/v1/portfolios/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/portfolios/ghost/summary", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/holdings/ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_input_maps_to_422() {
    let (app, _tmp) = build_open_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/portfolios",
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("name"));

    let (_, portfolio) = send(
        &app,
        Method::POST,
        "/api/v1/portfolios",
        Some(json!({ "name": "P" })),
    )
    .await;
    let portfolio_id = portfolio["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/portfolios/{portfolio_id}/holdings"),
        Some(json!({
            "name": "Bad",
            "assetType": "stock",
            "shares": -1,
            "averageCost": 10,
            "currentPrice": 10
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
