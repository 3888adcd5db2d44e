use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, API_KEY_HEADER};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(API_KEY_HEADER, "test-key")
        .header("accept", "application/json")
        .body(String::new())
        .unwrap()
}

fn ids(records: &[Value]) -> Vec<i64> {
    records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
}

// --- auth ---

#[tokio::test]
async fn missing_key_returns_401() {
    let resp = app()
        .oneshot(Request::builder().uri("/games/").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(body_bytes(resp).await.is_empty());
}

// --- index ---

#[tokio::test]
async fn index_lists_records() {
    let resp = app().oneshot(get("/games/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let games: Vec<Value> = body_json(resp).await;
    assert_eq!(ids(&games), vec![1942, 472, 1020]);
}

#[tokio::test]
async fn index_applies_paging() {
    let resp = app().oneshot(get("/pulses/?limit=2&offset=1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let pulses: Vec<Value> = body_json(resp).await;
    assert_eq!(ids(&pulses), vec![714772, 124499]);
}

#[tokio::test]
async fn index_rejects_limit_above_50() {
    let resp = app().oneshot(get("/games/?limit=51")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn index_applies_encoded_filters() {
    let resp = app()
        .oneshot(get("/games/?filter%5Brating%5D%5Bgte%5D=90"))
        .await
        .unwrap();

    let games: Vec<Value> = body_json(resp).await;
    assert_eq!(ids(&games), vec![1942, 472]);
}

#[tokio::test]
async fn unknown_endpoint_returns_404() {
    let resp = app().oneshot(get("/widgets/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- search ---

#[tokio::test]
async fn search_matches_name_case_insensitively() {
    let resp = app().oneshot(get("/games/?search=skyrim")).await.unwrap();

    let games: Vec<Value> = body_json(resp).await;
    assert_eq!(ids(&games), vec![472]);
}

// --- ids ---

#[tokio::test]
async fn ids_keep_request_order_and_skip_unknown() {
    let resp = app().oneshot(get("/games/1020,9999,1942")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let games: Vec<Value> = body_json(resp).await;
    assert_eq!(ids(&games), vec![1020, 1942]);
}

#[tokio::test]
async fn unknown_id_returns_empty_array() {
    let resp = app().oneshot(get("/games/0")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let games: Vec<Value> = body_json(resp).await;
    assert!(games.is_empty());
}

#[tokio::test]
async fn bad_id_list_returns_400() {
    let resp = app().oneshot(get("/games/12,abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn fields_project_records() {
    let resp = app().oneshot(get("/games/1942?fields=name")).await.unwrap();

    let games: Vec<Value> = body_json(resp).await;
    assert_eq!(games[0], serde_json::json!({"id": 1942, "name": "The Witcher 3: Wild Hunt"}));
}

// --- count ---

#[tokio::test]
async fn count_honors_filters() {
    let resp = app()
        .oneshot(get("/games/count?filter%5Bpopularity%5D%5Bgt%5D=80"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"count": 2}));
}

// --- meta ---

#[tokio::test]
async fn meta_lists_sorted_field_names() {
    let resp = app().oneshot(get("/genres/meta")).await.unwrap();

    let fields: Vec<String> = body_json(resp).await;
    assert_eq!(fields, vec!["id", "name", "slug"]);
}

#[tokio::test]
async fn meta_of_empty_collection_is_empty_array() {
    let resp = app().oneshot(get("/themes/meta")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let fields: Vec<String> = body_json(resp).await;
    assert!(fields.is_empty());
}
