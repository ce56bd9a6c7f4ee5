mod test_utils;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{Harness, LOVELACE_URL, TURING_URL, VALID_REPLY};
use tower::ServiceExt;
use wikiquiz_server::create_router;

async fn send(router: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

fn post_json(uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?)
}

#[tokio::test]
async fn health_reports_ok() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());

    let (status, body) = send(&router, get("/health")?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
    Ok(())
}

#[tokio::test]
async fn generated_quiz_round_trips_through_detail_route() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());

    let (status, created) = send(
        &router,
        post_json("/generate-quiz", json!({ "url": TURING_URL }))?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["url"], TURING_URL);
    assert_eq!(created["quiz"][0]["difficulty"], "easy");
    assert!(created.get("raw_html").is_none());

    let id = created["id"].as_i64().unwrap_or_default();
    let (status, fetched) = send(&router, get(&format!("/quizzes/{}", id))?).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn missing_quiz_is_404_with_detail() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());

    let (status, body) = send(&router, get("/quizzes/999")?).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Quiz not found" }));
    Ok(())
}

#[tokio::test]
async fn non_wikipedia_url_is_400_with_detail() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());

    let (status, body) = send(
        &router,
        post_json("/generate-quiz", json!({ "url": "https://example.com/page" }))?,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(detail.starts_with("Scraping failed: "));
    Ok(())
}

#[tokio::test]
async fn malformed_url_is_rejected_before_extraction() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());

    let (status, body) = send(
        &router,
        post_json("/generate-quiz", json!({ "url": "not a url" }))?,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap_or_default().starts_with("Invalid URL"));
    assert_eq!(harness.source.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn body_without_url_is_unprocessable() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());

    let (status, body) = send(&router, post_json("/generate-quiz", json!({}))?).await?;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn listing_is_newest_first_and_pages() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());
    for url in [TURING_URL, LOVELACE_URL] {
        let (status, _) = send(&router, post_json("/generate-quiz", json!({ "url": url }))?).await?;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, all) = send(&router, get("/quizzes")?).await?;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = all
        .as_array()
        .map(|items| items.iter().filter_map(|i| i["title"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(titles, vec!["Ada Lovelace", "Alan Turing"]);
    assert!(all[0].get("quiz").is_none());

    let (_, page) = send(&router, get("/quizzes?limit=1&offset=1")?).await?;
    assert_eq!(page.as_array().map(Vec::len), Some(1));
    assert_eq!(page[0]["title"], "Alan Turing");

    let (status, _) = send(&router, get("/quizzes?limit=-1")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn cors_allows_any_origin() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let router = create_router(harness.state());

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())?;
    let response = router.oneshot(request).await?;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none()
    );
    Ok(())
}
