mod test_utils;

use axum::http::StatusCode;
use std::sync::Arc;
use test_utils::{
    Harness, LOVELACE_URL, NULL_FIELDS_REPLY, StubSource, THREE_OPTION_REPLY, TURING_URL,
    VALID_REPLY,
};
use wikiquiz_core::{Difficulty, KeyEntities};
use wikiquiz_server::ApiError;

#[tokio::test]
async fn generate_extracts_synthesizes_and_stores() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);

    let quiz = harness.service.generate(TURING_URL).await?;

    assert_eq!(quiz.url, TURING_URL);
    assert_eq!(quiz.title, "Alan Turing");
    assert_eq!(quiz.sections, vec!["Early life", "Legacy"]);
    assert_eq!(quiz.quiz.len(), 1);
    assert_eq!(quiz.quiz[0].answer, "Bletchley Park");
    assert_eq!(quiz.quiz[0].difficulty, Difficulty::Easy);
    assert_eq!(quiz.key_entities.organizations, vec!["Bletchley Park"]);
    assert_eq!(harness.repository.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn second_request_is_served_from_cache() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);

    let first = harness.service.generate(TURING_URL).await?;
    let second = harness.service.generate(TURING_URL).await?;

    assert_eq!(first, second);
    assert_eq!(harness.source.call_count(), 1);
    assert_eq!(harness.driver.call_count(), 1);
    assert_eq!(harness.repository.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn non_article_url_is_a_client_error() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);

    let err = harness
        .service
        .generate("https://example.com/wiki/Alan_Turing")
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(err.detail.starts_with("Scraping failed: "));
    assert!(err.detail.contains("wikipedia.org/wiki/"));
    assert_eq!(harness.driver.call_count(), 0);
    assert!(harness.repository.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn prose_reply_is_a_generation_failure() -> anyhow::Result<()> {
    let harness = Harness::new("Sorry, I cannot help with that.");

    let err = harness.service.generate(TURING_URL).await.unwrap_err();

    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        err.detail,
        "LLM generation failed: LLM did not return a JSON object."
    );
    assert!(harness.repository.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn schema_violation_is_rejected_before_storage() -> anyhow::Result<()> {
    let harness = Harness::new(THREE_OPTION_REPLY);

    let err = harness.service.generate(TURING_URL).await.unwrap_err();

    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.detail.starts_with("LLM generation failed: "));
    assert!(harness.repository.is_empty().await);

    // Nothing was cached, so a retry goes back to the model.
    let _ = harness.service.generate(TURING_URL).await;
    assert_eq!(harness.driver.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn racing_requests_converge_on_one_record() -> anyhow::Result<()> {
    let harness = Arc::new(Harness::with_source(StubSource::with_barrier(2), VALID_REPLY));

    let a = {
        let harness = harness.clone();
        tokio::spawn(async move { harness.service.generate(TURING_URL).await })
    };
    let b = {
        let harness = harness.clone();
        tokio::spawn(async move { harness.service.generate(TURING_URL).await })
    };

    let a = a.await??;
    let b = b.await??;

    assert_eq!(a.id, b.id);
    assert_eq!(harness.source.call_count(), 2);
    assert_eq!(harness.repository.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn list_defaults_and_paging() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let turing = harness.service.generate(TURING_URL).await?;
    let lovelace = harness.service.generate(LOVELACE_URL).await?;

    let all = harness.service.list(None, None).await?;
    let ids: Vec<i32> = all.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![lovelace.id, turing.id]);
    assert_eq!(all[0].title, "Ada Lovelace");

    let page = harness.service.list(Some(1), Some(1)).await?;
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, turing.id);

    assert!(harness.service.list(Some(10), Some(5)).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn get_returns_stored_quiz_or_not_found() -> anyhow::Result<()> {
    let harness = Harness::new(VALID_REPLY);
    let created = harness.service.generate(TURING_URL).await?;

    let fetched = harness.service.get(created.id).await?;
    assert_eq!(fetched, created);

    let err = harness.service.get(created.id + 100).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.detail, "Quiz not found");
    Ok(())
}

#[tokio::test]
async fn null_payload_fields_are_stored_as_empty() -> anyhow::Result<()> {
    let harness = Harness::new(NULL_FIELDS_REPLY);

    let quiz = harness.service.generate(TURING_URL).await?;

    assert_eq!(quiz.key_entities, KeyEntities::default());
    assert!(quiz.related_topics.is_empty());
    assert_eq!(quiz.quiz.len(), 1);
    assert_eq!(harness.repository.len().await, 1);
    Ok(())
}

#[test]
fn api_errors_propagate_through_anyhow() {
    let err: anyhow::Error = ApiError::not_found("Quiz not found").into();
    assert_eq!(err.to_string(), "404 Not Found: Quiz not found");
}
