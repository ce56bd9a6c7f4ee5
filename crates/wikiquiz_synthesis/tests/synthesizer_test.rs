// Tests for PayloadSynthesizer using a mock driver.

mod test_utils;

use std::sync::Arc;
use test_utils::{MockDriver, VALID_PAYLOAD, sample_article};
use wikiquiz_core::{QuizContent, Role};
use wikiquiz_error::{GeminiErrorKind, SynthesisErrorKind};
use wikiquiz_synthesis::{MAX_TEXT_CHARS, PayloadSynthesizer, SYSTEM_PROMPT};

#[tokio::test]
async fn synthesizes_payload_with_one_model_call() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new_success(format!("```json\n{}\n```", VALID_PAYLOAD)));
    let synthesizer = PayloadSynthesizer::new(driver.clone());

    let value = synthesizer.synthesize(&sample_article()).await?;
    let content = QuizContent::from_value(value)?;

    assert_eq!(driver.call_count(), 1);
    assert_eq!(content.quiz.len(), 1);
    assert_eq!(content.quiz[0].answer, "Two");
    assert_eq!(content.related_topics.len(), 5);
    Ok(())
}

#[tokio::test]
async fn request_carries_system_prompt_and_article() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new_success(VALID_PAYLOAD));
    let synthesizer = PayloadSynthesizer::new(driver.clone());

    synthesizer.synthesize(&sample_article()).await?;
    let request = driver.last_request().expect("driver was called");

    assert_eq!(request.temperature, Some(0.2));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
    assert_eq!(request.messages[1].role, Role::User);

    let prompt = &request.messages[1].content;
    assert!(prompt.starts_with("Wikipedia Article Title: Marie Curie\n"));
    assert!(prompt.contains("Article Sections:\nEarly life, Scientific work\n"));
    assert!(prompt.contains("She won two Nobel Prizes."));
    assert!(prompt.contains(
        r#"- key_entities: { "people": [...], "organizations": [...], "locations": [...] }"#
    ));
    Ok(())
}

#[tokio::test]
async fn long_text_and_section_lists_are_clipped() -> anyhow::Result<()> {
    let driver = Arc::new(MockDriver::new_success(VALID_PAYLOAD));
    let synthesizer = PayloadSynthesizer::new(driver.clone()).with_temperature(0.5);

    let mut article = sample_article();
    article.summary = None;
    article.full_text = format!("{}{}", "é".repeat(MAX_TEXT_CHARS), "OVERFLOW");
    article.sections = (0..25).map(|n| format!("S{}", n)).collect();

    synthesizer.synthesize(&article).await?;
    let request = driver.last_request().expect("driver was called");
    let prompt = &request.messages[1].content;

    assert_eq!(request.temperature, Some(0.5));
    assert!(!prompt.contains("OVERFLOW"));
    assert!(prompt.contains(&"é".repeat(MAX_TEXT_CHARS)));
    assert!(prompt.contains("S19\n"));
    assert!(!prompt.contains("S20"));
    assert!(prompt.contains("Article Summary:\n\n"));
    Ok(())
}

#[tokio::test]
async fn driver_failure_is_reported_as_driver_error() {
    let driver = Arc::new(MockDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    }));
    let synthesizer = PayloadSynthesizer::new(driver.clone());

    let err = synthesizer.synthesize(&sample_article()).await.unwrap_err();

    assert_eq!(driver.call_count(), 1);
    match err.kind {
        SynthesisErrorKind::Driver(message) => assert!(message.contains("HTTP 503")),
        other => panic!("expected driver error, got {:?}", other),
    }
}

#[tokio::test]
async fn prose_reply_is_a_generation_error() {
    let driver = Arc::new(MockDriver::new_success("Sorry, I can't do that."));
    let synthesizer = PayloadSynthesizer::new(driver);

    let err = synthesizer.synthesize(&sample_article()).await.unwrap_err();

    assert!(matches!(err.kind, SynthesisErrorKind::Generation(_)));
}
