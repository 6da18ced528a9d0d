use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use minimax_tts_gateway::domain::catalog::{ModelsResponse, VoicesResponse};
use minimax_tts_gateway::domain::tts::DeploymentProfile;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_voices(ctx: &TestContext) {
    let response = ctx.client.get("/api/voices").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body: VoicesResponse = response.json().unwrap();
    assert_eq!(body.status, "success");
    assert_eq!(body.message, "Available voices retrieved");

    let ids: Vec<&str> = body.voices.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "HK_Cantonese_female1",
            "Cantonese_people_male_02",
            "Chinese (Mandarin)_Reliable_Executive",
            "Chinese (Mandarin)_News_Anchor",
            "English_Trustworthy_Man",
            "English_Graceful_Lady",
        ]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_models(ctx: &TestContext) {
    let response = ctx.client.get("/api/models").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body: ModelsResponse = response.json().unwrap();
    assert_eq!(body.status, "success");
    assert_eq!(body.message, "Available models retrieved");

    let models: Vec<(&str, &str)> = body
        .models
        .iter()
        .map(|m| (m.id.as_str(), m.quality.as_str()))
        .collect();
    assert_eq!(
        models,
        vec![
            ("speech-02-hd", "high"),
            ("speech-02-turbo", "fast"),
            ("speech-01-hd", "high"),
            ("speech-01-turbo", "fast"),
        ]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_query_parameters(ctx: &TestContext) {
    let plain = ctx.client.get("/api/voices").await.unwrap();
    let filtered = ctx
        .client
        .get("/api/voices?language=English&limit=1")
        .await
        .unwrap();

    filtered.assert_status(StatusCode::OK);
    assert_eq!(plain.body, filtered.body);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_stable_ordering(ctx: &TestContext) {
    let first = ctx.client.get("/api/models").await.unwrap();
    let second = ctx.client.get("/api/models").await.unwrap();
    assert_eq!(first.body_bytes, second.body_bytes);
}

#[tokio::test]
async fn it_should_serve_mainland_voices_for_mainland_profile() {
    let ctx = TestContext::with_config(|config| config.profile = DeploymentProfile::Mainland)
        .await
        .unwrap();

    let response = ctx.client.get("/api/voices").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body: VoicesResponse = response.json().unwrap();
    assert_eq!(body.voices.len(), 10);
    assert_eq!(body.voices[0].id, "male-qn-qingse");
    assert!(body.voices.iter().all(|v| v.language == "Mandarin"));
}

#[tokio::test]
async fn it_should_serve_catalog_without_credentials() {
    let ctx = TestContext::with_config(|config| config.minimax_api_key = None)
        .await
        .unwrap();

    ctx.client
        .get("/api/voices")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ctx.client
        .get("/api/models")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}
