use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use super::{TEST_API_KEY, TEST_GROUP_ID};

pub const AUDIO_HEX: &str = "494433040000000000235453534500000f0000034c61766635392e32372e313030";
pub const TRACE_ID: &str = "04ece790375f3ca2edbb44e8c4c200cf";

/// Matches an authenticated `POST /t2a_v2?GroupId=...`
pub fn t2a_request() -> MockBuilder {
    Mock::given(method("POST"))
        .and(path("/t2a_v2"))
        .and(query_param("GroupId", TEST_GROUP_ID))
        .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
}

pub fn success_body() -> Value {
    json!({
        "data": { "audio": AUDIO_HEX, "status": 2 },
        "extra_info": {
            "audio_length": 1200,
            "audio_sample_rate": 32000,
            "audio_format": "mp3",
            "audio_channel": 1
        },
        "trace_id": TRACE_ID,
        "base_resp": { "status_code": 0, "status_msg": "success" }
    })
}

/// Upstream answers once with audio and a `Trace-Id` header
pub async fn mount_success(server: &MockServer) {
    t2a_request()
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Trace-Id", TRACE_ID)
                .set_body_json(success_body()),
        )
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, status: u16, body: &str) {
    t2a_request()
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_json(server: &MockServer, body: Value) {
    t2a_request()
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_delayed(server: &MockServer, delay: Duration) {
    t2a_request()
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body())
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Fails verification if the gateway reaches the upstream at all
pub async fn mount_success_never(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(0)
        .mount(server)
        .await;
}
