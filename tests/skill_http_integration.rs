//! Integration tests for the skill webhook.
//!
//! These tests drive full host envelopes through the axum router with a
//! mock lookup and verify:
//! 1. Each recognized intent produces the expected response mode
//! 2. Slot values reach the lookup as normalized keys
//! 3. Rejections map to the right status codes

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use music_buff::adapters::http::{skill_app, SkillAppState};
use music_buff::adapters::lookup::{MockArtistLookup, WikipediaLookupClient};
use music_buff::application::{MusicBuffSkill, SkillExecutor};
use music_buff::config::{ServerConfig, WikipediaConfig};
use music_buff::domain::artist::ExtractError;
use music_buff::domain::foundation::ApplicationId;
use music_buff::ports::{ArtistLookup, LookupError};

// =============================================================================
// Test Infrastructure
// =============================================================================

const APP_ID: &str = "amzn1.ask.skill.ab98ce03-0b6c-4aed-a589-118b10880389";

const LOOKUP_APOLOGY: &str =
    "There is a problem connecting to Wikipedia at this time. Please try again later.";

fn app_with(lookup: MockArtistLookup) -> Router {
    app_for(lookup, &ServerConfig::default())
}

/// Wires the skill the way the binary does: the lookup deadline and the
/// router timeout both come from the server config.
fn app_for(lookup: impl ArtistLookup + 'static, server: &ServerConfig) -> Router {
    let skill = MusicBuffSkill::new(Arc::new(lookup)).with_lookup_deadline(server.lookup_deadline());
    let executor = SkillExecutor::new(Arc::new(skill))
        .with_application_id(ApplicationId::new(APP_ID).unwrap());
    skill_app(SkillAppState::new(executor), server.request_timeout())
}

fn server_with_timeout(request_timeout_secs: u64) -> ServerConfig {
    ServerConfig {
        request_timeout_secs,
        ..Default::default()
    }
}

/// Serves an encyclopedia endpoint that never answers in time.
async fn spawn_hanging_api() -> String {
    let router = Router::new().route(
        "/w/api.php",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "{}"
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/w/api.php?titles=", addr)
}

fn envelope(request: Value) -> Value {
    envelope_for(APP_ID, request)
}

fn envelope_for(application_id: &str, request: Value) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "SessionId.9f3c",
            "application": { "applicationId": application_id },
            "attributes": {},
            "user": { "userId": "amzn1.ask.account.test" }
        },
        "request": request
    })
}

fn intent(name: &str, slots: Value) -> Value {
    envelope(json!({
        "type": "IntentRequest",
        "requestId": "EdwRequestId.intent",
        "timestamp": "2016-03-01T12:00:00Z",
        "locale": "en-US",
        "intent": { "name": name, "slots": slots }
    }))
}

async fn post(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/skill")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// Launch and lifecycle
// =============================================================================

#[tokio::test]
async fn launch_returns_welcome_with_card() {
    let lookup = MockArtistLookup::new();
    let app = app_with(lookup.clone());

    let (status, body) = post(
        app,
        envelope(json!({ "type": "LaunchRequest", "requestId": "EdwRequestId.launch" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response = &body["response"];
    assert_eq!(response["card"]["title"], "Music Buff your expert in all things music");
    assert_eq!(
        response["card"]["content"],
        "Music Buff. What artist do you want to learn more about?"
    );
    assert_eq!(response["outputSpeech"]["type"], "SSML");
    assert_eq!(
        response["outputSpeech"]["ssml"],
        "<speak><p>Music buff.</p> <p>What artist do you want to learn more about?</p></speak>"
    );
    assert_eq!(response["reprompt"]["outputSpeech"]["type"], "PlainText");
    assert_eq!(response["shouldEndSession"], false);
    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn session_ended_returns_empty_response() {
    let (status, body) = post(
        app_with(MockArtistLookup::new()),
        envelope(json!({
            "type": "SessionEndedRequest",
            "requestId": "EdwRequestId.end",
            "reason": "USER_INITIATED"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "version": "1.0", "response": {} }));
}

// =============================================================================
// Artist lookup
// =============================================================================

#[tokio::test]
async fn first_event_speaks_excerpt_for_normalized_artist() {
    let lookup = MockArtistLookup::new()
        .with_excerpt("Green Day is an American rock band formed in 1987.");
    let app = app_with(lookup.clone());

    let (status, body) = post(
        app,
        intent(
            "GetFirstEventIntent",
            json!({ "artist": { "name": "artist", "value": "Green Day" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lookup.keys(), vec!["Green_Day".to_string()]);
    let response = &body["response"];
    assert_eq!(
        response["outputSpeech"],
        json!({ "type": "PlainText", "text": "Green Day is an American rock band formed in 1987." })
    );
    assert_eq!(response["shouldEndSession"], true);
    assert!(response.get("reprompt").is_none());
    assert!(response.get("card").is_none());
}

#[tokio::test]
async fn first_event_without_artist_uses_default() {
    let lookup = MockArtistLookup::new();
    let app = app_with(lookup.clone());

    let (status, _) = post(
        app,
        intent("GetFirstEventIntent", json!({ "artist": { "name": "artist" } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lookup.keys(), vec!["Nickelback".to_string()]);
}

#[tokio::test]
async fn first_event_without_slots_uses_default() {
    let lookup = MockArtistLookup::new();
    let app = app_with(lookup.clone());

    let (status, body) = post(app, intent("GetFirstEventIntent", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lookup.keys(), vec!["Nickelback".to_string()]);
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "Nickelback is a musical artist."
    );
}

#[tokio::test]
async fn lookup_miss_speaks_apology() {
    let lookup =
        MockArtistLookup::new().with_error(LookupError::NotFound(ExtractError::MissingExtract));

    let (status, body) = post(
        app_with(lookup),
        intent(
            "GetFirstEventIntent",
            json!({ "artist": { "name": "artist", "value": "no such band" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["outputSpeech"]["text"], LOOKUP_APOLOGY);
}

#[tokio::test]
async fn transport_failure_speaks_apology() {
    let lookup = MockArtistLookup::new().with_error(LookupError::transport("connection reset"));

    let (status, body) = post(app_with(lookup), intent("GetFirstEventIntent", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["outputSpeech"]["text"], LOOKUP_APOLOGY);
    assert_eq!(body["response"]["shouldEndSession"], true);
}

#[tokio::test]
async fn hung_lookup_is_answered_with_apology_before_request_timeout() {
    let lookup = MockArtistLookup::new().with_delay(Duration::from_secs(5));
    let app = app_for(lookup, &server_with_timeout(1));

    let (status, body) = post(app, intent("GetFirstEventIntent", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["outputSpeech"]["text"], LOOKUP_APOLOGY);
    assert_eq!(body["response"]["shouldEndSession"], true);
}

#[tokio::test]
async fn retrying_client_against_hung_backend_still_speaks_apology() {
    let endpoint_prefix = spawn_hanging_api().await;
    let client = WikipediaLookupClient::new(WikipediaConfig {
        endpoint_prefix,
        timeout_secs: 1,
        max_retries: 1,
        retry_backoff_ms: 250,
        ..Default::default()
    })
    .unwrap();
    let app = app_for(client, &server_with_timeout(2));

    let started = Instant::now();
    let (status, body) = post(
        app,
        intent(
            "GetFirstEventIntent",
            json!({ "artist": { "name": "artist", "value": "beach house" } }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["outputSpeech"]["text"], LOOKUP_APOLOGY);
    assert!(started.elapsed() < Duration::from_secs(2));
}

// =============================================================================
// Built-in intents
// =============================================================================

#[tokio::test]
async fn help_asks_with_reprompt() {
    let (status, body) = post(
        app_with(MockArtistLookup::new()),
        intent("AMAZON.HelpIntent", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response = &body["response"];
    assert_eq!(
        response["reprompt"]["outputSpeech"]["text"],
        "Which artist do you want to know more about?"
    );
    assert_eq!(response["shouldEndSession"], false);
}

#[tokio::test]
async fn stop_and_cancel_say_goodbye() {
    for name in ["AMAZON.StopIntent", "AMAZON.CancelIntent"] {
        let (status, body) = post(app_with(MockArtistLookup::new()), intent(name, json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"]["outputSpeech"]["text"], "Goodbye");
        assert_eq!(body["response"]["shouldEndSession"], true);
    }
}

// =============================================================================
// Rejections
// =============================================================================

#[tokio::test]
async fn unrecognized_intent_is_bad_request() {
    let (status, body) = post(
        app_with(MockArtistLookup::new()),
        intent("OrderPizzaIntent", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNRECOGNIZED_INTENT");
}

#[tokio::test]
async fn next_event_is_not_implemented() {
    let (status, body) = post(
        app_with(MockArtistLookup::new()),
        intent("GetNextEventIntent", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["code"], "INTENT_NOT_IMPLEMENTED");
}

#[tokio::test]
async fn foreign_application_id_is_forbidden() {
    let lookup = MockArtistLookup::new();
    let (status, body) = post(
        app_with(lookup.clone()),
        envelope_for(
            "amzn1.ask.skill.someone-else",
            json!({ "type": "LaunchRequest", "requestId": "EdwRequestId.launch" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "APPLICATION_ID_MISMATCH");
    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn unsupported_request_type_is_bad_request() {
    let (status, body) = post(
        app_with(MockArtistLookup::new()),
        envelope(json!({ "type": "Display.ElementSelected", "requestId": "EdwRequestId.x" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNSUPPORTED_REQUEST_TYPE");
}

#[tokio::test]
async fn envelope_without_request_is_bad_request() {
    let (status, body) = post(app_with(MockArtistLookup::new()), json!({ "version": "1.0" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_REQUEST");
}
