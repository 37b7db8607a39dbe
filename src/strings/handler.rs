//! HTTP handlers for the Strings API
//!
//! Provides 5 REST endpoints:
//! - POST   /strings                             — analyze and store a string
//! - GET    /strings                             — list with typed filters
//! - GET    /strings/filter-by-natural-language  — list with a free-text query
//! - GET    /strings/:value                      — fetch by original value
//! - DELETE /strings/:value                      — delete by original value
//!
//! `:value` is the original string itself, not its hash; the record is
//! found by hashing the percent-decoded path segment.

use crate::analysis::{analyze, content_hash};
use crate::error::{Error, Result};
use crate::filter::{self, FilterParams};
use crate::query::QueryInterpreter;
use crate::strings::store::StringStore;
use crate::strings::types::*;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Shared state for string handlers
#[derive(Clone)]
pub struct StringsState {
    pub store: Arc<StringStore>,
    pub interpreter: Arc<QueryInterpreter>,
}

impl StringsState {
    /// Fresh empty store with the built-in query rules
    pub fn new() -> Result<Self> {
        Ok(Self {
            store: Arc::new(StringStore::new()),
            interpreter: Arc::new(QueryInterpreter::new()?),
        })
    }
}

/// Create the strings router
pub fn strings_router(state: StringsState) -> Router {
    Router::new()
        .route("/strings", post(create_string).get(list_strings))
        .route(
            "/strings/filter-by-natural-language",
            get(filter_by_natural_language),
        )
        .route("/strings/:value", get(get_string).delete(delete_string))
        .with_state(state)
}

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Deserialize)]
struct NaturalLanguageQuery {
    query: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /strings
async fn create_string(
    State(state): State<StringsState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(body) = body.map_err(|e| Error::BadRequest(e.body_text()))?;

    let value = match body.get("value") {
        None | Some(Value::Null) => return Err(Error::MissingField("value".to_string())),
        Some(Value::String(value)) => value.as_str(),
        Some(_) => {
            return Err(Error::InvalidType {
                field: "value".to_string(),
                expected: "string".to_string(),
            })
        }
    };

    let record = analyze(value);
    if !state.store.insert_if_absent(record.clone()).await {
        tracing::warn!(id = %record.id, "Rejected duplicate string");
        return Err(Error::AlreadyExists);
    }

    tracing::info!(id = %record.id, length = record.properties.length, "Stored string");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/:value
async fn get_string(
    State(state): State<StringsState>,
    Path(value): Path<String>,
) -> Result<Json<StringRecord>> {
    state
        .store
        .get(&content_hash(&value))
        .await
        .map(Json)
        .ok_or(Error::NotFound)
}

/// GET /strings
async fn list_strings(
    State(state): State<StringsState>,
    params: std::result::Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<ListStringsResponse>> {
    let Query(params) = params.map_err(|e| Error::BadRequest(e.body_text()))?;
    let filters = params.into_filter_set()?;

    let outcome = filter::apply(state.store.list_all().await, &filters);
    Ok(Json(ListStringsResponse {
        count: outcome.count(),
        data: outcome.data,
        filters_applied: outcome.filters_applied,
    }))
}

/// GET /strings/filter-by-natural-language
async fn filter_by_natural_language(
    State(state): State<StringsState>,
    params: std::result::Result<Query<NaturalLanguageQuery>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>> {
    let Query(params) = params.map_err(|e| Error::BadRequest(e.body_text()))?;
    let query = params.query.ok_or(Error::MissingQuery)?;
    let interpreted = state.interpreter.interpret(&query)?;

    let outcome = filter::apply(state.store.list_all().await, &interpreted.parsed_filters);
    Ok(Json(NaturalLanguageResponse {
        count: outcome.count(),
        data: outcome.data,
        interpreted_query: interpreted,
    }))
}

/// DELETE /strings/:value
async fn delete_string(
    State(state): State<StringsState>,
    Path(value): Path<String>,
) -> Result<StatusCode> {
    let id = content_hash(&value);
    if !state.store.delete(&id).await {
        return Err(Error::NotFound);
    }
    tracing::info!(id = %id, "Deleted string");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn make_app() -> (Router, StringsState) {
        let state = StringsState::new().unwrap();
        (strings_router(state.clone()), state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn post_json(app: &Router, body: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/strings")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn seed(app: &Router, values: &[&str]) {
        for value in values {
            let body = serde_json::json!({ "value": value }).to_string();
            let resp = post_json(app, &body).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }
    }

    fn values(json: &Value) -> Vec<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["value"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_create_string() {
        let (app, _state) = make_app();
        let resp = post_json(&app, r#"{"value": "racecar"}"#).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = body_json(resp).await;
        assert_eq!(json["value"], "racecar");
        assert_eq!(json["id"], content_hash("racecar"));
        assert_eq!(json["properties"]["length"], 7);
        assert_eq!(json["properties"]["is_palindrome"], true);
        assert_eq!(json["properties"]["word_count"], 1);
        assert_eq!(json["properties"]["unique_characters"], 4);
        assert_eq!(json["properties"]["character_frequency_map"]["r"], 2);
        assert!(json["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_create_duplicate_string() {
        let (app, state) = make_app();
        assert_eq!(
            post_json(&app, r#"{"value": "racecar"}"#).await.status(),
            StatusCode::CREATED
        );

        let resp = post_json(&app, r#"{"value": "racecar"}"#).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "String already exists in the system");
        assert_eq!(state.store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_missing_value() {
        let (app, _state) = make_app();
        for body in [r#"{}"#, r#"{"value": null}"#, r#"[1, 2]"#] {
            let resp = post_json(&app, body).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_create_non_string_value() {
        let (app, state) = make_app();
        for body in [r#"{"value": 42}"#, r#"{"value": true}"#, r#"{"value": ["a"]}"#] {
            let resp = post_json(&app, body).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
        }
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let (app, _state) = make_app();
        let resp = post_json(&app, "{not json").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_get_string_round_trip() {
        let (app, _state) = make_app();
        seed(&app, &["hello world"]).await;

        let resp = get(&app, "/strings/hello%20world").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["value"], "hello world");

        let fresh = serde_json::to_value(crate::analysis::properties("hello world")).unwrap();
        assert_eq!(json["properties"], fresh);
    }

    #[tokio::test]
    async fn test_get_string_not_found() {
        let (app, _state) = make_app();
        let resp = get(&app, "/strings/nothing").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "String does not exist in the system");
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let (app, _state) = make_app();
        seed(&app, &["racecar", "hello world"]).await;

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/strings/hello%20world")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        assert_eq!(
            get(&app, "/strings/hello%20world").await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(get(&app, "/strings/racecar").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let (app, _state) = make_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/strings/ghost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_all() {
        let (app, _state) = make_app();
        seed(&app, &["racecar", "hello world", "level"]).await;

        let resp = get(&app, "/strings").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["count"], 3);
        assert_eq!(values(&json), vec!["racecar", "hello world", "level"]);
        assert_eq!(json["filters_applied"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_list_with_conjunction() {
        let (app, _state) = make_app();
        seed(&app, &["racecar", "hello world", "level"]).await;

        let json = body_json(get(&app, "/strings?is_palindrome=true&max_length=7").await).await;
        assert_eq!(values(&json), vec!["racecar", "level"]);
        assert_eq!(json["count"], 2);
        assert_eq!(json["filters_applied"]["is_palindrome"], true);
        assert_eq!(json["filters_applied"]["max_length"], 7);

        let json = body_json(get(&app, "/strings?is_palindrome=true&max_length=6").await).await;
        assert_eq!(values(&json), vec!["level"]);
    }

    #[tokio::test]
    async fn test_list_with_all_filters() {
        let (app, _state) = make_app();
        seed(&app, &["racecar", "hello world", "level", "Zebra stripes"]).await;

        let json = body_json(
            get(
                &app,
                "/strings?is_palindrome=false&min_length=5&max_length=20&word_count=2&contains_character=w",
            )
            .await,
        )
        .await;
        assert_eq!(values(&json), vec!["hello world"]);
        assert_eq!(json["filters_applied"]["contains_character"], "w");
        assert_eq!(json["filters_applied"]["word_count"], 2);
        assert_eq!(json["filters_applied"]["min_length"], 5);
    }

    #[tokio::test]
    async fn test_list_invalid_parameters() {
        let (app, state) = make_app();
        seed(&app, &["racecar"]).await;

        for uri in [
            "/strings?is_palindrome=maybe",
            "/strings?min_length=abc",
            "/strings?max_length=1.5",
            "/strings?word_count=",
            "/strings?contains_character=ab",
        ] {
            let resp = get(&app, uri).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
        }
        assert_eq!(state.store.len().await, 1);
    }

    #[tokio::test]
    async fn test_natural_language_query() {
        let (app, _state) = make_app();
        seed(&app, &["racecar", "hello world", "level", "noon"]).await;

        let resp = get(
            &app,
            "/strings/filter-by-natural-language?query=all%20single%20word%20palindromic%20strings",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["count"], 3);
        assert_eq!(values(&json), vec!["racecar", "level", "noon"]);
        assert_eq!(
            json["interpreted_query"]["original"],
            "all single word palindromic strings"
        );
        assert_eq!(
            json["interpreted_query"]["parsed_filters"],
            serde_json::json!({ "word_count": 1, "is_palindrome": true })
        );
    }

    #[tokio::test]
    async fn test_natural_language_length_and_letter() {
        let (app, _state) = make_app();
        seed(&app, &["racecar", "hello world", "zebra", "level"]).await;

        let json = body_json(
            get(
                &app,
                "/strings/filter-by-natural-language?query=strings%20longer%20than%204%20containing%20the%20letter%20e",
            )
            .await,
        )
        .await;
        assert_eq!(values(&json), vec!["racecar", "hello world", "zebra", "level"]);
        assert_eq!(json["interpreted_query"]["parsed_filters"]["min_length"], 5);
        assert_eq!(
            json["interpreted_query"]["parsed_filters"]["contains_character"],
            "e"
        );
    }

    #[tokio::test]
    async fn test_natural_language_conflict() {
        let (app, _state) = make_app();
        let resp = get(
            &app,
            "/strings/filter-by-natural-language?query=strings%20longer%20than%205%20but%20shorter%20than%203",
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Query parsed but resulted in conflicting filters");
        assert_eq!(json["code"], "CONFLICTING_FILTERS");
    }

    #[tokio::test]
    async fn test_natural_language_missing_or_unparseable() {
        let (app, _state) = make_app();
        for uri in [
            "/strings/filter-by-natural-language",
            "/strings/filter-by-natural-language?query=",
            "/strings/filter-by-natural-language?query=tell%20me%20a%20joke",
        ] {
            let resp = get(&app, uri).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn test_natural_language_route_beats_value_route() {
        let (app, _state) = make_app();
        seed(&app, &["filter-by-natural-language"]).await;

        let resp = get(&app, "/strings/filter-by-natural-language").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
