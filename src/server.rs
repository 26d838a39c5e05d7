use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::GeminiConfig;
use crate::fallback;
use crate::gemini::GeminiClient;
use crate::prompts;
use crate::recovery::{recover_characters, CharacterRecord, RecoveryResult};

#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}

// Request fields deserialize as optional and are validated by hand so a
// missing field answers with 400 and an `error` body instead of the
// extractor's default rejection.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    pub user_name: Option<String>,
    pub anxiety_source: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharactersRequest {
    pub user_name: Option<String>,
    pub anxiety_source: Option<String>,
    pub story: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRequest {
    pub user_name: Option<String>,
    pub anxiety_source: Option<String>,
    pub character: Option<CharacterRecord>,
    pub user_thought: Option<String>,
    #[serde(default)]
    pub progress: f64,
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn require_text(field: Option<&str>, name: &str) -> Result<String, Response> {
    match field.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(bad_request(&format!("Missing {name}"))),
    }
}

fn require_base(
    user_name: Option<&str>,
    anxiety_source: Option<&str>,
) -> Result<(String, String), Response> {
    let user_name = user_name.map(str::trim).filter(|value| !value.is_empty());
    let anxiety_source = anxiety_source.map(str::trim).filter(|value| !value.is_empty());
    match (user_name, anxiety_source) {
        (Some(user_name), Some(anxiety_source)) => {
            Ok((user_name.to_string(), anxiety_source.to_string()))
        }
        _ => Err(bad_request("Missing userName or anxietySource")),
    }
}

pub async fn generate_story(
    State(state): State<AppState>,
    Json(req): Json<StoryRequest>,
) -> Response {
    let (user_name, anxiety_source) =
        match require_base(req.user_name.as_deref(), req.anxiety_source.as_deref()) {
            Ok(fields) => fields,
            Err(response) => return response,
        };

    tracing::info!(user_name = %user_name, "Received story generation request");

    let prompt = prompts::story(&user_name, &anxiety_source);
    let story = match state.gemini.generate(&prompt).await {
        Ok(text) => {
            tracing::debug!(response_length = text.len(), "Received story from Gemini");
            text
        }
        Err(e) => {
            tracing::error!(error = %e, "Story generation failed, using placeholder");
            fallback::placeholder_story(&user_name, &anxiety_source)
        }
    };

    Json(json!({ "story": story })).into_response()
}

pub async fn generate_characters(
    State(state): State<AppState>,
    Json(req): Json<CharactersRequest>,
) -> Response {
    let (user_name, anxiety_source) =
        match require_base(req.user_name.as_deref(), req.anxiety_source.as_deref()) {
            Ok(fields) => fields,
            Err(response) => return response,
        };

    tracing::info!(user_name = %user_name, "Received request to generate characters");

    let prompt = prompts::characters(&user_name, &anxiety_source);
    let characters =
        generate_and_recover(&state, &prompt, fallback::default_characters).await;

    Json(characters).into_response()
}

pub async fn generate_story_characters(
    State(state): State<AppState>,
    Json(req): Json<CharactersRequest>,
) -> Response {
    let (user_name, anxiety_source) =
        match require_base(req.user_name.as_deref(), req.anxiety_source.as_deref()) {
            Ok(fields) => fields,
            Err(response) => return response,
        };
    let story = match require_text(req.story.as_deref(), "story") {
        Ok(story) => story,
        Err(response) => return response,
    };

    tracing::info!(user_name = %user_name, "Received request to generate story characters");

    let prompt = prompts::story_characters(&user_name, &anxiety_source, &story);
    let characters =
        generate_and_recover(&state, &prompt, fallback::default_story_characters).await;

    Json(characters).into_response()
}

// Shared tail of the two character endpoints: call Gemini, run the recovery
// cascade, degrade to the endpoint's fixed defaults on any failure. The
// client always gets a 200 with a usable list.
async fn generate_and_recover(
    state: &AppState,
    prompt: &str,
    defaults: fn() -> Vec<CharacterRecord>,
) -> Vec<CharacterRecord> {
    let raw = match state.gemini.generate(prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Character generation call failed, using defaults");
            return defaults();
        }
    };

    tracing::debug!(response = %raw, "Gemini response");

    match recover_characters(&raw) {
        RecoveryResult::Recovered(characters) => {
            tracing::info!(count = characters.len(), "Recovered characters");
            characters
        }
        RecoveryResult::Unrecovered => {
            tracing::warn!(response = %raw, "Unable to recover characters, using defaults");
            defaults()
        }
    }
}

pub async fn generate_interaction(
    State(state): State<AppState>,
    Json(req): Json<InteractionRequest>,
) -> Response {
    let (user_name, anxiety_source) =
        match require_base(req.user_name.as_deref(), req.anxiety_source.as_deref()) {
            Ok(fields) => fields,
            Err(response) => return response,
        };
    let Some(character) = req.character else {
        return bad_request("Missing character");
    };
    let user_thought = match require_text(req.user_thought.as_deref(), "userThought") {
        Ok(thought) => thought,
        Err(response) => return response,
    };

    tracing::info!(
        user_name = %user_name,
        character = %character.name,
        progress = req.progress,
        "Received interaction request"
    );

    let prompt = prompts::interaction(
        &user_name,
        &anxiety_source,
        &character,
        &user_thought,
        req.progress,
    );
    let interaction = match state.gemini.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Interaction generation failed, using placeholder");
            fallback::placeholder_interaction(&character)
        }
    };

    Json(json!({ "interaction": interaction })).into_response()
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/generate-story", post(generate_story))
        .route("/generate-characters", post(generate_characters))
        .route("/generate-story-characters", post(generate_story_characters))
        .route("/generate-interaction", post(generate_interaction))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server(config: GeminiConfig, port: u16) -> crate::Result<()> {
    let gemini = GeminiClient::new(config).context("Failed to build Gemini client")?;
    let state = AppState {
        gemini: Arc::new(gemini),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("Failed to bind to port")?;

    tracing::info!("Server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
