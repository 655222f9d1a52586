//! Request handlers.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AppState;
use crate::ClaimCheckError;
use crate::render::{PageState, render_page};

/// Form body posted by the page.
#[derive(Debug, Deserialize)]
pub(crate) struct ClaimForm {
    #[serde(default)]
    claim: String,
}

/// JSON body for `/api/analyze`.
#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    claim: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub(crate) async fn form(State(state): State<AppState>) -> Html<String> {
    Html(render_page("", PageState::Prompt, &state.render))
}

pub(crate) async fn submit(State(state): State<AppState>, Form(form): Form<ClaimForm>) -> Response {
    match state.checker.analyze(&form.claim).await {
        Ok(report) => Html(render_page(
            &form.claim,
            PageState::Report(&report),
            &state.render,
        ))
        .into_response(),
        Err(ClaimCheckError::EmptyClaim) => {
            Html(render_page(&form.claim, PageState::Prompt, &state.render)).into_response()
        }
        Err(e) => {
            error!(error = %e, "classification failed");
            let message = format!("Classification failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Html(render_page(
                    &form.claim,
                    PageState::Error(&message),
                    &state.render,
                )),
            )
                .into_response()
        }
    }
}

pub(crate) async fn analyze_json(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    match state.checker.analyze(&request.claim).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            let status = match e {
                ClaimCheckError::EmptyClaim => StatusCode::BAD_REQUEST,
                _ => {
                    error!(error = %e, "classification failed");
                    StatusCode::BAD_GATEWAY
                }
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
