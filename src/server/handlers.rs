use crate::i18n::{alternate_links, navigation_links, AlternateLinks, Language, NavLink};
use crate::leads::{Lead, LeadSubmission};
use crate::security::is_authorized;
use crate::server::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

const DEFAULT_LIST_LIMIT: usize = 50;
const MAX_LIST_LIMIT: usize = 500;

pub async fn health() -> &'static str {
    "ok"
}

/// Write/read/delete probe against the lead store
pub async fn storage_health(State(state): State<Arc<AppState>>) -> Response {
    let backend = state.store.backend();
    match state.store.probe().await {
        Ok(()) => Json(serde_json::json!({
            "status": "success",
            "backend": backend,
        }))
        .into_response(),
        Err(e) => {
            error!("Storage probe failed on {}: {:#}", backend, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "backend": backend,
                    "message": "Lead storage probe failed",
                })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AlternatesQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct AlternatesResponse {
    #[serde(flatten)]
    pub links: AlternateLinks,
    pub html: String,
}

/// hreflang alternates of a page, for the static build's `<head>`
pub async fn alternates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AlternatesQuery>,
) -> Result<Json<AlternatesResponse>, ApiError> {
    if !query.path.starts_with('/') {
        return Err(ApiError::BadRequest(format!(
            "path must start with '/', got '{}'",
            query.path
        )));
    }
    let links = alternate_links(&query.path);
    let html = links.to_html(&state.site_url);
    Ok(Json(AlternatesResponse { links, html }))
}

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub lang: String,
}

/// Localized header navigation
pub async fn navigation(
    Query(query): Query<NavigationQuery>,
) -> Result<Json<Vec<NavLink>>, ApiError> {
    let lang = Language::from_code(&query.lang).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(navigation_links(lang)))
}

pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Lead>), ApiError> {
    let Json(submission) = payload?;
    let lead = Lead::from_submission(submission)?;
    state.store.insert(&lead).await?;

    info!(
        "New lead {} from {} ({})",
        lead.id,
        lead.source.as_str(),
        lead.language
    );
    Ok((StatusCode::CREATED, Json(lead)))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Lead>>, ApiError> {
    if !is_authorized(&headers, state.admin_api_key.as_deref()) {
        warn!("Unauthorized lead listing attempt");
        return Err(ApiError::Unauthorized);
    }

    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .min(MAX_LIST_LIMIT);
    Ok(Json(state.store.list(limit).await?))
}
