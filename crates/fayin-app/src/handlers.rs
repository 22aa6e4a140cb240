use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use fayin_audio::AudioHit;
use fayin_core::preprocess;
use fayin_core::session::{SearchSession, Submission};
use fayin_dictionary::{ReadyOutcome, SearchResult, search};
use fayin_render::render_results;

use crate::pages::{self, ResultsView};
use crate::state::AppContext;

const EMPTY_QUERY_NOTICE: &str = "请输入要搜索的汉字";
const TIMEOUT_NOTICE: &str = "数据加载超时，请刷新页面";

#[derive(Debug, Deserialize)]
pub struct CharacterParams {
    pub character: Option<String>,
}

/// Search response kept wire-compatible with the old site API.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub character: String,
    pub results: SearchResult,
    pub total_matches: usize,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.message });
        (self.status, Json(payload)).into_response()
    }
}

pub async fn landing(State(context): State<AppContext>) -> Html<String> {
    let total_chars = context.store.snapshot().await.len();
    Html(pages::landing_page(
        &context.config.ui.site_title,
        total_chars,
        context.store.load_failed(),
    ))
}

/// The results view. A query arriving before the dataset has settled is
/// queued on the session and replayed once the readiness signal lands;
/// if the wait times out the page degrades to an error notice instead.
pub async fn results(
    State(context): State<AppContext>,
    Query(params): Query<CharacterParams>,
) -> Html<String> {
    let title = context.config.ui.site_title.as_str();

    // Arriving without the parameter is just the empty results page.
    let Some(raw) = params.character else {
        let view = ResultsView {
            input_value: "",
            notice: None,
            fragment: None,
            load_failed: context.store.load_failed(),
        };
        return Html(pages::results_page(title, &view));
    };

    let query = match preprocess::clean_query(&raw) {
        Ok(query) => query,
        Err(_) => {
            let view = ResultsView {
                input_value: &raw,
                notice: Some(EMPTY_QUERY_NOTICE),
                fragment: None,
                load_failed: context.store.load_failed(),
            };
            return Html(pages::results_page(title, &view));
        }
    };

    let mut session = SearchSession::new();
    session.mount();
    if context.store.is_ready() {
        session.data_loaded();
    }

    let to_run = match session.submit(query) {
        Submission::RunNow(query) => Some(query),
        Submission::Queued => match context.store.wait_ready(context.load_timeout()).await {
            ReadyOutcome::Settled => session.data_loaded(),
            ReadyOutcome::TimedOut => {
                // Drop the queued query rather than searching the empty
                // placeholder dataset.
                session.timed_out();
                None
            }
        },
    };

    let fragment = match &to_run {
        Some(query) => {
            let snapshot = context.store.snapshot().await;
            let result = search(&snapshot, query);
            tracing::debug!("Search for {} matched {} headwords", query, result.len());
            Some(render_results(query, &result))
        }
        None => None,
    };

    let view = ResultsView {
        input_value: &raw,
        notice: session.is_degraded().then_some(TIMEOUT_NOTICE),
        fragment: fragment.as_deref(),
        load_failed: context.store.load_failed(),
    };
    Html(pages::results_page(title, &view))
}

pub async fn api_search(
    State(context): State<AppContext>,
    Query(params): Query<CharacterParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let raw = params.character.unwrap_or_default();
    let query =
        preprocess::clean_query(&raw).map_err(|_| ApiError::bad_request(EMPTY_QUERY_NOTICE))?;

    context.store.wait_ready(context.load_timeout()).await;
    let snapshot = context.store.snapshot().await;
    let results = search(&snapshot, &query);
    let total_matches = results.len();

    Ok(Json(SearchResponse {
        character: query,
        results,
        total_matches,
    }))
}

pub async fn api_audio(
    State(context): State<AppContext>,
    Path(label): Path<String>,
) -> Json<AudioHit> {
    Json(context.resolver.resolve(&label).await)
}
