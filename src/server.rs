use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::annotation::{AnalysisResult, FigureKind};
use crate::nlp::{standard_tags, PosTagMap};
use crate::orchestrator::Analyzer;
use crate::utils::preview;

pub const MISSING_TEXT: &str = "Missing 'text' in request body";
pub const EMPTY_TEXT: &str = "Input text cannot be empty";

const ANALYSIS_JS: &str = include_str!("../static/analysis.js");

/// Client-side input error, answered as `{"error": ...}`
struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    /// Filter checkbox labels for the index page
    pub kinds: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            kinds: Arc::new(annotation_kinds(standard_tags())),
        }
    }
}

/// Figure kinds followed by the sorted part-of-speech labels, whitespace excluded.
pub fn annotation_kinds(tags: &PosTagMap) -> Vec<String> {
    FigureKind::ALL
        .iter()
        .map(|k| k.as_str())
        .chain(tags.labels())
        .map(str::to_string)
        .collect()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(|| async { "OK" }))
        .route("/static/analysis.js", get(analysis_js))
        .route("/analyze", post(analyze))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(state: AppState, addr: &str) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Annotator listening at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Ok(Json(body)) = payload else {
        return Err(ApiError::bad_request(MISSING_TEXT));
    };
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return Err(ApiError::bad_request(MISSING_TEXT));
    };
    if text.trim().is_empty() {
        return Err(ApiError::bad_request(EMPTY_TEXT));
    }

    info!("Received text for analysis: {}", preview(text, 100));
    Ok(Json(state.analyzer.analyze(text).await))
}

async fn analysis_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], ANALYSIS_JS)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let checkboxes: String = state
        .kinds
        .iter()
        .map(|kind| {
            format!(
                concat!(
                    r#"<label class="kind kind-{kind}">"#,
                    r#"<input type="checkbox" value="{kind}" checked> {label}</label>"#
                ),
                kind = kind,
                label = kind.replace('_', " ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    // Braces in the stylesheet are doubled for format!.
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Text Annotator</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 60rem; margin: 2rem auto; }}
    textarea {{ width: 100%; min-height: 10rem; }}
    #checkboxContainer {{
      display: grid; grid-template-columns: repeat(auto-fill, minmax(11rem, 1fr));
      gap: .25rem; margin: 1rem 0;
    }}
    #checkboxContainer.collapsed {{ display: none; }}
    #resultsOutput {{
      white-space: pre-wrap; line-height: 1.8; border: 1px solid #ccc; padding: 1rem;
    }}
    #errorDisplay {{ color: #a00; display: none; }}
    #loadingIndicator {{ display: none; }}
    mark {{ border-radius: 3px; padding: 0 2px; }}
    mark.metaphor {{ background: #ffd27f; }}
    mark.simile {{ background: #9fd3ff; }}
    mark.pos {{ background: #e3e3e3; }}
  </style>
</head>
<body>
  <h1>Text Annotator</h1>
  <textarea id="inputText" placeholder="Paste a passage to analyze"></textarea>
  <div>
    <button id="analyzeButton">Analyze</button>
    <button id="clearButton">Clear</button>
    <button id="sampleButton">Load sample</button>
    <span id="loadingIndicator">Analyzing...</span>
  </div>
  <p id="errorDisplay"></p>
  <button id="filterToggle" aria-expanded="true">Filters</button>
  <div id="checkboxContainer">
        {checkboxes}
  </div>
  <div id="resultsOutput"><p>Analysis results will appear here.</p></div>
  <script src="/static/analysis.js"></script>
</body>
</html>"#,
        checkboxes = checkboxes
    ))
}
