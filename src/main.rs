//! Text Annotator server
//!
//! Serves `GET /` and `POST /analyze`. Requires `GEMINI_API_KEY`; part-of-speech
//! tagging is enabled when `POS_SERVICE_URL` points at a running tagger.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, warn};

use rust_annotator::figures::GeminiClient;
use rust_annotator::nlp::{PosExtractor, RemotePosPipeline};
use rust_annotator::server::{run_server, AppState};
use rust_annotator::utils::init_logging;
use rust_annotator::{Analyzer, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    init_logging();

    let config = AppConfig::from_env()?;

    let pos = match &config.pos_service_url {
        Some(url) => match RemotePosPipeline::load(url.as_str(), config.pos_model.as_str()).await {
            Ok(p) => PosExtractor::new(Arc::new(p)),
            Err(e) => {
                error!("Could not load POS model '{}': {:#}", config.pos_model, e);
                PosExtractor::degraded()
            }
        },
        None => {
            warn!("POS_SERVICE_URL not set, part-of-speech tagging disabled");
            PosExtractor::degraded()
        }
    };

    let model = GeminiClient::new(config.api_key.as_str(), config.model.as_str())
        .with_api_base(config.api_base.as_str())
        .with_settings(config.generation)
        .with_safety_threshold(config.safety_threshold.as_str());
    info!("Figure of speech model: {}", config.model);

    let analyzer = Analyzer::new(pos, Arc::new(model));
    let state = AppState::new(analyzer);

    run_server(state, &config.bind_addr).await
}
