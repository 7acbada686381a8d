//! Pagecraft REST Server
//!
//! HTTP API for the guided detail-page generation service: interview
//! sessions, page generation, the template registry, and reference
//! analysis.

use anyhow::Result;
use axum::http::HeaderValue;
use clap::Parser;
use pagecraft_application::{
    AnalysisUseCase, GenerationUseCase, InterviewUseCase, PageRenderer, seed_builtin_templates,
};
use pagecraft_core::agent::{ImageGenerator, PageCapture, TextGenerator};
use pagecraft_infrastructure::storage::ConfigStorage;
use pagecraft_infrastructure::{
    JsonDirAnalysisRepository, JsonDirHistoryRepository, JsonDirSessionRepository,
    JsonDirTemplateRepository, PagecraftPaths,
};
use pagecraft_interaction::{ChromeCapture, ClaudeApiAgent, OpenAiImageAgent};
use pagecraft_server::{AppState, create_router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "pagecraft-server")]
#[command(about = "Pagecraft detail-page generation API server")]
#[command(version)]
struct Args {
    /// Server bind address (overrides config.toml)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Chromium's CDP chatter drowns everything at debug level
    let filter = if args.verbose {
        EnvFilter::new("debug,hyper=info,chromiumoxide=info")
    } else {
        EnvFilter::new("pagecraft_server=info,pagecraft_application=info,chromiumoxide=error,warn")
    };
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    tracing::info!("Starting Pagecraft REST Server v{}", env!("CARGO_PKG_VERSION"));

    let config = ConfigStorage::new()?.load()?;
    let paths = PagecraftPaths::resolve(config.data_dir.clone())?;
    paths.ensure_artifact_dirs().await?;

    // Repositories
    let sessions = Arc::new(JsonDirSessionRepository::new(paths.sessions_dir()).await?);
    let templates = Arc::new(JsonDirTemplateRepository::new(paths.templates_dir()).await?);
    let history = Arc::new(JsonDirHistoryRepository::new(paths.history_dir()).await?);
    let analyses = Arc::new(JsonDirAnalysisRepository::new(paths.analyses_dir()).await?);

    seed_builtin_templates(templates.as_ref()).await?;

    // Collaborators - each is optional except the browser; a missing
    // credential disables that capability instead of failing startup.
    let text_ai: Option<Arc<dyn TextGenerator>> = match ClaudeApiAgent::try_from_env() {
        Ok(agent) => Some(Arc::new(agent)),
        Err(e) => {
            tracing::warn!("Text AI disabled: {e}");
            None
        }
    };
    let image_ai: Option<Arc<dyn ImageGenerator>> = match OpenAiImageAgent::try_from_env() {
        Ok(agent) => Some(Arc::new(agent)),
        Err(e) => {
            tracing::warn!("Image AI disabled: {e}");
            None
        }
    };
    let capture: Arc<dyn PageCapture> = Arc::new(ChromeCapture::new());

    // Use cases
    let renderer = PageRenderer::new(text_ai.clone())?;
    let state = AppState {
        interview: Arc::new(InterviewUseCase::new(sessions.clone(), text_ai.clone())),
        generation: Arc::new(GenerationUseCase::new(
            sessions,
            history,
            templates.clone(),
            renderer,
            capture.clone(),
            image_ai,
            paths.generated_images_dir(),
        )),
        analysis: Arc::new(AnalysisUseCase::new(
            analyses,
            capture,
            text_ai,
            paths.screenshots_dir(),
        )),
        templates,
    };

    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors));

    let addr = match args.bind {
        Some(addr) => addr,
        None => config.bind.parse()?,
    };
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
