//! Shared application state injected into every handler.

use pagecraft_application::{AnalysisUseCase, GenerationUseCase, InterviewUseCase};
use pagecraft_core::template::TemplateRepository;
use std::sync::Arc;

/// Use cases and shared repositories, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub interview: Arc<InterviewUseCase>,
    pub generation: Arc<GenerationUseCase>,
    pub analysis: Arc<AnalysisUseCase>,
    pub templates: Arc<dyn TemplateRepository>,
}
