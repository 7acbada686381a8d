//! Application use cases: interview flow, page generation, reference
//! analysis, and startup seeding.

pub mod analysis_usecase;
pub mod generation_usecase;
pub mod interview_usecase;
pub mod renderer;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis_usecase::AnalysisUseCase;
pub use generation_usecase::GenerationUseCase;
pub use interview_usecase::InterviewUseCase;
pub use renderer::PageRenderer;
pub use seed::seed_builtin_templates;
