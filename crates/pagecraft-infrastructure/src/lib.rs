pub mod analysis_repository;
pub mod history_repository;
pub mod paths;
pub mod session_repository;
pub mod storage;
pub mod template_repository;

pub use analysis_repository::JsonDirAnalysisRepository;
pub use history_repository::JsonDirHistoryRepository;
pub use paths::PagecraftPaths;
pub use session_repository::JsonDirSessionRepository;
pub use template_repository::JsonDirTemplateRepository;
