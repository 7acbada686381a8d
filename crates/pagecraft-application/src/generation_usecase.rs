//! Generation use case: the render -> rasterize -> record pipeline, plus
//! standalone background image generation.

use crate::renderer::PageRenderer;
use pagecraft_core::agent::{ImageGenerator, PageCapture};
use pagecraft_core::catalog::{Category, Mood};
use pagecraft_core::error::{PagecraftError, Result};
use pagecraft_core::history::{GenerationHistory, HistoryRepository, OutputFormat};
use pagecraft_core::session::{Session, SessionRepository};
use pagecraft_core::template::TemplateRepository;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates detail-page generation for completed sessions.
pub struct GenerationUseCase {
    sessions: Arc<dyn SessionRepository>,
    history: Arc<dyn HistoryRepository>,
    templates: Arc<dyn TemplateRepository>,
    renderer: PageRenderer,
    capture: Arc<dyn PageCapture>,
    image_ai: Option<Arc<dyn ImageGenerator>>,
    images_dir: PathBuf,
}

impl GenerationUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        history: Arc<dyn HistoryRepository>,
        templates: Arc<dyn TemplateRepository>,
        renderer: PageRenderer,
        capture: Arc<dyn PageCapture>,
        image_ai: Option<Arc<dyn ImageGenerator>>,
        images_dir: PathBuf,
    ) -> Self {
        Self {
            sessions,
            history,
            templates,
            renderer,
            capture,
            image_ai,
            images_dir,
        }
    }

    /// Generates a detail page for a completed session and records it.
    ///
    /// The history record is written last: when rasterization fails the
    /// whole call fails and nothing is persisted, so a partial record can
    /// never outlive a broken artifact.
    pub async fn generate(
        &self,
        session_id: &str,
        output_format: OutputFormat,
        template_id: Option<&str>,
    ) -> Result<GenerationHistory> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| PagecraftError::not_found("session", session_id))?;

        if !session.is_completed() {
            return Err(PagecraftError::invalid_state(
                "interview is not completed yet",
            ));
        }

        let override_body = match template_id {
            Some(id) => {
                let template = self
                    .templates
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| PagecraftError::not_found("template", id))?;
                Some(template.html_template)
            }
            None => None,
        };

        let html = self
            .renderer
            .render(&session.context, override_body.as_deref())
            .await?;

        let image_path = if output_format.wants_image() {
            Some(self.rasterize(&session, &html).await?)
        } else {
            None
        };

        let record = GenerationHistory::new(
            &session.id,
            session.text_field("product_name"),
            output_format,
            output_format.wants_html().then(|| html.clone()),
            image_path,
        );
        self.history.save(&record).await?;

        Ok(record)
    }

    async fn rasterize(&self, session: &Session, html: &str) -> Result<String> {
        tokio::fs::create_dir_all(&self.images_dir).await?;

        let filename = format!("detail_page_{}_{}.png", session.id, Uuid::new_v4());
        let path = self.images_dir.join(filename);
        self.capture.render_to_file(html, &path).await?;

        Ok(path.to_string_lossy().into_owned())
    }

    /// Resolves the image file behind a history record.
    pub async fn image_file(&self, history_id: &str) -> Result<PathBuf> {
        let record = self
            .history
            .find_by_id(history_id)
            .await?
            .ok_or_else(|| PagecraftError::not_found("image", history_id))?;

        let path = record
            .image_path
            .ok_or_else(|| PagecraftError::not_found("image", history_id))?;

        let path = PathBuf::from(path);
        if !tokio::fs::try_exists(&path).await? {
            return Err(PagecraftError::not_found("image_file", history_id));
        }
        Ok(path)
    }

    /// Returns the stored HTML for previewing a past generation.
    pub async fn preview_html(&self, history_id: &str) -> Result<String> {
        self.history
            .find_by_id(history_id)
            .await?
            .and_then(|record| record.html_content)
            .ok_or_else(|| PagecraftError::not_found("preview", history_id))
    }

    /// Generates a standalone background image and returns its hosted URL.
    pub async fn generate_background(
        &self,
        category: Category,
        mood: Mood,
        color_scheme: Option<&str>,
        custom_prompt: Option<&str>,
    ) -> Result<String> {
        let ai = self.image_ai.as_ref().ok_or_else(|| {
            PagecraftError::upstream("image generation capability is not configured")
        })?;

        let prompt = background_prompt(category, mood, color_scheme, custom_prompt);
        ai.generate_image(&prompt).await
    }
}

fn background_prompt(
    category: Category,
    mood: Mood,
    color_scheme: Option<&str>,
    custom_prompt: Option<&str>,
) -> String {
    let base_prompt = match category {
        Category::Fashion => "elegant fashion product photography background",
        Category::Beauty => "clean minimal beauty cosmetics background",
        Category::Food => "appetizing food photography background",
        Category::Electronics => "modern tech product background",
        Category::Home => "cozy home lifestyle background",
        Category::Other => "product photography background",
    };

    let mood_style = match mood {
        Mood::Luxury => "luxurious, premium, gold accents, sophisticated",
        Mood::Casual => "casual, friendly, warm colors, approachable",
        Mood::Cute => "cute, playful, pastel colors, kawaii style",
        Mood::Simple => "minimalist, clean, white space, modern",
        Mood::Professional => "professional, corporate, trustworthy, clean",
    };

    let mut prompt = format!(
        "Create a background image for an e-commerce product detail page.\n\
         Style: {base_prompt}\n\
         Mood: {mood_style}\n"
    );

    if let Some(colors) = color_scheme {
        prompt.push_str(&format!("Color scheme: {colors}\n"));
    }
    if let Some(extra) = custom_prompt {
        prompt.push_str(&format!("Additional requirements: {extra}\n"));
    }

    prompt.push_str(
        "\nRequirements:\n\
         - Clean and professional\n\
         - Suitable for overlaying product images\n\
         - No text or logos\n\
         - Subtle gradients or patterns\n\
         - High quality, 1024x1024",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        FailingCapture, FakeImageAi, MemoryHistoryRepository, MemorySessionRepository,
        MemoryTemplateRepository, RecordingCapture, completed_session,
    };
    use pagecraft_core::session::SessionStatus;
    use pagecraft_core::template::Template;
    use tempfile::TempDir;

    struct Fixture {
        usecase: GenerationUseCase,
        sessions: Arc<MemorySessionRepository>,
        history: Arc<MemoryHistoryRepository>,
        templates: Arc<MemoryTemplateRepository>,
        _temp_dir: TempDir,
    }

    fn fixture(capture: Arc<dyn PageCapture>, image_ai: Option<Arc<dyn ImageGenerator>>) -> Fixture {
        let sessions = Arc::new(MemorySessionRepository::new());
        let history = Arc::new(MemoryHistoryRepository::new());
        let templates = Arc::new(MemoryTemplateRepository::new());
        let temp_dir = TempDir::new().unwrap();

        let usecase = GenerationUseCase::new(
            sessions.clone(),
            history.clone(),
            templates.clone(),
            PageRenderer::new(None).unwrap(),
            capture,
            image_ai,
            temp_dir.path().join("generated_images"),
        );

        Fixture {
            usecase,
            sessions,
            history,
            templates,
            _temp_dir: temp_dir,
        }
    }

    #[tokio::test]
    async fn test_generate_html_only() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let session = completed_session("테스트상품", "19,900원");
        f.sessions.save(&session).await.unwrap();

        let record = f
            .usecase
            .generate(&session.id, OutputFormat::Html, None)
            .await
            .unwrap();

        let html = record.html_content.as_deref().unwrap();
        assert!(html.contains("테스트상품"));
        assert!(html.contains("19,900원"));
        assert!(record.image_path.is_none());
        assert_eq!(record.product_name, "테스트상품");
        assert_eq!(f.history.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_requires_completed_session() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let mut session = completed_session("테스트상품", "9,900원");
        session.status = SessionStatus::InProgress;
        f.sessions.save(&session).await.unwrap();

        let err = f
            .usecase
            .generate(&session.id, OutputFormat::Html, None)
            .await
            .unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[tokio::test]
    async fn test_generate_unknown_session() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let err = f
            .usecase
            .generate("missing", OutputFormat::Html, None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_generate_both_writes_image_file() {
        let capture = Arc::new(RecordingCapture::new());
        let f = fixture(capture.clone(), None);
        let session = completed_session("테스트상품", "9,900원");
        f.sessions.save(&session).await.unwrap();

        let record = f
            .usecase
            .generate(&session.id, OutputFormat::Both, None)
            .await
            .unwrap();

        assert!(record.html_content.is_some());
        let image_path = record.image_path.as_deref().unwrap();
        assert!(image_path.contains(&session.id));
        assert_eq!(capture.render_calls().await, 1);

        let resolved = f.usecase.image_file(&record.id).await.unwrap();
        assert!(tokio::fs::try_exists(&resolved).await.unwrap());
    }

    #[tokio::test]
    async fn test_image_format_stores_no_html() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let session = completed_session("테스트상품", "9,900원");
        f.sessions.save(&session).await.unwrap();

        let record = f
            .usecase
            .generate(&session.id, OutputFormat::Image, None)
            .await
            .unwrap();

        assert!(record.html_content.is_none());
        assert!(record.image_path.is_some());
    }

    #[tokio::test]
    async fn test_rasterize_failure_leaves_no_history_record() {
        let f = fixture(Arc::new(FailingCapture), None);
        let session = completed_session("테스트상품", "9,900원");
        f.sessions.save(&session).await.unwrap();

        let err = f
            .usecase
            .generate(&session.id, OutputFormat::Both, None)
            .await
            .unwrap_err();
        assert!(err.is_upstream());
        assert!(f.history.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_template_id_overrides_category() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let session = completed_session("테스트상품", "9,900원");
        f.sessions.save(&session).await.unwrap();

        let template = Template::new(
            "커스텀",
            "other",
            None,
            "<div class=\"custom\">{{ product_name }}</div>",
        );
        f.templates.save(&template).await.unwrap();

        let record = f
            .usecase
            .generate(&session.id, OutputFormat::Html, Some(&template.id))
            .await
            .unwrap();
        assert_eq!(
            record.html_content.as_deref().unwrap(),
            "<div class=\"custom\">테스트상품</div>"
        );
    }

    #[tokio::test]
    async fn test_unknown_template_id_is_not_found() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let session = completed_session("테스트상품", "9,900원");
        f.sessions.save(&session).await.unwrap();

        let err = f
            .usecase
            .generate(&session.id, OutputFormat::Html, Some("missing-template"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_image_file_for_html_only_record_is_not_found() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let session = completed_session("테스트상품", "9,900원");
        f.sessions.save(&session).await.unwrap();

        let record = f
            .usecase
            .generate(&session.id, OutputFormat::Html, None)
            .await
            .unwrap();

        let err = f.usecase.image_file(&record.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_generate_background_without_capability() {
        let f = fixture(Arc::new(RecordingCapture::new()), None);
        let err = f
            .usecase
            .generate_background(Category::Food, Mood::Casual, None, None)
            .await
            .unwrap_err();
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_generate_background_returns_url() {
        let image_ai = Arc::new(FakeImageAi::new("https://images.example/bg.png"));
        let f = fixture(Arc::new(RecordingCapture::new()), Some(image_ai.clone()));

        let url = f
            .usecase
            .generate_background(Category::Beauty, Mood::Luxury, Some("#fff,#d4af37"), None)
            .await
            .unwrap();
        assert_eq!(url, "https://images.example/bg.png");

        let prompt = image_ai.last_prompt().await.unwrap();
        assert!(prompt.contains("beauty cosmetics background"));
        assert!(prompt.contains("gold accents"));
        assert!(prompt.contains("Color scheme: #fff,#d4af37"));
    }

    #[test]
    fn test_background_prompt_shape() {
        let prompt = background_prompt(
            Category::Other,
            Mood::Simple,
            None,
            Some("soft daylight from the left"),
        );
        assert!(prompt.starts_with("Create a background image"));
        assert!(prompt.contains("Style: product photography background"));
        assert!(prompt.contains("Additional requirements: soft daylight from the left"));
        assert!(prompt.contains("1024x1024"));
        assert!(!prompt.contains("Color scheme:"));
    }
}
