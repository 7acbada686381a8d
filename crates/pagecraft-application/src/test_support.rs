//! Shared fakes for use-case tests: in-memory repositories and canned
//! collaborators.

use async_trait::async_trait;
use pagecraft_core::agent::{ImageGenerator, PageCapture, TextGenerator};
use pagecraft_core::analysis::{AnalysisRepository, ReferenceAnalysis};
use pagecraft_core::error::{PagecraftError, Result};
use pagecraft_core::history::{GenerationHistory, HistoryRepository};
use pagecraft_core::session::{AnswerValue, Session, SessionRepository, SessionStatus};
use pagecraft_core::template::{Template, TemplateRepository};
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::Mutex;

/// Builds a completed session carrying every fixed field.
pub fn completed_session(product_name: &str, price_info: &str) -> Session {
    let mut session = Session::new(Some("https://example.com/ref".to_string()));
    for (field, value) in [
        ("product_name", product_name),
        ("category", "기타"),
        ("target_customer", "2030 직장인"),
        ("usp", "국내 생산"),
        ("price_info", price_info),
        ("mood", "심플한"),
    ] {
        session.record_answer(field, AnswerValue::from(value));
    }
    session.record_answer("product_images", AnswerValue::Images(vec![]));
    session.status = SessionStatus::Completed;
    session
}

pub struct MemorySessionRepository {
    records: Mutex<HashMap<String, Session>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self.records.lock().await.get(session_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.records
            .lock()
            .await
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        self.records.lock().await.remove(session_id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}

pub struct MemoryHistoryRepository {
    records: Mutex<HashMap<String, GenerationHistory>>,
}

impl MemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl HistoryRepository for MemoryHistoryRepository {
    async fn find_by_id(&self, history_id: &str) -> Result<Option<GenerationHistory>> {
        Ok(self.records.lock().await.get(history_id).cloned())
    }

    async fn save(&self, history: &GenerationHistory) -> Result<()> {
        self.records
            .lock()
            .await
            .insert(history.id.clone(), history.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<GenerationHistory>> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}

pub struct MemoryTemplateRepository {
    records: Mutex<HashMap<String, Template>>,
}

impl MemoryTemplateRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TemplateRepository for MemoryTemplateRepository {
    async fn find_by_id(&self, template_id: &str) -> Result<Option<Template>> {
        Ok(self.records.lock().await.get(template_id).cloned())
    }

    async fn list(&self, category: Option<&str>) -> Result<Vec<Template>> {
        let records = self.records.lock().await;
        Ok(records
            .values()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .cloned()
            .collect())
    }

    async fn save(&self, template: &Template) -> Result<()> {
        self.records
            .lock()
            .await
            .insert(template.id.clone(), template.clone());
        Ok(())
    }

    async fn delete(&self, template_id: &str) -> Result<()> {
        self.records.lock().await.remove(template_id);
        Ok(())
    }
}

pub struct MemoryAnalysisRepository {
    records: Mutex<HashMap<String, ReferenceAnalysis>>,
}

impl MemoryAnalysisRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AnalysisRepository for MemoryAnalysisRepository {
    async fn find_by_id(&self, analysis_id: &str) -> Result<Option<ReferenceAnalysis>> {
        Ok(self.records.lock().await.get(analysis_id).cloned())
    }

    async fn save(&self, analysis: &ReferenceAnalysis) -> Result<()> {
        self.records
            .lock()
            .await
            .insert(analysis.id.clone(), analysis.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ReferenceAnalysis>> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}

/// Capture fake that counts calls and writes a placeholder PNG.
pub struct RecordingCapture {
    render_calls: Mutex<usize>,
}

impl RecordingCapture {
    pub fn new() -> Self {
        Self {
            render_calls: Mutex::new(0),
        }
    }

    pub async fn render_calls(&self) -> usize {
        *self.render_calls.lock().await
    }
}

#[async_trait]
impl PageCapture for RecordingCapture {
    async fn capture_url(&self, _url: &str) -> Result<Vec<u8>> {
        Ok(b"fake png bytes".to_vec())
    }

    async fn render_to_file(&self, _html: &str, output: &Path) -> Result<()> {
        *self.render_calls.lock().await += 1;
        tokio::fs::write(output, b"fake png bytes").await?;
        Ok(())
    }
}

/// Capture fake whose every call fails, for atomicity tests.
pub struct FailingCapture;

#[async_trait]
impl PageCapture for FailingCapture {
    async fn capture_url(&self, _url: &str) -> Result<Vec<u8>> {
        Err(PagecraftError::upstream("browser crashed"))
    }

    async fn render_to_file(&self, _html: &str, _output: &Path) -> Result<()> {
        Err(PagecraftError::upstream("browser crashed"))
    }
}

/// Image-generation fake returning a fixed URL and remembering the prompt.
pub struct FakeImageAi {
    url: String,
    last_prompt: Mutex<Option<String>>,
}

impl FakeImageAi {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_prompt: Mutex::new(None),
        }
    }

    pub async fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().await.clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeImageAi {
    async fn generate_image(&self, prompt: &str) -> Result<String> {
        *self.last_prompt.lock().await = Some(prompt.to_string());
        Ok(self.url.clone())
    }
}

/// Text/vision fake returning a fixed reply.
pub struct CannedTextAi {
    reply: String,
}

impl CannedTextAi {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedTextAi {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }

    async fn generate_with_image(&self, _prompt: &str, _image_png: &[u8]) -> Result<String> {
        Ok(self.reply.clone())
    }
}
