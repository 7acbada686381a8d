//! Reference analysis use case: capture a competitor page, extract layout
//! and tone features with the vision capability, persist the result.

use pagecraft_core::agent::{PageCapture, TextGenerator};
use pagecraft_core::analysis::{AnalysisReport, AnalysisRepository, ReferenceAnalysis};
use pagecraft_core::error::{PagecraftError, Result};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Extraction prompt sent alongside the screenshot.
const ANALYSIS_PROMPT: &str = "이 스마트스토어 상세페이지 이미지를 분석해주세요.\n\
다음 항목들을 JSON 형식으로 응답해주세요:\n\
\n\
{\n\
    \"layout_pattern\": \"레이아웃 패턴 설명 (섹션 배치, 여백, 정렬)\",\n\
    \"color_scheme\": {\n\
        \"primary\": \"#색상코드\",\n\
        \"secondary\": \"#색상코드\",\n\
        \"background\": \"#색상코드\",\n\
        \"accent\": \"#색상코드\"\n\
    },\n\
    \"sections\": [\"섹션1\", \"섹션2\"],\n\
    \"highlights\": [\"눈에 띄는 디자인 요소1\"],\n\
    \"tone_and_manner\": \"전체적인 톤앤매너 (고급스러운/캐주얼/귀여운 등)\"\n\
}";

/// Orchestrates competitor-page analysis.
pub struct AnalysisUseCase {
    analyses: Arc<dyn AnalysisRepository>,
    capture: Arc<dyn PageCapture>,
    vision_ai: Option<Arc<dyn TextGenerator>>,
    screenshots_dir: PathBuf,
}

impl AnalysisUseCase {
    pub fn new(
        analyses: Arc<dyn AnalysisRepository>,
        capture: Arc<dyn PageCapture>,
        vision_ai: Option<Arc<dyn TextGenerator>>,
        screenshots_dir: PathBuf,
    ) -> Self {
        Self {
            analyses,
            capture,
            vision_ai,
            screenshots_dir,
        }
    }

    /// Captures, analyzes and records one reference URL.
    ///
    /// Capture and transport failures are fatal; a vision reply that fails
    /// to parse degrades to the empty report instead.
    pub async fn analyze(&self, url: &str) -> Result<ReferenceAnalysis> {
        let vision_ai = self.vision_ai.as_ref().ok_or_else(|| {
            PagecraftError::upstream("vision capability is not configured")
        })?;

        let screenshot = self.capture.capture_url(url).await?;

        tokio::fs::create_dir_all(&self.screenshots_dir).await?;
        let path = self.screenshots_dir.join(format!("{}.png", Uuid::new_v4()));
        tokio::fs::write(&path, &screenshot).await?;

        let reply = vision_ai
            .generate_with_image(ANALYSIS_PROMPT, &screenshot)
            .await?;
        let report = parse_analysis_reply(&reply);

        let record =
            ReferenceAnalysis::new(url, path.to_string_lossy().into_owned(), report);
        self.analyses.save(&record).await?;

        Ok(record)
    }
}

/// Parses the vision reply, degrading to an empty report on malformed JSON.
fn parse_analysis_reply(reply: &str) -> AnalysisReport {
    match serde_json::from_str(reply.trim()) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!("Unparseable analysis reply, using empty report: {e}");
            AnalysisReport::default()
        }
    }
}
