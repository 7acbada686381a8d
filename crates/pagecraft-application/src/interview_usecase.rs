//! Interview use case: session lifecycle and the question/answer loop.
//!
//! Fixed questions come straight from the compiled flow; once they are
//! exhausted the optional text capability may propose one adaptive
//! follow-up per call. Only the terminal call - no fixed question left and
//! no follow-up proposed - mutates the session status.

use pagecraft_core::agent::TextGenerator;
use pagecraft_core::error::{PagecraftError, Result};
use pagecraft_core::interview::{InputKind, NextStep, Question, first_unanswered};
use pagecraft_core::session::{AnswerValue, Session, SessionRepository, SessionStatus};
use serde::Deserialize;
use std::sync::Arc;

/// Orchestrates interview sessions over the session repository and the
/// optional adaptive-question capability.
pub struct InterviewUseCase {
    sessions: Arc<dyn SessionRepository>,
    question_ai: Option<Arc<dyn TextGenerator>>,
}

impl InterviewUseCase {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        question_ai: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            sessions,
            question_ai,
        }
    }

    /// Starts a new session, optionally seeding the reference URL answer.
    pub async fn create_session(&self, reference_url: Option<String>) -> Result<Session> {
        let session = Session::new(reference_url);
        self.sessions.save(&session).await?;
        Ok(session)
    }

    /// Loads a session or fails with NotFound.
    pub async fn get_session(&self, session_id: &str) -> Result<Session> {
        self.sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| PagecraftError::not_found("session", session_id))
    }

    /// Returns the next question for the session, or the completion marker.
    ///
    /// Adaptive follow-ups are transient: they are re-evaluated on every
    /// call and never added to the fixed flow. The completion transition is
    /// the only write this method performs.
    pub async fn next_question(&self, session_id: &str) -> Result<NextStep> {
        let mut session = self.get_session(session_id).await?;

        if let Some(question) = first_unanswered(&session.context) {
            return Ok(NextStep::Question(question));
        }

        if let Some(ai) = &self.question_ai {
            let prompt = followup_prompt(&session)?;
            match ai.generate(&prompt).await {
                Ok(reply) => {
                    if let Some(question) = parse_followup_reply(&reply) {
                        return Ok(NextStep::Question(question));
                    }
                }
                Err(e) => {
                    tracing::warn!("Follow-up question generation failed: {e}");
                }
            }
        }

        if !session.is_completed() {
            session.status = SessionStatus::Completed;
            session.updated_at = chrono::Utc::now();
            self.sessions.save(&session).await?;
        }

        Ok(NextStep::Complete)
    }

    /// Merges one answer into the session context, last write wins.
    ///
    /// Any field name is accepted, including ones proposed by the adaptive
    /// generator. Status is never touched here.
    pub async fn submit_answer(
        &self,
        session_id: &str,
        field_name: &str,
        value: AnswerValue,
    ) -> Result<()> {
        let mut session = self.get_session(session_id).await?;
        session.record_answer(field_name, value);
        self.sessions.save(&session).await?;
        Ok(())
    }
}

fn followup_prompt(session: &Session) -> Result<String> {
    let context_json = serde_json::to_string_pretty(&session.context)?;
    Ok(format!(
        "현재까지 수집된 상품 정보:\n\
         {context_json}\n\
         \n\
         위 정보를 바탕으로, 상세페이지 생성에 필요한 추가 정보가 있다면\n\
         1개의 후속 질문을 생성하세요.\n\
         \n\
         충분한 정보가 수집되었다면 \"COMPLETE\"라고만 응답하세요.\n\
         \n\
         후속 질문이 필요하다면 다음 JSON 형식으로 응답하세요:\n\
         {{\n\
             \"question\": \"질문 내용\",\n\
             \"field_name\": \"필드명 (영문, snake_case)\",\n\
             \"input_type\": \"text 또는 select\",\n\
             \"options\": [\"옵션1\", \"옵션2\"]\n\
         }}"
    ))
}

#[derive(Deserialize)]
struct FollowupReply {
    question: String,
    field_name: String,
    #[serde(default)]
    input_type: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
}

/// Interprets the adaptive generator's reply.
///
/// `COMPLETE` or anything unparseable means "no further question" - a
/// malformed reply must degrade to completion, never surface as an error.
fn parse_followup_reply(reply: &str) -> Option<Question> {
    let trimmed = reply.trim();
    if trimmed == "COMPLETE" {
        return None;
    }

    let parsed: FollowupReply = serde_json::from_str(trimmed).ok()?;
    let input_kind = match parsed.input_type.as_deref() {
        Some("select") => InputKind::Select,
        Some("multiselect") => InputKind::MultiSelect,
        _ => InputKind::Text,
    };

    Some(Question {
        question: parsed.question,
        field_name: parsed.field_name,
        input_kind,
        options: parsed.options,
    })
}
