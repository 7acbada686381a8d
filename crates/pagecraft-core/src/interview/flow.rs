//! The fixed interview question sequence.
//!
//! The flow is compiled into the binary; it is ordered, and a field counts
//! as answered as soon as its key is present in the context, whatever the
//! value. Optional questions are still asked in order - they are only
//! skipped once answered.

use crate::session::ProductContext;
use serde::{Deserialize, Serialize};

/// How an answer is collected on the client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Select,
    #[serde(rename = "multiselect")]
    MultiSelect,
    ImageUpload,
}

/// A static question definition in the fixed flow.
#[derive(Debug, Clone, Copy)]
pub struct QuestionDef {
    pub field_name: &'static str,
    pub prompt: &'static str,
    pub kind: InputKind,
    pub choices: &'static [&'static str],
    pub optional: bool,
}

impl QuestionDef {
    fn to_question(self) -> Question {
        Question {
            question: self.prompt.to_string(),
            field_name: self.field_name.to_string(),
            input_kind: self.kind,
            options: if self.choices.is_empty() {
                None
            } else {
                Some(self.choices.iter().map(|c| c.to_string()).collect())
            },
        }
    }
}

/// A question ready to present to the user, fixed or adaptive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub field_name: String,
    pub input_kind: InputKind,
    pub options: Option<Vec<String>>,
}

/// Outcome of asking the engine what comes next.
#[derive(Debug, Clone, PartialEq)]
pub enum NextStep {
    /// Present this question to the user.
    Question(Question),
    /// Every fixed field is answered and no adaptive question remains.
    Complete,
}

const FLOW: &[QuestionDef] = &[
    QuestionDef {
        field_name: "reference_url",
        prompt: "참고할 상세페이지 URL이 있나요? (선택사항)",
        kind: InputKind::Text,
        choices: &[],
        optional: true,
    },
    QuestionDef {
        field_name: "product_name",
        prompt: "어떤 상품의 상세페이지를 만들까요?",
        kind: InputKind::Text,
        choices: &[],
        optional: false,
    },
    QuestionDef {
        field_name: "category",
        prompt: "이 상품은 어떤 카테고리에 속하나요?",
        kind: InputKind::Select,
        choices: &["패션/의류", "뷰티/화장품", "식품", "전자기기", "생활용품", "기타"],
        optional: false,
    },
    QuestionDef {
        field_name: "target_customer",
        prompt: "주요 구매 고객은 누구인가요?",
        kind: InputKind::Text,
        choices: &[],
        optional: false,
    },
    QuestionDef {
        field_name: "usp",
        prompt: "이 상품만의 차별점은 무엇인가요?",
        kind: InputKind::Text,
        choices: &[],
        optional: false,
    },
    QuestionDef {
        field_name: "price_info",
        prompt: "가격대와 프로모션 정보가 있나요?",
        kind: InputKind::Text,
        choices: &[],
        optional: false,
    },
    QuestionDef {
        field_name: "product_images",
        prompt: "상품 이미지를 업로드해주세요 (선택사항)",
        kind: InputKind::ImageUpload,
        choices: &[],
        optional: true,
    },
    QuestionDef {
        field_name: "mood",
        prompt: "어떤 느낌의 디자인을 원하시나요?",
        kind: InputKind::Select,
        choices: &["고급스러운", "캐주얼한", "귀여운", "심플한", "전문적인"],
        optional: false,
    },
];

/// Returns the fixed, ordered question flow.
pub fn interview_flow() -> &'static [QuestionDef] {
    FLOW
}

/// Scans the fixed flow and returns the first question whose field name is
/// absent from the context, or `None` when every fixed field is answered.
///
/// Presence of the key marks a field complete; the value itself (empty,
/// "not provided", etc.) is never inspected.
pub fn first_unanswered(context: &ProductContext) -> Option<Question> {
    FLOW.iter()
        .find(|def| !context.contains_key(def.field_name))
        .map(|def| def.to_question())
}
