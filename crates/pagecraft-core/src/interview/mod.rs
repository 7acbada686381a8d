//! Interview flow: the fixed question sequence and the scan that decides
//! what to ask next.

mod flow;

pub use flow::{
    InputKind, NextStep, Question, QuestionDef, first_unanswered, interview_flow,
};
