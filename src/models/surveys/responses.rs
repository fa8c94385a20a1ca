use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::surveys::entities::{FeedbackSurvey, Question, SurveySection};

/// 问卷分区详情（分区 + 题目）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SectionDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub section: SurveySection,
    pub questions: Vec<Question>,
}

/// 问卷详情响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SurveyDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub survey: FeedbackSurvey,
    pub sections: Vec<SectionDetail>,
}
