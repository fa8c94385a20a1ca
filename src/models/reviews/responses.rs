use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::reviews::entities::ArtifactReview;
use crate::models::surveys::entities::QuestionType;

/// 已保存的答案（带题目上下文）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct SavedAnswer {
    pub question_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub answer_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
}

/// 评审详情响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewDetailResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub review: ArtifactReview,
    pub answers: Vec<SavedAnswer>,
}

/// 评审列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewListResponse {
    pub items: Vec<ArtifactReview>,
}
