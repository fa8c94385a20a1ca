use serde::Deserialize;
use ts_rs::TS;

/// 单题答案载荷
///
/// 选择题按选项文本匹配 question_option；幻灯片批注带 page。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct AnswerPayload {
    pub question_id: i64,
    pub answer_text: String,
    pub page: Option<i32>,
}

/// 提交评审请求
///
/// 重复提交是全量替换：旧答案整体删除后写入新答案。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct SubmitReviewRequest {
    pub answers: Vec<AnswerPayload>,
}
