use crate::models::surveys::entities::QuestionType;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建问卷请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct CreateSurveyRequest {
    pub template_name: String,
    pub instructions: Option<String>,
    pub date_due: Option<DateTime<Utc>>, // ISO 8601 格式
}

/// 更新问卷请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct UpdateSurveyRequest {
    pub template_name: Option<String>,
    pub instructions: Option<String>,
    pub date_due: Option<DateTime<Utc>>,
}

/// 创建分区请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct CreateSectionRequest {
    pub title: String,
    pub is_required: Option<bool>,
    pub position: Option<i32>,
}

/// 创建题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct CreateQuestionRequest {
    pub section_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub number_of_scale: Option<i32>,
    pub number_of_text: Option<i32>,
    pub is_required: Option<bool>,
    pub position: Option<i32>,
    /// 选择题的选项文本，保持提交顺序
    pub option_choices: Option<Vec<String>>,
}

/// 更新题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct UpdateQuestionRequest {
    pub text: Option<String>,
    pub number_of_scale: Option<i32>,
    pub number_of_text: Option<i32>,
    pub is_required: Option<bool>,
    pub position: Option<i32>,
}
