use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::surveys::entities::QuestionType;

/// 选择题聚合结果：labels 按选项创建顺序，counts 一一对应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ChoiceAggregate {
    pub labels: Vec<String>,
    pub counts: Vec<i64>,
}

/// 单题报表：answers 的形状随题型变化
/// （选择题是 {labels, counts}，数值题是加权平均，幻灯片批注是页号映射，文本题是原文列表）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct QuestionReport {
    pub question_type: QuestionType,
    pub answers: serde_json::Value,
}

/// 提交物报表响应：分区标题 -> 题目文本 -> 单题报表
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ArtifactReportResponse {
    pub sections: HashMap<String, HashMap<String, QuestionReport>>,
}

/// 关键词响应：关键词 -> 权重
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct KeywordReportResponse {
    pub keywords: HashMap<String, f64>,
}
