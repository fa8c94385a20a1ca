use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::rules::entities::Rule;

/// 规则列表响应（数量有限，不分页）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rule.ts")]
pub struct RuleListResponse {
    pub items: Vec<Rule>,
}
