use serde::Deserialize;
use ts_rs::TS;

/// 创建规则请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rule.ts")]
pub struct CreateRuleRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_default: Option<bool>,
}

/// 更新规则请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rule.ts")]
pub struct UpdateRuleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_default: Option<bool>,
}

/// 规则挂载约束请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rule.ts")]
pub struct AttachConstraintRequest {
    pub constraint_id: i64,
}
