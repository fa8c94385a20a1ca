use crate::models::common::pagination::PaginationQuery;
use crate::models::constraints::entities::ConstraintKind;
use serde::Deserialize;
use ts_rs::TS;

/// 创建约束请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/constraint.ts")]
pub struct CreateConstraintRequest {
    pub url: String,
    pub threshold: i64,
    pub description: Option<String>,
    pub kind: Option<ConstraintKind>,
}

/// 更新约束请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/constraint.ts")]
pub struct UpdateConstraintRequest {
    pub threshold: Option<i64>,
    pub description: Option<String>,
}

/// 约束列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/constraint.ts")]
pub struct ConstraintQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ConstraintListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
