use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::pagination::PaginationInfo;
use crate::models::constraints::entities::Constraint;

/// 约束列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/constraint.ts")]
pub struct ConstraintListResponse {
    pub items: Vec<Constraint>,
    pub pagination: PaginationInfo,
}
