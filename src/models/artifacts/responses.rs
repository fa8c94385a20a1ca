use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::artifacts::entities::Artifact;
use crate::models::reviews::entities::ArtifactReview;

/// 提交物列表响应（按作业列出，不分页）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/artifact.ts")]
pub struct ArtifactListResponse {
    pub items: Vec<Artifact>,
}

/// 分配互评响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/artifact.ts")]
pub struct AssignReviewsResponse {
    pub created: Vec<ArtifactReview>,
    /// 已有评审任务而被跳过的注册 ID
    pub skipped: Vec<i64>,
}
