use serde::Deserialize;
use ts_rs::TS;

/// 提交提交物请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/artifact.ts")]
pub struct SubmitArtifactRequest {
    /// 团队作业必填
    pub team_id: Option<i64>,
    /// 原始文件名，用于生成存储键
    pub file_name: String,
}

/// 分配互评请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/artifact.ts")]
pub struct AssignReviewsRequest {
    /// 评审者的注册 ID 列表
    pub reviewer_ids: Vec<i64>,
}
