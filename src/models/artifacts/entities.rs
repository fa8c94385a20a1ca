use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交物归属（团队或个人注册，二选一）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/artifact.ts")]
pub enum ArtifactOwner {
    Team { team_id: i64 },
    Individual { registration_id: i64 },
}

impl ArtifactOwner {
    pub fn kind_str(&self) -> &'static str {
        match self {
            ArtifactOwner::Team { .. } => "team",
            ArtifactOwner::Individual { .. } => "individual",
        }
    }
}

// 提交物实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/artifact.ts")]
pub struct Artifact {
    pub id: i64,
    pub assignment_id: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub owner: ArtifactOwner,
    /// 外部对象存储里的键，文件内容不经过本服务
    pub file_key: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
