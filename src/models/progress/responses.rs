use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::progress::entities::Progress;
use crate::models::rewards::entities::Reward;

/// 进度序列化形式（字段名沿用历史线上契约）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressResponse {
    pub pk: i64,
    pub met: bool,
    pub cur_point: f64,
    pub constraint: i64,
    pub user: i64,
    /// 本次调用触发发放的奖励
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub granted_rewards: Vec<Reward>,
}

impl ProgressResponse {
    pub fn from_progress(progress: Progress, granted_rewards: Vec<Reward>) -> Self {
        Self {
            pk: progress.id,
            met: progress.met,
            cur_point: progress.cur_point,
            constraint: progress.constraint_id,
            user: progress.user_id,
            granted_rewards,
        }
    }
}

/// 当前用户的进度列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressListResponse {
    pub items: Vec<ProgressResponse>,
}
