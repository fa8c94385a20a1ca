use crate::models::rewards::entities::RewardType;
use serde::Deserialize;
use ts_rs::TS;

/// 创建奖励请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub struct CreateRewardRequest {
    pub name: String,
    pub description: Option<String>,
    pub reward_type: Option<RewardType>,
    pub rule_id: Option<i64>,
    pub exp_points: Option<i64>,
    /// 缺省为无限库存
    pub inventory: Option<i64>,
    pub quantity: Option<i64>,
    pub picture: Option<String>,
}

/// 更新奖励请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub struct UpdateRewardRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub reward_type: Option<RewardType>,
    pub exp_points: Option<i64>,
    pub inventory: Option<i64>,
    pub quantity: Option<i64>,
    pub is_active: Option<bool>,
    pub picture: Option<String>,
}
