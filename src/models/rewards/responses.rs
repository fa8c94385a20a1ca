use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

use crate::models::rewards::entities::{Reward, RewardType};

/// 库存字段：有限库存是数字，无限库存序列化为字符串 "Unlimited"
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub enum InventoryField {
    Limited(i64),
    Unlimited(String),
}

impl Serialize for InventoryField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            InventoryField::Limited(n) => serializer.serialize_i64(*n),
            InventoryField::Unlimited(_) => serializer.serialize_str("Unlimited"),
        }
    }
}

impl From<Option<i64>> for InventoryField {
    fn from(inventory: Option<i64>) -> Self {
        match inventory {
            Some(n) => InventoryField::Limited(n),
            None => InventoryField::Unlimited("Unlimited".to_string()),
        }
    }
}

/// 奖励序列化形式（字段名沿用历史线上契约）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub struct RewardResponse {
    pub pk: i64,
    pub name: String,
    pub description: Option<String>,
    /// 所属课程名
    pub belong_to: String,
    #[serde(rename = "type")]
    pub reward_type: RewardType,
    pub is_active: bool,
    pub exp_points: i64,
    /// 持有者用户名列表
    pub owner: Vec<String>,
    /// 已兑换数量
    pub consumed: i64,
    pub inventory: InventoryField,
    pub quantity: i64,
}

impl RewardResponse {
    pub fn from_reward(
        reward: Reward,
        belong_to: String,
        owner: Vec<String>,
        consumed: i64,
    ) -> Self {
        Self {
            pk: reward.id,
            name: reward.name,
            description: reward.description,
            belong_to,
            reward_type: reward.reward_type,
            is_active: reward.is_active,
            exp_points: reward.exp_points,
            owner,
            consumed,
            inventory: reward.inventory.into(),
            quantity: reward.quantity,
        }
    }
}

/// 奖励列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub struct RewardListResponse {
    pub items: Vec<RewardResponse>,
}

/// 用户奖励记录列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub struct UserRewardListResponse {
    pub items: Vec<crate::models::rewards::entities::UserReward>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limited_inventory_serializes_as_number() {
        let json = serde_json::to_string(&InventoryField::Limited(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn test_unlimited_inventory_serializes_as_string() {
        let field: InventoryField = None.into();
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, "\"Unlimited\"");
    }
}
