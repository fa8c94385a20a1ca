use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 奖励类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub enum RewardType {
    Badge,
    Bonus,
    LateDay,
    Other,
}

impl<'de> Deserialize<'de> for RewardType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for RewardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewardType::Badge => write!(f, "badge"),
            RewardType::Bonus => write!(f, "bonus"),
            RewardType::LateDay => write!(f, "late_day"),
            RewardType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for RewardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "badge" => Ok(RewardType::Badge),
            "bonus" => Ok(RewardType::Bonus),
            "late_day" => Ok(RewardType::LateDay),
            "other" => Ok(RewardType::Other),
            _ => Err(format!("Invalid reward type: {s}")),
        }
    }
}

// 奖励实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub struct Reward {
    pub id: i64,
    pub course_id: i64,
    /// 旧的规则驱动发放路径；课程直挂的奖励为空
    pub rule_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub reward_type: RewardType,
    pub exp_points: i64,
    /// None 表示无限库存
    pub inventory: Option<i64>,
    pub quantity: i64,
    pub is_active: bool,
    pub picture: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 用户奖励记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reward.ts")]
pub struct UserReward {
    pub id: i64,
    pub user_id: i64,
    pub reward_id: i64,
    pub fulfilled: bool,
    pub granted_at: chrono::DateTime<chrono::Utc>,
}
