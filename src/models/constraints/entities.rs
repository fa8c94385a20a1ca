use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 约束类别
//
// action 类约束按次计数（每次 +1），point 类取历史最高分。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/constraint.ts")]
pub enum ConstraintKind {
    Action,
    Point,
}

impl<'de> Deserialize<'de> for ConstraintKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "action" => Ok(ConstraintKind::Action),
            "point" => Ok(ConstraintKind::Point),
            _ => Err(serde::de::Error::custom(format!(
                "无效的约束类别: '{s}'. 支持的类别: action, point"
            ))),
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintKind::Action => write!(f, "action"),
            ConstraintKind::Point => write!(f, "point"),
        }
    }
}

impl std::str::FromStr for ConstraintKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action" => Ok(ConstraintKind::Action),
            "point" => Ok(ConstraintKind::Point),
            _ => Err(format!("Invalid constraint kind: {s}")),
        }
    }
}

// 约束实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/constraint.ts")]
pub struct Constraint {
    pub id: i64,
    /// 路由键，进度上报按它定位约束
    pub url: String,
    pub threshold: i64,
    pub description: Option<String>,
    pub kind: ConstraintKind,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
