use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentType {
    Individual, // 个人作业
    Team,       // 团队作业
}

impl<'de> Deserialize<'de> for AssignmentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "individual" => Ok(AssignmentType::Individual),
            "team" => Ok(AssignmentType::Team),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业类型: '{s}'. 支持的类型: individual, team"
            ))),
        }
    }
}

impl std::fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentType::Individual => write!(f, "individual"),
            AssignmentType::Team => write!(f, "team"),
        }
    }
}

impl std::str::FromStr for AssignmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(AssignmentType::Individual),
            "team" => Ok(AssignmentType::Team),
            _ => Err(format!("Invalid assignment type: {s}")),
        }
    }
}

// 作业任务实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub assignment_type: AssignmentType,
    pub date_due: Option<chrono::DateTime<chrono::Utc>>,
    pub total_score: f64,
    pub weight: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
