use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评审状态
//
// 线上契约沿用历史全大写拼写。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub enum ReviewStatus {
    #[serde(rename = "INCOMPLETE")]
    Incomplete,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "LATE")]
    Late,
    #[serde(rename = "REOPEN")]
    Reopen,
}

impl ReviewStatus {
    pub const INCOMPLETE: &'static str = "INCOMPLETE";
    pub const COMPLETED: &'static str = "COMPLETED";
    pub const LATE: &'static str = "LATE";
    pub const REOPEN: &'static str = "REOPEN";

    /// 评审者是否还能编辑答案
    pub fn is_editable(&self) -> bool {
        matches!(self, ReviewStatus::Incomplete | ReviewStatus::Reopen)
    }
}

impl<'de> Deserialize<'de> for ReviewStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReviewStatus::Incomplete => Self::INCOMPLETE,
            ReviewStatus::Completed => Self::COMPLETED,
            ReviewStatus::Late => Self::LATE,
            ReviewStatus::Reopen => Self::REOPEN,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::INCOMPLETE => Ok(ReviewStatus::Incomplete),
            Self::COMPLETED => Ok(ReviewStatus::Completed),
            Self::LATE => Ok(ReviewStatus::Late),
            Self::REOPEN => Ok(ReviewStatus::Reopen),
            _ => Err(format!("Invalid review status: {s}")),
        }
    }
}

// 互评任务实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ArtifactReview {
    pub id: i64,
    pub artifact_id: i64,
    /// 评审者的注册 ID（course_users）
    pub reviewer_id: i64,
    pub status: ReviewStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["INCOMPLETE", "COMPLETED", "LATE", "REOPEN"] {
            let parsed: ReviewStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_editable_states() {
        assert!(ReviewStatus::Incomplete.is_editable());
        assert!(ReviewStatus::Reopen.is_editable());
        assert!(!ReviewStatus::Completed.is_editable());
        assert!(!ReviewStatus::Late.is_editable());
    }
}
