use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程内角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course_user.ts")]
pub enum CourseRole {
    Student,    // 学生
    Ta,         // 助教
    Instructor, // 教师
}

impl CourseRole {
    pub const STUDENT: &'static str = "student";
    pub const TA: &'static str = "ta";
    pub const INSTRUCTOR: &'static str = "instructor";

    /// 允许管理问卷、重开评审等教学操作的角色
    pub fn staff_roles() -> &'static [&'static CourseRole] {
        &[&Self::Ta, &Self::Instructor]
    }
}

impl<'de> Deserialize<'de> for CourseRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            CourseRole::STUDENT => Ok(CourseRole::Student),
            CourseRole::TA => Ok(CourseRole::Ta),
            CourseRole::INSTRUCTOR => Ok(CourseRole::Instructor),
            _ => Err(serde::de::Error::custom(format!(
                "无效的课程角色: '{s}'. 支持的角色: student, ta, instructor"
            ))),
        }
    }
}

impl std::fmt::Display for CourseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseRole::Student => write!(f, "{}", CourseRole::STUDENT),
            CourseRole::Ta => write!(f, "{}", CourseRole::TA),
            CourseRole::Instructor => write!(f, "{}", CourseRole::INSTRUCTOR),
        }
    }
}

impl std::str::FromStr for CourseRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(CourseRole::Student),
            "ta" => Ok(CourseRole::Ta),
            "instructor" => Ok(CourseRole::Instructor),
            _ => Err(format!("Invalid course role: {s}")),
        }
    }
}

// 选课注册实体（registration）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_user.ts")]
pub struct CourseUser {
    pub id: i64,
    pub course_id: i64,
    pub user_id: i64,
    pub role: CourseRole,
    /// 注册累计的经验值，购买奖励时扣减
    pub points: f64,
    pub team_id: Option<i64>,
    pub joined_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
