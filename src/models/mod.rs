//! 数据模型定义
//!
//! 按资源划分的 entities / requests / responses 三层结构，
//! 与 entity 模块中的数据库实体相互转换。

pub mod common;

pub mod artifacts;
pub mod assignments;
pub mod constraints;
pub mod course_users;
pub mod courses;
pub mod progress;
pub mod reports;
pub mod reviews;
pub mod rewards;
pub mod rules;
pub mod surveys;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间（用于运行时长统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 0 表示成功；4xxxx 为客户端错误（后三位细分资源）；5xxxx 为服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,

    Unauthorized = 40100,
    AuthFailed = 40101,

    Forbidden = 40300,
    CoursePermissionDenied = 40301,

    NotFound = 40400,
    UserNotFound = 40401,
    CourseNotFound = 40402,
    CourseUserNotFound = 40403,
    AssignmentNotFound = 40404,
    SurveyNotFound = 40405,
    QuestionNotFound = 40406,
    OptionNotFound = 40407,
    ArtifactNotFound = 40408,
    ReviewNotFound = 40409,
    ConstraintNotFound = 40410,
    RuleNotFound = 40411,
    ProgressNotFound = 40412,
    RewardNotFound = 40413,
    TeamNotFound = 40414,

    CourseAlreadyExists = 40900,
    CourseAlreadyJoined = 40901,
    ConstraintAlreadyAttached = 40902,

    SurveyNotConfigured = 40910,

    RewardInactive = 40920,
    RewardOutOfStock = 40921,
    InsufficientPoints = 40922,

    ValidationFailed = 42200,

    InternalServerError = 50000,
}
