use crate::models::common::pagination::PaginationQuery;
use crate::models::course_users::entities::CourseRole;
use serde::Deserialize;
use ts_rs::TS;

/// 加入课程请求（邀请码）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_user.ts")]
pub struct JoinCourseRequest {
    pub invite_code: String,
}

/// 更新注册信息请求
///
/// team_name 为 Some("") 表示退出当前团队；
/// 非空字符串表示切换到该团队（不存在则创建）。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_user.ts")]
pub struct UpdateCourseUserRequest {
    pub role: Option<CourseRole>,
    pub team_name: Option<String>,
}

/// 注册列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_user.ts")]
pub struct CourseUserQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct CourseUserQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

/// 给注册加经验值请求（教师操作）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_user.ts")]
pub struct AddPointsRequest {
    pub points: f64,
}
