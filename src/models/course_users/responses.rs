use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::pagination::PaginationInfo;
use crate::models::course_users::entities::CourseUser;

/// 注册列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_user.ts")]
pub struct CourseUserListResponse {
    pub items: Vec<CourseUser>,
    pub pagination: PaginationInfo,
}
