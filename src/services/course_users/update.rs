use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseUserService;
use crate::models::course_users::requests::UpdateCourseUserRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新注册信息（角色变更、团队切换）
/// PUT /courses/{course_id}/members/{course_user_id}
///
/// 团队切换的整个序列（脱离旧团队、清理空团队、找到或创建新团队、
/// 挂新团队）由存储层在单事务内完成。
pub async fn update_course_user(
    service: &CourseUserService,
    request: &HttpRequest,
    course_id: i64,
    course_user_id: i64,
    req: UpdateCourseUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_course_user(course_id, course_user_id, req)
        .await
    {
        Ok(Some(course_user)) => {
            info!("Course user {} updated in course {}", course_user_id, course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(course_user, "注册信息更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseUserNotFound,
            "该课程下没有这个注册",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新注册失败: {e}"),
            )),
        ),
    }
}
