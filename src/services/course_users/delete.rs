use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseUserService;
use crate::models::{ApiResponse, ErrorCode};

/// 把注册移出课程
/// DELETE /courses/{course_id}/members/{course_user_id}
pub async fn delete_course_user(
    service: &CourseUserService,
    request: &HttpRequest,
    course_id: i64,
    course_user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 注册必须属于该课程
    let course_user = match storage.get_course_user_by_id(course_user_id).await {
        Ok(Some(cu)) if cu.course_id == course_id => cu,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseUserNotFound,
                "该课程下没有这个注册",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询注册失败: {e}"),
                )),
            );
        }
    };

    match storage.leave_course(course_user.user_id, course_id).await {
        Ok(true) => {
            info!("User {} removed from course {}", course_user.user_id, course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("已移出课程")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseUserNotFound,
            "该课程下没有这个注册",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("移出课程失败: {e}"),
            )),
        ),
    }
}
