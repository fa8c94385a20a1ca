use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseUserService;
use crate::middlewares::RequireJWT;
use crate::models::course_users::entities::CourseRole;
use crate::models::course_users::requests::JoinCourseRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 通过邀请码加入课程（默认以学生身份）
/// POST /courses/join
pub async fn join_course(
    service: &CourseUserService,
    request: &HttpRequest,
    req: JoinCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let course = match storage.get_course_by_code(req.invite_code.trim()).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "邀请码无效",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    };

    // 已注册的直接拒绝
    match storage
        .get_course_user_by_user_id_and_course_id(user_id, course.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::CourseAlreadyJoined,
                "您已加入该课程",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询注册失败: {e}"),
                )),
            );
        }
    }

    match storage
        .join_course(user_id, course.id, CourseRole::Student)
        .await
    {
        Ok(course_user) => {
            info!("User {} joined course {}", user_id, course.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(course_user, "加入课程成功")))
        }
        Err(e) => {
            error!("Failed to join course: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("加入课程失败: {e}"),
                )),
            )
        }
    }
}
