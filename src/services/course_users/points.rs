use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseUserService;
use crate::models::course_users::requests::AddPointsRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 给注册加经验值（教师发放加分）
/// POST /courses/{course_id}/members/{course_user_id}/points
pub async fn add_points(
    service: &CourseUserService,
    request: &HttpRequest,
    course_id: i64,
    course_user_id: i64,
    req: AddPointsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.points <= 0.0 {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "加分必须为正数",
        )));
    }

    // 注册必须属于该课程
    match storage.get_course_user_by_id(course_user_id).await {
        Ok(Some(cu)) if cu.course_id == course_id => {}
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
    }

    match storage
        .add_points_to_course_user(course_user_id, req.points)
        .await
    {
        Ok(true) => {
            info!(
                "Added {} point(s) to registration {} in course {}",
                req.points, course_user_id, course_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("加分成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseUserNotFound,
            "该课程下没有这个注册",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("加分失败: {e}"),
            )),
        ),
    }
}
