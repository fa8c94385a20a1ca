use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新课程
/// PUT /courses/{course_id}
pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    req: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_course(course_id, req).await {
        Ok(Some(course)) => {
            info!("Course {} updated", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "课程更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "课程不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课程失败: {e}"),
            )),
        ),
    }
}
