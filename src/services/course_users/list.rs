use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseUserService;
use crate::models::course_users::requests::{CourseUserQuery, CourseUserQueryParams};
use crate::models::{ApiResponse, ErrorCode};

/// 列出课程内注册
/// GET /courses/{course_id}/members
pub async fn list_course_users(
    service: &CourseUserService,
    request: &HttpRequest,
    course_id: i64,
    params: CourseUserQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = CourseUserQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
    };

    match storage
        .list_course_users_with_pagination(course_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询注册列表失败: {e}"),
            )),
        ),
    }
}
