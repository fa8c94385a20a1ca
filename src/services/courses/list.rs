use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::{CourseListQuery, CourseQueryParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 列出课程（教师看自己的课程，管理员看全部）
/// GET /courses
pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    params: CourseQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let role = RequireJWT::extract_user_role(request);
    let user_id = RequireJWT::extract_user_id(request);

    let instructor_id = match role {
        Some(UserRole::Admin) => None,
        _ => user_id,
    };

    let query = CourseListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        instructor_id,
        search: params.search,
    };

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程列表失败: {e}"),
            )),
        ),
    }
}
