use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::{AssignmentListQuery, AssignmentQueryParams};
use crate::models::{ApiResponse, ErrorCode};

/// 列出课程下的作业
/// GET /courses/{course_id}/assignments
pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    course_id: i64,
    params: AssignmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = AssignmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        course_id: Some(course_id),
        search: params.search,
    };

    match storage.list_assignments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业列表失败: {e}"),
            )),
        ),
    }
}
