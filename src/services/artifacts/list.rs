use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ArtifactService;
use crate::models::artifacts::responses::ArtifactListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 列出作业下的提交物
/// GET /assignments/{assignment_id}/artifacts
pub async fn list_artifacts(
    service: &ArtifactService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    }

    match storage.list_artifacts_by_assignment(assignment_id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(ArtifactListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交物列表失败: {e}"),
            )),
        ),
    }
}
