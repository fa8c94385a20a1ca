use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ArtifactService;
use crate::models::{ApiResponse, ErrorCode};

/// 获取提交物详情
/// GET /artifacts/{artifact_id}
pub async fn get_artifact(
    service: &ArtifactService,
    request: &HttpRequest,
    artifact_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_artifact_by_id(artifact_id).await {
        Ok(Some(artifact)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(artifact, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ArtifactNotFound,
            "提交物不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交物失败: {e}"),
            )),
        ),
    }
}
