use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ConstraintService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除约束（硬删除，关联的进度和规则挂载由外键级联清理）
/// DELETE /constraints/{constraint_id}
pub async fn delete_constraint(
    service: &ConstraintService,
    request: &HttpRequest,
    constraint_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_constraint(constraint_id).await {
        Ok(true) => {
            info!("Constraint {} deleted", constraint_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("约束已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConstraintNotFound,
            "约束不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除约束失败: {e}"),
            )),
        ),
    }
}
