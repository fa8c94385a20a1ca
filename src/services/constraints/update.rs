use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ConstraintService;
use crate::models::constraints::requests::UpdateConstraintRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_threshold;

/// 更新约束
/// PUT /constraints/{constraint_id}
pub async fn update_constraint(
    service: &ConstraintService,
    request: &HttpRequest,
    constraint_id: i64,
    req: UpdateConstraintRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(threshold) = req.threshold
        && let Err(msg) = validate_threshold(threshold)
    {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.update_constraint(constraint_id, req).await {
        Ok(Some(constraint)) => {
            info!("Constraint {} updated", constraint_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(constraint, "约束更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConstraintNotFound,
            "约束不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新约束失败: {e}"),
            )),
        ),
    }
}
