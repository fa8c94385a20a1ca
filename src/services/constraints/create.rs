use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ConstraintService;
use crate::models::constraints::requests::CreateConstraintRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_constraint_url, validate_threshold};

/// 创建约束
/// POST /constraints
pub async fn create_constraint(
    service: &ConstraintService,
    request: &HttpRequest,
    req: CreateConstraintRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 参数校验
    if let Err(msg) = validate_constraint_url(&req.url) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_threshold(req.threshold) {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.create_constraint(req).await {
        Ok(constraint) => {
            info!("Constraint '{}' created", constraint.url);
            Ok(HttpResponse::Created().json(ApiResponse::success(constraint, "约束创建成功")))
        }
        Err(e) => {
            let msg = format!("约束创建失败: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "约束路由键已存在",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
