use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RuleService;
use crate::models::rules::requests::AttachConstraintRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 规则挂载约束
/// POST /rules/{rule_id}/constraints
pub async fn attach_constraint(
    service: &RuleService,
    request: &HttpRequest,
    rule_id: i64,
    req: AttachConstraintRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 规则和约束都必须存在
    match storage.get_rule_by_id(rule_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RuleNotFound,
                "规则不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询规则失败: {e}"),
                )),
            );
        }
    }

    match storage.get_constraint_by_id(req.constraint_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ConstraintNotFound,
                "约束不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询约束失败: {e}"),
                )),
            );
        }
    }

    match storage
        .attach_constraint_to_rule(rule_id, req.constraint_id)
        .await
    {
        Ok(true) => {
            info!("Constraint {} attached to rule {}", req.constraint_id, rule_id);
            Ok(HttpResponse::Created().json(ApiResponse::success_empty("约束已挂载")))
        }
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ConstraintAlreadyAttached,
            "约束已挂载到该规则",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("挂载约束失败: {e}"),
            )),
        ),
    }
}

/// 规则卸载约束
/// DELETE /rules/{rule_id}/constraints/{constraint_id}
pub async fn detach_constraint(
    service: &RuleService,
    request: &HttpRequest,
    rule_id: i64,
    constraint_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .detach_constraint_from_rule(rule_id, constraint_id)
        .await
    {
        Ok(true) => {
            info!("Constraint {} detached from rule {}", constraint_id, rule_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("约束已卸载")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "该规则下没有这个约束",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("卸载约束失败: {e}"),
            )),
        ),
    }
}
