use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::RuleService;
use crate::models::rules::requests::CreateRuleRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建规则
/// POST /rules
pub async fn create_rule(
    service: &RuleService,
    request: &HttpRequest,
    req: CreateRuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "规则名称不能为空",
        )));
    }

    match storage.create_rule(req).await {
        Ok(rule) => {
            info!("Rule '{}' created", rule.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(rule, "规则创建成功")))
        }
        Err(e) => {
            error!("Failed to create rule: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建规则失败: {e}"),
                )),
            )
        }
    }
}
