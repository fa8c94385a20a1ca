use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RuleService;
use crate::models::rules::requests::UpdateRuleRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新规则
/// PUT /rules/{rule_id}
pub async fn update_rule(
    service: &RuleService,
    request: &HttpRequest,
    rule_id: i64,
    req: UpdateRuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_rule(rule_id, req).await {
        Ok(Some(rule)) => {
            info!("Rule {} updated", rule_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(rule, "规则更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RuleNotFound,
            "规则不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新规则失败: {e}"),
            )),
        ),
    }
}
