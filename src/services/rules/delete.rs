use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RuleService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除规则
/// DELETE /rules/{rule_id}
pub async fn delete_rule(
    service: &RuleService,
    request: &HttpRequest,
    rule_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_rule(rule_id).await {
        Ok(true) => {
            info!("Rule {} deleted", rule_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("规则已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RuleNotFound,
            "规则不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除规则失败: {e}"),
            )),
        ),
    }
}
