use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RuleService;
use crate::models::{ApiResponse, ErrorCode};

/// 获取规则详情（含约束）
/// GET /rules/{rule_id}
pub async fn get_rule(
    service: &RuleService,
    request: &HttpRequest,
    rule_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_rule_by_id(rule_id).await {
        Ok(Some(rule)) => Ok(HttpResponse::Ok().json(ApiResponse::success(rule, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RuleNotFound,
            "规则不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询规则失败: {e}"),
            )),
        ),
    }
}
