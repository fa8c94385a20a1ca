use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RuleService;
use crate::models::rules::responses::RuleListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 列出全部规则（含约束）
/// GET /rules
pub async fn list_rules(service: &RuleService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_rules().await {
        Ok(items) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(RuleListResponse { items }, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询规则列表失败: {e}"),
            )),
        ),
    }
}
