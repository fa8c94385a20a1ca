use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConstraintService;
use crate::models::{ApiResponse, ErrorCode};

/// 通过路由键获取约束
/// GET /constraints/{url}
pub async fn get_constraint(
    service: &ConstraintService,
    request: &HttpRequest,
    url: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_constraint_by_url(url).await {
        Ok(Some(constraint)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(constraint, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ConstraintNotFound,
            "约束不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询约束失败: {e}"),
            )),
        ),
    }
}
