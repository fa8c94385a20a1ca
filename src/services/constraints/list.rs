use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConstraintService;
use crate::models::constraints::requests::{ConstraintListQuery, ConstraintQueryParams};
use crate::models::{ApiResponse, ErrorCode};

/// 列出约束
/// GET /constraints
pub async fn list_constraints(
    service: &ConstraintService,
    request: &HttpRequest,
    params: ConstraintQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ConstraintListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
    };

    match storage.list_constraints_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询约束列表失败: {e}"),
            )),
        ),
    }
}
