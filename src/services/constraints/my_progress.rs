use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ConstraintService;
use crate::middlewares::RequireJWT;
use crate::models::progress::responses::{ProgressListResponse, ProgressResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 列出当前用户的全部进度
/// GET /progress
pub async fn list_my_progress(
    service: &ConstraintService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.list_progress_by_user(user_id).await {
        Ok(entries) => {
            let items = entries
                .into_iter()
                .map(|progress| ProgressResponse::from_progress(progress, Vec::new()))
                .collect();
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(ProgressListResponse { items }, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询进度列表失败: {e}"),
            )),
        ),
    }
}
