use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ConstraintService;
use crate::middlewares::RequireJWT;
use crate::models::progress::entities::ProgressMode;
use crate::models::progress::requests::UpdateProgressRequest;
use crate::models::progress::responses::ProgressResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 获取当前用户对某约束的进度
/// GET /constraints/{url}/progress
pub async fn get_progress(
    service: &ConstraintService,
    request: &HttpRequest,
    url: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let constraint = match storage.get_constraint_by_url(url).await {
        Ok(Some(constraint)) => constraint,
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
    };

    match storage.get_progress(user_id, constraint.id).await {
        Ok(Some(progress)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProgressResponse::from_progress(progress, Vec::new()),
            "查询成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProgressNotFound,
            "进度不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询进度失败: {e}"),
            )),
        ),
    }
}

/// 上报当前用户对某约束的进度
/// PUT /constraints/{url}/progress
///
/// 请求体带 cur_point 走 max 模式（低于当前值不回退），
/// 空请求体走 increment 模式（计数 +1）。
/// 达成阈值后在同一事务内完成规则求值和奖励发放。
pub async fn update_progress(
    service: &ConstraintService,
    request: &HttpRequest,
    url: &str,
    req: UpdateProgressRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let constraint = match storage.get_constraint_by_url(url).await {
        Ok(Some(constraint)) => constraint,
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
    };

    let (mode, new_value) = match req.cur_point {
        Some(value) => (ProgressMode::Max, value),
        None => (ProgressMode::Increment, 0.0),
    };

    match storage
        .update_progress_and_evaluate(user_id, constraint.id, mode, new_value)
        .await
    {
        Ok(update) => {
            if !update.granted.is_empty() {
                info!(
                    "User {} earned {} reward(s) via constraint '{}'",
                    user_id,
                    update.granted.len(),
                    url
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ProgressResponse::from_progress(update.progress, update.granted),
                "进度已更新",
            )))
        }
        Err(e) => {
            error!("Failed to update progress for '{}': {}", url, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("更新进度失败: {e}"),
                )),
            )
        }
    }
}

/// 删除当前用户对某约束的进度
/// DELETE /constraints/{url}/progress
pub async fn delete_progress(
    service: &ConstraintService,
    request: &HttpRequest,
    url: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let constraint = match storage.get_constraint_by_url(url).await {
        Ok(Some(constraint)) => constraint,
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
    };

    match storage.delete_progress(user_id, constraint.id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("进度已删除"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProgressNotFound,
            "进度不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除进度失败: {e}"),
            )),
        ),
    }
}
