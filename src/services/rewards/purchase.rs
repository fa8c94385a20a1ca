use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::RewardService;
use crate::errors::GamiSystemError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 购买奖励（扣库存 + 扣注册经验值，单事务）
/// POST /courses/{course_id}/rewards/{reward_id}/purchase
pub async fn purchase_reward(
    service: &RewardService,
    request: &HttpRequest,
    reward_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.purchase_reward(user_id, reward_id).await {
        Ok(record) => {
            info!("User {} purchased reward {}", user_id, reward_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(record, "兑换成功")))
        }
        Err(GamiSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::RewardNotFound, msg))),
        Err(GamiSystemError::Authorization(msg)) => Ok(HttpResponse::Forbidden()
            .json(ApiResponse::error_empty(ErrorCode::CoursePermissionDenied, msg))),
        Err(GamiSystemError::Validation(msg)) => {
            // 未上架 / 库存不足 / 经验值不足 / 已持有
            let code = match msg.as_str() {
                "奖励未上架" => ErrorCode::RewardInactive,
                "奖励库存不足" => ErrorCode::RewardOutOfStock,
                "经验值不足" => ErrorCode::InsufficientPoints,
                _ => ErrorCode::ValidationFailed,
            };
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(code, msg)))
        }
        Err(e) => {
            error!("Failed to purchase reward {}: {}", reward_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("兑换奖励失败: {e}"),
                )),
            )
        }
    }
}
