use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RewardService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除奖励
/// DELETE /courses/{course_id}/rewards/{reward_id}
pub async fn delete_reward(
    service: &RewardService,
    request: &HttpRequest,
    reward_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_reward(reward_id).await {
        Ok(true) => {
            info!("Reward {} deleted", reward_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("奖励已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RewardNotFound,
            "奖励不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除奖励失败: {e}"),
            )),
        ),
    }
}
