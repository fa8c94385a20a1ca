use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RewardService;
use crate::models::rewards::requests::UpdateRewardRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新奖励
/// PUT /courses/{course_id}/rewards/{reward_id}
pub async fn update_reward(
    service: &RewardService,
    request: &HttpRequest,
    reward_id: i64,
    req: UpdateRewardRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(inventory) = req.inventory
        && inventory < 0
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "库存不能为负数",
        )));
    }

    match storage.update_reward(reward_id, req).await {
        Ok(Some(reward)) => {
            info!("Reward {} updated", reward_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(reward, "奖励更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RewardNotFound,
            "奖励不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新奖励失败: {e}"),
            )),
        ),
    }
}
