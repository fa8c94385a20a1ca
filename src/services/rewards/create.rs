use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::RewardService;
use crate::models::rewards::requests::CreateRewardRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建奖励
/// POST /courses/{course_id}/rewards
pub async fn create_reward(
    service: &RewardService,
    request: &HttpRequest,
    course_id: i64,
    req: CreateRewardRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "奖励名称不能为空",
        )));
    }

    if let Some(inventory) = req.inventory
        && inventory < 0
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "库存不能为负数",
        )));
    }

    // 课程必须存在
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    }

    match storage.create_reward(course_id, req).await {
        Ok(reward) => {
            info!("Reward '{}' created in course {}", reward.name, course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(reward, "奖励创建成功")))
        }
        Err(e) => {
            error!("Failed to create reward: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建奖励失败: {e}"),
                )),
            )
        }
    }
}
