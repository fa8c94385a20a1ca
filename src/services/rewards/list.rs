use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RewardService;
use crate::models::rewards::responses::{RewardListResponse, RewardResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 列出课程下的奖励（线上契约格式：含归属、持有者、已兑换数）
/// GET /courses/{course_id}/rewards
pub async fn list_rewards(
    service: &RewardService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
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
    };

    let rewards = match storage.list_rewards_by_course(course_id).await {
        Ok(rewards) => rewards,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询奖励列表失败: {e}"),
                )),
            );
        }
    };

    let mut items = Vec::with_capacity(rewards.len());
    for reward in rewards {
        let owner = match storage.get_reward_owner_usernames(reward.id).await {
            Ok(owner) => owner,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询奖励持有者失败: {e}"),
                    )),
                );
            }
        };
        let consumed = match storage.count_fulfilled_user_rewards(reward.id).await {
            Ok(consumed) => consumed,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("统计兑换数量失败: {e}"),
                    )),
                );
            }
        };
        items.push(RewardResponse::from_reward(
            reward,
            course.course_name.clone(),
            owner,
            consumed,
        ));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(RewardListResponse { items }, "查询成功")))
}
