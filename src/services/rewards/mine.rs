use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RewardService;
use crate::middlewares::RequireJWT;
use crate::models::rewards::responses::UserRewardListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 列出当前用户持有的奖励记录
/// GET /rewards/mine
pub async fn list_my_rewards(
    service: &RewardService,
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

    match storage.list_user_rewards(user_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserRewardListResponse { items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询用户奖励失败: {e}"),
            )),
        ),
    }
}
