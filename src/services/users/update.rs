use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新用户
/// PUT /users/{user_id}
pub async fn update_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
    req: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_user(user_id, req).await {
        Ok(Some(user)) => {
            info!("User {} updated", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "用户更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新用户失败: {e}"),
            )),
        ),
    }
}
