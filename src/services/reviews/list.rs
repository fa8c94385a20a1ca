use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::reviews::responses::ReviewListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 列出提交物下的评审（课程教学人员视角，路由层已做角色校验）
/// GET /artifacts/{id}/reviews
pub async fn list_artifact_reviews(
    service: &ReviewService,
    request: &HttpRequest,
    artifact_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_artifact_by_id(artifact_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ArtifactNotFound,
                "提交物不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交物失败: {e}"),
                )),
            );
        }
    }

    match storage.list_reviews_by_artifact(artifact_id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(ReviewListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评审列表失败: {e}"),
            )),
        ),
    }
}

/// 列出当前用户在某课程下的评审任务
/// GET /courses/{course_id}/reviews/mine
pub async fn list_my_reviews(
    service: &ReviewService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let registration = match storage
        .get_course_user_by_user_id_and_course_id(user_id, course_id)
        .await
    {
        Ok(Some(registration)) => registration,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "您不是该课程成员",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询注册失败: {e}"),
                )),
            );
        }
    };

    match storage.list_reviews_by_reviewer(registration.id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(ReviewListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评审列表失败: {e}"),
            )),
        ),
    }
}
