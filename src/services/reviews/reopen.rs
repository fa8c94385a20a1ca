use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::course_users::entities::CourseRole;
use crate::models::reviews::entities::ReviewStatus;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 重开评审（允许评审者重新编辑）
/// POST /reviews/{id}/reopen
pub async fn reopen_review(
    service: &ReviewService,
    request: &HttpRequest,
    review_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 定位评审所属课程
    let review = match storage.get_review_by_id(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotFound,
                "评审任务不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审失败: {e}"),
                )),
            );
        }
    };

    // 重开是教学动作：平台管理员或课程教师可以执行
    if current_user.role != UserRole::Admin {
        let reviewer = match storage.get_course_user_by_id(review.reviewer_id).await {
            Ok(Some(registration)) => registration,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CourseUserNotFound,
                    "评审者注册不存在",
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

        match storage
            .get_course_user_by_user_id_and_course_id(current_user.id, reviewer.course_id)
            .await
        {
            Ok(Some(cu)) if cu.role == CourseRole::Instructor => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::CoursePermissionDenied,
                    "只有课程教师可以重开评审",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询课程成员失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage
        .update_review_status(review_id, ReviewStatus::Reopen)
        .await
    {
        Ok(Some(review)) => {
            info!("Review {} reopened by user {}", review_id, current_user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(review, "评审已重开")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "评审任务不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("重开评审失败: {e}"),
            )),
        ),
    }
}
