use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::course_users::entities::CourseRole;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 检查用户是否有权限查看某个评审
///
/// 评审者本人、课程教学人员（教师/助教）和平台管理员可以查看。
pub(crate) async fn check_review_access_permission(
    storage: &Arc<dyn Storage>,
    current_user: &crate::models::users::entities::User,
    review_id: i64,
) -> Result<(), HttpResponse> {
    // Admin 直接放行
    if current_user.role == UserRole::Admin {
        return Ok(());
    }

    let review = match storage.get_review_by_id(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotFound,
                "评审任务不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评审失败: {e}"),
                )),
            );
        }
    };

    // 评审者本人
    let reviewer = match storage.get_course_user_by_id(review.reviewer_id).await {
        Ok(Some(registration)) => registration,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseUserNotFound,
                "评审者注册不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询注册失败: {e}"),
                )),
            );
        }
    };

    if reviewer.user_id == current_user.id {
        return Ok(());
    }

    // 课程教学人员可以查看课程内的评审
    let course_user = match storage
        .get_course_user_by_user_id_and_course_id(current_user.id, reviewer.course_id)
        .await
    {
        Ok(Some(cu)) => cu,
        Ok(None) => {
            return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "您不是该课程成员",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程成员失败: {e}"),
                )),
            );
        }
    };

    if course_user.role == CourseRole::Instructor || course_user.role == CourseRole::Ta {
        return Ok(());
    }

    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::Forbidden,
        "没有查看该评审的权限",
    )))
}

/// 获取评审详情
/// GET /reviews/{id}
pub async fn get_review(
    service: &ReviewService,
    request: &HttpRequest,
    review_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户信息
    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 权限验证
    if let Err(resp) = check_review_access_permission(&storage, &current_user, review_id).await {
        return Ok(resp);
    }

    match storage.get_review_detail(review_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotFound,
            "评审任务不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评审详情失败: {e}"),
            )),
        ),
    }
}
