use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReviewService;
use super::status::{ReviewTiming, resolve_submission_status};
use crate::errors::GamiSystemError;
use crate::middlewares::RequireJWT;
use crate::models::reviews::requests::SubmitReviewRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 提交评审答案
/// PUT /reviews/{id}/answers
pub async fn submit_review(
    service: &ReviewService,
    request: &HttpRequest,
    review_id: i64,
    req: SubmitReviewRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 获取评审任务
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

    // 只有评审者本人可以提交
    match storage.get_course_user_by_id(review.reviewer_id).await {
        Ok(Some(registration)) if registration.user_id == user_id => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "只有评审者本人可以提交",
            )));
        }
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
    }

    // 经提交物定位作业，再找问卷
    let artifact = match storage.get_artifact_by_id(review.artifact_id).await {
        Ok(Some(artifact)) => artifact,
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
    };

    let survey = match storage
        .get_survey_by_assignment_id(artifact.assignment_id)
        .await
    {
        Ok(survey) => survey,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询问卷失败: {e}"),
                )),
            );
        }
    };

    // 按问卷截止时间结算本次提交；未配置问卷是独立分支，不是异常
    let timing = resolve_submission_status(survey.as_ref(), chrono::Utc::now());
    let status = match timing {
        ReviewTiming::SurveyNotConfigured => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SurveyNotConfigured,
                "No feedback survey configured for this assignment",
            )));
        }
        other => other.status().expect("timing with survey always has a status"),
    };

    // 全量替换旧答案并落状态（单事务）
    match storage
        .submit_review_answers(review_id, status, &req.answers)
        .await
    {
        Ok(review) => {
            info!(
                "Review {} submitted by user {} with status {}",
                review_id, user_id, review.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(review, "提交成功")))
        }
        Err(GamiSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::QuestionNotFound, msg),
        )),
        Err(e) => {
            error!("Failed to submit review {}: {}", review_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("提交评审失败: {e}"),
                )),
            )
        }
    }
}
