use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ArtifactService;
use crate::models::artifacts::requests::AssignReviewsRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 为提交物分配互评任务
/// POST /artifacts/{artifact_id}/reviews
///
/// 幂等：重复指派同一评审者会被跳过，返回里区分 created 与 skipped。
pub async fn assign_reviews(
    service: &ArtifactService,
    request: &HttpRequest,
    artifact_id: i64,
    req: AssignReviewsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.reviewer_ids.is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "评审者列表不能为空",
        )));
    }

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

    // 评审者注册必须都存在
    for &reviewer_id in &req.reviewer_ids {
        match storage.get_course_user_by_id(reviewer_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::CourseUserNotFound,
                    format!("注册 {reviewer_id} 不存在"),
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
    }

    match storage.assign_reviews(artifact_id, &req.reviewer_ids).await {
        Ok(response) => {
            info!(
                "Assigned {} review(s) for artifact {} ({} skipped)",
                response.created.len(),
                artifact_id,
                response.skipped.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(response, "评审任务已分配")))
        }
        Err(e) => {
            error!("Failed to assign reviews for artifact {}: {}", artifact_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("分配评审任务失败: {e}"),
                )),
            )
        }
    }
}
