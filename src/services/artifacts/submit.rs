use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ArtifactService;
use crate::middlewares::RequireJWT;
use crate::models::artifacts::entities::ArtifactOwner;
use crate::models::artifacts::requests::SubmitArtifactRequest;
use crate::models::assignments::entities::AssignmentType;
use crate::models::{ApiResponse, ErrorCode};

/// 提交提交物
/// POST /assignments/{assignment_id}/artifacts
///
/// 文件本体走外部对象存储，这里只登记存储键；
/// 团队作业归属到注册所在团队，个人作业归属到注册本身。
pub async fn submit_artifact(
    service: &ArtifactService,
    request: &HttpRequest,
    assignment_id: i64,
    req: SubmitArtifactRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if req.file_name.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "文件名不能为空",
        )));
    }

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    // 提交者必须是课程注册成员
    let registration = match storage
        .get_course_user_by_user_id_and_course_id(user_id, assignment.course_id)
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

    // 团队作业归属团队，个人作业归属注册
    let owner = match assignment.assignment_type {
        AssignmentType::Team => {
            let team_id = match (req.team_id, registration.team_id) {
                (Some(team_id), _) => team_id,
                (None, Some(team_id)) => team_id,
                (None, None) => {
                    return Ok(HttpResponse::UnprocessableEntity().json(
                        ApiResponse::error_empty(
                            ErrorCode::ValidationFailed,
                            "团队作业需要先加入团队",
                        ),
                    ));
                }
            };
            ArtifactOwner::Team { team_id }
        }
        AssignmentType::Individual => ArtifactOwner::Individual {
            registration_id: registration.id,
        },
    };

    // 生成外部存储键
    let file_key = format!(
        "artifacts/{}/{}_{}",
        assignment_id,
        uuid::Uuid::new_v4(),
        req.file_name.trim()
    );

    match storage
        .create_artifact(assignment_id, owner, &file_key)
        .await
    {
        Ok(artifact) => {
            info!(
                "Artifact {} submitted for assignment {} by user {}",
                artifact.id, assignment_id, user_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(artifact, "提交成功")))
        }
        Err(e) => {
            error!("Failed to create artifact: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建提交物失败: {e}"),
                )),
            )
        }
    }
}
