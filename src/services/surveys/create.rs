use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SurveyService;
use crate::models::surveys::requests::CreateSurveyRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 为作业创建问卷（每个作业至多一份）
/// POST /assignments/{assignment_id}/survey
pub async fn create_survey(
    service: &SurveyService,
    request: &HttpRequest,
    assignment_id: i64,
    req: CreateSurveyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.template_name.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "问卷模板名不能为空",
        )));
    }

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.create_survey(assignment_id, req).await {
        Ok(survey) => {
            info!("Survey created for assignment {}", assignment_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(survey, "问卷创建成功")))
        }
        Err(e) => {
            let msg = format!("创建问卷失败: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "该作业已有问卷",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
