use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SurveyService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除问卷
/// DELETE /assignments/{assignment_id}/survey
pub async fn delete_survey(
    service: &SurveyService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let survey = match storage.get_survey_by_assignment_id(assignment_id).await {
        Ok(Some(survey)) => survey,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SurveyNotFound,
                "该作业没有问卷",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询问卷失败: {e}"),
                )),
            );
        }
    };

    match storage.delete_survey(survey.id).await {
        Ok(true) => {
            info!("Survey {} deleted", survey.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("问卷已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SurveyNotFound,
            "问卷不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除问卷失败: {e}"),
            )),
        ),
    }
}
