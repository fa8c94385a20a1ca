use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SurveyService;
use crate::models::surveys::requests::UpdateSurveyRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新问卷
/// PUT /assignments/{assignment_id}/survey
pub async fn update_survey(
    service: &SurveyService,
    request: &HttpRequest,
    assignment_id: i64,
    req: UpdateSurveyRequest,
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

    match storage.update_survey(survey.id, req).await {
        Ok(Some(survey)) => {
            info!("Survey {} updated", survey.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(survey, "问卷更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SurveyNotFound,
            "问卷不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新问卷失败: {e}"),
            )),
        ),
    }
}
