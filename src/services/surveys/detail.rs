use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SurveyService;
use crate::models::{ApiResponse, ErrorCode};

/// 获取作业的问卷详情（分区 + 题目 + 选项）
/// GET /assignments/{assignment_id}/survey
pub async fn get_survey(
    service: &SurveyService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_survey_detail(assignment_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SurveyNotFound,
            "该作业没有问卷",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询问卷失败: {e}"),
            )),
        ),
    }
}
