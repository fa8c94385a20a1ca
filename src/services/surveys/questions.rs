use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SurveyService;
use crate::models::surveys::entities::QuestionType;
use crate::models::surveys::requests::{
    CreateQuestionRequest, CreateSectionRequest, UpdateQuestionRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_scale_size;

/// 创建分区
/// POST /assignments/{assignment_id}/survey/sections
pub async fn create_section(
    service: &SurveyService,
    request: &HttpRequest,
    assignment_id: i64,
    req: CreateSectionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "分区标题不能为空",
        )));
    }

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

    match storage.create_section(survey.id, req).await {
        Ok(section) => {
            info!("Section '{}' created in survey {}", section.title, survey.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(section, "分区创建成功")))
        }
        Err(e) => {
            error!("Failed to create section: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建分区失败: {e}"),
                )),
            )
        }
    }
}

/// 创建题目
/// POST /questions
pub async fn create_question(
    service: &SurveyService,
    request: &HttpRequest,
    req: CreateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.text.trim().is_empty() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题目文本不能为空",
        )));
    }

    // 量表题必须带合法的刻度数
    if req.question_type == QuestionType::ScaleMultipleChoice {
        match req.number_of_scale {
            Some(scale) => {
                if let Err(msg) = validate_scale_size(scale) {
                    return Ok(HttpResponse::UnprocessableEntity()
                        .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
                }
            }
            None => {
                return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "量表题必须指定刻度数",
                )));
            }
        }
    }

    // 选择题必须带选项
    if req.question_type.is_choice()
        && req
            .option_choices
            .as_ref()
            .is_none_or(|options| options.is_empty())
    {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "选择题至少需要一个选项",
        )));
    }

    match storage.create_question(req).await {
        Ok(question) => {
            info!("Question {} created", question.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(question, "题目创建成功")))
        }
        Err(e) => {
            error!("Failed to create question: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建题目失败: {e}"),
                )),
            )
        }
    }
}

/// 更新题目
/// PUT /questions/{question_id}
pub async fn update_question(
    service: &SurveyService,
    request: &HttpRequest,
    question_id: i64,
    req: UpdateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(scale) = req.number_of_scale
        && let Err(msg) = validate_scale_size(scale)
    {
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.update_question(question_id, req).await {
        Ok(Some(question)) => {
            info!("Question {} updated", question_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(question, "题目更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新题目失败: {e}"),
            )),
        ),
    }
}

/// 删除题目
/// DELETE /questions/{question_id}
pub async fn delete_question(
    service: &SurveyService,
    request: &HttpRequest,
    question_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_question(question_id).await {
        Ok(true) => {
            info!("Question {} deleted", question_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("题目已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除题目失败: {e}"),
            )),
        ),
    }
}
