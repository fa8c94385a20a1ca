use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::surveys::requests::{
    CreateQuestionRequest, CreateSectionRequest, CreateSurveyRequest, UpdateQuestionRequest,
    UpdateSurveyRequest,
};
use crate::services::SurveyService;
use crate::utils::{SafeAssignmentIdI64, SafeQuestionIdI64};

// 懒加载的全局 SURVEY_SERVICE 实例
static SURVEY_SERVICE: Lazy<SurveyService> = Lazy::new(SurveyService::new_lazy);

// HTTP处理程序
pub async fn create_survey(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    survey_data: web::Json<CreateSurveyRequest>,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE
        .create_survey(&req, assignment_id.0, survey_data.into_inner())
        .await
}

pub async fn get_survey(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE.get_survey(&req, assignment_id.0).await
}

pub async fn update_survey(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    update_data: web::Json<UpdateSurveyRequest>,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE
        .update_survey(&req, assignment_id.0, update_data.into_inner())
        .await
}

pub async fn delete_survey(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE.delete_survey(&req, assignment_id.0).await
}

pub async fn create_section(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    section_data: web::Json<CreateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE
        .create_section(&req, assignment_id.0, section_data.into_inner())
        .await
}

pub async fn create_question(
    req: HttpRequest,
    question_data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE
        .create_question(&req, question_data.into_inner())
        .await
}

pub async fn update_question(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
    update_data: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE
        .update_question(&req, question_id.0, update_data.into_inner())
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
) -> ActixResult<HttpResponse> {
    SURVEY_SERVICE.delete_question(&req, question_id.0).await
}

// 配置路由
pub fn configure_surveys_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}/survey")
            .wrap(middlewares::RequireJWT)
            .service(
                // 问卷的增删改由教学人员执行，评审者也需要读取问卷答题
                web::resource("")
                    .route(web::get().to(get_survey))
                    .route(web::post().to(create_survey))
                    .route(web::put().to(update_survey))
                    .route(web::delete().to(delete_survey)),
            )
            .service(web::resource("/sections").route(web::post().to(create_section))),
    );

    cfg.service(
        web::scope("/api/v1/questions")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::post().to(create_question)))
            .service(
                web::resource("/{question_id}")
                    .route(web::put().to(update_question))
                    .route(web::delete().to(delete_question)),
            ),
    );
}
