use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::artifacts::requests::{AssignReviewsRequest, SubmitArtifactRequest};
use crate::services::{ArtifactService, ReportService, ReviewService};
use crate::utils::{SafeArtifactIdI64, SafeAssignmentIdI64};

// 懒加载的全局服务实例
static ARTIFACT_SERVICE: Lazy<ArtifactService> = Lazy::new(ArtifactService::new_lazy);
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn submit_artifact(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    artifact_data: web::Json<SubmitArtifactRequest>,
) -> ActixResult<HttpResponse> {
    ARTIFACT_SERVICE
        .submit_artifact(&req, assignment_id.0, artifact_data.into_inner())
        .await
}

pub async fn list_artifacts(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    ARTIFACT_SERVICE.list_artifacts(&req, assignment_id.0).await
}

pub async fn get_artifact(
    req: HttpRequest,
    artifact_id: SafeArtifactIdI64,
) -> ActixResult<HttpResponse> {
    ARTIFACT_SERVICE.get_artifact(&req, artifact_id.0).await
}

pub async fn assign_reviews(
    req: HttpRequest,
    artifact_id: SafeArtifactIdI64,
    assign_data: web::Json<AssignReviewsRequest>,
) -> ActixResult<HttpResponse> {
    ARTIFACT_SERVICE
        .assign_reviews(&req, artifact_id.0, assign_data.into_inner())
        .await
}

pub async fn list_artifact_reviews(
    req: HttpRequest,
    artifact_id: SafeArtifactIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .list_artifact_reviews(&req, artifact_id.0)
        .await
}

pub async fn get_artifact_report(
    req: HttpRequest,
    artifact_id: SafeArtifactIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .get_artifact_report(&req, artifact_id.0)
        .await
}

pub async fn get_artifact_keywords(
    req: HttpRequest,
    artifact_id: SafeArtifactIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .get_artifact_keywords(&req, artifact_id.0)
        .await
}

// 配置路由
pub fn configure_artifacts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}/artifacts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::post().to(submit_artifact))
                    .route(web::get().to(list_artifacts)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/artifacts")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/{artifact_id}").route(web::get().to(get_artifact)))
            .service(
                web::resource("/{artifact_id}/reviews")
                    // 分配互评 / 查看互评情况
                    .route(web::post().to(assign_reviews))
                    .route(web::get().to(list_artifact_reviews)),
            )
            .service(
                // 提交物报表：分区 -> 题目 -> 聚合
                web::resource("/{artifact_id}/report").route(web::get().to(get_artifact_report)),
            )
            .service(
                // 自由文本关键词
                web::resource("/{artifact_id}/keywords")
                    .route(web::get().to(get_artifact_keywords)),
            ),
    );
}
