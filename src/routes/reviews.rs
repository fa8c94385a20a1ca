use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::SubmitReviewRequest;
use crate::services::ReviewService;
use crate::utils::{SafeCourseIdI64, SafeReviewIdI64};

// 懒加载的全局 REVIEW_SERVICE 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

// HTTP处理程序
pub async fn get_review(req: HttpRequest, review_id: SafeReviewIdI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.get_review(&req, review_id.0).await
}

pub async fn submit_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
    submit_data: web::Json<SubmitReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .submit_review(&req, review_id.0, submit_data.into_inner())
        .await
}

pub async fn reopen_review(
    req: HttpRequest,
    review_id: SafeReviewIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.reopen_review(&req, review_id.0).await
}

pub async fn list_my_reviews(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_my_reviews(&req, course_id.0).await
}

// 配置路由
pub fn configure_reviews_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reviews")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/{review_id}")
                    .route(web::get().to(get_review)),
            )
            .service(
                // 提交即全量替换旧答案，过期提交自动记 LATE
                web::resource("/{review_id}/answers").route(web::put().to(submit_review)),
            )
            .service(
                // 教师重开评审，允许评审者再次编辑
                web::resource("/{review_id}/reopen").route(web::post().to(reopen_review)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/courses/{course_id}/reviews")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/mine").route(web::get().to(list_my_reviews))),
    );
}
