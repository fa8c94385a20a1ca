use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::course_users::entities::CourseRole;
use crate::models::rewards::requests::{CreateRewardRequest, UpdateRewardRequest};
use crate::services::RewardService;
use crate::utils::{SafeCourseIdI64, SafeRewardIdI64};

// 懒加载的全局 REWARD_SERVICE 实例
static REWARD_SERVICE: Lazy<RewardService> = Lazy::new(RewardService::new_lazy);

// HTTP处理程序
pub async fn list_rewards(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    REWARD_SERVICE.list_rewards(&req, course_id.0).await
}

pub async fn create_reward(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    reward_data: web::Json<CreateRewardRequest>,
) -> ActixResult<HttpResponse> {
    REWARD_SERVICE
        .create_reward(&req, course_id.0, reward_data.into_inner())
        .await
}

pub async fn update_reward(
    req: HttpRequest,
    reward_id: SafeRewardIdI64,
    update_data: web::Json<UpdateRewardRequest>,
) -> ActixResult<HttpResponse> {
    REWARD_SERVICE
        .update_reward(&req, reward_id.0, update_data.into_inner())
        .await
}

pub async fn delete_reward(
    req: HttpRequest,
    reward_id: SafeRewardIdI64,
) -> ActixResult<HttpResponse> {
    REWARD_SERVICE.delete_reward(&req, reward_id.0).await
}

pub async fn list_my_rewards(req: HttpRequest) -> ActixResult<HttpResponse> {
    REWARD_SERVICE.list_my_rewards(&req).await
}

pub async fn purchase_reward(
    req: HttpRequest,
    reward_id: SafeRewardIdI64,
) -> ActixResult<HttpResponse> {
    REWARD_SERVICE.purchase_reward(&req, reward_id.0).await
}

// 配置路由
pub fn configure_rewards_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/rewards")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 课程成员浏览奖励商店
                    .route(web::get().to(list_rewards))
                    .route(
                        // 教师上架奖励
                        web::post()
                            .to(create_reward)
                            .wrap(middlewares::RequireCourseRole::new(&CourseRole::Instructor)),
                    ),
            )
            .service(
                web::resource("/{reward_id}")
                    .route(
                        web::put()
                            .to(update_reward)
                            .wrap(middlewares::RequireCourseRole::new(&CourseRole::Instructor)),
                    )
                    .route(
                        web::delete()
                            .to(delete_reward)
                            .wrap(middlewares::RequireCourseRole::new(&CourseRole::Instructor)),
                    ),
            )
            .service(
                // 学生用经验值兑换
                web::resource("/{reward_id}/purchase").route(web::post().to(purchase_reward)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/rewards")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/mine").route(web::get().to(list_my_rewards))),
    );
}
