use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::course_users::entities::CourseRole;
use crate::models::course_users::requests::{
    AddPointsRequest, CourseUserQueryParams, UpdateCourseUserRequest,
};
use crate::services::CourseUserService;
use crate::utils::{SafeCourseIdI64, SafeCourseUserIdI64};

// 懒加载的全局 COURSE_USER_SERVICE 实例
static COURSE_USER_SERVICE: Lazy<CourseUserService> = Lazy::new(CourseUserService::new_lazy);

// HTTP处理程序
pub async fn list_course_users(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    query: web::Query<CourseUserQueryParams>,
) -> ActixResult<HttpResponse> {
    COURSE_USER_SERVICE
        .list_course_users(&req, course_id.0, query.into_inner())
        .await
}

pub async fn update_course_user(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    course_user_id: SafeCourseUserIdI64,
    update_data: web::Json<UpdateCourseUserRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_USER_SERVICE
        .update_course_user(&req, course_id.0, course_user_id.0, update_data.into_inner())
        .await
}

pub async fn add_points(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    course_user_id: SafeCourseUserIdI64,
    points_data: web::Json<AddPointsRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_USER_SERVICE
        .add_points(&req, course_id.0, course_user_id.0, points_data.into_inner())
        .await
}

pub async fn delete_course_user(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    course_user_id: SafeCourseUserIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_USER_SERVICE
        .delete_course_user(&req, course_id.0, course_user_id.0)
        .await
}

// 配置路由
pub fn configure_course_users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/members")
            .wrap(middlewares::RequireJWT)
            .service(
                // 课程成员都可以查看名单
                web::resource("").route(web::get().to(list_course_users)),
            )
            .service(
                web::resource("/{course_user_id}")
                    .route(
                        // 角色变更和团队切换：教师操作
                        web::put()
                            .to(update_course_user)
                            .wrap(middlewares::RequireCourseRole::new(&CourseRole::Instructor)),
                    )
                    .route(
                        web::delete()
                            .to(delete_course_user)
                            .wrap(middlewares::RequireCourseRole::new(&CourseRole::Instructor)),
                    ),
            )
            .service(
                // 教师发放加分
                web::resource("/{course_user_id}/points").route(
                    web::post()
                        .to(add_points)
                        .wrap(middlewares::RequireCourseRole::new(&CourseRole::Instructor)),
                ),
            ),
    );
}
