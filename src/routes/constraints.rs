use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::constraints::requests::{
    ConstraintQueryParams, CreateConstraintRequest, UpdateConstraintRequest,
};
use crate::models::progress::requests::UpdateProgressRequest;
use crate::models::users::entities::UserRole;
use crate::services::ConstraintService;
use crate::utils::{SafeConstraintIdI64, SafeConstraintUrl};

// 懒加载的全局 CONSTRAINT_SERVICE 实例
static CONSTRAINT_SERVICE: Lazy<ConstraintService> = Lazy::new(ConstraintService::new_lazy);

// HTTP处理程序
pub async fn list_constraints(
    req: HttpRequest,
    query: web::Query<ConstraintQueryParams>,
) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE
        .list_constraints(&req, query.into_inner())
        .await
}

pub async fn create_constraint(
    req: HttpRequest,
    constraint_data: web::Json<CreateConstraintRequest>,
) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE
        .create_constraint(&req, constraint_data.into_inner())
        .await
}

pub async fn update_constraint(
    req: HttpRequest,
    constraint_id: SafeConstraintIdI64,
    update_data: web::Json<UpdateConstraintRequest>,
) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE
        .update_constraint(&req, constraint_id.0, update_data.into_inner())
        .await
}

pub async fn delete_constraint(
    req: HttpRequest,
    constraint_id: SafeConstraintIdI64,
) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE
        .delete_constraint(&req, constraint_id.0)
        .await
}

pub async fn get_constraint(
    req: HttpRequest,
    url: SafeConstraintUrl,
) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE.get_constraint(&req, &url.0).await
}

pub async fn list_my_progress(req: HttpRequest) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE.list_my_progress(&req).await
}

pub async fn get_progress(req: HttpRequest, url: SafeConstraintUrl) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE.get_progress(&req, &url.0).await
}

pub async fn update_progress(
    req: HttpRequest,
    url: SafeConstraintUrl,
    progress_data: Option<web::Json<UpdateProgressRequest>>,
) -> ActixResult<HttpResponse> {
    // 空请求体 = increment 模式
    let progress_data = progress_data
        .map(web::Json::into_inner)
        .unwrap_or_default();
    CONSTRAINT_SERVICE
        .update_progress(&req, &url.0, progress_data)
        .await
}

pub async fn delete_progress(
    req: HttpRequest,
    url: SafeConstraintUrl,
) -> ActixResult<HttpResponse> {
    CONSTRAINT_SERVICE.delete_progress(&req, &url.0).await
}

// 配置路由
//
// 约束的路由键可以包含斜杠（如 course/login），
// 进度资源必须先于裸 {url} 注册，避免被贪婪段吞掉。
pub fn configure_constraints_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/constraints")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_constraints))
                    .route(
                        // 约束由管理员配置
                        web::post()
                            .to(create_constraint)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/id/{constraint_id}")
                    .route(
                        web::put()
                            .to(update_constraint)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_constraint)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                // 进度上报是核心入口：PUT 带 cur_point 走 max 模式，空体走计数模式
                web::resource("/{url:[a-z0-9_\\-/]+}/progress")
                    .route(web::get().to(get_progress))
                    .route(web::put().to(update_progress))
                    .route(web::delete().to(delete_progress)),
            )
            .service(
                web::resource("/{url:[a-z0-9_\\-/]+}").route(web::get().to(get_constraint)),
            ),
    );

    cfg.service(
        web::scope("/api/v1/progress")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_my_progress))),
    );
}
