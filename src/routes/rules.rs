use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::rules::requests::{AttachConstraintRequest, CreateRuleRequest, UpdateRuleRequest};
use crate::models::users::entities::UserRole;
use crate::services::RuleService;
use crate::utils::{SafeConstraintIdI64, SafeRuleIdI64};

// 懒加载的全局 RULE_SERVICE 实例
static RULE_SERVICE: Lazy<RuleService> = Lazy::new(RuleService::new_lazy);

// HTTP处理程序
pub async fn list_rules(req: HttpRequest) -> ActixResult<HttpResponse> {
    RULE_SERVICE.list_rules(&req).await
}

pub async fn create_rule(
    req: HttpRequest,
    rule_data: web::Json<CreateRuleRequest>,
) -> ActixResult<HttpResponse> {
    RULE_SERVICE.create_rule(&req, rule_data.into_inner()).await
}

pub async fn get_rule(req: HttpRequest, rule_id: SafeRuleIdI64) -> ActixResult<HttpResponse> {
    RULE_SERVICE.get_rule(&req, rule_id.0).await
}

pub async fn update_rule(
    req: HttpRequest,
    rule_id: SafeRuleIdI64,
    update_data: web::Json<UpdateRuleRequest>,
) -> ActixResult<HttpResponse> {
    RULE_SERVICE
        .update_rule(&req, rule_id.0, update_data.into_inner())
        .await
}

pub async fn delete_rule(req: HttpRequest, rule_id: SafeRuleIdI64) -> ActixResult<HttpResponse> {
    RULE_SERVICE.delete_rule(&req, rule_id.0).await
}

pub async fn attach_constraint(
    req: HttpRequest,
    rule_id: SafeRuleIdI64,
    attach_data: web::Json<AttachConstraintRequest>,
) -> ActixResult<HttpResponse> {
    RULE_SERVICE
        .attach_constraint(&req, rule_id.0, attach_data.into_inner())
        .await
}

pub async fn detach_constraint(
    req: HttpRequest,
    rule_id: SafeRuleIdI64,
    constraint_id: SafeConstraintIdI64,
) -> ActixResult<HttpResponse> {
    RULE_SERVICE
        .detach_constraint(&req, rule_id.0, constraint_id.0)
        .await
}

// 配置路由
pub fn configure_rules_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rules")
            // 规则配置是管理员操作
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_rules))
                    .route(web::post().to(create_rule)),
            )
            .service(
                web::resource("/{rule_id}")
                    .route(web::get().to(get_rule))
                    .route(web::put().to(update_rule))
                    .route(web::delete().to(delete_rule)),
            )
            .service(web::resource("/{rule_id}/constraints").route(web::post().to(attach_constraint)))
            .service(
                web::resource("/{rule_id}/constraints/{constraint_id}")
                    .route(web::delete().to(detach_constraint)),
            ),
    );
}
