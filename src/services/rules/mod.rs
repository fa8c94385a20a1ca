pub mod constraints;
pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rules::requests::{AttachConstraintRequest, CreateRuleRequest, UpdateRuleRequest};
use crate::storage::Storage;

pub struct RuleService {
    storage: Option<Arc<dyn Storage>>,
}

impl RuleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_rule(
        &self,
        request: &HttpRequest,
        req: CreateRuleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_rule(self, request, req).await
    }

    pub async fn get_rule(&self, request: &HttpRequest, rule_id: i64) -> ActixResult<HttpResponse> {
        detail::get_rule(self, request, rule_id).await
    }

    pub async fn list_rules(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_rules(self, request).await
    }

    pub async fn update_rule(
        &self,
        request: &HttpRequest,
        rule_id: i64,
        req: UpdateRuleRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_rule(self, request, rule_id, req).await
    }

    pub async fn delete_rule(
        &self,
        request: &HttpRequest,
        rule_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_rule(self, request, rule_id).await
    }

    pub async fn attach_constraint(
        &self,
        request: &HttpRequest,
        rule_id: i64,
        req: AttachConstraintRequest,
    ) -> ActixResult<HttpResponse> {
        constraints::attach_constraint(self, request, rule_id, req).await
    }

    pub async fn detach_constraint(
        &self,
        request: &HttpRequest,
        rule_id: i64,
        constraint_id: i64,
    ) -> ActixResult<HttpResponse> {
        constraints::detach_constraint(self, request, rule_id, constraint_id).await
    }
}
