pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod my_progress;
pub mod progress;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::constraints::requests::{
    ConstraintQueryParams, CreateConstraintRequest, UpdateConstraintRequest,
};
use crate::models::progress::requests::UpdateProgressRequest;
use crate::storage::Storage;

pub struct ConstraintService {
    storage: Option<Arc<dyn Storage>>,
}

impl ConstraintService {
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

    pub async fn create_constraint(
        &self,
        request: &HttpRequest,
        req: CreateConstraintRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_constraint(self, request, req).await
    }

    pub async fn get_constraint(
        &self,
        request: &HttpRequest,
        url: &str,
    ) -> ActixResult<HttpResponse> {
        detail::get_constraint(self, request, url).await
    }

    pub async fn list_constraints(
        &self,
        request: &HttpRequest,
        params: ConstraintQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_constraints(self, request, params).await
    }

    pub async fn update_constraint(
        &self,
        request: &HttpRequest,
        constraint_id: i64,
        req: UpdateConstraintRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_constraint(self, request, constraint_id, req).await
    }

    pub async fn delete_constraint(
        &self,
        request: &HttpRequest,
        constraint_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_constraint(self, request, constraint_id).await
    }

    pub async fn list_my_progress(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my_progress::list_my_progress(self, request).await
    }

    pub async fn get_progress(
        &self,
        request: &HttpRequest,
        url: &str,
    ) -> ActixResult<HttpResponse> {
        progress::get_progress(self, request, url).await
    }

    pub async fn update_progress(
        &self,
        request: &HttpRequest,
        url: &str,
        req: UpdateProgressRequest,
    ) -> ActixResult<HttpResponse> {
        progress::update_progress(self, request, url, req).await
    }

    pub async fn delete_progress(
        &self,
        request: &HttpRequest,
        url: &str,
    ) -> ActixResult<HttpResponse> {
        progress::delete_progress(self, request, url).await
    }
}
