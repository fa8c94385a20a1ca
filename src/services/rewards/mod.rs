pub mod create;
pub mod delete;
pub mod list;
pub mod mine;
pub mod purchase;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rewards::requests::{CreateRewardRequest, UpdateRewardRequest};
use crate::storage::Storage;

pub struct RewardService {
    storage: Option<Arc<dyn Storage>>,
}

impl RewardService {
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

    pub async fn create_reward(
        &self,
        request: &HttpRequest,
        course_id: i64,
        req: CreateRewardRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_reward(self, request, course_id, req).await
    }

    pub async fn list_rewards(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_rewards(self, request, course_id).await
    }

    pub async fn update_reward(
        &self,
        request: &HttpRequest,
        reward_id: i64,
        req: UpdateRewardRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_reward(self, request, reward_id, req).await
    }

    pub async fn delete_reward(
        &self,
        request: &HttpRequest,
        reward_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_reward(self, request, reward_id).await
    }

    pub async fn list_my_rewards(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        mine::list_my_rewards(self, request).await
    }

    pub async fn purchase_reward(
        &self,
        request: &HttpRequest,
        reward_id: i64,
    ) -> ActixResult<HttpResponse> {
        purchase::purchase_reward(self, request, reward_id).await
    }
}
