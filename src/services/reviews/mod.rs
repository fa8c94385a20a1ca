pub mod detail;
pub mod list;
pub mod reopen;
pub mod status;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::requests::SubmitReviewRequest;
use crate::storage::Storage;

pub use status::{ReviewTiming, resolve_submission_status};

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
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

    pub async fn get_review(
        &self,
        request: &HttpRequest,
        review_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_review(self, request, review_id).await
    }

    pub async fn list_artifact_reviews(
        &self,
        request: &HttpRequest,
        artifact_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_artifact_reviews(self, request, artifact_id).await
    }

    pub async fn list_my_reviews(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_my_reviews(self, request, course_id).await
    }

    pub async fn submit_review(
        &self,
        request: &HttpRequest,
        review_id: i64,
        req: SubmitReviewRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_review(self, request, review_id, req).await
    }

    pub async fn reopen_review(
        &self,
        request: &HttpRequest,
        review_id: i64,
    ) -> ActixResult<HttpResponse> {
        reopen::reopen_review(self, request, review_id).await
    }
}
