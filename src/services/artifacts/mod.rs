pub mod assign;
pub mod detail;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::artifacts::requests::{AssignReviewsRequest, SubmitArtifactRequest};
use crate::storage::Storage;

pub struct ArtifactService {
    storage: Option<Arc<dyn Storage>>,
}

impl ArtifactService {
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

    pub async fn submit_artifact(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: SubmitArtifactRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_artifact(self, request, assignment_id, req).await
    }

    pub async fn get_artifact(
        &self,
        request: &HttpRequest,
        artifact_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_artifact(self, request, artifact_id).await
    }

    pub async fn list_artifacts(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_artifacts(self, request, assignment_id).await
    }

    pub async fn assign_reviews(
        &self,
        request: &HttpRequest,
        artifact_id: i64,
        req: AssignReviewsRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_reviews(self, request, artifact_id, req).await
    }
}
