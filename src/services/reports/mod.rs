pub mod aggregate;
pub mod generate;
pub mod keywords;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub use keywords::{FrequencyKeywordExtractor, KeywordExtractor};

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub async fn get_artifact_report(
        &self,
        request: &HttpRequest,
        artifact_id: i64,
    ) -> ActixResult<HttpResponse> {
        generate::get_artifact_report(self, request, artifact_id).await
    }

    pub async fn get_artifact_keywords(
        &self,
        request: &HttpRequest,
        artifact_id: i64,
    ) -> ActixResult<HttpResponse> {
        keywords::get_artifact_keywords(self, request, artifact_id).await
    }
}
