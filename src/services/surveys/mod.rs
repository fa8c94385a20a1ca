pub mod create;
pub mod delete;
pub mod detail;
pub mod questions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::surveys::requests::{
    CreateQuestionRequest, CreateSectionRequest, CreateSurveyRequest, UpdateQuestionRequest,
    UpdateSurveyRequest,
};
use crate::storage::Storage;

pub struct SurveyService {
    storage: Option<Arc<dyn Storage>>,
}

impl SurveyService {
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

    pub async fn create_survey(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: CreateSurveyRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_survey(self, request, assignment_id, req).await
    }

    pub async fn get_survey(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_survey(self, request, assignment_id).await
    }

    pub async fn update_survey(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: UpdateSurveyRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_survey(self, request, assignment_id, req).await
    }

    pub async fn delete_survey(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_survey(self, request, assignment_id).await
    }

    pub async fn create_section(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: CreateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_section(self, request, assignment_id, req).await
    }

    pub async fn create_question(
        &self,
        request: &HttpRequest,
        req: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_question(self, request, req).await
    }

    pub async fn update_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
        req: UpdateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::update_question(self, request, question_id, req).await
    }

    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        question_id: i64,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, request, question_id).await
    }
}
