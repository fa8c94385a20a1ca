pub mod delete;
pub mod join;
pub mod list;
pub mod points;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::course_users::requests::{
    AddPointsRequest, CourseUserQueryParams, JoinCourseRequest, UpdateCourseUserRequest,
};
use crate::storage::Storage;

pub struct CourseUserService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseUserService {
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

    pub async fn join_course(
        &self,
        request: &HttpRequest,
        req: JoinCourseRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_course(self, request, req).await
    }

    pub async fn list_course_users(
        &self,
        request: &HttpRequest,
        course_id: i64,
        params: CourseUserQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_course_users(self, request, course_id, params).await
    }

    pub async fn update_course_user(
        &self,
        request: &HttpRequest,
        course_id: i64,
        course_user_id: i64,
        req: UpdateCourseUserRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course_user(self, request, course_id, course_user_id, req).await
    }

    pub async fn add_points(
        &self,
        request: &HttpRequest,
        course_id: i64,
        course_user_id: i64,
        req: AddPointsRequest,
    ) -> ActixResult<HttpResponse> {
        points::add_points(self, request, course_id, course_user_id, req).await
    }

    pub async fn delete_course_user(
        &self,
        request: &HttpRequest,
        course_id: i64,
        course_user_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course_user(self, request, course_id, course_user_id).await
    }
}
