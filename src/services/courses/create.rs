use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 创建课程
/// POST /courses
pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    mut course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let role = RequireJWT::extract_user_role(request);
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 教师只能给自己开课；管理员可以指定教师
    if course_data.instructor_id.is_none() {
        course_data.instructor_id = Some(uid);
    }

    // 权限校验
    if let Err(resp) = check_course_create_permission(role, uid, &course_data, &storage).await {
        return Ok(resp);
    }

    // 创建课程
    match storage.create_course(course_data).await {
        Ok(course) => {
            info!("Course {} created successfully by {}", course.course_name, uid);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course, "Course created successfully")))
        }
        Err(e) => Ok(handle_course_create_error(&e.to_string())),
    }
}

/// 权限校验辅助函数
async fn check_course_create_permission(
    role: Option<UserRole>,
    uid: i64,
    course_data: &CreateCourseRequest,
    storage: &Arc<dyn Storage>,
) -> Result<(), HttpResponse> {
    let instructor_id = course_data.instructor_id.unwrap_or(uid);

    match role {
        Some(UserRole::Admin) => match storage.get_user_by_id(instructor_id).await {
            Ok(Some(user)) => {
                if user.role != UserRole::Instructor {
                    return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::CoursePermissionDenied,
                        "Admin can only create courses for instructors",
                    )));
                }
            }
            Ok(None) => {
                return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    "User not found",
                )));
            }
            Err(e) => {
                error!("Failed to get user by id: {}", e);
                return Err(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching user",
                    )),
                );
            }
        },
        Some(UserRole::Instructor) => {
            if instructor_id != uid {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::CoursePermissionDenied,
                    "You do not have permission to create a course for another instructor",
                )));
            }
        }
        _ => {
            return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "You do not have permission to create a course",
            )));
        }
    }
    Ok(())
}

/// 错误响应辅助函数
fn handle_course_create_error(e: &str) -> HttpResponse {
    let msg = format!("Course creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseAlreadyExists,
            "Course name already exists",
        ))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Instructor does not exist",
        ))
    } else {
        HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg))
    }
}
