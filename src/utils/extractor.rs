//! 路径参数安全提取器
//!
//! 在进入处理函数之前完成解析和基本校验，
//! 非法参数直接以统一错误envelope拒绝，不会触发 500。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(name: &str) -> actix_web::Error {
    InternalError::from_response(
        "invalid path parameter",
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Invalid path parameter: {name}"),
        )),
    )
    .into()
}

fn extract_positive_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    match req
        .match_info()
        .get(name)
        .and_then(|v| v.parse::<i64>().ok())
    {
        Some(v) if v > 0 => Ok(v),
        _ => Err(bad_request(name)),
    }
}

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    ready(extract_positive_i64(req, $param).map($name))
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeUserIdI64("user_id"),
    SafeCourseIdI64("course_id"),
    SafeCourseUserIdI64("course_user_id"),
    SafeAssignmentIdI64("assignment_id"),
    SafeArtifactIdI64("artifact_id"),
    SafeReviewIdI64("review_id"),
    SafeQuestionIdI64("question_id"),
    SafeConstraintIdI64("constraint_id"),
    SafeRuleIdI64("rule_id"),
    SafeRewardIdI64("reward_id"),
}

/// 约束 url 路径段（进度上报的路由键）
#[derive(Debug, Clone)]
pub struct SafeConstraintUrl(pub String);

impl FromRequest for SafeConstraintUrl {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("url") {
            Some(value) if crate::utils::validate::validate_constraint_url(value).is_ok() => {
                Ok(SafeConstraintUrl(value.to_string()))
            }
            _ => Err(bad_request("url")),
        };
        ready(result)
    }
}
