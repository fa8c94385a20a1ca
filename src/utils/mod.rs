pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeArtifactIdI64, SafeAssignmentIdI64, SafeConstraintIdI64, SafeConstraintUrl, SafeCourseIdI64,
    SafeCourseUserIdI64, SafeQuestionIdI64, SafeReviewIdI64, SafeRewardIdI64, SafeRuleIdI64,
    SafeUserIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
