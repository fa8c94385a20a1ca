//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod answers;
pub mod artifact_reviews;
pub mod artifacts;
pub mod assignments;
pub mod constraints;
pub mod course_users;
pub mod courses;
pub mod feedback_surveys;
pub mod option_choices;
pub mod progress;
pub mod question_options;
pub mod questions;
pub mod rewards;
pub mod rule_constraints;
pub mod rules;
pub mod survey_sections;
pub mod teams;
pub mod user_rewards;
pub mod users;
