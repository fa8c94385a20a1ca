//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod artifacts;
mod assignments;
mod constraints;
mod course_users;
mod courses;
mod progress;
mod reviews;
mod rewards;
mod rules;
mod surveys;
mod users;

use crate::config::AppConfig;
use crate::errors::{GamiSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GamiSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| GamiSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| GamiSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(GamiSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    artifacts::{
        entities::{Artifact, ArtifactOwner},
        responses::AssignReviewsResponse,
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    constraints::{
        entities::Constraint,
        requests::{ConstraintListQuery, CreateConstraintRequest, UpdateConstraintRequest},
        responses::ConstraintListResponse,
    },
    course_users::{
        entities::{CourseRole, CourseUser},
        requests::{CourseUserQuery, UpdateCourseUserRequest},
        responses::CourseUserListResponse,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    progress::entities::{Progress, ProgressMode, ProgressUpdate},
    reports::entities::AnswerRecord,
    reviews::{
        entities::{ArtifactReview, ReviewStatus},
        requests::AnswerPayload,
        responses::ReviewDetailResponse,
    },
    rewards::{
        entities::{Reward, UserReward},
        requests::{CreateRewardRequest, UpdateRewardRequest},
    },
    rules::{
        entities::Rule,
        requests::{CreateRuleRequest, UpdateRuleRequest},
    },
    surveys::{
        entities::{FeedbackSurvey, Question, SurveySection},
        requests::{
            CreateQuestionRequest, CreateSectionRequest, CreateSurveyRequest, UpdateQuestionRequest,
            UpdateSurveyRequest,
        },
        responses::SurveyDetailResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_course_by_code(&self, invite_code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(invite_code).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // 选课注册模块
    async fn join_course(
        &self,
        user_id: i64,
        course_id: i64,
        role: CourseRole,
    ) -> Result<CourseUser> {
        self.join_course_impl(user_id, course_id, role).await
    }

    async fn leave_course(&self, user_id: i64, course_id: i64) -> Result<bool> {
        self.leave_course_impl(user_id, course_id).await
    }

    async fn update_course_user(
        &self,
        course_id: i64,
        course_user_id: i64,
        update_data: UpdateCourseUserRequest,
    ) -> Result<Option<CourseUser>> {
        self.update_course_user_impl(course_id, course_user_id, update_data)
            .await
    }

    async fn list_course_users_with_pagination(
        &self,
        course_id: i64,
        query: CourseUserQuery,
    ) -> Result<CourseUserListResponse> {
        self.list_course_users_with_pagination_impl(course_id, query)
            .await
    }

    async fn get_course_user_by_user_id_and_course_id(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<CourseUser>> {
        self.get_course_user_by_user_id_and_course_id_impl(user_id, course_id)
            .await
    }

    async fn get_course_user_by_id(&self, course_user_id: i64) -> Result<Option<CourseUser>> {
        self.get_course_user_by_id_impl(course_user_id).await
    }

    async fn add_points_to_course_user(&self, course_user_id: i64, points: f64) -> Result<bool> {
        self.add_points_to_course_user_impl(course_user_id, points)
            .await
    }

    // 作业任务模块
    async fn create_assignment(
        &self,
        course_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(course_id, req).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 问卷模块
    async fn create_survey(
        &self,
        assignment_id: i64,
        req: CreateSurveyRequest,
    ) -> Result<FeedbackSurvey> {
        self.create_survey_impl(assignment_id, req).await
    }

    async fn get_survey_by_assignment_id(
        &self,
        assignment_id: i64,
    ) -> Result<Option<FeedbackSurvey>> {
        self.get_survey_by_assignment_id_impl(assignment_id).await
    }

    async fn get_survey_detail(&self, assignment_id: i64) -> Result<Option<SurveyDetailResponse>> {
        self.get_survey_detail_impl(assignment_id).await
    }

    async fn update_survey(
        &self,
        survey_id: i64,
        update: UpdateSurveyRequest,
    ) -> Result<Option<FeedbackSurvey>> {
        self.update_survey_impl(survey_id, update).await
    }

    async fn delete_survey(&self, survey_id: i64) -> Result<bool> {
        self.delete_survey_impl(survey_id).await
    }

    async fn create_section(
        &self,
        survey_id: i64,
        req: CreateSectionRequest,
    ) -> Result<SurveySection> {
        self.create_section_impl(survey_id, req).await
    }

    async fn create_question(&self, req: CreateQuestionRequest) -> Result<Question> {
        self.create_question_impl(req).await
    }

    async fn update_question(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(question_id, update).await
    }

    async fn delete_question(&self, question_id: i64) -> Result<bool> {
        self.delete_question_impl(question_id).await
    }

    // 提交物模块
    async fn create_artifact(
        &self,
        assignment_id: i64,
        owner: ArtifactOwner,
        file_key: &str,
    ) -> Result<Artifact> {
        self.create_artifact_impl(assignment_id, owner, file_key)
            .await
    }

    async fn get_artifact_by_id(&self, artifact_id: i64) -> Result<Option<Artifact>> {
        self.get_artifact_by_id_impl(artifact_id).await
    }

    async fn list_artifacts_by_assignment(&self, assignment_id: i64) -> Result<Vec<Artifact>> {
        self.list_artifacts_by_assignment_impl(assignment_id).await
    }

    async fn assign_reviews(
        &self,
        artifact_id: i64,
        reviewer_ids: &[i64],
    ) -> Result<AssignReviewsResponse> {
        self.assign_reviews_impl(artifact_id, reviewer_ids).await
    }

    // 互评任务模块
    async fn get_review_by_id(&self, review_id: i64) -> Result<Option<ArtifactReview>> {
        self.get_review_by_id_impl(review_id).await
    }

    async fn get_review_detail(&self, review_id: i64) -> Result<Option<ReviewDetailResponse>> {
        self.get_review_detail_impl(review_id).await
    }

    async fn list_reviews_by_artifact(&self, artifact_id: i64) -> Result<Vec<ArtifactReview>> {
        self.list_reviews_by_artifact_impl(artifact_id).await
    }

    async fn list_reviews_by_reviewer(&self, reviewer_id: i64) -> Result<Vec<ArtifactReview>> {
        self.list_reviews_by_reviewer_impl(reviewer_id).await
    }

    async fn submit_review_answers(
        &self,
        review_id: i64,
        status: ReviewStatus,
        answers: &[AnswerPayload],
    ) -> Result<ArtifactReview> {
        self.submit_review_answers_impl(review_id, status, answers)
            .await
    }

    async fn update_review_status(
        &self,
        review_id: i64,
        status: ReviewStatus,
    ) -> Result<Option<ArtifactReview>> {
        self.update_review_status_impl(review_id, status).await
    }

    async fn list_answers_by_artifact(&self, artifact_id: i64) -> Result<Vec<AnswerRecord>> {
        self.list_answers_by_artifact_impl(artifact_id).await
    }

    // 约束模块
    async fn create_constraint(&self, req: CreateConstraintRequest) -> Result<Constraint> {
        self.create_constraint_impl(req).await
    }

    async fn get_constraint_by_url(&self, url: &str) -> Result<Option<Constraint>> {
        self.get_constraint_by_url_impl(url).await
    }

    async fn get_constraint_by_id(&self, constraint_id: i64) -> Result<Option<Constraint>> {
        self.get_constraint_by_id_impl(constraint_id).await
    }

    async fn list_constraints_with_pagination(
        &self,
        query: ConstraintListQuery,
    ) -> Result<ConstraintListResponse> {
        self.list_constraints_with_pagination_impl(query).await
    }

    async fn update_constraint(
        &self,
        constraint_id: i64,
        update: UpdateConstraintRequest,
    ) -> Result<Option<Constraint>> {
        self.update_constraint_impl(constraint_id, update).await
    }

    async fn delete_constraint(&self, constraint_id: i64) -> Result<bool> {
        self.delete_constraint_impl(constraint_id).await
    }

    // 规则模块
    async fn create_rule(&self, req: CreateRuleRequest) -> Result<Rule> {
        self.create_rule_impl(req).await
    }

    async fn get_rule_by_id(&self, rule_id: i64) -> Result<Option<Rule>> {
        self.get_rule_by_id_impl(rule_id).await
    }

    async fn list_rules(&self) -> Result<Vec<Rule>> {
        self.list_rules_impl().await
    }

    async fn update_rule(&self, rule_id: i64, update: UpdateRuleRequest) -> Result<Option<Rule>> {
        self.update_rule_impl(rule_id, update).await
    }

    async fn delete_rule(&self, rule_id: i64) -> Result<bool> {
        self.delete_rule_impl(rule_id).await
    }

    async fn attach_constraint_to_rule(&self, rule_id: i64, constraint_id: i64) -> Result<bool> {
        self.attach_constraint_to_rule_impl(rule_id, constraint_id)
            .await
    }

    async fn detach_constraint_from_rule(&self, rule_id: i64, constraint_id: i64) -> Result<bool> {
        self.detach_constraint_from_rule_impl(rule_id, constraint_id)
            .await
    }

    async fn count_rules(&self) -> Result<u64> {
        self.count_rules_impl().await
    }

    // 进度与发放模块
    async fn get_progress(&self, user_id: i64, constraint_id: i64) -> Result<Option<Progress>> {
        self.get_progress_impl(user_id, constraint_id).await
    }

    async fn list_progress_by_user(&self, user_id: i64) -> Result<Vec<Progress>> {
        self.list_progress_by_user_impl(user_id).await
    }

    async fn update_progress_and_evaluate(
        &self,
        user_id: i64,
        constraint_id: i64,
        mode: ProgressMode,
        new_value: f64,
    ) -> Result<ProgressUpdate> {
        self.update_progress_and_evaluate_impl(user_id, constraint_id, mode, new_value)
            .await
    }

    async fn delete_progress(&self, user_id: i64, constraint_id: i64) -> Result<bool> {
        self.delete_progress_impl(user_id, constraint_id).await
    }

    // 奖励模块
    async fn create_reward(&self, course_id: i64, req: CreateRewardRequest) -> Result<Reward> {
        self.create_reward_impl(course_id, req).await
    }

    async fn list_rewards_by_course(&self, course_id: i64) -> Result<Vec<Reward>> {
        self.list_rewards_by_course_impl(course_id).await
    }

    async fn get_reward_owner_usernames(&self, reward_id: i64) -> Result<Vec<String>> {
        self.get_reward_owner_usernames_impl(reward_id).await
    }

    async fn count_fulfilled_user_rewards(&self, reward_id: i64) -> Result<i64> {
        self.count_fulfilled_user_rewards_impl(reward_id).await
    }

    async fn update_reward(
        &self,
        reward_id: i64,
        update: UpdateRewardRequest,
    ) -> Result<Option<Reward>> {
        self.update_reward_impl(reward_id, update).await
    }

    async fn delete_reward(&self, reward_id: i64) -> Result<bool> {
        self.delete_reward_impl(reward_id).await
    }

    async fn purchase_reward(&self, user_id: i64, reward_id: i64) -> Result<UserReward> {
        self.purchase_reward_impl(user_id, reward_id).await
    }

    async fn list_user_rewards(&self, user_id: i64) -> Result<Vec<UserReward>> {
        self.list_user_rewards_impl(user_id).await
    }
}
