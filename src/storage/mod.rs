use std::sync::Arc;

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
        entities::{FeedbackSurvey, Question},
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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 通过邀请码获取课程信息
    async fn get_course_by_code(&self, invite_code: &str) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 选课注册管理方法
    // 用户通过邀请码加入课程
    async fn join_course(
        &self,
        user_id: i64,
        course_id: i64,
        role: CourseRole,
    ) -> Result<CourseUser>;
    // 用户退出/移出课程
    async fn leave_course(&self, user_id: i64, course_id: i64) -> Result<bool>;
    // 更新注册信息（角色变更、团队切换在单事务内完成）
    async fn update_course_user(
        &self,
        course_id: i64,
        course_user_id: i64,
        update_data: UpdateCourseUserRequest,
    ) -> Result<Option<CourseUser>>;
    // 列出课程内注册
    async fn list_course_users_with_pagination(
        &self,
        course_id: i64,
        query: CourseUserQuery,
    ) -> Result<CourseUserListResponse>;
    // 获取用户在课程中的注册信息
    async fn get_course_user_by_user_id_and_course_id(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<CourseUser>>;
    // 通过注册 ID 获取注册信息
    async fn get_course_user_by_id(&self, course_user_id: i64) -> Result<Option<CourseUser>>;
    // 给注册加经验值
    async fn add_points_to_course_user(&self, course_user_id: i64, points: f64) -> Result<bool>;

    /// 作业任务管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        course_id: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业信息
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 问卷管理方法
    // 为作业创建问卷
    async fn create_survey(
        &self,
        assignment_id: i64,
        req: CreateSurveyRequest,
    ) -> Result<FeedbackSurvey>;
    // 获取作业的问卷
    async fn get_survey_by_assignment_id(
        &self,
        assignment_id: i64,
    ) -> Result<Option<FeedbackSurvey>>;
    // 获取问卷详情（含分区、题目、选项）
    async fn get_survey_detail(&self, assignment_id: i64) -> Result<Option<SurveyDetailResponse>>;
    // 更新问卷
    async fn update_survey(
        &self,
        survey_id: i64,
        update: UpdateSurveyRequest,
    ) -> Result<Option<FeedbackSurvey>>;
    // 删除问卷
    async fn delete_survey(&self, survey_id: i64) -> Result<bool>;
    // 创建分区
    async fn create_section(
        &self,
        survey_id: i64,
        req: CreateSectionRequest,
    ) -> Result<crate::models::surveys::entities::SurveySection>;
    // 创建题目（选项按提交顺序建关联行）
    async fn create_question(&self, req: CreateQuestionRequest) -> Result<Question>;
    // 更新题目
    async fn update_question(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    // 删除题目
    async fn delete_question(&self, question_id: i64) -> Result<bool>;

    /// 提交物管理方法
    // 创建提交物
    async fn create_artifact(
        &self,
        assignment_id: i64,
        owner: ArtifactOwner,
        file_key: &str,
    ) -> Result<Artifact>;
    // 通过ID获取提交物
    async fn get_artifact_by_id(&self, artifact_id: i64) -> Result<Option<Artifact>>;
    // 列出作业下的提交物
    async fn list_artifacts_by_assignment(&self, assignment_id: i64) -> Result<Vec<Artifact>>;
    // 批量创建互评任务（幂等，已存在的跳过）
    async fn assign_reviews(
        &self,
        artifact_id: i64,
        reviewer_ids: &[i64],
    ) -> Result<AssignReviewsResponse>;

    /// 互评任务管理方法
    // 通过ID获取评审
    async fn get_review_by_id(&self, review_id: i64) -> Result<Option<ArtifactReview>>;
    // 获取评审详情（含已保存答案）
    async fn get_review_detail(&self, review_id: i64) -> Result<Option<ReviewDetailResponse>>;
    // 列出提交物下的评审
    async fn list_reviews_by_artifact(&self, artifact_id: i64) -> Result<Vec<ArtifactReview>>;
    // 列出评审者名下的评审
    async fn list_reviews_by_reviewer(&self, reviewer_id: i64) -> Result<Vec<ArtifactReview>>;
    // 提交评审答案：单事务内全量替换旧答案并落新状态
    async fn submit_review_answers(
        &self,
        review_id: i64,
        status: ReviewStatus,
        answers: &[AnswerPayload],
    ) -> Result<ArtifactReview>;
    // 更新评审状态（重开等）
    async fn update_review_status(
        &self,
        review_id: i64,
        status: ReviewStatus,
    ) -> Result<Option<ArtifactReview>>;
    // 拉取提交物下全部评审答案（带题目上下文，供报表聚合）
    async fn list_answers_by_artifact(&self, artifact_id: i64) -> Result<Vec<AnswerRecord>>;

    /// 约束管理方法
    // 创建约束
    async fn create_constraint(&self, req: CreateConstraintRequest) -> Result<Constraint>;
    // 通过路由键获取约束
    async fn get_constraint_by_url(&self, url: &str) -> Result<Option<Constraint>>;
    // 通过ID获取约束
    async fn get_constraint_by_id(&self, constraint_id: i64) -> Result<Option<Constraint>>;
    // 列出约束
    async fn list_constraints_with_pagination(
        &self,
        query: ConstraintListQuery,
    ) -> Result<ConstraintListResponse>;
    // 更新约束
    async fn update_constraint(
        &self,
        constraint_id: i64,
        update: UpdateConstraintRequest,
    ) -> Result<Option<Constraint>>;
    // 删除约束
    async fn delete_constraint(&self, constraint_id: i64) -> Result<bool>;

    /// 规则管理方法
    // 创建规则
    async fn create_rule(&self, req: CreateRuleRequest) -> Result<Rule>;
    // 通过ID获取规则（含约束）
    async fn get_rule_by_id(&self, rule_id: i64) -> Result<Option<Rule>>;
    // 列出规则（含约束）
    async fn list_rules(&self) -> Result<Vec<Rule>>;
    // 更新规则
    async fn update_rule(&self, rule_id: i64, update: UpdateRuleRequest) -> Result<Option<Rule>>;
    // 删除规则
    async fn delete_rule(&self, rule_id: i64) -> Result<bool>;
    // 规则挂载约束
    async fn attach_constraint_to_rule(&self, rule_id: i64, constraint_id: i64) -> Result<bool>;
    // 规则卸载约束
    async fn detach_constraint_from_rule(&self, rule_id: i64, constraint_id: i64) -> Result<bool>;
    // 统计规则数量（启动时决定是否播种默认规则）
    async fn count_rules(&self) -> Result<u64>;

    /// 进度与发放方法
    // 获取进度
    async fn get_progress(&self, user_id: i64, constraint_id: i64) -> Result<Option<Progress>>;
    // 列出用户全部进度
    async fn list_progress_by_user(&self, user_id: i64) -> Result<Vec<Progress>>;
    // 进度上报 + 规则求值 + 奖励发放，整体在一个事务内
    async fn update_progress_and_evaluate(
        &self,
        user_id: i64,
        constraint_id: i64,
        mode: ProgressMode,
        new_value: f64,
    ) -> Result<ProgressUpdate>;
    // 删除进度
    async fn delete_progress(&self, user_id: i64, constraint_id: i64) -> Result<bool>;

    /// 奖励管理方法
    // 创建奖励
    async fn create_reward(&self, course_id: i64, req: CreateRewardRequest) -> Result<Reward>;
    // 列出课程下的奖励
    async fn list_rewards_by_course(&self, course_id: i64) -> Result<Vec<Reward>>;
    // 获取奖励持有者的用户名列表
    async fn get_reward_owner_usernames(&self, reward_id: i64) -> Result<Vec<String>>;
    // 统计奖励已兑换数量
    async fn count_fulfilled_user_rewards(&self, reward_id: i64) -> Result<i64>;
    // 更新奖励
    async fn update_reward(
        &self,
        reward_id: i64,
        update: UpdateRewardRequest,
    ) -> Result<Option<Reward>>;
    // 删除奖励
    async fn delete_reward(&self, reward_id: i64) -> Result<bool>;
    // 购买奖励：扣库存 + 扣注册经验值在单事务内完成
    async fn purchase_reward(&self, user_id: i64, reward_id: i64) -> Result<UserReward>;
    // 列出用户持有的奖励记录
    async fn list_user_rewards(&self, user_id: i64) -> Result<Vec<UserReward>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
