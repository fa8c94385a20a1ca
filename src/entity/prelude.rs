//! 预导入模块，方便使用

pub use super::answers::{ActiveModel as AnswerActiveModel, Entity as Answers, Model as AnswerModel};
pub use super::artifact_reviews::{
    ActiveModel as ArtifactReviewActiveModel, Entity as ArtifactReviews,
    Model as ArtifactReviewModel,
};
pub use super::artifacts::{
    ActiveModel as ArtifactActiveModel, Entity as Artifacts, Model as ArtifactModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::constraints::{
    ActiveModel as ConstraintActiveModel, Entity as Constraints, Model as ConstraintModel,
};
pub use super::course_users::{
    ActiveModel as CourseUserActiveModel, Entity as CourseUsers, Model as CourseUserModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::feedback_surveys::{
    ActiveModel as FeedbackSurveyActiveModel, Entity as FeedbackSurveys,
    Model as FeedbackSurveyModel,
};
pub use super::option_choices::{
    ActiveModel as OptionChoiceActiveModel, Entity as OptionChoices, Model as OptionChoiceModel,
};
pub use super::progress::{
    ActiveModel as ProgressActiveModel, Entity as ProgressEntries, Model as ProgressModel,
};
pub use super::question_options::{
    ActiveModel as QuestionOptionActiveModel, Entity as QuestionOptions,
    Model as QuestionOptionModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::rewards::{ActiveModel as RewardActiveModel, Entity as Rewards, Model as RewardModel};
pub use super::rule_constraints::{
    ActiveModel as RuleConstraintActiveModel, Entity as RuleConstraints,
    Model as RuleConstraintModel,
};
pub use super::rules::{ActiveModel as RuleActiveModel, Entity as Rules, Model as RuleModel};
pub use super::survey_sections::{
    ActiveModel as SurveySectionActiveModel, Entity as SurveySections, Model as SurveySectionModel,
};
pub use super::teams::{ActiveModel as TeamActiveModel, Entity as Teams, Model as TeamModel};
pub use super::user_rewards::{
    ActiveModel as UserRewardActiveModel, Entity as UserRewards, Model as UserRewardModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
