pub mod artifacts;
pub mod assignments;
pub mod constraints;
pub mod course_users;
pub mod courses;
pub mod reports;
pub mod reviews;
pub mod rewards;
pub mod rules;
pub mod surveys;
pub mod users;

pub use artifacts::ArtifactService;
pub use assignments::AssignmentService;
pub use constraints::ConstraintService;
pub use course_users::CourseUserService;
pub use courses::CourseService;
pub use reports::ReportService;
pub use reviews::ReviewService;
pub use rewards::RewardService;
pub use rules::RuleService;
pub use surveys::SurveyService;
pub use users::UserService;
