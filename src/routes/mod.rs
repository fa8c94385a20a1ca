pub mod artifacts;

pub mod assignments;

pub mod constraints;

pub mod course_users;

pub mod courses;

pub mod reviews;

pub mod rewards;

pub mod rules;

pub mod surveys;

pub mod users;

pub use artifacts::configure_artifacts_routes;
pub use assignments::configure_assignments_routes;
pub use constraints::configure_constraints_routes;
pub use course_users::configure_course_users_routes;
pub use courses::configure_courses_routes;
pub use reviews::configure_reviews_routes;
pub use rewards::configure_rewards_routes;
pub use rules::configure_rules_routes;
pub use surveys::configure_surveys_routes;
pub use users::configure_user_routes;
