//! 评审提交时点结算
//!
//! 截止判定用美西时间（课程运营所在时区）：
//! 过期提交记 LATE，按时提交记 COMPLETED；
//! 作业没有配问卷时返回独立的 SurveyNotConfigured 结果，调用方必须分支处理，
//! 这不是错误也不允许 panic。

use chrono::{DateTime, Utc};
use chrono_tz::US::Pacific;

use crate::models::reviews::entities::ReviewStatus;
use crate::models::surveys::entities::FeedbackSurvey;

/// 提交时点结算结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTiming {
    /// 按时提交
    Completed,
    /// 过期提交
    Late,
    /// 作业没有配置问卷，无法结算
    SurveyNotConfigured,
}

impl ReviewTiming {
    /// 结算出的评审状态；未配置问卷时没有状态可落
    pub fn status(&self) -> Option<ReviewStatus> {
        match self {
            ReviewTiming::Completed => Some(ReviewStatus::Completed),
            ReviewTiming::Late => Some(ReviewStatus::Late),
            ReviewTiming::SurveyNotConfigured => None,
        }
    }
}

/// 按问卷截止时间结算一次提交
pub fn resolve_submission_status(
    survey: Option<&FeedbackSurvey>,
    submitted_at: DateTime<Utc>,
) -> ReviewTiming {
    let Some(survey) = survey else {
        return ReviewTiming::SurveyNotConfigured;
    };

    let Some(date_due) = survey.date_due else {
        // 没设截止时间的问卷永远按时
        return ReviewTiming::Completed;
    };

    // 统一换算到美西时间再比较
    let due_pacific = date_due.with_timezone(&Pacific);
    let submitted_pacific = submitted_at.with_timezone(&Pacific);

    if submitted_pacific > due_pacific {
        ReviewTiming::Late
    } else {
        ReviewTiming::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn survey_due_at(date_due: Option<DateTime<Utc>>) -> FeedbackSurvey {
        FeedbackSurvey {
            id: 1,
            assignment_id: 1,
            template_name: "Default template".to_string(),
            instructions: None,
            date_due,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_submission_before_due_is_completed() {
        let due = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();
        let submitted = Utc.with_ymd_and_hms(2026, 3, 9, 8, 0, 0).unwrap();
        let survey = survey_due_at(Some(due));

        assert_eq!(
            resolve_submission_status(Some(&survey), submitted),
            ReviewTiming::Completed
        );
    }

    #[test]
    fn test_submission_after_due_is_late() {
        let due = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();
        let submitted = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 1).unwrap();
        let survey = survey_due_at(Some(due));

        assert_eq!(
            resolve_submission_status(Some(&survey), submitted),
            ReviewTiming::Late
        );
    }

    #[test]
    fn test_submission_exactly_at_due_is_completed() {
        let due = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();
        let survey = survey_due_at(Some(due));

        assert_eq!(
            resolve_submission_status(Some(&survey), due),
            ReviewTiming::Completed
        );
    }

    #[test]
    fn test_missing_survey_is_a_sentinel_not_a_panic() {
        let timing = resolve_submission_status(None, Utc::now());
        assert_eq!(timing, ReviewTiming::SurveyNotConfigured);
        assert_eq!(timing.status(), None);
    }

    #[test]
    fn test_survey_without_due_date_is_always_on_time() {
        let survey = survey_due_at(None);
        assert_eq!(
            resolve_submission_status(Some(&survey), Utc::now()),
            ReviewTiming::Completed
        );
    }

    #[test]
    fn test_timing_maps_to_review_status() {
        assert_eq!(
            ReviewTiming::Completed.status(),
            Some(ReviewStatus::Completed)
        );
        assert_eq!(ReviewTiming::Late.status(), Some(ReviewStatus::Late));
    }
}
