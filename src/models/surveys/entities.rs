use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 题目类型
//
// 线上契约沿用历史全大写拼写，注意不是 SCREAMING_SNAKE_CASE。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub enum QuestionType {
    #[serde(rename = "MULTIPLETEXT")]
    MultipleText,
    #[serde(rename = "FIXEDTEXT")]
    FixedText,
    #[serde(rename = "MULTIPLECHOICE")]
    MultipleChoice,
    #[serde(rename = "SLIDEREVIEW")]
    SlideReview,
    #[serde(rename = "TEXTAREA")]
    Textarea,
    #[serde(rename = "NUMBER")]
    Number,
    #[serde(rename = "SCALEMULTIPLECHOICE")]
    ScaleMultipleChoice,
    #[serde(rename = "MULTIPLESELECT")]
    MultipleSelect,
}

impl QuestionType {
    pub const MULTIPLETEXT: &'static str = "MULTIPLETEXT";
    pub const FIXEDTEXT: &'static str = "FIXEDTEXT";
    pub const MULTIPLECHOICE: &'static str = "MULTIPLECHOICE";
    pub const SLIDEREVIEW: &'static str = "SLIDEREVIEW";
    pub const TEXTAREA: &'static str = "TEXTAREA";
    pub const NUMBER: &'static str = "NUMBER";
    pub const SCALEMULTIPLECHOICE: &'static str = "SCALEMULTIPLECHOICE";
    pub const MULTIPLESELECT: &'static str = "MULTIPLESELECT";

    /// 选择题家族（答案按选项文本计数）
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            QuestionType::MultipleChoice | QuestionType::MultipleSelect
        )
    }

    /// 自由文本家族（进入关键词提取）
    pub fn is_free_text(&self) -> bool {
        matches!(
            self,
            QuestionType::MultipleText | QuestionType::FixedText | QuestionType::Textarea
        )
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            QuestionType::MultipleText => Self::MULTIPLETEXT,
            QuestionType::FixedText => Self::FIXEDTEXT,
            QuestionType::MultipleChoice => Self::MULTIPLECHOICE,
            QuestionType::SlideReview => Self::SLIDEREVIEW,
            QuestionType::Textarea => Self::TEXTAREA,
            QuestionType::Number => Self::NUMBER,
            QuestionType::ScaleMultipleChoice => Self::SCALEMULTIPLECHOICE,
            QuestionType::MultipleSelect => Self::MULTIPLESELECT,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::MULTIPLETEXT => Ok(QuestionType::MultipleText),
            Self::FIXEDTEXT => Ok(QuestionType::FixedText),
            Self::MULTIPLECHOICE => Ok(QuestionType::MultipleChoice),
            Self::SLIDEREVIEW => Ok(QuestionType::SlideReview),
            Self::TEXTAREA => Ok(QuestionType::Textarea),
            Self::NUMBER => Ok(QuestionType::Number),
            Self::SCALEMULTIPLECHOICE => Ok(QuestionType::ScaleMultipleChoice),
            Self::MULTIPLESELECT => Ok(QuestionType::MultipleSelect),
            _ => Err(format!("Invalid question type: {s}")),
        }
    }
}

// 互评问卷实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct FeedbackSurvey {
    pub id: i64,
    pub assignment_id: i64,
    pub template_name: String,
    pub instructions: Option<String>,
    pub date_due: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 问卷分区实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct SurveySection {
    pub id: i64,
    pub survey_id: i64,
    pub title: String,
    pub is_required: bool,
    pub position: i32,
}

// 题目实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/survey.ts")]
pub struct Question {
    pub id: i64,
    pub section_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub number_of_scale: Option<i32>,
    pub number_of_text: Option<i32>,
    pub is_required: bool,
    pub position: i32,
    /// 选项文本，按创建顺序排列；非选择题为空
    pub option_choices: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_round_trip() {
        let all = [
            QuestionType::MultipleText,
            QuestionType::FixedText,
            QuestionType::MultipleChoice,
            QuestionType::SlideReview,
            QuestionType::Textarea,
            QuestionType::Number,
            QuestionType::ScaleMultipleChoice,
            QuestionType::MultipleSelect,
        ];
        for qt in all {
            let parsed: QuestionType = qt.to_string().parse().unwrap();
            assert_eq!(parsed, qt);
        }
    }

    #[test]
    fn test_question_type_uses_legacy_spelling() {
        // 历史拼写没有下划线
        assert_eq!(
            QuestionType::ScaleMultipleChoice.to_string(),
            "SCALEMULTIPLECHOICE"
        );
        assert!("SCALE_MULTIPLE_CHOICE".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_question_type_families() {
        assert!(QuestionType::MultipleChoice.is_choice());
        assert!(QuestionType::MultipleSelect.is_choice());
        assert!(!QuestionType::ScaleMultipleChoice.is_choice());
        assert!(QuestionType::Textarea.is_free_text());
        assert!(!QuestionType::Number.is_free_text());
    }
}
