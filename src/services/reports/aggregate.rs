//! 评审答案聚合
//!
//! 纯函数：只消费预先连接好的 AnswerRecord / QuestionSpec，不触数据库。
//! 聚合口径：
//! - 选择题按选项文本计数，labels 顺序 = 选项创建顺序
//! - 量表题按固定词表计数，词表由 number_of_scale 决定（3/5/7 档）
//! - 数值题按评审者信心加权平均，"Your confidence" 本身不进报表
//! - 幻灯片批注按页号分组
//! - 未显式处理的题型静默跳过

use std::collections::HashMap;

use tracing::warn;

use crate::models::reports::entities::{AnswerRecord, QuestionSpec};
use crate::models::reports::responses::ChoiceAggregate;
use crate::models::surveys::entities::QuestionType;

/// 信心题的题目文本（数值聚合的权重来源，自身不进报表）
pub const CONFIDENCE_QUESTION_TEXT: &str = "Your confidence";

const SCALE_3: &[&str] = &["disagree", "neutral", "agree"];
const SCALE_5: &[&str] = &[
    "strongly disagree",
    "disagree",
    "neutral",
    "agree",
    "strongly agree",
];
const SCALE_7: &[&str] = &[
    "strongly disagree",
    "disagree",
    "weakly disagree",
    "neutral",
    "weakly agree",
    "agree",
    "strongly agree",
];

/// 量表词表
///
/// 未登记的档位返回空词表并打警告，这些答案会被丢弃但不会让报表崩溃。
pub fn scale_labels(number_of_scale: Option<i32>) -> Vec<String> {
    let labels: &[&str] = match number_of_scale {
        Some(3) => SCALE_3,
        Some(5) => SCALE_5,
        Some(7) => SCALE_7,
        other => {
            warn!(
                "Unknown scale size {:?}, answers for this question will be dropped",
                other
            );
            &[]
        }
    };
    labels.iter().map(|s| s.to_string()).collect()
}

/// 选择题聚合：分区标题 -> 题目文本 -> {labels, counts}
pub fn aggregate_multiple_choice(
    questions: &[QuestionSpec],
    answers: &[AnswerRecord],
) -> HashMap<String, HashMap<String, ChoiceAggregate>> {
    let mut sections: HashMap<String, HashMap<String, ChoiceAggregate>> = HashMap::new();

    for question in questions {
        let labels = match question.question_type {
            QuestionType::MultipleChoice | QuestionType::MultipleSelect => {
                question.option_choices.clone()
            }
            QuestionType::ScaleMultipleChoice => scale_labels(question.number_of_scale),
            _ => continue,
        };

        let mut counts = vec![0i64; labels.len()];
        for answer in answers {
            if answer.question_id != question.question_id {
                continue;
            }
            // 选择题按选项文本匹配，量表题按原始答案文本匹配词表；
            // 两种情况下找不到的答案都静默跳过
            if let Some(index) = labels.iter().position(|label| label == &answer.answer_text) {
                counts[index] += 1;
            }
        }

        sections
            .entry(question.section_title.clone())
            .or_default()
            .insert(question.question_text.clone(), ChoiceAggregate { labels, counts });
    }

    sections
}

/// 每个评审的信心权重（"Your confidence" 数值题的答案，缺失按 1 计）
pub fn confidence_by_review(answers: &[AnswerRecord]) -> HashMap<i64, f64> {
    let mut confidences = HashMap::new();
    for answer in answers {
        if answer.question_type == QuestionType::Number
            && answer.question_text == CONFIDENCE_QUESTION_TEXT
            && let Ok(value) = answer.answer_text.trim().parse::<f64>()
        {
            confidences.insert(answer.review_id, value);
        }
    }
    confidences
}

/// 数值题聚合：分区标题 -> 题目文本 -> 信心加权平均
///
/// 总信心为 0 的题目整体跳过（避免除零）。
pub fn aggregate_confidence_weighted_numeric(
    questions: &[QuestionSpec],
    answers: &[AnswerRecord],
) -> HashMap<String, HashMap<String, f64>> {
    let confidences = confidence_by_review(answers);
    let mut sections: HashMap<String, HashMap<String, f64>> = HashMap::new();

    for question in questions {
        if question.question_type != QuestionType::Number
            || question.question_text == CONFIDENCE_QUESTION_TEXT
        {
            continue;
        }

        let mut weighted_sum = 0.0;
        let mut total_confidence = 0.0;
        for answer in answers {
            if answer.question_id != question.question_id {
                continue;
            }
            let Ok(value) = answer.answer_text.trim().parse::<f64>() else {
                continue;
            };
            let confidence = confidences.get(&answer.review_id).copied().unwrap_or(1.0);
            weighted_sum += value * confidence;
            total_confidence += confidence;
        }

        if total_confidence == 0.0 {
            continue;
        }

        sections
            .entry(question.section_title.clone())
            .or_default()
            .insert(question.question_text.clone(), weighted_sum / total_confidence);
    }

    sections
}

/// 幻灯片批注聚合：分区标题 -> 题目文本 -> 页号 -> 批注列表
pub fn aggregate_slide_feedback(
    questions: &[QuestionSpec],
    answers: &[AnswerRecord],
) -> HashMap<String, HashMap<String, HashMap<String, Vec<String>>>> {
    let mut sections: HashMap<String, HashMap<String, HashMap<String, Vec<String>>>> =
        HashMap::new();

    for question in questions {
        if question.question_type != QuestionType::SlideReview {
            continue;
        }

        let mut pages: HashMap<String, Vec<String>> = HashMap::new();
        for answer in answers {
            if answer.question_id != question.question_id {
                continue;
            }
            let Some(page) = answer.page else {
                continue;
            };
            pages
                .entry(page.to_string())
                .or_default()
                .push(answer.answer_text.clone());
        }

        sections
            .entry(question.section_title.clone())
            .or_default()
            .insert(question.question_text.clone(), pages);
    }

    sections
}

/// 自由文本答案（题目文本维度的列表聚合）
pub fn aggregate_free_text(
    questions: &[QuestionSpec],
    answers: &[AnswerRecord],
) -> HashMap<String, HashMap<String, Vec<String>>> {
    let mut sections: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();

    for question in questions {
        if !question.question_type.is_free_text() {
            continue;
        }

        let texts: Vec<String> = answers
            .iter()
            .filter(|a| a.question_id == question.question_id)
            .filter(|a| !a.answer_text.trim().is_empty())
            .map(|a| a.answer_text.clone())
            .collect();

        sections
            .entry(question.section_title.clone())
            .or_default()
            .insert(question.question_text.clone(), texts);
    }

    sections
}

/// 收集进入关键词提取的文本
///
/// 口径：排除选择题家族（含量表题）和数值题，其余答案原文保留。
pub fn collect_free_text(answers: &[AnswerRecord]) -> Vec<String> {
    answers
        .iter()
        .filter(|a| {
            !a.question_type.is_choice()
                && a.question_type != QuestionType::ScaleMultipleChoice
                && a.question_type != QuestionType::Number
        })
        .filter(|a| !a.answer_text.trim().is_empty())
        .map(|a| a.answer_text.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(
        id: i64,
        section: &str,
        text: &str,
        question_type: QuestionType,
        number_of_scale: Option<i32>,
        options: &[&str],
    ) -> QuestionSpec {
        QuestionSpec {
            question_id: id,
            section_title: section.to_string(),
            question_text: text.to_string(),
            question_type,
            number_of_scale,
            option_choices: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn answer(
        review_id: i64,
        question: &QuestionSpec,
        answer_text: &str,
        page: Option<i32>,
    ) -> AnswerRecord {
        AnswerRecord {
            review_id,
            question_id: question.question_id,
            section_title: question.section_title.clone(),
            question_text: question.question_text.clone(),
            question_type: question.question_type,
            number_of_scale: question.number_of_scale,
            answer_text: answer_text.to_string(),
            page,
        }
    }

    #[test]
    fn test_choice_labels_keep_creation_order() {
        // 选项按创建顺序 Red/Green/Blue，答案 Blue/Red/Blue
        let q = question(
            1,
            "Design",
            "Pick a color",
            QuestionType::MultipleChoice,
            None,
            &["Red", "Green", "Blue"],
        );
        let answers = vec![
            answer(1, &q, "Blue", None),
            answer(2, &q, "Red", None),
            answer(3, &q, "Blue", None),
        ];

        let result = aggregate_multiple_choice(&[q], &answers);
        let aggregate = &result["Design"]["Pick a color"];
        assert_eq!(aggregate.labels, vec!["Red", "Green", "Blue"]);
        assert_eq!(aggregate.counts, vec![1, 0, 2]);
    }

    #[test]
    fn test_scale_answer_counts_at_vocabulary_index() {
        // 5 档量表，"agree" 落在下标 3
        let q = question(
            1,
            "Quality",
            "The work is thorough",
            QuestionType::ScaleMultipleChoice,
            Some(5),
            &[],
        );
        let answers = vec![answer(1, &q, "agree", None)];

        let result = aggregate_multiple_choice(&[q], &answers);
        let aggregate = &result["Quality"]["The work is thorough"];
        assert_eq!(
            aggregate.labels,
            vec![
                "strongly disagree",
                "disagree",
                "neutral",
                "agree",
                "strongly agree"
            ]
        );
        assert_eq!(aggregate.counts, vec![0, 0, 0, 1, 0]);
    }

    #[test]
    fn test_unknown_scale_size_yields_empty_labels() {
        let q = question(
            1,
            "Quality",
            "Oddly scaled",
            QuestionType::ScaleMultipleChoice,
            Some(4),
            &[],
        );
        let answers = vec![answer(1, &q, "agree", None)];

        // 不崩溃，答案被丢弃
        let result = aggregate_multiple_choice(&[q], &answers);
        let aggregate = &result["Quality"]["Oddly scaled"];
        assert!(aggregate.labels.is_empty());
        assert!(aggregate.counts.is_empty());
    }

    #[test]
    fn test_unmatched_choice_answer_is_skipped() {
        let q = question(
            1,
            "Design",
            "Pick a color",
            QuestionType::MultipleChoice,
            None,
            &["Red", "Green"],
        );
        let answers = vec![answer(1, &q, "Purple", None), answer(2, &q, "Red", None)];

        let result = aggregate_multiple_choice(&[q], &answers);
        assert_eq!(result["Design"]["Pick a color"].counts, vec![1, 0]);
    }

    #[test]
    fn test_confidence_weighted_average() {
        // 信心 2 和 3 的评审分别打 80 和 90 -> (80*2 + 90*3) / 5 = 86
        let score = question(1, "Grades", "Overall score", QuestionType::Number, None, &[]);
        let confidence = question(
            2,
            "Grades",
            CONFIDENCE_QUESTION_TEXT,
            QuestionType::Number,
            None,
            &[],
        );
        let answers = vec![
            answer(1, &score, "80", None),
            answer(1, &confidence, "2", None),
            answer(2, &score, "90", None),
            answer(2, &confidence, "3", None),
        ];

        let result = aggregate_confidence_weighted_numeric(&[score, confidence], &answers);
        assert_eq!(result["Grades"]["Overall score"], 86.0);
        // 信心题本身不进报表
        assert!(!result["Grades"].contains_key(CONFIDENCE_QUESTION_TEXT));
    }

    #[test]
    fn test_missing_confidence_defaults_to_one() {
        let score = question(1, "Grades", "Overall score", QuestionType::Number, None, &[]);
        let answers = vec![answer(1, &score, "80", None), answer(2, &score, "90", None)];

        let result = aggregate_confidence_weighted_numeric(&[score], &answers);
        assert_eq!(result["Grades"]["Overall score"], 85.0);
    }

    #[test]
    fn test_zero_total_confidence_skips_question() {
        let score = question(1, "Grades", "Overall score", QuestionType::Number, None, &[]);
        let confidence = question(
            2,
            "Grades",
            CONFIDENCE_QUESTION_TEXT,
            QuestionType::Number,
            None,
            &[],
        );
        let answers = vec![
            answer(1, &score, "80", None),
            answer(1, &confidence, "0", None),
        ];

        let result = aggregate_confidence_weighted_numeric(&[score, confidence], &answers);
        assert!(result.is_empty());
    }

    #[test]
    fn test_slide_feedback_grouped_by_page() {
        let q = question(
            1,
            "Slides",
            "Slide comments",
            QuestionType::SlideReview,
            None,
            &[],
        );
        let answers = vec![
            answer(1, &q, "typo here", Some(2)),
            answer(2, &q, "nice chart", Some(2)),
            answer(1, &q, "unclear", Some(5)),
        ];

        let result = aggregate_slide_feedback(&[q], &answers);
        let pages = &result["Slides"]["Slide comments"];
        assert_eq!(pages["2"], vec!["typo here", "nice chart"]);
        assert_eq!(pages["5"], vec!["unclear"]);
        assert!(!pages.contains_key("1"));
    }

    #[test]
    fn test_free_text_policy_excludes_choice_and_number() {
        let essay = question(1, "Text", "Comments", QuestionType::Textarea, None, &[]);
        let choice = question(
            2,
            "Design",
            "Pick",
            QuestionType::MultipleChoice,
            None,
            &["A"],
        );
        let number = question(3, "Grades", "Score", QuestionType::Number, None, &[]);
        let answers = vec![
            answer(1, &essay, "well organized", None),
            answer(1, &choice, "A", None),
            answer(1, &number, "95", None),
            answer(2, &essay, "  ", None),
        ];

        let texts = collect_free_text(&answers);
        assert_eq!(texts, vec!["well organized"]);
    }
}
