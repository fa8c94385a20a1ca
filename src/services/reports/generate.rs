//! 提交物报表生成
//!
//! 取数走存储层的扁平连接，聚合全部交给 aggregate 里的纯函数，
//! 最后拼成 分区 -> 题目 -> {question_type, answers} 的嵌套结构。

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;
use tracing::error;

use super::ReportService;
use super::aggregate;
use crate::models::reports::entities::QuestionSpec;
use crate::models::reports::responses::{ArtifactReportResponse, QuestionReport};
use crate::models::surveys::entities::QuestionType;
use crate::models::surveys::responses::SurveyDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 提交物报表
/// GET /artifacts/{id}/report
pub async fn get_artifact_report(
    service: &ReportService,
    request: &HttpRequest,
    artifact_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 提交物必须存在
    let artifact = match storage.get_artifact_by_id(artifact_id).await {
        Ok(Some(artifact)) => artifact,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ArtifactNotFound,
                "Artifact not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交物失败: {e}"),
                )),
            );
        }
    };

    // 问卷未配置时报表无从谈起
    let survey_detail = match storage.get_survey_detail(artifact.assignment_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SurveyNotConfigured,
                "No feedback survey configured for this assignment",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询问卷失败: {e}"),
                )),
            );
        }
    };

    let answers = match storage.list_answers_by_artifact(artifact_id).await {
        Ok(answers) => answers,
        Err(e) => {
            // 缺失的题目/选项关联按 NotFound 处理，整份报表中止，不出部分结果
            error!("Failed to load answers for artifact {}: {}", artifact_id, e);
            return Ok(match e {
                crate::errors::GamiSystemError::NotFound(_) => HttpResponse::NotFound().json(
                    ApiResponse::error_empty(ErrorCode::NotFound, e.to_string()),
                ),
                _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询答案失败: {e}"),
                )),
            });
        }
    };

    let questions = question_specs(&survey_detail);
    let report = assemble_report(&questions, &answers);

    Ok(HttpResponse::Ok().json(ApiResponse::success(report, "查询成功")))
}

/// 问卷详情展开成聚合用的题目描述
pub(crate) fn question_specs(survey_detail: &SurveyDetailResponse) -> Vec<QuestionSpec> {
    survey_detail
        .sections
        .iter()
        .flat_map(|section_detail| {
            let section_title = section_detail.section.title.clone();
            section_detail.questions.iter().map(move |question| QuestionSpec {
                question_id: question.id,
                section_title: section_title.clone(),
                question_text: question.text.clone(),
                question_type: question.question_type,
                number_of_scale: question.number_of_scale,
                option_choices: question.option_choices.clone(),
            })
        })
        .collect()
}

/// 把各路聚合结果拼成响应结构
pub(crate) fn assemble_report(
    questions: &[QuestionSpec],
    answers: &[crate::models::reports::entities::AnswerRecord],
) -> ArtifactReportResponse {
    let choices = aggregate::aggregate_multiple_choice(questions, answers);
    let numbers = aggregate::aggregate_confidence_weighted_numeric(questions, answers);
    let slides = aggregate::aggregate_slide_feedback(questions, answers);
    let texts = aggregate::aggregate_free_text(questions, answers);

    let mut sections: HashMap<String, HashMap<String, QuestionReport>> = HashMap::new();

    for question in questions {
        let payload = match question.question_type {
            QuestionType::MultipleChoice
            | QuestionType::MultipleSelect
            | QuestionType::ScaleMultipleChoice => choices
                .get(&question.section_title)
                .and_then(|m| m.get(&question.question_text))
                .map(|aggregate| json!({ "labels": aggregate.labels, "counts": aggregate.counts })),
            QuestionType::Number => numbers
                .get(&question.section_title)
                .and_then(|m| m.get(&question.question_text))
                .map(|average| json!(average)),
            QuestionType::SlideReview => slides
                .get(&question.section_title)
                .and_then(|m| m.get(&question.question_text))
                .map(|pages| json!(pages)),
            QuestionType::MultipleText | QuestionType::FixedText | QuestionType::Textarea => {
                texts
                    .get(&question.section_title)
                    .and_then(|m| m.get(&question.question_text))
                    .map(|list| json!(list))
            }
        };

        // 没有聚合产出的题目（如总信心为零的数值题、信心题本身）不出现在报表里
        let Some(answers_value) = payload else {
            continue;
        };

        sections
            .entry(question.section_title.clone())
            .or_default()
            .insert(
                question.question_text.clone(),
                QuestionReport {
                    question_type: question.question_type,
                    answers: answers_value,
                },
            );
    }

    ArtifactReportResponse { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reports::entities::AnswerRecord;

    #[test]
    fn test_assemble_report_shapes_by_question_type() {
        let questions = vec![
            QuestionSpec {
                question_id: 1,
                section_title: "Design".to_string(),
                question_text: "Pick a color".to_string(),
                question_type: QuestionType::MultipleChoice,
                number_of_scale: None,
                option_choices: vec!["Red".to_string(), "Blue".to_string()],
            },
            QuestionSpec {
                question_id: 2,
                section_title: "Grades".to_string(),
                question_text: "Overall score".to_string(),
                question_type: QuestionType::Number,
                number_of_scale: None,
                option_choices: vec![],
            },
        ];
        let answers = vec![
            AnswerRecord {
                review_id: 1,
                question_id: 1,
                section_title: "Design".to_string(),
                question_text: "Pick a color".to_string(),
                question_type: QuestionType::MultipleChoice,
                number_of_scale: None,
                answer_text: "Blue".to_string(),
                page: None,
            },
            AnswerRecord {
                review_id: 1,
                question_id: 2,
                section_title: "Grades".to_string(),
                question_text: "Overall score".to_string(),
                question_type: QuestionType::Number,
                number_of_scale: None,
                answer_text: "90".to_string(),
                page: None,
            },
        ];

        let report = assemble_report(&questions, &answers);

        let choice = &report.sections["Design"]["Pick a color"];
        assert_eq!(choice.answers["labels"][1], "Blue");
        assert_eq!(choice.answers["counts"][1], 1);

        let number = &report.sections["Grades"]["Overall score"];
        assert_eq!(number.answers, serde_json::json!(90.0));
    }

    #[test]
    fn test_question_without_aggregate_is_absent() {
        // 信心题不应出现在报表里
        let questions = vec![QuestionSpec {
            question_id: 1,
            section_title: "Grades".to_string(),
            question_text: aggregate::CONFIDENCE_QUESTION_TEXT.to_string(),
            question_type: QuestionType::Number,
            number_of_scale: None,
            option_choices: vec![],
        }];
        let answers = vec![AnswerRecord {
            review_id: 1,
            question_id: 1,
            section_title: "Grades".to_string(),
            question_text: aggregate::CONFIDENCE_QUESTION_TEXT.to_string(),
            question_type: QuestionType::Number,
            number_of_scale: None,
            answer_text: "3".to_string(),
            page: None,
        }];

        let report = assemble_report(&questions, &answers);
        assert!(report.sections.is_empty());
    }
}
