//! 互评任务存储操作
//!
//! 重复提交采用全量替换语义：旧答案整体删除后写入新答案，
//! 与状态落库在同一个事务内完成。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::answers::{
    ActiveModel as AnswerActiveModel, Column as AnswerColumn, Entity as Answers,
};
use crate::entity::artifact_reviews::{ActiveModel, Column, Entity as ArtifactReviews};
use crate::entity::question_options::{
    Column as QuestionOptionColumn, Entity as QuestionOptions,
};
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::entity::survey_sections::Entity as SurveySections;
use crate::errors::{GamiSystemError, Result};
use crate::models::reports::entities::AnswerRecord;
use crate::models::reviews::{
    entities::{ArtifactReview, ReviewStatus},
    requests::AnswerPayload,
    responses::{ReviewDetailResponse, SavedAnswer},
};
use crate::models::surveys::entities::QuestionType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 通过 ID 获取评审
    pub async fn get_review_by_id_impl(&self, review_id: i64) -> Result<Option<ArtifactReview>> {
        let result = ArtifactReviews::find_by_id(review_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询评审失败: {e}")))?;

        Ok(result.map(|m| m.into_review()))
    }

    /// 获取评审详情（含已保存答案和题目上下文）
    pub async fn get_review_detail_impl(
        &self,
        review_id: i64,
    ) -> Result<Option<ReviewDetailResponse>> {
        let Some(review) = self.get_review_by_id_impl(review_id).await? else {
            return Ok(None);
        };

        let answer_models = Answers::find()
            .filter(AnswerColumn::ArtifactReviewId.eq(review_id))
            .order_by_asc(AnswerColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询答案失败: {e}")))?;

        let option_ids: Vec<i64> = answer_models
            .iter()
            .map(|a| a.question_option_id)
            .collect();
        let option_to_question = self.load_question_contexts(&option_ids).await?;

        let mut answers = Vec::with_capacity(answer_models.len());
        for answer in answer_models {
            let Some((question_id, question_text, question_type)) =
                option_to_question.get(&answer.question_option_id)
            else {
                return Err(GamiSystemError::not_found(format!(
                    "答案 {} 关联的题目选项不存在",
                    answer.id
                )));
            };
            answers.push(SavedAnswer {
                question_id: *question_id,
                question_text: question_text.clone(),
                question_type: *question_type,
                answer_text: answer.answer_text,
                page: answer.page,
            });
        }

        Ok(Some(ReviewDetailResponse { review, answers }))
    }

    /// question_option -> (question_id, 题目文本, 题型) 映射
    async fn load_question_contexts(
        &self,
        option_ids: &[i64],
    ) -> Result<HashMap<i64, (i64, String, QuestionType)>> {
        let mut result = HashMap::new();
        if option_ids.is_empty() {
            return Ok(result);
        }

        let rows = QuestionOptions::find()
            .find_also_related(Questions)
            .filter(QuestionOptionColumn::Id.is_in(option_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询题目选项失败: {e}")))?;

        for (question_option, question) in rows {
            if let Some(q) = question {
                let question_type = q
                    .question_type
                    .parse()
                    .unwrap_or(QuestionType::Textarea);
                result.insert(question_option.id, (q.id, q.text, question_type));
            }
        }

        Ok(result)
    }

    /// 列出提交物下的评审
    pub async fn list_reviews_by_artifact_impl(
        &self,
        artifact_id: i64,
    ) -> Result<Vec<ArtifactReview>> {
        let reviews = ArtifactReviews::find()
            .filter(Column::ArtifactId.eq(artifact_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询评审列表失败: {e}")))?;

        Ok(reviews.into_iter().map(|m| m.into_review()).collect())
    }

    /// 列出评审者名下的评审
    pub async fn list_reviews_by_reviewer_impl(
        &self,
        reviewer_id: i64,
    ) -> Result<Vec<ArtifactReview>> {
        let reviews = ArtifactReviews::find()
            .filter(Column::ReviewerId.eq(reviewer_id))
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询评审列表失败: {e}")))?;

        Ok(reviews.into_iter().map(|m| m.into_review()).collect())
    }

    /// 提交评审答案（单事务：全量替换旧答案 + 状态落库）
    pub async fn submit_review_answers_impl(
        &self,
        review_id: i64,
        status: ReviewStatus,
        answers: &[AnswerPayload],
    ) -> Result<ArtifactReview> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = ArtifactReviews::find_by_id(review_id)
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询评审失败: {e}")))?
            .ok_or_else(|| GamiSystemError::not_found(format!("评审 {review_id} 不存在")))?;

        // 先整体删除旧答案
        Answers::delete_many()
            .filter(AnswerColumn::ArtifactReviewId.eq(review_id))
            .exec(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除旧答案失败: {e}")))?;

        // 再逐条写入新答案
        for payload in answers {
            let question_option_id =
                Self::resolve_question_option(&txn, payload.question_id, &payload.answer_text)
                    .await?;

            let model = AnswerActiveModel {
                artifact_review_id: Set(review_id),
                question_option_id: Set(question_option_id),
                answer_text: Set(payload.answer_text.clone()),
                page: Set(payload.page),
                ..Default::default()
            };

            model
                .insert(&txn)
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("写入答案失败: {e}")))?;
        }

        // 状态落库
        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(existing.id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新评审状态失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.into_review())
    }

    /// 为一条答案定位 question_option 行
    ///
    /// 选择题按选项文本匹配，找不到选项视为 NotFound（整次提交中止）；
    /// 其他题型挂到题目下唯一的无选项关联行。
    async fn resolve_question_option(
        txn: &DatabaseTransaction,
        question_id: i64,
        answer_text: &str,
    ) -> Result<i64> {
        let question = Questions::find_by_id(question_id)
            .one(txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询题目失败: {e}")))?
            .ok_or_else(|| GamiSystemError::not_found(format!("题目 {question_id} 不存在")))?;

        let question_type: QuestionType = question
            .question_type
            .parse()
            .unwrap_or(QuestionType::Textarea);

        let options = QuestionOptions::find()
            .find_also_related(crate::entity::option_choices::Entity)
            .filter(QuestionOptionColumn::QuestionId.eq(question_id))
            .order_by_asc(QuestionOptionColumn::Id)
            .all(txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询题目选项失败: {e}")))?;

        if question_type.is_choice() {
            options
                .iter()
                .find(|(_, choice)| {
                    choice
                        .as_ref()
                        .is_some_and(|c| c.text == answer_text)
                })
                .map(|(question_option, _)| question_option.id)
                .ok_or_else(|| {
                    GamiSystemError::not_found(format!(
                        "题目 {question_id} 不存在选项 '{answer_text}'"
                    ))
                })
        } else {
            options
                .first()
                .map(|(question_option, _)| question_option.id)
                .ok_or_else(|| {
                    GamiSystemError::not_found(format!("题目 {question_id} 缺少答案挂接行"))
                })
        }
    }

    /// 更新评审状态
    pub async fn update_review_status_impl(
        &self,
        review_id: i64,
        status: ReviewStatus,
    ) -> Result<Option<ArtifactReview>> {
        let existing = self.get_review_by_id_impl(review_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(review_id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新评审状态失败: {e}")))?;

        Ok(Some(updated.into_review()))
    }

    /// 拉取提交物下全部评审答案（带题目和分区上下文）
    ///
    /// 聚合逻辑在服务层完成，这里只做扁平连接。
    pub async fn list_answers_by_artifact_impl(
        &self,
        artifact_id: i64,
    ) -> Result<Vec<AnswerRecord>> {
        let reviews = ArtifactReviews::find()
            .filter(Column::ArtifactId.eq(artifact_id))
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询评审列表失败: {e}")))?;

        if reviews.is_empty() {
            return Ok(Vec::new());
        }

        let review_ids: Vec<i64> = reviews.iter().map(|r| r.id).collect();

        let answer_models = Answers::find()
            .filter(AnswerColumn::ArtifactReviewId.is_in(review_ids))
            .order_by_asc(AnswerColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询答案失败: {e}")))?;

        // question_option -> question 上下文
        let option_ids: Vec<i64> = answer_models
            .iter()
            .map(|a| a.question_option_id)
            .collect();
        let option_rows = QuestionOptions::find()
            .filter(QuestionOptionColumn::Id.is_in(option_ids))
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询题目选项失败: {e}")))?;
        let option_to_question: HashMap<i64, i64> = option_rows
            .iter()
            .map(|o| (o.id, o.question_id))
            .collect();

        let question_ids: Vec<i64> = option_rows.iter().map(|o| o.question_id).collect();
        let question_models = Questions::find()
            .filter(QuestionColumn::Id.is_in(question_ids))
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询题目失败: {e}")))?;

        let section_ids: Vec<i64> = question_models.iter().map(|q| q.section_id).collect();
        let section_models = SurveySections::find()
            .filter(crate::entity::survey_sections::Column::Id.is_in(section_ids))
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询分区失败: {e}")))?;
        let section_titles: HashMap<i64, String> = section_models
            .into_iter()
            .map(|s| (s.id, s.title))
            .collect();

        let questions: HashMap<i64, _> = question_models
            .into_iter()
            .map(|q| (q.id, q))
            .collect();

        let mut records = Vec::with_capacity(answer_models.len());
        for answer in answer_models {
            let Some(question_id) = option_to_question.get(&answer.question_option_id) else {
                return Err(GamiSystemError::not_found(format!(
                    "答案 {} 关联的题目选项不存在",
                    answer.id
                )));
            };
            let Some(question) = questions.get(question_id) else {
                return Err(GamiSystemError::not_found(format!(
                    "题目 {question_id} 不存在"
                )));
            };
            records.push(AnswerRecord {
                review_id: answer.artifact_review_id,
                question_id: question.id,
                section_title: section_titles
                    .get(&question.section_id)
                    .cloned()
                    .unwrap_or_default(),
                question_text: question.text.clone(),
                question_type: question
                    .question_type
                    .parse()
                    .unwrap_or(QuestionType::Textarea),
                number_of_scale: question.number_of_scale,
                answer_text: answer.answer_text,
                page: answer.page,
            });
        }

        Ok(records)
    }
}
