//! 问卷存储操作
//!
//! 题目的选项顺序 = question_options 行的插入顺序，查询时按主键升序还原。
//! 非选择题也建一行无选项的 question_options，答案统一经它挂接。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::feedback_surveys::{
    ActiveModel as SurveyActiveModel, Column as SurveyColumn, Entity as FeedbackSurveys,
};
use crate::entity::option_choices::{
    ActiveModel as OptionChoiceActiveModel, Entity as OptionChoices,
};
use crate::entity::question_options::{
    ActiveModel as QuestionOptionActiveModel, Column as QuestionOptionColumn,
    Entity as QuestionOptions,
};
use crate::entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as Questions,
};
use crate::entity::survey_sections::{
    ActiveModel as SectionActiveModel, Column as SectionColumn, Entity as SurveySections,
};
use crate::errors::{GamiSystemError, Result};
use crate::models::surveys::{
    entities::{FeedbackSurvey, Question, SurveySection},
    requests::{
        CreateQuestionRequest, CreateSectionRequest, CreateSurveyRequest, UpdateQuestionRequest,
        UpdateSurveyRequest,
    },
    responses::{SectionDetail, SurveyDetailResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 为作业创建问卷
    pub async fn create_survey_impl(
        &self,
        assignment_id: i64,
        req: CreateSurveyRequest,
    ) -> Result<FeedbackSurvey> {
        let now = chrono::Utc::now().timestamp();

        let model = SurveyActiveModel {
            assignment_id: Set(assignment_id),
            template_name: Set(req.template_name),
            instructions: Set(req.instructions),
            date_due: Set(req.date_due.map(|d| d.timestamp())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建问卷失败: {e}")))?;

        Ok(result.into_survey())
    }

    /// 获取作业的问卷
    pub async fn get_survey_by_assignment_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<FeedbackSurvey>> {
        let result = FeedbackSurveys::find()
            .filter(SurveyColumn::AssignmentId.eq(assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询问卷失败: {e}")))?;

        Ok(result.map(|m| m.into_survey()))
    }

    /// 获取问卷详情（分区 -> 题目 -> 选项）
    pub async fn get_survey_detail_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<SurveyDetailResponse>> {
        let Some(survey) = self.get_survey_by_assignment_id_impl(assignment_id).await? else {
            return Ok(None);
        };

        let sections = SurveySections::find()
            .filter(SectionColumn::SurveyId.eq(survey.id))
            .order_by_asc(SectionColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询分区失败: {e}")))?;

        let mut section_details = Vec::with_capacity(sections.len());
        for section_model in sections {
            let section = section_model.into_section();
            let questions = self.load_section_questions(section.id).await?;
            section_details.push(SectionDetail { section, questions });
        }

        Ok(Some(SurveyDetailResponse {
            survey,
            sections: section_details,
        }))
    }

    /// 加载分区下的题目及其选项
    pub(crate) async fn load_section_questions(&self, section_id: i64) -> Result<Vec<Question>> {
        let question_models = Questions::find()
            .filter(QuestionColumn::SectionId.eq(section_id))
            .order_by_asc(QuestionColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询题目失败: {e}")))?;

        let question_ids: Vec<i64> = question_models.iter().map(|q| q.id).collect();
        let mut options_by_question = self.load_option_texts(&question_ids).await?;

        Ok(question_models
            .into_iter()
            .map(|m| {
                let mut question = m.into_question();
                question.option_choices = options_by_question
                    .remove(&question.id)
                    .unwrap_or_default();
                question
            })
            .collect())
    }

    /// 按题目加载选项文本（保持插入顺序）
    pub(crate) async fn load_option_texts(
        &self,
        question_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<String>>> {
        let mut result: HashMap<i64, Vec<String>> = HashMap::new();
        if question_ids.is_empty() {
            return Ok(result);
        }

        let rows = QuestionOptions::find()
            .find_also_related(OptionChoices)
            .filter(QuestionOptionColumn::QuestionId.is_in(question_ids.to_vec()))
            .order_by_asc(QuestionOptionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询选项失败: {e}")))?;

        for (question_option, option_choice) in rows {
            if let Some(choice) = option_choice {
                result
                    .entry(question_option.question_id)
                    .or_default()
                    .push(choice.text);
            }
        }

        Ok(result)
    }

    /// 更新问卷
    pub async fn update_survey_impl(
        &self,
        survey_id: i64,
        update: UpdateSurveyRequest,
    ) -> Result<Option<FeedbackSurvey>> {
        let existing = FeedbackSurveys::find_by_id(survey_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询问卷失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = SurveyActiveModel {
            id: Set(survey_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(template_name) = update.template_name {
            model.template_name = Set(template_name);
        }

        if let Some(instructions) = update.instructions {
            model.instructions = Set(Some(instructions));
        }

        if let Some(date_due) = update.date_due {
            model.date_due = Set(Some(date_due.timestamp()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新问卷失败: {e}")))?;

        Ok(Some(updated.into_survey()))
    }

    /// 删除问卷
    pub async fn delete_survey_impl(&self, survey_id: i64) -> Result<bool> {
        let result = FeedbackSurveys::delete_by_id(survey_id)
            .exec(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除问卷失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建分区
    pub async fn create_section_impl(
        &self,
        survey_id: i64,
        req: CreateSectionRequest,
    ) -> Result<SurveySection> {
        let model = SectionActiveModel {
            survey_id: Set(survey_id),
            title: Set(req.title),
            is_required: Set(req.is_required.unwrap_or(false)),
            position: Set(req.position.unwrap_or(0)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建分区失败: {e}")))?;

        Ok(result.into_section())
    }

    /// 创建题目（题目 + 选项 + 关联行在单事务内写入）
    pub async fn create_question_impl(&self, req: CreateQuestionRequest) -> Result<Question> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let model = QuestionActiveModel {
            section_id: Set(req.section_id),
            text: Set(req.text),
            question_type: Set(req.question_type.to_string()),
            number_of_scale: Set(req.number_of_scale),
            number_of_text: Set(req.number_of_text),
            is_required: Set(req.is_required.unwrap_or(false)),
            position: Set(req.position.unwrap_or(0)),
            ..Default::default()
        };

        let question_model = model
            .insert(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建题目失败: {e}")))?;

        let option_texts = req.option_choices.unwrap_or_default();
        if option_texts.is_empty() {
            // 非选择题建一行无选项的关联，答案统一经 question_options 挂接
            Self::insert_question_option(&txn, question_model.id, None).await?;
        } else {
            // 逐行插入，保持提交顺序就是选项顺序
            for text in &option_texts {
                let choice = OptionChoiceActiveModel {
                    text: Set(text.clone()),
                    ..Default::default()
                };
                let choice_model = choice.insert(&txn).await.map_err(|e| {
                    GamiSystemError::database_operation(format!("创建选项失败: {e}"))
                })?;
                Self::insert_question_option(&txn, question_model.id, Some(choice_model.id))
                    .await?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("提交事务失败: {e}")))?;

        let mut question = question_model.into_question();
        question.option_choices = option_texts;
        Ok(question)
    }

    async fn insert_question_option<C: ConnectionTrait>(
        conn: &C,
        question_id: i64,
        option_choice_id: Option<i64>,
    ) -> Result<()> {
        let model = QuestionOptionActiveModel {
            question_id: Set(question_id),
            option_choice_id: Set(option_choice_id),
            ..Default::default()
        };

        model
            .insert(conn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建题目选项关联失败: {e}")))?;

        Ok(())
    }

    /// 更新题目
    pub async fn update_question_impl(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let existing = Questions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询题目失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = QuestionActiveModel {
            id: Set(question_id),
            ..Default::default()
        };

        if let Some(text) = update.text {
            model.text = Set(text);
        }

        if let Some(number_of_scale) = update.number_of_scale {
            model.number_of_scale = Set(Some(number_of_scale));
        }

        if let Some(number_of_text) = update.number_of_text {
            model.number_of_text = Set(Some(number_of_text));
        }

        if let Some(is_required) = update.is_required {
            model.is_required = Set(is_required);
        }

        if let Some(position) = update.position {
            model.position = Set(position);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新题目失败: {e}")))?;

        let mut question = updated.into_question();
        let mut options = self.load_option_texts(&[question_id]).await?;
        question.option_choices = options.remove(&question_id).unwrap_or_default();
        Ok(Some(question))
    }

    /// 删除题目
    pub async fn delete_question_impl(&self, question_id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(question_id)
            .exec(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
