//! 问卷题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub section_id: i64,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub question_type: String,
    pub number_of_scale: Option<i32>,
    pub number_of_text: Option<i32>,
    pub is_required: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::survey_sections::Entity",
        from = "Column::SectionId",
        to = "super::survey_sections::Column::Id"
    )]
    Section,
    #[sea_orm(has_many = "super::question_options::Entity")]
    QuestionOptions,
}

impl Related<super::survey_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::question_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionOptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::surveys::entities::Question {
        use crate::models::surveys::entities::{Question, QuestionType};

        Question {
            id: self.id,
            section_id: self.section_id,
            text: self.text,
            question_type: self
                .question_type
                .parse()
                .unwrap_or(QuestionType::Textarea),
            number_of_scale: self.number_of_scale,
            number_of_text: self.number_of_text,
            is_required: self.is_required,
            position: self.position,
            option_choices: Vec::new(),
        }
    }
}
