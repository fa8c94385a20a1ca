//! 问卷分区实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "survey_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub survey_id: i64,
    pub title: String,
    pub is_required: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::feedback_surveys::Entity",
        from = "Column::SurveyId",
        to = "super::feedback_surveys::Column::Id"
    )]
    Survey,
    #[sea_orm(has_many = "super::questions::Entity")]
    Questions,
}

impl Related<super::feedback_surveys::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_section(self) -> crate::models::surveys::entities::SurveySection {
        use crate::models::surveys::entities::SurveySection;

        SurveySection {
            id: self.id,
            survey_id: self.survey_id,
            title: self.title,
            is_required: self.is_required,
            position: self.position,
        }
    }
}
