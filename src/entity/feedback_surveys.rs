//! 互评问卷实体
//!
//! 每个作业任务至多挂一份问卷；没有问卷时评审状态无法结算。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback_surveys")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub assignment_id: i64,
    pub template_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub instructions: Option<String>,
    pub date_due: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(has_many = "super::survey_sections::Entity")]
    Sections,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::survey_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_survey(self) -> crate::models::surveys::entities::FeedbackSurvey {
        use crate::models::surveys::entities::FeedbackSurvey;
        use chrono::{DateTime, Utc};

        FeedbackSurvey {
            id: self.id,
            assignment_id: self.assignment_id,
            template_name: self.template_name,
            instructions: self.instructions,
            date_due: self
                .date_due
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
