//! 评审答案实体
//!
//! page 为空是普通答案，非空则是针对某一页幻灯片的批注，
//! 两类答案共用一张表。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub artifact_review_id: i64,
    pub question_option_id: i64,
    #[sea_orm(column_type = "Text")]
    pub answer_text: String,
    pub page: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artifact_reviews::Entity",
        from = "Column::ArtifactReviewId",
        to = "super::artifact_reviews::Column::Id"
    )]
    ArtifactReview,
    #[sea_orm(
        belongs_to = "super::question_options::Entity",
        from = "Column::QuestionOptionId",
        to = "super::question_options::Column::Id"
    )]
    QuestionOption,
}

impl Related<super::artifact_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtifactReview.def()
    }
}

impl Related<super::question_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
