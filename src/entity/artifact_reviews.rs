//! 互评任务实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artifact_reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub artifact_id: i64,
    pub reviewer_id: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artifacts::Entity",
        from = "Column::ArtifactId",
        to = "super::artifacts::Column::Id"
    )]
    Artifact,
    #[sea_orm(
        belongs_to = "super::course_users::Entity",
        from = "Column::ReviewerId",
        to = "super::course_users::Column::Id"
    )]
    Reviewer,
    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
}

impl Related<super::artifacts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artifact.def()
    }
}

impl Related<super::course_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviewer.def()
    }
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_review(self) -> crate::models::reviews::entities::ArtifactReview {
        use crate::models::reviews::entities::{ArtifactReview, ReviewStatus};
        use chrono::{DateTime, Utc};

        ArtifactReview {
            id: self.id,
            artifact_id: self.artifact_id,
            reviewer_id: self.reviewer_id,
            status: self.status.parse().unwrap_or(ReviewStatus::Incomplete),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
