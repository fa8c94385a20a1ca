//! 提交物实体
//!
//! owner_kind 区分团队提交和个人提交，两个外键只会填其一。
//! 文件内容存放在外部存储，这里只记录 file_key。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artifacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub owner_kind: String,
    pub team_id: Option<i64>,
    pub registration_id: Option<i64>,
    pub file_key: String,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::course_users::Entity",
        from = "Column::RegistrationId",
        to = "super::course_users::Column::Id"
    )]
    Registration,
    #[sea_orm(has_many = "super::artifact_reviews::Entity")]
    ArtifactReviews,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::artifact_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtifactReviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_artifact(self) -> crate::models::artifacts::entities::Artifact {
        use crate::models::artifacts::entities::{Artifact, ArtifactOwner};
        use chrono::{DateTime, Utc};

        let owner = match self.owner_kind.as_str() {
            "team" => ArtifactOwner::Team {
                team_id: self.team_id.unwrap_or_default(),
            },
            _ => ArtifactOwner::Individual {
                registration_id: self.registration_id.unwrap_or_default(),
            },
        };

        Artifact {
            id: self.id,
            assignment_id: self.assignment_id,
            owner,
            file_key: self.file_key,
            uploaded_at: DateTime::<Utc>::from_timestamp(self.uploaded_at, 0).unwrap_or_default(),
        }
    }
}
