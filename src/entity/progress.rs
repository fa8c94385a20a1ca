//! 进度实体
//!
//! (user_id, constraint_id) 唯一；met 必须始终等于 cur_point >= threshold。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub constraint_id: i64,
    pub cur_point: f64,
    pub met: bool,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::constraints::Entity",
        from = "Column::ConstraintId",
        to = "super::constraints::Column::Id"
    )]
    Constraint,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::constraints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Constraint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_progress(self) -> crate::models::progress::entities::Progress {
        use crate::models::progress::entities::Progress;
        use chrono::{DateTime, Utc};

        Progress {
            id: self.id,
            user_id: self.user_id,
            constraint_id: self.constraint_id,
            cur_point: self.cur_point,
            met: self.met,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
