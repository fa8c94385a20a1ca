//! 约束实体
//!
//! url 是约束的路由键；kind 区分动作计数型（action）和分数型（point）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "constraints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub url: String,
    pub threshold: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub kind: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rule_constraints::Entity")]
    RuleConstraints,
    #[sea_orm(has_many = "super::progress::Entity")]
    Progress,
}

impl Related<super::rule_constraints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RuleConstraints.def()
    }
}

impl Related<super::progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Progress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_constraint(self) -> crate::models::constraints::entities::Constraint {
        use crate::models::constraints::entities::{Constraint, ConstraintKind};
        use chrono::{DateTime, Utc};

        Constraint {
            id: self.id,
            url: self.url,
            threshold: self.threshold,
            description: self.description,
            kind: self.kind.parse().unwrap_or(ConstraintKind::Action),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
