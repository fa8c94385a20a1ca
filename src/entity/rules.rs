//! 规则实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_default: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rule_constraints::Entity")]
    RuleConstraints,
    #[sea_orm(has_many = "super::rewards::Entity")]
    Rewards,
}

impl Related<super::rule_constraints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RuleConstraints.def()
    }
}

impl Related<super::rewards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rewards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_rule(self) -> crate::models::rules::entities::Rule {
        use crate::models::rules::entities::Rule;
        use chrono::{DateTime, Utc};

        Rule {
            id: self.id,
            name: self.name,
            description: self.description,
            is_default: self.is_default,
            constraints: Vec::new(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
