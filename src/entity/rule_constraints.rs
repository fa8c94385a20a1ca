//! 规则-约束关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rule_constraints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rule_id: i64,
    pub constraint_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rules::Entity",
        from = "Column::RuleId",
        to = "super::rules::Column::Id"
    )]
    Rule,
    #[sea_orm(
        belongs_to = "super::constraints::Entity",
        from = "Column::ConstraintId",
        to = "super::constraints::Column::Id"
    )]
    Constraint,
}

impl Related<super::rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl Related<super::constraints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Constraint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
