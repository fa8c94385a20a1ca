//! 奖励实体
//!
//! inventory 为空表示无限库存；rule_id 是旧的规则驱动发放路径，
//! 课程直挂的奖励该列为空。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rewards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub rule_id: Option<i64>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub reward_type: String,
    pub exp_points: i64,
    pub inventory: Option<i64>,
    pub quantity: i64,
    pub is_active: bool,
    pub picture: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::rules::Entity",
        from = "Column::RuleId",
        to = "super::rules::Column::Id"
    )]
    Rule,
    #[sea_orm(has_many = "super::user_rewards::Entity")]
    UserRewards,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl Related<super::user_rewards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRewards.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_reward(self) -> crate::models::rewards::entities::Reward {
        use crate::models::rewards::entities::{Reward, RewardType};
        use chrono::{DateTime, Utc};

        Reward {
            id: self.id,
            course_id: self.course_id,
            rule_id: self.rule_id,
            name: self.name,
            description: self.description,
            reward_type: self.reward_type.parse().unwrap_or(RewardType::Other),
            exp_points: self.exp_points,
            inventory: self.inventory,
            quantity: self.quantity,
            is_active: self.is_active,
            picture: self.picture,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
