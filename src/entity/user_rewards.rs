//! 用户奖励记录实体
//!
//! (user_id, reward_id) 唯一索引保证规则路径下最多发放一次。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_rewards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub reward_id: i64,
    pub fulfilled: bool,
    pub granted_at: i64,
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
        belongs_to = "super::rewards::Entity",
        from = "Column::RewardId",
        to = "super::rewards::Column::Id"
    )]
    Reward,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::rewards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reward.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_user_reward(self) -> crate::models::rewards::entities::UserReward {
        use crate::models::rewards::entities::UserReward;
        use chrono::{DateTime, Utc};

        UserReward {
            id: self.id,
            user_id: self.user_id,
            reward_id: self.reward_id,
            fulfilled: self.fulfilled,
            granted_at: DateTime::<Utc>::from_timestamp(self.granted_at, 0).unwrap_or_default(),
        }
    }
}
