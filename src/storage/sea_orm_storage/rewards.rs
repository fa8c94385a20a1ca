//! 奖励存储操作
//!
//! 购买路径在单事务内完成：锁奖励行、检查上架与库存、
//! 扣库存、扣注册经验值、写用户奖励记录。

use super::SeaOrmStorage;
use crate::entity::course_users::{Column as CourseUserColumn, Entity as CourseUsers};
use crate::entity::rewards::{ActiveModel, Column, Entity as Rewards};
use crate::entity::user_rewards::{
    ActiveModel as UserRewardActiveModel, Column as UserRewardColumn, Entity as UserRewards,
};
use crate::entity::users::Entity as Users;
use crate::errors::{GamiSystemError, Result};
use crate::models::rewards::{
    entities::{Reward, RewardType, UserReward},
    requests::{CreateRewardRequest, UpdateRewardRequest},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建奖励
    pub async fn create_reward_impl(
        &self,
        course_id: i64,
        req: CreateRewardRequest,
    ) -> Result<Reward> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            rule_id: Set(req.rule_id),
            name: Set(req.name),
            description: Set(req.description),
            reward_type: Set(req.reward_type.unwrap_or(RewardType::Other).to_string()),
            exp_points: Set(req.exp_points.unwrap_or(0)),
            inventory: Set(req.inventory),
            quantity: Set(req.quantity.unwrap_or(1)),
            is_active: Set(true),
            picture: Set(req.picture),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建奖励失败: {e}")))?;

        Ok(result.into_reward())
    }

    /// 通过 ID 获取奖励（update 的回读辅助）
    pub(crate) async fn get_reward_by_id_impl(&self, reward_id: i64) -> Result<Option<Reward>> {
        let result = Rewards::find_by_id(reward_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询奖励失败: {e}")))?;

        Ok(result.map(|m| m.into_reward()))
    }

    /// 列出课程下的奖励
    pub async fn list_rewards_by_course_impl(&self, course_id: i64) -> Result<Vec<Reward>> {
        let rewards = Rewards::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询奖励列表失败: {e}")))?;

        Ok(rewards.into_iter().map(|m| m.into_reward()).collect())
    }

    /// 获取奖励持有者的用户名列表
    pub async fn get_reward_owner_usernames_impl(&self, reward_id: i64) -> Result<Vec<String>> {
        let rows = UserRewards::find()
            .find_also_related(Users)
            .filter(UserRewardColumn::RewardId.eq(reward_id))
            .order_by_asc(UserRewardColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询奖励持有者失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user.map(|u| u.username))
            .collect())
    }

    /// 统计奖励已兑换数量
    pub async fn count_fulfilled_user_rewards_impl(&self, reward_id: i64) -> Result<i64> {
        let count = UserRewards::find()
            .filter(UserRewardColumn::RewardId.eq(reward_id))
            .filter(UserRewardColumn::Fulfilled.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("统计兑换数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 更新奖励
    pub async fn update_reward_impl(
        &self,
        reward_id: i64,
        update: UpdateRewardRequest,
    ) -> Result<Option<Reward>> {
        let existing = self.get_reward_by_id_impl(reward_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(reward_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(reward_type) = update.reward_type {
            model.reward_type = Set(reward_type.to_string());
        }

        if let Some(exp_points) = update.exp_points {
            model.exp_points = Set(exp_points);
        }

        if let Some(inventory) = update.inventory {
            model.inventory = Set(Some(inventory));
        }

        if let Some(quantity) = update.quantity {
            model.quantity = Set(quantity);
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        if let Some(picture) = update.picture {
            model.picture = Set(Some(picture));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新奖励失败: {e}")))?;

        self.get_reward_by_id_impl(reward_id).await
    }

    /// 删除奖励
    pub async fn delete_reward_impl(&self, reward_id: i64) -> Result<bool> {
        let result = Rewards::delete_by_id(reward_id)
            .exec(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除奖励失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 购买奖励（单事务：校验、扣库存、扣经验值、写记录）
    pub async fn purchase_reward_impl(&self, user_id: i64, reward_id: i64) -> Result<UserReward> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let reward = Rewards::find_by_id(reward_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询奖励失败: {e}")))?
            .ok_or_else(|| GamiSystemError::not_found(format!("奖励 {reward_id} 不存在")))?;

        if !reward.is_active {
            return Err(GamiSystemError::validation("奖励未上架"));
        }

        if let Some(inventory) = reward.inventory
            && inventory <= 0
        {
            return Err(GamiSystemError::validation("奖励库存不足"));
        }

        // 购买者必须是奖励所在课程的注册成员，经验值在注册上扣减
        let registration = CourseUsers::find()
            .filter(CourseUserColumn::UserId.eq(user_id))
            .filter(CourseUserColumn::CourseId.eq(reward.course_id))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册失败: {e}")))?
            .ok_or_else(|| GamiSystemError::authorization("用户未注册该课程"))?;

        if registration.points < reward.exp_points as f64 {
            return Err(GamiSystemError::validation("经验值不足"));
        }

        let now = chrono::Utc::now().timestamp();

        // (user, reward) 唯一索引兜底，重复购买不会写出第二行
        let inserted = UserRewards::insert(UserRewardActiveModel {
            user_id: Set(user_id),
            reward_id: Set(reward_id),
            fulfilled: Set(true),
            granted_at: Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([UserRewardColumn::UserId, UserRewardColumn::RewardId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await
        .map_err(|e| GamiSystemError::database_operation(format!("写入奖励记录失败: {e}")))?;

        if inserted == 0 {
            return Err(GamiSystemError::validation("该奖励已持有"));
        }

        // 扣库存
        if let Some(inventory) = reward.inventory {
            let model = ActiveModel {
                id: Set(reward_id),
                inventory: Set(Some(inventory - 1)),
                updated_at: Set(now),
                ..Default::default()
            };
            model
                .update(&txn)
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("扣减库存失败: {e}")))?;
        }

        // 扣经验值
        let registration_model = crate::entity::course_users::ActiveModel {
            id: Set(registration.id),
            points: Set(registration.points - reward.exp_points as f64),
            updated_at: Set(now),
            ..Default::default()
        };
        registration_model
            .update(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("扣减经验值失败: {e}")))?;

        let record = UserRewards::find()
            .filter(UserRewardColumn::UserId.eq(user_id))
            .filter(UserRewardColumn::RewardId.eq(reward_id))
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询奖励记录失败: {e}")))?
            .ok_or_else(|| GamiSystemError::database_operation("奖励记录写入后未找到"))?;

        txn.commit()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(record.into_user_reward())
    }

    /// 列出用户持有的奖励记录
    pub async fn list_user_rewards_impl(&self, user_id: i64) -> Result<Vec<UserReward>> {
        let records = UserRewards::find()
            .filter(UserRewardColumn::UserId.eq(user_id))
            .order_by_desc(UserRewardColumn::GrantedAt)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询用户奖励失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_user_reward()).collect())
    }
}
