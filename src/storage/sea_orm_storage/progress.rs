//! 进度与发放存储操作
//!
//! 进度上报、规则求值和奖励发放整体落在一个事务里：
//! 进度行用行级锁（pg/mysql 渲染 FOR UPDATE，sqlite 写事务本身串行），
//! 发放用 (user_id, reward_id) 唯一索引 + insert-on-conflict-do-nothing，
//! 并发重复调用不会多发。

use super::SeaOrmStorage;
use crate::entity::constraints::Entity as Constraints;
use crate::entity::progress::{ActiveModel, Column, Entity as ProgressEntries};
use crate::entity::rewards::{Column as RewardColumn, Entity as Rewards};
use crate::entity::rule_constraints::{
    Column as RuleConstraintColumn, Entity as RuleConstraints,
};
use crate::entity::user_rewards::{
    ActiveModel as UserRewardActiveModel, Column as UserRewardColumn, Entity as UserRewards,
};
use crate::errors::{GamiSystemError, Result};
use crate::models::progress::entities::{Progress, ProgressMode, ProgressUpdate};
use crate::models::rewards::entities::Reward;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 获取进度
    pub async fn get_progress_impl(
        &self,
        user_id: i64,
        constraint_id: i64,
    ) -> Result<Option<Progress>> {
        let result = ProgressEntries::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ConstraintId.eq(constraint_id))
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询进度失败: {e}")))?;

        Ok(result.map(|m| m.into_progress()))
    }

    /// 列出用户全部进度
    pub async fn list_progress_by_user_impl(&self, user_id: i64) -> Result<Vec<Progress>> {
        let entries = ProgressEntries::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::ConstraintId)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询进度列表失败: {e}")))?;

        Ok(entries.into_iter().map(|m| m.into_progress()).collect())
    }

    /// 进度上报 + 规则求值 + 奖励发放（单事务）
    pub async fn update_progress_and_evaluate_impl(
        &self,
        user_id: i64,
        constraint_id: i64,
        mode: ProgressMode,
        new_value: f64,
    ) -> Result<ProgressUpdate> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let constraint = Constraints::find_by_id(constraint_id)
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询约束失败: {e}")))?
            .ok_or_else(|| GamiSystemError::not_found(format!("约束 {constraint_id} 不存在")))?;

        let now = chrono::Utc::now().timestamp();

        // 首次交互时以 cur_point = 0 建行，再施加本次变更
        let row = match ProgressEntries::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ConstraintId.eq(constraint_id))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("锁定进度行失败: {e}")))?
        {
            Some(row) => row,
            None => {
                let model = ActiveModel {
                    user_id: Set(user_id),
                    constraint_id: Set(constraint_id),
                    cur_point: Set(0.0),
                    met: Set(false),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model.insert(&txn).await.map_err(|e| {
                    GamiSystemError::database_operation(format!("创建进度失败: {e}"))
                })?
            }
        };

        let mut progress = row.into_progress();
        progress.apply_update(mode, new_value);
        progress.refresh_met(constraint.threshold);

        let model = ActiveModel {
            id: Set(progress.id),
            cur_point: Set(progress.cur_point),
            met: Set(progress.met),
            updated_at: Set(now),
            ..Default::default()
        };
        model
            .update(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新进度失败: {e}")))?;

        // 阈值达成才走规则求值
        let granted = if progress.met {
            Self::evaluate_rules_and_grant(&txn, user_id, constraint_id, now).await?
        } else {
            Vec::new()
        };

        txn.commit()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(ProgressUpdate { progress, granted })
    }

    /// 对包含该约束的每条规则求值，规则整体满足时发放其奖励
    async fn evaluate_rules_and_grant(
        txn: &DatabaseTransaction,
        user_id: i64,
        constraint_id: i64,
        now: i64,
    ) -> Result<Vec<Reward>> {
        let rule_links = RuleConstraints::find()
            .filter(RuleConstraintColumn::ConstraintId.eq(constraint_id))
            .all(txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询规则关联失败: {e}")))?;

        let mut granted = Vec::new();

        'rules: for link in rule_links {
            let member_links = RuleConstraints::find()
                .filter(RuleConstraintColumn::RuleId.eq(link.rule_id))
                .all(txn)
                .await
                .map_err(|e| {
                    GamiSystemError::database_operation(format!("查询规则约束失败: {e}"))
                })?;

            // 任何一项未满足立即短路，部分满足不发放
            for member in &member_links {
                let met = ProgressEntries::find()
                    .filter(Column::UserId.eq(user_id))
                    .filter(Column::ConstraintId.eq(member.constraint_id))
                    .one(txn)
                    .await
                    .map_err(|e| {
                        GamiSystemError::database_operation(format!("查询进度失败: {e}"))
                    })?
                    .map(|p| p.met)
                    .unwrap_or(false);

                if !met {
                    continue 'rules;
                }
            }

            // 规则满足：发放规则名下所有启用的奖励，靠唯一索引保证至多一次
            let rewards = Rewards::find()
                .filter(RewardColumn::RuleId.eq(link.rule_id))
                .filter(RewardColumn::IsActive.eq(true))
                .all(txn)
                .await
                .map_err(|e| {
                    GamiSystemError::database_operation(format!("查询规则奖励失败: {e}"))
                })?;

            for reward in rewards {
                let insert = UserRewards::insert(UserRewardActiveModel {
                    user_id: Set(user_id),
                    reward_id: Set(reward.id),
                    fulfilled: Set(false),
                    granted_at: Set(now),
                    ..Default::default()
                })
                .on_conflict(
                    OnConflict::columns([UserRewardColumn::UserId, UserRewardColumn::RewardId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(txn)
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("发放奖励失败: {e}")))?;

                // 受影响行数为 0 说明早已持有，不重复计入
                if insert > 0 {
                    granted.push(reward.into_reward());
                }
            }
        }

        Ok(granted)
    }

    /// 删除进度
    pub async fn delete_progress_impl(&self, user_id: i64, constraint_id: i64) -> Result<bool> {
        let result = ProgressEntries::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ConstraintId.eq(constraint_id))
            .exec(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除进度失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
