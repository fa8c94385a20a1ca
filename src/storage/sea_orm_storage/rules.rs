//! 规则存储操作

use super::SeaOrmStorage;
use crate::entity::constraints::{Column as ConstraintColumn, Entity as Constraints};
use crate::entity::rule_constraints::{
    ActiveModel as RuleConstraintActiveModel, Column as RuleConstraintColumn,
    Entity as RuleConstraints,
};
use crate::entity::rules::{ActiveModel, Entity as Rules};
use crate::errors::{GamiSystemError, Result};
use crate::models::constraints::entities::Constraint;
use crate::models::rules::{
    entities::Rule,
    requests::{CreateRuleRequest, UpdateRuleRequest},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建规则
    pub async fn create_rule_impl(&self, req: CreateRuleRequest) -> Result<Rule> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            is_default: Set(req.is_default.unwrap_or(false)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建规则失败: {e}")))?;

        Ok(result.into_rule())
    }

    /// 通过 ID 获取规则（含约束）
    pub async fn get_rule_by_id_impl(&self, rule_id: i64) -> Result<Option<Rule>> {
        let result = Rules::find_by_id(rule_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询规则失败: {e}")))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut rule = model.into_rule();
        rule.constraints = self.load_rule_constraints(rule_id).await?;
        Ok(Some(rule))
    }

    /// 加载规则下的约束
    async fn load_rule_constraints(&self, rule_id: i64) -> Result<Vec<Constraint>> {
        let links = RuleConstraints::find()
            .filter(RuleConstraintColumn::RuleId.eq(rule_id))
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询规则约束失败: {e}")))?;

        let constraint_ids: Vec<i64> = links.iter().map(|l| l.constraint_id).collect();
        if constraint_ids.is_empty() {
            return Ok(Vec::new());
        }

        let constraints = Constraints::find()
            .filter(ConstraintColumn::Id.is_in(constraint_ids))
            .order_by_asc(ConstraintColumn::Url)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询约束失败: {e}")))?;

        Ok(constraints
            .into_iter()
            .map(|m| m.into_constraint())
            .collect())
    }

    /// 列出规则（含约束）
    pub async fn list_rules_impl(&self) -> Result<Vec<Rule>> {
        let models = Rules::find()
            .order_by_asc(crate::entity::rules::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询规则列表失败: {e}")))?;

        let mut rules = Vec::with_capacity(models.len());
        for model in models {
            let rule_id = model.id;
            let mut rule = model.into_rule();
            rule.constraints = self.load_rule_constraints(rule_id).await?;
            rules.push(rule);
        }

        Ok(rules)
    }

    /// 更新规则
    pub async fn update_rule_impl(
        &self,
        rule_id: i64,
        update: UpdateRuleRequest,
    ) -> Result<Option<Rule>> {
        let existing = Rules::find_by_id(rule_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询规则失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(rule_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(is_default) = update.is_default {
            model.is_default = Set(is_default);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新规则失败: {e}")))?;

        self.get_rule_by_id_impl(rule_id).await
    }

    /// 删除规则
    pub async fn delete_rule_impl(&self, rule_id: i64) -> Result<bool> {
        let result = Rules::delete_by_id(rule_id)
            .exec(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除规则失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 规则挂载约束（幂等，靠唯一索引去重）
    pub async fn attach_constraint_to_rule_impl(
        &self,
        rule_id: i64,
        constraint_id: i64,
    ) -> Result<bool> {
        let inserted = RuleConstraints::insert(RuleConstraintActiveModel {
            rule_id: Set(rule_id),
            constraint_id: Set(constraint_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                RuleConstraintColumn::RuleId,
                RuleConstraintColumn::ConstraintId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| GamiSystemError::database_operation(format!("挂载约束失败: {e}")))?;

        Ok(inserted > 0)
    }

    /// 规则卸载约束
    pub async fn detach_constraint_from_rule_impl(
        &self,
        rule_id: i64,
        constraint_id: i64,
    ) -> Result<bool> {
        let result = RuleConstraints::delete_many()
            .filter(RuleConstraintColumn::RuleId.eq(rule_id))
            .filter(RuleConstraintColumn::ConstraintId.eq(constraint_id))
            .exec(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("卸载约束失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计规则数量
    pub async fn count_rules_impl(&self) -> Result<u64> {
        Rules::find()
            .count(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("统计规则失败: {e}")))
    }
}
