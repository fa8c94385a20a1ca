//! 约束存储操作

use super::SeaOrmStorage;
use crate::entity::constraints::{ActiveModel, Column, Entity as Constraints};
use crate::errors::{GamiSystemError, Result};
use crate::models::{
    PaginationInfo,
    constraints::{
        entities::{Constraint, ConstraintKind},
        requests::{ConstraintListQuery, CreateConstraintRequest, UpdateConstraintRequest},
        responses::ConstraintListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建约束
    pub async fn create_constraint_impl(&self, req: CreateConstraintRequest) -> Result<Constraint> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            url: Set(req.url),
            threshold: Set(req.threshold),
            description: Set(req.description),
            kind: Set(req.kind.unwrap_or(ConstraintKind::Action).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建约束失败: {e}")))?;

        Ok(result.into_constraint())
    }

    /// 通过路由键获取约束
    pub async fn get_constraint_by_url_impl(&self, url: &str) -> Result<Option<Constraint>> {
        let result = Constraints::find()
            .filter(Column::Url.eq(url))
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询约束失败: {e}")))?;

        Ok(result.map(|m| m.into_constraint()))
    }

    /// 通过 ID 获取约束
    pub async fn get_constraint_by_id_impl(&self, constraint_id: i64) -> Result<Option<Constraint>> {
        let result = Constraints::find_by_id(constraint_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询约束失败: {e}")))?;

        Ok(result.map(|m| m.into_constraint()))
    }

    /// 分页列出约束
    pub async fn list_constraints_with_pagination_impl(
        &self,
        query: ConstraintListQuery,
    ) -> Result<ConstraintListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Constraints::find();

        // 搜索条件（路由键或描述）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Url.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::Url);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询约束总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询约束页数失败: {e}")))?;

        let constraints = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询约束列表失败: {e}")))?;

        Ok(ConstraintListResponse {
            items: constraints
                .into_iter()
                .map(|m| m.into_constraint())
                .collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新约束
    pub async fn update_constraint_impl(
        &self,
        constraint_id: i64,
        update: UpdateConstraintRequest,
    ) -> Result<Option<Constraint>> {
        let existing = self.get_constraint_by_id_impl(constraint_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(constraint_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(threshold) = update.threshold {
            model.threshold = Set(threshold);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新约束失败: {e}")))?;

        self.get_constraint_by_id_impl(constraint_id).await
    }

    /// 删除约束（硬删除，级联交给数据库外键）
    pub async fn delete_constraint_impl(&self, constraint_id: i64) -> Result<bool> {
        let result = Constraints::delete_by_id(constraint_id)
            .exec(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除约束失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
