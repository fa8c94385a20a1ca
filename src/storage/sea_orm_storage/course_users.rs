//! 选课注册存储操作
//!
//! 团队切换是多步序列（脱离旧团队、清理空团队、找到或创建新团队、挂新团队），
//! 必须整体落在一个事务里，避免中途失败留下悬空状态。

use super::SeaOrmStorage;
use crate::entity::course_users::{
    ActiveModel, Column, Entity as CourseUsers, Model as CourseUserModel,
};
use crate::entity::teams::{
    ActiveModel as TeamActiveModel, Column as TeamColumn, Entity as Teams,
};
use crate::entity::users::Column as UserColumn;
use crate::errors::{GamiSystemError, Result};
use crate::models::{
    PaginationInfo,
    course_users::{
        entities::{CourseRole, CourseUser},
        requests::{CourseUserQuery, UpdateCourseUserRequest},
        responses::CourseUserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 用户加入课程
    pub async fn join_course_impl(
        &self,
        user_id: i64,
        course_id: i64,
        role: CourseRole,
    ) -> Result<CourseUser> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            points: Set(0.0),
            team_id: Set(None),
            joined_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("加入课程失败: {e}")))?;

        Ok(result.into_course_user())
    }

    /// 用户退出课程
    pub async fn leave_course_impl(&self, user_id: i64, course_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = CourseUsers::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册失败: {e}")))?;

        let Some(course_user) = existing else {
            txn.rollback()
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(false);
        };

        let old_team_id = course_user.team_id;
        let course_user_id = course_user.id;

        CourseUsers::delete_by_id(course_user_id)
            .exec(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("删除注册失败: {e}")))?;

        // 注册删除后团队可能空了，顺手清理
        if let Some(team_id) = old_team_id {
            Self::drop_team_if_empty(&txn, team_id).await?;
        }

        txn.commit()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 更新注册信息（角色变更、团队切换）
    pub async fn update_course_user_impl(
        &self,
        course_id: i64,
        course_user_id: i64,
        update_data: UpdateCourseUserRequest,
    ) -> Result<Option<CourseUser>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = CourseUsers::find_by_id(course_user_id)
            .filter(Column::CourseId.eq(course_id))
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册失败: {e}")))?;

        let Some(course_user) = existing else {
            txn.rollback()
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("回滚事务失败: {e}")))?;
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();
        let old_team_id = course_user.team_id;

        let mut model = ActiveModel {
            id: Set(course_user_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(role) = update_data.role {
            model.role = Set(role.to_string());
        }

        if let Some(team_name) = update_data.team_name {
            // 脱离旧团队 -> 清理空团队 -> 找到或创建新团队 -> 挂新团队
            let new_team_id = if team_name.trim().is_empty() {
                None
            } else {
                Some(Self::find_or_create_team(&txn, course_id, team_name.trim(), now).await?)
            };
            model.team_id = Set(new_team_id);

            model
                .update(&txn)
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("更新注册失败: {e}")))?;

            if let Some(team_id) = old_team_id
                && Some(team_id) != new_team_id
            {
                Self::drop_team_if_empty(&txn, team_id).await?;
            }
        } else {
            model
                .update(&txn)
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("更新注册失败: {e}")))?;
        }

        let updated = CourseUsers::find_by_id(course_user_id)
            .one(&txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(updated.map(CourseUserModel::into_course_user))
    }

    /// 按名称查找团队，不存在则创建
    async fn find_or_create_team(
        txn: &DatabaseTransaction,
        course_id: i64,
        team_name: &str,
        now: i64,
    ) -> Result<i64> {
        let existing = Teams::find()
            .filter(TeamColumn::CourseId.eq(course_id))
            .filter(TeamColumn::TeamName.eq(team_name))
            .one(txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询团队失败: {e}")))?;

        if let Some(team) = existing {
            return Ok(team.id);
        }

        let team = TeamActiveModel {
            course_id: Set(course_id),
            team_name: Set(team_name.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = team
            .insert(txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建团队失败: {e}")))?;

        Ok(result.id)
    }

    /// 团队没有成员时删除
    async fn drop_team_if_empty(txn: &DatabaseTransaction, team_id: i64) -> Result<()> {
        let members = CourseUsers::find()
            .filter(Column::TeamId.eq(team_id))
            .count(txn)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("统计团队成员失败: {e}")))?;

        if members == 0 {
            Teams::delete_by_id(team_id)
                .exec(txn)
                .await
                .map_err(|e| GamiSystemError::database_operation(format!("删除团队失败: {e}")))?;
        }

        Ok(())
    }

    /// 分页列出课程内注册
    pub async fn list_course_users_with_pagination_impl(
        &self,
        course_id: i64,
        query: CourseUserQuery,
    ) -> Result<CourseUserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = CourseUsers::find().filter(Column::CourseId.eq(course_id));

        // 搜索条件（按用户名）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select
                .join(
                    JoinType::InnerJoin,
                    crate::entity::course_users::Relation::User.def(),
                )
                .filter(UserColumn::Username.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::JoinedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册页数失败: {e}")))?;

        let course_users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册列表失败: {e}")))?;

        Ok(CourseUserListResponse {
            items: course_users
                .into_iter()
                .map(|m| m.into_course_user())
                .collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 获取用户在课程中的注册信息
    pub async fn get_course_user_by_user_id_and_course_id_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<CourseUser>> {
        let result = CourseUsers::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册失败: {e}")))?;

        Ok(result.map(|m| m.into_course_user()))
    }

    /// 通过注册 ID 获取注册信息
    pub async fn get_course_user_by_id_impl(
        &self,
        course_user_id: i64,
    ) -> Result<Option<CourseUser>> {
        let result = CourseUsers::find_by_id(course_user_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册失败: {e}")))?;

        Ok(result.map(|m| m.into_course_user()))
    }

    /// 给注册加经验值
    pub async fn add_points_to_course_user_impl(
        &self,
        course_user_id: i64,
        points: f64,
    ) -> Result<bool> {
        let existing = CourseUsers::find_by_id(course_user_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询注册失败: {e}")))?;

        let Some(course_user) = existing else {
            return Ok(false);
        };

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(course_user_id),
            points: Set(course_user.points + points),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("更新经验值失败: {e}")))?;

        Ok(true)
    }
}
