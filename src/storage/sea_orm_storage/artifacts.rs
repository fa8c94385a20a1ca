//! 提交物存储操作

use super::SeaOrmStorage;
use crate::entity::artifact_reviews::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ArtifactReviews,
};
use crate::entity::artifacts::{ActiveModel, Column, Entity as Artifacts};
use crate::errors::{GamiSystemError, Result};
use crate::models::artifacts::{
    entities::{Artifact, ArtifactOwner},
    responses::AssignReviewsResponse,
};
use crate::models::reviews::entities::ReviewStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建提交物
    pub async fn create_artifact_impl(
        &self,
        assignment_id: i64,
        owner: ArtifactOwner,
        file_key: &str,
    ) -> Result<Artifact> {
        let now = chrono::Utc::now().timestamp();

        let (team_id, registration_id) = match owner {
            ArtifactOwner::Team { team_id } => (Some(team_id), None),
            ArtifactOwner::Individual { registration_id } => (None, Some(registration_id)),
        };

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            owner_kind: Set(owner.kind_str().to_string()),
            team_id: Set(team_id),
            registration_id: Set(registration_id),
            file_key: Set(file_key.to_string()),
            uploaded_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("创建提交物失败: {e}")))?;

        Ok(result.into_artifact())
    }

    /// 通过 ID 获取提交物
    pub async fn get_artifact_by_id_impl(&self, artifact_id: i64) -> Result<Option<Artifact>> {
        let result = Artifacts::find_by_id(artifact_id)
            .one(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询提交物失败: {e}")))?;

        Ok(result.map(|m| m.into_artifact()))
    }

    /// 列出作业下的提交物
    pub async fn list_artifacts_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Artifact>> {
        let artifacts = Artifacts::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_desc(Column::UploadedAt)
            .all(&self.db)
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("查询提交物列表失败: {e}")))?;

        Ok(artifacts.into_iter().map(|m| m.into_artifact()).collect())
    }

    /// 批量创建互评任务
    ///
    /// 幂等：同一评审者已有任务时跳过，不报错也不重建。
    pub async fn assign_reviews_impl(
        &self,
        artifact_id: i64,
        reviewer_ids: &[i64],
    ) -> Result<AssignReviewsResponse> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let mut created = Vec::new();
        let mut skipped = Vec::new();

        for &reviewer_id in reviewer_ids {
            let existing = ArtifactReviews::find()
                .filter(ReviewColumn::ArtifactId.eq(artifact_id))
                .filter(ReviewColumn::ReviewerId.eq(reviewer_id))
                .one(&txn)
                .await
                .map_err(|e| {
                    GamiSystemError::database_operation(format!("查询评审任务失败: {e}"))
                })?;

            if existing.is_some() {
                skipped.push(reviewer_id);
                continue;
            }

            let model = ReviewActiveModel {
                artifact_id: Set(artifact_id),
                reviewer_id: Set(reviewer_id),
                status: Set(ReviewStatus::Incomplete.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            let review = model.insert(&txn).await.map_err(|e| {
                GamiSystemError::database_operation(format!("创建评审任务失败: {e}"))
            })?;
            created.push(review.into_review());
        }

        txn.commit()
            .await
            .map_err(|e| GamiSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(AssignReviewsResponse { created, skipped })
    }
}
