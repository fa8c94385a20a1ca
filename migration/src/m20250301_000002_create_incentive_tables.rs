use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建约束表
        manager
            .create_table(
                Table::create()
                    .table(Constraints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Constraints::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Constraints::Url)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Constraints::Threshold)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Constraints::Description).text().null())
                    .col(ColumnDef::new(Constraints::Kind).string().not_null())
                    .col(
                        ColumnDef::new(Constraints::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Constraints::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建规则表
        manager
            .create_table(
                Table::create()
                    .table(Rules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rules::Name).string().not_null())
                    .col(ColumnDef::new(Rules::Description).text().null())
                    .col(ColumnDef::new(Rules::IsDefault).boolean().not_null())
                    .col(ColumnDef::new(Rules::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rules::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建规则-约束关联表
        manager
            .create_table(
                Table::create()
                    .table(RuleConstraints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RuleConstraints::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RuleConstraints::RuleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RuleConstraints::ConstraintId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RuleConstraints::Table, RuleConstraints::RuleId)
                            .to(Rules::Table, Rules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(RuleConstraints::Table, RuleConstraints::ConstraintId)
                            .to(Constraints::Table, Constraints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一约束在同一规则下只挂一次
        manager
            .create_index(
                Index::create()
                    .name("idx_rule_constraints_rule_constraint")
                    .table(RuleConstraints::Table)
                    .col(RuleConstraints::RuleId)
                    .col(RuleConstraints::ConstraintId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建进度表
        manager
            .create_table(
                Table::create()
                    .table(Progress::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Progress::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Progress::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Progress::ConstraintId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Progress::CurPoint).double().not_null())
                    .col(ColumnDef::new(Progress::Met).boolean().not_null())
                    .col(ColumnDef::new(Progress::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Progress::Table, Progress::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Progress::Table, Progress::ConstraintId)
                            .to(Constraints::Table, Constraints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个用户对每个约束只有一行进度
        manager
            .create_index(
                Index::create()
                    .name("idx_progress_user_constraint")
                    .table(Progress::Table)
                    .col(Progress::UserId)
                    .col(Progress::ConstraintId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建奖励表
        manager
            .create_table(
                Table::create()
                    .table(Rewards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rewards::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rewards::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Rewards::RuleId).big_integer().null())
                    .col(ColumnDef::new(Rewards::Name).string().not_null())
                    .col(ColumnDef::new(Rewards::Description).text().null())
                    .col(ColumnDef::new(Rewards::RewardType).string().not_null())
                    .col(ColumnDef::new(Rewards::ExpPoints).big_integer().not_null())
                    .col(ColumnDef::new(Rewards::Inventory).big_integer().null())
                    .col(ColumnDef::new(Rewards::Quantity).big_integer().not_null())
                    .col(ColumnDef::new(Rewards::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Rewards::Picture).string().null())
                    .col(ColumnDef::new(Rewards::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rewards::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rewards::Table, Rewards::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rewards::Table, Rewards::RuleId)
                            .to(Rules::Table, Rules::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建用户奖励记录表
        manager
            .create_table(
                Table::create()
                    .table(UserRewards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRewards::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserRewards::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(UserRewards::RewardId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserRewards::Fulfilled).boolean().not_null())
                    .col(
                        ColumnDef::new(UserRewards::GrantedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRewards::Table, UserRewards::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserRewards::Table, UserRewards::RewardId)
                            .to(Rewards::Table, Rewards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 规则路径的幂等发放依赖这个唯一索引（insert-on-conflict-do-nothing）
        manager
            .create_index(
                Index::create()
                    .name("idx_user_rewards_user_reward")
                    .table(UserRewards::Table)
                    .col(UserRewards::UserId)
                    .col(UserRewards::RewardId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRewards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rewards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Progress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RuleConstraints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Constraints::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Constraints {
    Table,
    Id,
    Url,
    Threshold,
    Description,
    Kind,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rules {
    Table,
    Id,
    Name,
    Description,
    IsDefault,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RuleConstraints {
    Table,
    Id,
    RuleId,
    ConstraintId,
}

#[derive(DeriveIden)]
enum Progress {
    Table,
    Id,
    UserId,
    ConstraintId,
    CurPoint,
    Met,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Rewards {
    Table,
    Id,
    CourseId,
    RuleId,
    Name,
    Description,
    RewardType,
    ExpPoints,
    Inventory,
    Quantity,
    IsActive,
    Picture,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserRewards {
    Table,
    Id,
    UserId,
    RewardId,
    Fulfilled,
    GrantedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}
