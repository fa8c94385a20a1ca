use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::InstructorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::CourseName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Description).text().null())
                    .col(
                        ColumnDef::new(Courses::InviteCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Courses::Visible).boolean().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::InstructorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建团队表
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teams::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Teams::TeamName).string().not_null())
                    .col(ColumnDef::new(Teams::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teams::Table, Teams::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课注册表
        manager
            .create_table(
                Table::create()
                    .table(CourseUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseUsers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseUsers::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseUsers::UserId).big_integer().not_null())
                    .col(ColumnDef::new(CourseUsers::Role).string().not_null())
                    .col(ColumnDef::new(CourseUsers::Points).double().not_null())
                    .col(ColumnDef::new(CourseUsers::TeamId).big_integer().null())
                    .col(
                        ColumnDef::new(CourseUsers::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseUsers::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseUsers::Table, CourseUsers::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseUsers::Table, CourseUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseUsers::Table, CourseUsers::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一用户在同一课程只注册一次
        manager
            .create_index(
                Index::create()
                    .name("idx_course_users_course_user")
                    .table(CourseUsers::Table)
                    .col(CourseUsers::CourseId)
                    .col(CourseUsers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建作业任务表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(
                        ColumnDef::new(Assignments::AssignmentType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::DateDue).big_integer().null())
                    .col(ColumnDef::new(Assignments::TotalScore).double().not_null())
                    .col(ColumnDef::new(Assignments::Weight).double().not_null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建互评问卷表
        manager
            .create_table(
                Table::create()
                    .table(FeedbackSurveys::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeedbackSurveys::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSurveys::AssignmentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSurveys::TemplateName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeedbackSurveys::Instructions).text().null())
                    .col(
                        ColumnDef::new(FeedbackSurveys::DateDue)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSurveys::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeedbackSurveys::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeedbackSurveys::Table, FeedbackSurveys::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建问卷分区表
        manager
            .create_table(
                Table::create()
                    .table(SurveySections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SurveySections::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SurveySections::SurveyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SurveySections::Title).string().not_null())
                    .col(
                        ColumnDef::new(SurveySections::IsRequired)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SurveySections::Position)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SurveySections::Table, SurveySections::SurveyId)
                            .to(FeedbackSurveys::Table, FeedbackSurveys::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::SectionId).big_integer().not_null())
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(ColumnDef::new(Questions::QuestionType).string().not_null())
                    .col(ColumnDef::new(Questions::NumberOfScale).integer().null())
                    .col(ColumnDef::new(Questions::NumberOfText).integer().null())
                    .col(ColumnDef::new(Questions::IsRequired).boolean().not_null())
                    .col(ColumnDef::new(Questions::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Questions::Table, Questions::SectionId)
                            .to(SurveySections::Table, SurveySections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选项表
        manager
            .create_table(
                Table::create()
                    .table(OptionChoices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OptionChoices::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OptionChoices::Text).text().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建题目-选项关联表（选项顺序 = 插入顺序）
        manager
            .create_table(
                Table::create()
                    .table(QuestionOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionOptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(QuestionOptions::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuestionOptions::OptionChoiceId)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionOptions::Table, QuestionOptions::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionOptions::Table, QuestionOptions::OptionChoiceId)
                            .to(OptionChoices::Table, OptionChoices::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交物表
        manager
            .create_table(
                Table::create()
                    .table(Artifacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Artifacts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Artifacts::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Artifacts::OwnerKind).string().not_null())
                    .col(ColumnDef::new(Artifacts::TeamId).big_integer().null())
                    .col(ColumnDef::new(Artifacts::RegistrationId).big_integer().null())
                    .col(ColumnDef::new(Artifacts::FileKey).string().not_null())
                    .col(
                        ColumnDef::new(Artifacts::UploadedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Artifacts::Table, Artifacts::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Artifacts::Table, Artifacts::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Artifacts::Table, Artifacts::RegistrationId)
                            .to(CourseUsers::Table, CourseUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建互评任务表
        manager
            .create_table(
                Table::create()
                    .table(ArtifactReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArtifactReviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArtifactReviews::ArtifactId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtifactReviews::ReviewerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArtifactReviews::Status).string().not_null())
                    .col(
                        ColumnDef::new(ArtifactReviews::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ArtifactReviews::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ArtifactReviews::Table, ArtifactReviews::ArtifactId)
                            .to(Artifacts::Table, Artifacts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ArtifactReviews::Table, ArtifactReviews::ReviewerId)
                            .to(CourseUsers::Table, CourseUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一评审者对同一提交物只有一个评审任务
        manager
            .create_index(
                Index::create()
                    .name("idx_artifact_reviews_artifact_reviewer")
                    .table(ArtifactReviews::Table)
                    .col(ArtifactReviews::ArtifactId)
                    .col(ArtifactReviews::ReviewerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建答案表
        manager
            .create_table(
                Table::create()
                    .table(Answers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Answers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Answers::ArtifactReviewId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Answers::QuestionOptionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Answers::AnswerText).text().not_null())
                    .col(ColumnDef::new(Answers::Page).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Answers::Table, Answers::ArtifactReviewId)
                            .to(ArtifactReviews::Table, ArtifactReviews::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Answers::Table, Answers::QuestionOptionId)
                            .to(QuestionOptions::Table, QuestionOptions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Answers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ArtifactReviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artifacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionOptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OptionChoices::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SurveySections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeedbackSurveys::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Role,
    Status,
    DisplayName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    InstructorId,
    CourseName,
    Description,
    InviteCode,
    Visible,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    CourseId,
    TeamName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CourseUsers {
    Table,
    Id,
    CourseId,
    UserId,
    Role,
    Points,
    TeamId,
    JoinedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    AssignmentType,
    DateDue,
    TotalScore,
    Weight,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeedbackSurveys {
    Table,
    Id,
    AssignmentId,
    TemplateName,
    Instructions,
    DateDue,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SurveySections {
    Table,
    Id,
    SurveyId,
    Title,
    IsRequired,
    Position,
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    SectionId,
    Text,
    QuestionType,
    NumberOfScale,
    NumberOfText,
    IsRequired,
    Position,
}

#[derive(DeriveIden)]
enum OptionChoices {
    Table,
    Id,
    Text,
}

#[derive(DeriveIden)]
enum QuestionOptions {
    Table,
    Id,
    QuestionId,
    OptionChoiceId,
}

#[derive(DeriveIden)]
enum Artifacts {
    Table,
    Id,
    AssignmentId,
    OwnerKind,
    TeamId,
    RegistrationId,
    FileKey,
    UploadedAt,
}

#[derive(DeriveIden)]
enum ArtifactReviews {
    Table,
    Id,
    ArtifactId,
    ReviewerId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Answers {
    Table,
    Id,
    ArtifactReviewId,
    QuestionOptionId,
    AnswerText,
    Page,
}
