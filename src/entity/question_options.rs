//! 题目-选项关联实体
//!
//! 题目的选项顺序就是关联行的插入顺序（主键升序），报表聚合依赖该顺序。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "question_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub question_id: i64,
    pub option_choice_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
    #[sea_orm(
        belongs_to = "super::option_choices::Entity",
        from = "Column::OptionChoiceId",
        to = "super::option_choices::Column::Id"
    )]
    OptionChoice,
    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<super::option_choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OptionChoice.def()
    }
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
