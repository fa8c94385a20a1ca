use crate::models::surveys::entities::QuestionType;

/// 一条评审答案的聚合视图（答案 + 题目上下文的扁平连接结果）
///
/// 聚合函数只消费这个结构，不回查数据库。
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub review_id: i64,
    pub question_id: i64,
    pub section_title: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub number_of_scale: Option<i32>,
    pub answer_text: String,
    pub page: Option<i32>,
}

/// 聚合所需的题目描述（含按创建顺序排列的选项文本）
#[derive(Debug, Clone)]
pub struct QuestionSpec {
    pub question_id: i64,
    pub section_title: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub number_of_scale: Option<i32>,
    pub option_choices: Vec<String>,
}
