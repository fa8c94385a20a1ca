//! 关键词提取
//!
//! NLP 管线是外部协作者，核心只定义 trait 和文本收集口径；
//! 默认实现是一个词频统计器，足够本地联调和测试使用。

use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::reports::responses::KeywordReportResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 关键词提取协作者
pub trait KeywordExtractor: Send + Sync {
    /// 从拼接后的文本中提取关键词及权重（0.0 ~ 1.0）
    fn extract(&self, text: &str, top_n: usize) -> HashMap<String, f64>;
}

/// 词频关键词提取器（默认实现）
///
/// 权重 = 词频 / 最高词频；只统计长度大于 2 的小写词，常见虚词剔除。
pub struct FrequencyKeywordExtractor;

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "was", "but", "not", "you", "this", "that", "with", "have", "has",
    "had", "they", "them", "from", "very", "would", "could", "should", "there", "their", "what",
    "when", "which", "your", "some", "more", "about", "also", "been", "were", "will", "than",
    "then", "into", "because", "these", "those", "does", "just", "like", "well", "good",
];

impl KeywordExtractor for FrequencyKeywordExtractor {
    fn extract(&self, text: &str, top_n: usize) -> HashMap<String, f64> {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .map(|w| w.to_lowercase())
            .filter(|w| w.len() > 2)
            .filter(|w| !STOPWORDS.contains(&w.as_str()))
        {
            *counts.entry(word).or_default() += 1;
        }

        let Some(&max_count) = counts.values().max() else {
            return HashMap::new();
        };

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        // 频次相同按字典序，保证输出稳定
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(top_n);

        ranked
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max_count as f64))
            .collect()
    }
}

/// 提交物关键词
/// GET /artifacts/{id}/keywords
pub async fn get_artifact_keywords(
    service: &ReportService,
    request: &HttpRequest,
    artifact_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 提交物必须存在
    match storage.get_artifact_by_id(artifact_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ArtifactNotFound,
                "Artifact not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交物失败: {e}"),
                )),
            );
        }
    }

    let answers = match storage.list_answers_by_artifact(artifact_id).await {
        Ok(answers) => answers,
        Err(e) => {
            error!("Failed to load answers for artifact {}: {}", artifact_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询答案失败: {e}"),
                )),
            );
        }
    };

    let text = super::aggregate::collect_free_text(&answers).join(" ");
    let keywords = FrequencyKeywordExtractor.extract(&text, 20);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        KeywordReportResponse { keywords },
        "查询成功",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_ranks_by_frequency() {
        let text = "parser parser parser tokenizer tokenizer grammar";
        let keywords = FrequencyKeywordExtractor.extract(text, 10);
        assert_eq!(keywords["parser"], 1.0);
        assert!(keywords["tokenizer"] < 1.0);
        assert!(keywords["grammar"] < keywords["tokenizer"]);
    }

    #[test]
    fn test_extractor_filters_stopwords_and_short_words() {
        let text = "the design is ok and the idea is ok";
        let keywords = FrequencyKeywordExtractor.extract(text, 10);
        assert!(!keywords.contains_key("the"));
        assert!(!keywords.contains_key("ok"));
        assert!(keywords.contains_key("design"));
        assert!(keywords.contains_key("idea"));
    }

    #[test]
    fn test_extractor_empty_text() {
        assert!(FrequencyKeywordExtractor.extract("", 10).is_empty());
    }

    #[test]
    fn test_extractor_respects_top_n() {
        let text = "alpha beta gamma delta epsilon";
        let keywords = FrequencyKeywordExtractor.extract(text, 2);
        assert_eq!(keywords.len(), 2);
    }
}
