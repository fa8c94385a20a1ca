use serde::Deserialize;
use ts_rs::TS;

/// 进度上报请求
///
/// 带 cur_point 走 max 模式（分数型约束）；
/// 空请求体走 increment 模式（动作型约束）。
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct UpdateProgressRequest {
    pub cur_point: Option<f64>,
}
