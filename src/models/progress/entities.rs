use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 进度更新方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// 动作型约束：每次调用计数 +1
    Increment,
    /// 分数型约束：取历史最高，低于当前值的上报不回退
    Max,
}

// 进度实体
//
// 不变量：met == (cur_point >= threshold)，每次变更后都要重算。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub constraint_id: i64,
    pub cur_point: f64,
    pub met: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Progress {
    /// 按更新方式演进 cur_point。
    ///
    /// Max 模式与历史实现保持一致：新值先取整再与当前值比较。
    pub fn apply_update(&mut self, mode: ProgressMode, new_value: f64) {
        match mode {
            ProgressMode::Increment => {
                self.cur_point += 1.0;
            }
            ProgressMode::Max => {
                let candidate = new_value.trunc();
                if candidate > self.cur_point {
                    self.cur_point = candidate;
                }
            }
        }
    }

    /// 依据阈值重算 met（含等于）。
    pub fn refresh_met(&mut self, threshold: i64) {
        self.met = self.cur_point >= threshold as f64;
    }
}

/// 一次进度上报的完整结果：更新后的进度 + 本次触发发放的奖励
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub progress: Progress,
    pub granted: Vec<crate::models::rewards::entities::Reward>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(cur_point: f64) -> Progress {
        Progress {
            id: 1,
            user_id: 1,
            constraint_id: 1,
            cur_point,
            met: false,
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_increment_adds_one() {
        let mut p = progress(0.0);
        p.apply_update(ProgressMode::Increment, 0.0);
        p.apply_update(ProgressMode::Increment, 0.0);
        assert_eq!(p.cur_point, 2.0);
    }

    #[test]
    fn test_max_mode_is_monotonic() {
        // 先报 50 再报 30，保持 50
        let mut p = progress(0.0);
        p.apply_update(ProgressMode::Max, 50.0);
        assert_eq!(p.cur_point, 50.0);
        p.apply_update(ProgressMode::Max, 30.0);
        assert_eq!(p.cur_point, 50.0);
        p.apply_update(ProgressMode::Max, 80.0);
        assert_eq!(p.cur_point, 80.0);
    }

    #[test]
    fn test_max_mode_truncates_new_value() {
        let mut p = progress(0.0);
        p.apply_update(ProgressMode::Max, 59.9);
        assert_eq!(p.cur_point, 59.0);
    }

    #[test]
    fn test_met_threshold_is_inclusive() {
        let mut p = progress(9.0);
        p.refresh_met(10);
        assert!(!p.met);

        p.apply_update(ProgressMode::Increment, 0.0);
        p.refresh_met(10);
        assert!(p.met);
    }

    #[test]
    fn test_met_invariant_holds_after_every_update() {
        let mut p = progress(0.0);
        let threshold = 3;
        for _ in 0..5 {
            p.apply_update(ProgressMode::Increment, 0.0);
            p.refresh_met(threshold);
            assert_eq!(p.met, p.cur_point >= threshold as f64);
        }
        assert!(p.met);
    }
}
