use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::constraints::entities::Constraint;

// 规则实体
//
// 规则是约束的 AND 组合：所有约束都满足，规则才触发。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rule.ts")]
pub struct Rule {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_default: bool,
    /// 挂在规则下的约束，按需加载
    pub constraints: Vec<Constraint>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Rule {
    /// 给定每个约束的满足状态，判断规则是否触发。
    /// 空规则不触发（没有约束就没有可满足的条件）。
    pub fn is_satisfied(constraint_met: &[bool]) -> bool {
        !constraint_met.is_empty() && constraint_met.iter().all(|met| *met)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_met_fires() {
        assert!(Rule::is_satisfied(&[true, true, true]));
    }

    #[test]
    fn test_partially_met_does_not_fire() {
        // 部分满足不触发：C1 满足、C2 未满足时不发奖
        assert!(!Rule::is_satisfied(&[true, false]));
        assert!(!Rule::is_satisfied(&[false, true]));
    }

    #[test]
    fn test_empty_rule_does_not_fire() {
        assert!(!Rule::is_satisfied(&[]));
    }
}
