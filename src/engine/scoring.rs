// ==========================================
// 仓储派工决策引擎 - 优先级评分引擎
// ==========================================
// 职责: 按订单字段 + 基准时间计算综合优先级分
// 红线: 规则固定加法制,无配置项;分值域 [1,6]
// 输入: Order + reference_time
// 输出: ScoredOrder（按分值降序,稳定排序保持表内原序）
// ==========================================

use crate::domain::order::{Order, ScoredOrder};
use crate::domain::types::PriorityLevel;
use chrono::NaiveDateTime;
use tracing::instrument;

/// 紧急窗口（小时）: 剩余时间严格小于该值加分
pub const URGENT_WINDOW_HOURS: f64 = 4.0;
/// 紧急加分
pub const URGENT_BONUS: i32 = 2;
/// 大单 SKU 阈值: 严格大于该值加分
pub const LARGE_ORDER_SKU_THRESHOLD: u32 = 10;
/// 大单加分
pub const LARGE_ORDER_BONUS: i32 = 1;

// ==========================================
// ScoringEngine - 优先级评分引擎
// ==========================================
pub struct ScoringEngine {
    // 无状态引擎,不需要注入依赖
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 批量评分并按分值降序排列
    ///
    /// 排序为稳定排序: 同分订单保持输入（工作簿）原序
    ///
    /// # 参数
    /// - `orders`: 工作集订单（可能已过滤）
    /// - `reference_time`: 本趟基准时间
    ///
    /// # 返回
    /// 评分订单列表,priority_score 降序
    #[instrument(skip(self, orders), fields(count = orders.len()))]
    pub fn score_backlog(&self, orders: &[Order], reference_time: NaiveDateTime) -> Vec<ScoredOrder> {
        let mut scored: Vec<ScoredOrder> = orders
            .iter()
            .map(|order| self.score_order(order, reference_time))
            .collect();

        // 稳定排序,降序
        scored.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
        scored
    }

    /// 单个订单评分
    pub fn score_order(&self, order: &Order, reference_time: NaiveDateTime) -> ScoredOrder {
        let hours_until_due = self.hours_until_due(order.due_time, reference_time);
        let priority_score = self.score_from_parts(order.priority, hours_until_due, order.sku_count);

        ScoredOrder {
            order: order.clone(),
            hours_until_due,
            priority_score,
        }
    }

    /// 距截止小时数（可为负=已超期,秒级精度）
    pub fn hours_until_due(&self, due_time: NaiveDateTime, reference_time: NaiveDateTime) -> f64 {
        (due_time - reference_time).num_seconds() as f64 / 3600.0
    }

    // ==========================================
    // 评分规则 (固定加法制)
    // ==========================================

    /// 从三个因子计算分值
    ///
    /// 规则:
    /// 1) 基础分: High=3 / Medium=2 / 其他=1（默认分支）
    /// 2) 紧急加分: hours_until_due < 4（严格,含负值/超期）→ +2
    /// 3) 大单加分: sku_count > 10（严格）→ +1
    ///
    /// 边界处理:
    /// - hours_until_due 非有限值（NaN/∞）→ 视为不紧急,不加分
    ///
    /// # 返回
    /// 整数分值 ∈ [1, 6]
    pub fn score_from_parts(
        &self,
        priority: PriorityLevel,
        hours_until_due: f64,
        sku_count: u32,
    ) -> i32 {
        let mut score = match priority {
            PriorityLevel::High => 3,
            PriorityLevel::Medium => 2,
            PriorityLevel::Low => 1,
        };

        // NaN 与任何值比较均为 false,自然落入"不紧急";
        // 正无穷也不可能小于窗口,只需排除负无穷
        if hours_until_due.is_finite() && hours_until_due < URGENT_WINDOW_HOURS {
            score += URGENT_BONUS;
        }

        if sku_count > LARGE_ORDER_SKU_THRESHOLD {
            score += LARGE_ORDER_BONUS;
        }

        score
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_nan_hours_not_urgent() {
        let engine = ScoringEngine::new();
        assert_eq!(
            engine.score_from_parts(PriorityLevel::High, f64::NAN, 5),
            3
        );
    }

    #[test]
    fn test_score_negative_infinity_not_urgent() {
        let engine = ScoringEngine::new();
        assert_eq!(
            engine.score_from_parts(PriorityLevel::Low, f64::NEG_INFINITY, 5),
            1
        );
    }

    #[test]
    fn test_overdue_counts_as_urgent() {
        let engine = ScoringEngine::new();
        assert_eq!(
            engine.score_from_parts(PriorityLevel::Medium, -3.5, 5),
            4
        );
    }

    #[test]
    fn test_boundary_values_are_strict() {
        let engine = ScoringEngine::new();
        // 恰好 4 小时不算紧急
        assert_eq!(engine.score_from_parts(PriorityLevel::Low, 4.0, 5), 1);
        // 恰好 10 个 SKU 不算大单
        assert_eq!(engine.score_from_parts(PriorityLevel::Low, 10.0, 10), 1);
    }
}
