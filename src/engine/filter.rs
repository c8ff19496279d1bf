// ==========================================
// 仓储派工决策引擎 - 工作集过滤器
// ==========================================
// 职责: 评分/告警/派工之前按多选条件收窄工作集
// 红线: 过滤只发生一次（趟首）,引擎内部不再二次过滤
// ==========================================

use crate::domain::labor::Picker;
use crate::domain::order::Order;
use crate::domain::types::PriorityLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// FilterCriteria - 多选过滤条件
// ==========================================
// None = 不限制（UI 默认全选）;Some(空集) = 全部排除
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub zones: Option<HashSet<String>>,            // 订单: 库区多选
    pub tasks: Option<HashSet<String>>,            // 订单: 任务多选
    pub priorities: Option<HashSet<PriorityLevel>>, // 订单: 优先级多选
    pub skills: Option<HashSet<String>>,           // 名册: 技能等级多选
}

impl FilterCriteria {
    /// 不限制任何维度
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// 过滤订单工作集（库区 ∧ 任务 ∧ 优先级）
    pub fn apply_orders(&self, orders: &[Order]) -> Vec<Order> {
        orders
            .iter()
            .filter(|o| Self::keeps(&self.zones, &o.zone))
            .filter(|o| Self::keeps(&self.tasks, &o.task))
            .filter(|o| {
                self.priorities
                    .as_ref()
                    .map(|set| set.contains(&o.priority))
                    .unwrap_or(true)
            })
            .cloned()
            .collect()
    }

    /// 过滤名册工作集（技能）
    pub fn apply_roster(&self, roster: &[Picker]) -> Vec<Picker> {
        roster
            .iter()
            .filter(|p| Self::keeps(&self.skills, &p.skill_level))
            .cloned()
            .collect()
    }

    fn keeps(facet: &Option<HashSet<String>>, value: &str) -> bool {
        facet.as_ref().map(|set| set.contains(value)).unwrap_or(true)
    }
}
