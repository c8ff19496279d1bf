// ==========================================
// 仓储派工决策引擎 - 派工建议引擎
// ==========================================
// 职责: 为未分配的可用拣选工给出库区建议
// 算法: 单次全局贪心——全部未分配者收敛到当前
//       工作集中需求最高的同一个库区,不做负载均衡
// ==========================================

use crate::domain::labor::{Picker, PickerAssignment};
use crate::domain::order::ScoredOrder;
use crate::domain::types::Availability;
use crate::domain::zone::ZoneDemand;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// AssignmentEngine - 派工建议引擎
// ==========================================
pub struct AssignmentEngine {
    // 无状态引擎,不需要注入依赖
}

impl AssignmentEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成派工建议
    ///
    /// 规则:
    /// - 仅 Available 拣选工进入输出,按名册顺序
    /// - 已有真实库区的保持不变
    /// - 未分配的统一指向需求最高库区（单次全局贪心）
    ///
    /// 边界处理: 需求表为空（工作集无订单）时未分配者维持
    /// 未分配（zone=None）,不猜库区
    ///
    /// 纯函数: 相同输入重复执行得到相同映射（幂等）
    #[instrument(skip(self, roster, orders), fields(roster = roster.len(), orders = orders.len()))]
    pub fn assign(&self, roster: &[Picker], orders: &[ScoredOrder]) -> Vec<PickerAssignment> {
        let top_zone = self.top_demand_zone(orders);
        if top_zone.is_none() {
            debug!("需求表为空,未分配拣选工维持未分配");
        }

        roster
            .iter()
            .filter(|p| p.availability == Availability::Available)
            .map(|picker| PickerAssignment {
                picker_id: picker.picker_id.clone(),
                primary_task: picker.primary_task.clone(),
                zone: picker
                    .assigned_zone
                    .clone()
                    .or_else(|| top_zone.clone()),
            })
            .collect()
    }

    /// 按库区统计工作集订单需求,降序
    ///
    /// 同数并列按库区名升序打破,保证确定性
    pub fn zone_demand(&self, orders: &[ScoredOrder]) -> Vec<ZoneDemand> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for scored in orders {
            *counts.entry(scored.order.zone.as_str()).or_insert(0) += 1;
        }

        let mut demand: Vec<ZoneDemand> = counts
            .into_iter()
            .map(|(zone, order_count)| ZoneDemand {
                zone: zone.to_string(),
                order_count,
            })
            .collect();

        demand.sort_by(|a, b| {
            b.order_count
                .cmp(&a.order_count)
                .then_with(|| a.zone.cmp(&b.zone))
        });
        demand
    }

    /// 需求最高的库区（需求表为空时为 None）
    pub fn top_demand_zone(&self, orders: &[ScoredOrder]) -> Option<String> {
        self.zone_demand(orders).into_iter().next().map(|d| d.zone)
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
