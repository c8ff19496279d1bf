// ==========================================
// 仓储派工决策引擎 - 阈值告警引擎
// ==========================================
// 职责: 对当前工作集求值固定规则集,产出有序告警
// 规则顺序: 库区过载 → 闲置/班次外 → SLA 风险
// 红线: 无告警时输出显式全清报告,不是空列表
// ==========================================

use crate::domain::alert::{Alert, AlertReport};
use crate::domain::labor::PickerView;
use crate::domain::order::ScoredOrder;
use crate::domain::types::{AlertKind, ShiftStatus};
use crate::domain::zone::ZoneActivity;
use crate::engine::time_context::TimeContext;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

/// 库区过载比阈值: 订单数/在岗拣选工数 严格大于该值告警
pub const OVERLOAD_RATIO_THRESHOLD: f64 = 10.0;
/// SLA 风险窗口（小时）: 高优先级且剩余严格小于该值
pub const SLA_WINDOW_HOURS: f64 = 2.0;

/// 全清文案（实时变体）
pub const ALL_CLEAR_REAL_TIME: &str = "No critical alerts at the moment.";
/// 全清文案（模拟时钟变体）
pub const ALL_CLEAR_SIMULATED: &str = "No major alerts at this simulated hour.";

// ==========================================
// LaborAlertRule - 劳动力规则变体
// ==========================================
// Availability: 不可用 或 未分配 计为闲置
// ShiftClock:   班次状态为 Off-shift 计为班次外
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaborAlertRule {
    Availability,
    ShiftClock,
}

// ==========================================
// AlertEngine - 阈值告警引擎
// ==========================================
pub struct AlertEngine {
    // 无状态引擎,不需要注入依赖
}

impl AlertEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 求值规则集并包装为报告
    ///
    /// 全清文案按时间上下文变体选择
    pub fn report(
        &self,
        orders: &[ScoredOrder],
        zones: &[ZoneActivity],
        roster: &[PickerView],
        labor_rule: LaborAlertRule,
        time_context: &TimeContext,
    ) -> AlertReport {
        let alerts = self.evaluate(orders, zones, roster, labor_rule);
        if alerts.is_empty() {
            let message = if time_context.is_simulated() {
                ALL_CLEAR_SIMULATED
            } else {
                ALL_CLEAR_REAL_TIME
            };
            AlertReport::all_clear(message)
        } else {
            AlertReport::triggered(alerts)
        }
    }

    /// 求值固定规则集
    ///
    /// 空输入表自然短路: 空订单集不产生过载/SLA 告警,
    /// 劳动力规则仍照常求值
    #[instrument(skip_all, fields(orders = orders.len(), zones = zones.len(), roster = roster.len()))]
    pub fn evaluate(
        &self,
        orders: &[ScoredOrder],
        zones: &[ZoneActivity],
        roster: &[PickerView],
        labor_rule: LaborAlertRule,
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();

        // 规则1: 库区过载（逐库区,按表内顺序）
        alerts.extend(self.evaluate_zone_overload(orders, zones));

        // 规则2: 闲置/班次外（单条汇总）
        if let Some(alert) = self.evaluate_labor(roster, labor_rule) {
            alerts.push(alert);
        }

        // 规则3: SLA 风险（单条汇总）
        if let Some(alert) = self.evaluate_sla_risk(orders) {
            alerts.push(alert);
        }

        alerts
    }

    // ==========================================
    // 规则实现
    // ==========================================

    /// 规则1: 库区过载
    ///
    /// ratio = 工作集内该库区订单数 / Active_Pickers,严格大于阈值告警
    ///
    /// 边界处理: Active_Pickers == 0 的库区整体跳过
    /// （比值无定义;有单无人的情况由导入校验与数据复核暴露）
    fn evaluate_zone_overload(&self, orders: &[ScoredOrder], zones: &[ZoneActivity]) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for zone in zones {
            if zone.active_pickers == 0 {
                continue;
            }

            let orders_in_zone = orders
                .iter()
                .filter(|s| s.order.zone == zone.zone)
                .count();
            let ratio = orders_in_zone as f64 / zone.active_pickers as f64;

            if ratio > OVERLOAD_RATIO_THRESHOLD {
                alerts.push(Alert {
                    kind: AlertKind::ZoneOverload,
                    message: format!(
                        "Zone {} is overloaded: {} orders / {} pickers",
                        zone.zone, orders_in_zone, zone.active_pickers
                    ),
                    detail: json!({
                        "zone": zone.zone,
                        "orders": orders_in_zone,
                        "active_pickers": zone.active_pickers,
                        "ratio": ratio,
                        "threshold": OVERLOAD_RATIO_THRESHOLD,
                    })
                    .to_string(),
                });
            }
        }

        alerts
    }

    /// 规则2: 闲置/班次外拣选工（计数 > 0 时单条汇总）
    fn evaluate_labor(&self, roster: &[PickerView], labor_rule: LaborAlertRule) -> Option<Alert> {
        match labor_rule {
            LaborAlertRule::Availability => {
                let idle = roster.iter().filter(|v| v.picker.is_idle()).count();
                if idle == 0 {
                    return None;
                }
                Some(Alert {
                    kind: AlertKind::IdleWorkers,
                    message: format!("{} pickers are currently unassigned or unavailable", idle),
                    detail: json!({
                        "rule": "AVAILABILITY",
                        "idle_count": idle,
                        "roster_size": roster.len(),
                    })
                    .to_string(),
                })
            }
            LaborAlertRule::ShiftClock => {
                let off_shift = roster
                    .iter()
                    .filter(|v| v.shift_status == Some(ShiftStatus::OffShift))
                    .count();
                if off_shift == 0 {
                    return None;
                }
                Some(Alert {
                    kind: AlertKind::OffShiftWorkers,
                    message: format!("{} workers are currently off-shift", off_shift),
                    detail: json!({
                        "rule": "SHIFT_CLOCK",
                        "off_shift_count": off_shift,
                        "roster_size": roster.len(),
                    })
                    .to_string(),
                })
            }
        }
    }

    /// 规则3: SLA 风险订单（计数 > 0 时单条汇总）
    ///
    /// 边界: 剩余恰好等于窗口阈值不触发（严格小于）
    fn evaluate_sla_risk(&self, orders: &[ScoredOrder]) -> Option<Alert> {
        let at_risk = orders
            .iter()
            .filter(|s| s.is_sla_risk(SLA_WINDOW_HOURS))
            .count();
        if at_risk == 0 {
            return None;
        }

        Some(Alert {
            kind: AlertKind::SlaRisk,
            message: format!(
                "{} high-priority orders are at SLA risk (< 2 hrs left)",
                at_risk
            ),
            detail: json!({
                "at_risk_count": at_risk,
                "window_hours": SLA_WINDOW_HOURS,
            })
            .to_string(),
        })
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}
