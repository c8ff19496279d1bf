// ==========================================
// 仓储派工决策引擎 - 评估趟编排器
// ==========================================
// 职责: 一次用户交互 = 一趟完整重算
// 流程: 时间上下文 → 过滤 → 评分 → 班次派生 → 告警 → 派工 → 汇总
// 红线: 基准时间每趟采样一次;趟内三表只读;趟间无共享状态
// ==========================================

use crate::domain::alert::AlertReport;
use crate::domain::dataset::Dataset;
use crate::domain::labor::{Picker, PickerAssignment, PickerView};
use crate::domain::order::ScoredOrder;
use crate::domain::types::Availability;
use crate::engine::alerts::{AlertEngine, LaborAlertRule};
use crate::engine::assignment::AssignmentEngine;
use crate::engine::filter::FilterCriteria;
use crate::engine::scoring::ScoringEngine;
use crate::engine::shift::ShiftEngine;
use crate::engine::time_context::TimeContext;
use crate::perf::PerfGuard;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// EvaluationRequest - 一趟评估的用户参数
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub time: TimeContext,
    pub filter: FilterCriteria,
}

// ==========================================
// BacklogSummary - 汇总指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogSummary {
    pub total_orders: usize,      // 工作集订单总数
    pub zone_count: usize,        // 工作集内不同库区数
    pub available_pickers: usize, // 工作集内可用拣选工数
}

// ==========================================
// EvaluationResult - 一趟评估的完整输出
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub pass_id: String,                    // 本趟标识（UUID）
    pub reference_time: NaiveDateTime,      // 本趟唯一基准时间
    pub summary: BacklogSummary,            // 汇总指标
    pub orders: Vec<ScoredOrder>,           // 评分订单,分值降序
    pub roster: Vec<PickerView>,            // 名册视图（模拟时钟下含班次状态）
    pub alert_report: AlertReport,          // 告警报告（含显式全清）
    pub assignments: Vec<PickerAssignment>, // 派工建议
}

// ==========================================
// DispatchOrchestrator - 评估趟编排器
// ==========================================
pub struct DispatchOrchestrator {
    scoring: ScoringEngine,
    shift: ShiftEngine,
    alerts: AlertEngine,
    assignment: AssignmentEngine,
}

impl DispatchOrchestrator {
    pub fn new() -> Self {
        Self {
            scoring: ScoringEngine::new(),
            shift: ShiftEngine::new(),
            alerts: AlertEngine::new(),
            assignment: AssignmentEngine::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行一趟评估（采样一次墙钟）
    pub fn run(&self, dataset: &Dataset, request: &EvaluationRequest) -> EvaluationResult {
        let _perf = PerfGuard::new("evaluation_pass");
        self.run_at(dataset, request, Local::now().naive_local())
    }

    /// 执行一趟评估（墙钟由调用方传入,纯函数,便于测试）
    #[instrument(skip(self, dataset, request), fields(orders = dataset.orders.len()))]
    pub fn run_at(
        &self,
        dataset: &Dataset,
        request: &EvaluationRequest,
        now: NaiveDateTime,
    ) -> EvaluationResult {
        // 1. 基准时间: 本趟唯一,所有行共用
        let reference_time = request.time.resolve(now);

        // 2. 收窄工作集
        let working_orders = request.filter.apply_orders(&dataset.orders);
        let working_roster = request.filter.apply_roster(&dataset.roster);

        // 3. 评分 + 稳定降序
        let scored = self.scoring.score_backlog(&working_orders, reference_time);

        // 4. 班次派生: 模拟时钟 且 名册携带班次数据
        let shift_aware = request.time.is_simulated()
            && working_roster.iter().any(|p| p.shift_start.is_some());
        let (roster_view, labor_rule) = match (shift_aware, request.time.simulated_hour()) {
            (true, Some(hour)) => (
                self.shift.derive_roster(&working_roster, hour),
                LaborAlertRule::ShiftClock,
            ),
            _ => (
                working_roster.iter().cloned().map(PickerView::plain).collect(),
                LaborAlertRule::Availability,
            ),
        };

        // 5. 告警
        let alert_report =
            self.alerts
                .report(&scored, &dataset.zones, &roster_view, labor_rule, &request.time);

        // 6. 派工建议
        let assignments = self.assignment.assign(&working_roster, &scored);

        // 7. 汇总指标
        let summary = Self::summarize(&scored, &working_roster);

        let result = EvaluationResult {
            pass_id: Uuid::new_v4().to_string(),
            reference_time,
            summary,
            orders: scored,
            roster: roster_view,
            alert_report,
            assignments,
        };

        info!(
            pass_id = %result.pass_id,
            alert_status = %result.alert_report.status,
            alerts = result.alert_report.alerts.len(),
            assignments = result.assignments.len(),
            "评估趟完成"
        );

        result
    }

    fn summarize(scored: &[ScoredOrder], working_roster: &[Picker]) -> BacklogSummary {
        let zone_count = scored
            .iter()
            .map(|s| s.order.zone.as_str())
            .collect::<HashSet<_>>()
            .len();
        let available_pickers = working_roster
            .iter()
            .filter(|p| p.availability == Availability::Available)
            .count();

        BacklogSummary {
            total_orders: scored.len(),
            zone_count,
            available_pickers,
        }
    }
}

impl Default for DispatchOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
