// ==========================================
// DispatchOrchestrator 评估趟端到端测试
// ==========================================
// 测试目标: 一次交互 = 一趟完整重算
// 覆盖范围: 基准时间解析/模拟小时平移性质/班次派生切换/
//           过滤收窄/空数据集短路/汇总指标
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use flowforge_engine::domain::dataset::Dataset;
use flowforge_engine::domain::labor::Picker;
use flowforge_engine::domain::order::Order;
use flowforge_engine::domain::types::{AlertKind, AlertStatus, Availability, PriorityLevel, ShiftStatus};
use flowforge_engine::domain::zone::ZoneActivity;
use flowforge_engine::engine::{
    DispatchOrchestrator, EvaluationRequest, FilterCriteria, TimeContext,
};

// ==========================================
// 测试辅助函数
// ==========================================

fn wall_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(9, 17, 30)
        .unwrap()
}

fn due_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn create_test_order(order_id: &str, zone: &str, task: &str, priority: PriorityLevel, due_hour: u32) -> Order {
    Order {
        order_id: order_id.to_string(),
        zone: zone.to_string(),
        task: task.to_string(),
        priority,
        sku_count: 5,
        due_time: due_at(due_hour),
    }
}

fn create_test_picker(picker_id: &str, skill: &str, shift_start_hour: Option<u32>) -> Picker {
    Picker {
        picker_id: picker_id.to_string(),
        skill_level: skill.to_string(),
        availability: Availability::Available,
        assigned_zone: Some("A".to_string()),
        primary_task: "Picking".to_string(),
        shift_start: shift_start_hour.map(due_at),
    }
}

fn create_test_dataset() -> Dataset {
    Dataset::new(
        vec![
            create_test_order("O1", "A", "Picking", PriorityLevel::High, 18),
            create_test_order("O2", "A", "Packing", PriorityLevel::Medium, 18),
            create_test_order("O3", "B", "Picking", PriorityLevel::Low, 18),
        ],
        vec![
            ZoneActivity { zone: "A".to_string(), active_pickers: 3, total_orders: 40 },
            ZoneActivity { zone: "B".to_string(), active_pickers: 2, total_orders: 20 },
        ],
        vec![
            create_test_picker("P1", "Expert", Some(8)),
            create_test_picker("P2", "Standard", Some(14)),
        ],
    )
}

fn simulated_request(hour: u32) -> EvaluationRequest {
    EvaluationRequest {
        time: TimeContext::simulated(hour).unwrap(),
        filter: FilterCriteria::unrestricted(),
    }
}

// ==========================================
// 测试用例 1: 基准时间
// ==========================================

#[test]
fn test_simulated_reference_time_zeroes_minutes() {
    let orchestrator = DispatchOrchestrator::new();
    let result = orchestrator.run_at(&create_test_dataset(), &simulated_request(10), wall_clock());

    assert_eq!(result.reference_time, due_at(10));
}

#[test]
fn test_real_time_uses_wall_clock_as_is() {
    let orchestrator = DispatchOrchestrator::new();
    let request = EvaluationRequest::default();
    let result = orchestrator.run_at(&create_test_dataset(), &request, wall_clock());

    assert_eq!(result.reference_time, wall_clock());
}

#[test]
fn test_simulated_hour_shift_moves_hours_until_due_exactly() {
    let orchestrator = DispatchOrchestrator::new();
    let dataset = create_test_dataset();

    let at_10 = orchestrator.run_at(&dataset, &simulated_request(10), wall_clock());
    let at_12 = orchestrator.run_at(&dataset, &simulated_request(12), wall_clock());

    assert_eq!(at_10.orders.len(), at_12.orders.len());
    for (a, b) in at_10.orders.iter().zip(at_12.orders.iter()) {
        // 同一订单（稳定顺序）,剩余小时恰好平移 2 小时
        assert_eq!(a.order.order_id, b.order.order_id);
        assert!(((a.hours_until_due - b.hours_until_due) - 2.0).abs() < 1e-9);
        // 其余字段不受影响
        assert_eq!(a.order.sku_count, b.order.sku_count);
        assert_eq!(a.order.priority, b.order.priority);
    }
}

// ==========================================
// 测试用例 2: 班次派生切换
// ==========================================

#[test]
fn test_simulated_clock_with_shift_data_derives_status() {
    let orchestrator = DispatchOrchestrator::new();
    // 17 点: P1 (8-16) 班次外, P2 (14-22) 在班
    let result = orchestrator.run_at(&create_test_dataset(), &simulated_request(17), wall_clock());

    let statuses: Vec<Option<ShiftStatus>> =
        result.roster.iter().map(|v| v.shift_status).collect();
    assert_eq!(
        statuses,
        vec![Some(ShiftStatus::OffShift), Some(ShiftStatus::Available)]
    );

    // 劳动力规则切换到班次口径
    let kinds: Vec<AlertKind> = result.alert_report.alerts.iter().map(|a| a.kind).collect();
    assert!(kinds.contains(&AlertKind::OffShiftWorkers));
    assert!(!kinds.contains(&AlertKind::IdleWorkers));
    assert!(result
        .alert_report
        .messages()
        .iter()
        .any(|m| *m == "1 workers are currently off-shift"));
}

#[test]
fn test_real_time_never_derives_shift_status() {
    let orchestrator = DispatchOrchestrator::new();
    let result = orchestrator.run_at(
        &create_test_dataset(),
        &EvaluationRequest::default(),
        wall_clock(),
    );

    assert!(result.roster.iter().all(|v| v.shift_status.is_none()));
}

#[test]
fn test_simulated_clock_without_shift_data_uses_availability_rule() {
    let orchestrator = DispatchOrchestrator::new();
    let mut dataset = create_test_dataset();
    for picker in &mut dataset.roster {
        picker.shift_start = None;
        picker.assigned_zone = None; // 触发闲置规则
    }

    let result = orchestrator.run_at(&dataset, &simulated_request(10), wall_clock());

    let kinds: Vec<AlertKind> = result.alert_report.alerts.iter().map(|a| a.kind).collect();
    assert!(kinds.contains(&AlertKind::IdleWorkers));
    assert!(!kinds.contains(&AlertKind::OffShiftWorkers));
}

// ==========================================
// 测试用例 3: 过滤收窄
// ==========================================

#[test]
fn test_zone_filter_restricts_scoring_and_summary() {
    let orchestrator = DispatchOrchestrator::new();
    let request = EvaluationRequest {
        time: TimeContext::RealTime,
        filter: FilterCriteria {
            zones: Some(["A".to_string()].into_iter().collect()),
            ..Default::default()
        },
    };

    let result = orchestrator.run_at(&create_test_dataset(), &request, wall_clock());

    assert_eq!(result.summary.total_orders, 2);
    assert_eq!(result.summary.zone_count, 1);
    assert!(result.orders.iter().all(|s| s.order.zone == "A"));
}

#[test]
fn test_skill_filter_restricts_roster_and_assignments() {
    let orchestrator = DispatchOrchestrator::new();
    let request = EvaluationRequest {
        time: TimeContext::RealTime,
        filter: FilterCriteria {
            skills: Some(["Expert".to_string()].into_iter().collect()),
            ..Default::default()
        },
    };

    let result = orchestrator.run_at(&create_test_dataset(), &request, wall_clock());

    assert_eq!(result.roster.len(), 1);
    assert_eq!(result.roster[0].picker.picker_id, "P1");
    assert_eq!(result.assignments.len(), 1);
    assert_eq!(result.summary.available_pickers, 1);
}

// ==========================================
// 测试用例 4: 空数据集与汇总
// ==========================================

#[test]
fn test_empty_dataset_short_circuits_to_all_clear() {
    let orchestrator = DispatchOrchestrator::new();
    let result = orchestrator.run_at(
        &Dataset::default(),
        &EvaluationRequest::default(),
        wall_clock(),
    );

    assert_eq!(result.alert_report.status, AlertStatus::AllClear);
    assert!(result.orders.is_empty());
    assert!(result.assignments.is_empty());
    assert_eq!(result.summary.total_orders, 0);
    assert_eq!(result.summary.zone_count, 0);
    assert_eq!(result.summary.available_pickers, 0);
}

#[test]
fn test_empty_backlog_with_roster_still_runs_labor_rule() {
    let orchestrator = DispatchOrchestrator::new();
    let mut dataset = create_test_dataset();
    dataset.orders.clear();
    dataset.roster[0].assigned_zone = None;

    let result = orchestrator.run_at(&dataset, &EvaluationRequest::default(), wall_clock());

    // 零 SLA/零过载,闲置规则照常求值
    let kinds: Vec<AlertKind> = result.alert_report.alerts.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AlertKind::IdleWorkers]);
    // 派工回退: 无需求则维持未分配
    let unassigned = result
        .assignments
        .iter()
        .find(|a| a.picker_id == "P1")
        .unwrap();
    assert_eq!(unassigned.zone, None);
}

#[test]
fn test_summary_counts_available_pickers() {
    let orchestrator = DispatchOrchestrator::new();
    let mut dataset = create_test_dataset();
    dataset.roster[1].availability = Availability::Unavailable;

    let result = orchestrator.run_at(&dataset, &EvaluationRequest::default(), wall_clock());

    assert_eq!(result.summary.total_orders, 3);
    assert_eq!(result.summary.zone_count, 2);
    assert_eq!(result.summary.available_pickers, 1);
}

#[test]
fn test_each_pass_gets_fresh_pass_id() {
    let orchestrator = DispatchOrchestrator::new();
    let dataset = create_test_dataset();

    let first = orchestrator.run_at(&dataset, &EvaluationRequest::default(), wall_clock());
    let second = orchestrator.run_at(&dataset, &EvaluationRequest::default(), wall_clock());

    assert_ne!(first.pass_id, second.pass_id);
}
