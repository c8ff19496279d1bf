// ==========================================
// AssignmentEngine 引擎集成测试
// ==========================================
// 测试目标: 验证单次全局贪心派工与确定性
// 覆盖范围: 最高需求收敛/保留已分配/排除不可用/
//           空需求回退/并列打破/幂等性
// ==========================================

use chrono::{Duration, NaiveDate, NaiveDateTime};
use flowforge_engine::domain::labor::Picker;
use flowforge_engine::domain::order::Order;
use flowforge_engine::domain::types::{Availability, PriorityLevel};
use flowforge_engine::engine::{AssignmentEngine, ScoringEngine};

// ==========================================
// 测试辅助函数
// ==========================================

fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn create_test_orders(zone: &str, count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| Order {
            order_id: format!("{}-{:03}", zone, i),
            zone: zone.to_string(),
            task: "Picking".to_string(),
            priority: PriorityLevel::Medium,
            sku_count: 5,
            due_time: reference_time() + Duration::hours(6),
        })
        .collect()
}

fn create_test_picker(
    picker_id: &str,
    availability: Availability,
    assigned_zone: Option<&str>,
) -> Picker {
    Picker {
        picker_id: picker_id.to_string(),
        skill_level: "Standard".to_string(),
        availability,
        assigned_zone: assigned_zone.map(|z| z.to_string()),
        primary_task: "Picking".to_string(),
        shift_start: None,
    }
}

fn score(orders: &[Order]) -> Vec<flowforge_engine::domain::order::ScoredOrder> {
    ScoringEngine::new().score_backlog(orders, reference_time())
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_unassigned_pickers_converge_on_top_demand_zone() {
    let engine = AssignmentEngine::new();
    let mut orders = create_test_orders("A", 3);
    orders.extend(create_test_orders("B", 7)); // B 需求最高
    let scored = score(&orders);

    let roster = vec![
        create_test_picker("P1", Availability::Available, None),
        create_test_picker("P2", Availability::Available, None),
    ];

    let assignments = engine.assign(&roster, &scored);

    assert_eq!(assignments.len(), 2);
    // 单次全局贪心: 全部未分配者收敛到同一库区
    assert_eq!(assignments[0].zone.as_deref(), Some("B"));
    assert_eq!(assignments[1].zone.as_deref(), Some("B"));
}

#[test]
fn test_assigned_pickers_keep_their_zone() {
    let engine = AssignmentEngine::new();
    let scored = score(&create_test_orders("B", 7));

    let roster = vec![
        create_test_picker("P1", Availability::Available, Some("A")),
        create_test_picker("P2", Availability::Available, None),
    ];

    let assignments = engine.assign(&roster, &scored);

    assert_eq!(assignments[0].zone.as_deref(), Some("A")); // 保持不变
    assert_eq!(assignments[1].zone.as_deref(), Some("B"));
}

#[test]
fn test_unavailable_pickers_excluded_from_output() {
    let engine = AssignmentEngine::new();
    let scored = score(&create_test_orders("A", 3));

    let roster = vec![
        create_test_picker("P1", Availability::Unavailable, None),
        create_test_picker("P2", Availability::Available, None),
    ];

    let assignments = engine.assign(&roster, &scored);

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].picker_id, "P2");
}

#[test]
fn test_empty_demand_keeps_pickers_unassigned() {
    let engine = AssignmentEngine::new();

    let roster = vec![create_test_picker("P1", Availability::Available, None)];
    let assignments = engine.assign(&roster, &[]);

    // 显式回退: 不猜库区
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].zone, None);
}

#[test]
fn test_demand_tie_broken_by_zone_name() {
    let engine = AssignmentEngine::new();
    let mut orders = create_test_orders("C", 5);
    orders.extend(create_test_orders("B", 5)); // 同需求,B < C
    let scored = score(&orders);

    let demand = engine.zone_demand(&scored);

    assert_eq!(demand[0].zone, "B");
    assert_eq!(demand[0].order_count, 5);
    assert_eq!(demand[1].zone, "C");

    assert_eq!(engine.top_demand_zone(&scored).as_deref(), Some("B"));
}

#[test]
fn test_assignment_is_idempotent() {
    let engine = AssignmentEngine::new();
    let mut orders = create_test_orders("A", 4);
    orders.extend(create_test_orders("B", 2));
    let scored = score(&orders);

    let roster = vec![
        create_test_picker("P1", Availability::Available, None),
        create_test_picker("P2", Availability::Available, Some("B")),
        create_test_picker("P3", Availability::Unavailable, None),
    ];

    let first = engine.assign(&roster, &scored);
    let second = engine.assign(&roster, &scored);

    assert_eq!(first, second);
}

#[test]
fn test_roster_order_preserved_in_output() {
    let engine = AssignmentEngine::new();
    let scored = score(&create_test_orders("A", 3));

    let roster = vec![
        create_test_picker("P3", Availability::Available, None),
        create_test_picker("P1", Availability::Available, Some("A")),
        create_test_picker("P2", Availability::Available, None),
    ];

    let assignments = engine.assign(&roster, &scored);

    let ids: Vec<&str> = assignments.iter().map(|a| a.picker_id.as_str()).collect();
    assert_eq!(ids, vec!["P3", "P1", "P2"]);
}
