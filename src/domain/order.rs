// ==========================================
// 仓储派工决策引擎 - 订单领域模型
// ==========================================
// 职责: 订单积压表实体与评分派生结构
// 红线: 派生字段只在评估趟内有效,不回写不落盘
// ==========================================

use crate::domain::types::PriorityLevel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 订单积压行
// ==========================================
// 用途: 导入层写入,引擎层只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,          // 订单唯一标识
    pub zone: String,              // 所属库区（对 Zone_Activity 的引用,导入时校验）
    pub task: String,              // 任务类型
    pub priority: PriorityLevel,   // 声明优先级
    pub sku_count: u32,            // SKU 数量（非负）
    pub due_time: NaiveDateTime,   // 截止时间
}

// ==========================================
// ScoredOrder - 评分后的订单
// ==========================================
// 用途: Scoring Engine 输出,Alert/Assignment Engine 输入
// 每次基准时间变化都整体重算,不做增量更新
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOrder {
    pub order: Order,
    pub hours_until_due: f64, // 距截止小时数（可为负=已超期）
    pub priority_score: i32,  // 综合优先级分 [1,6]
}

impl ScoredOrder {
    /// 是否处于 SLA 风险窗口内
    ///
    /// 规则: 高优先级 且 剩余时间严格小于窗口阈值
    /// 边界: 剩余时间恰好等于阈值不算风险
    pub fn is_sla_risk(&self, window_hours: f64) -> bool {
        self.order.priority == PriorityLevel::High && self.hours_until_due < window_hours
    }
}

// ==========================================
// RawOrderRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrderRecord {
    pub order_id: Option<String>,
    pub zone: Option<String>,
    pub task: Option<String>,
    pub priority: Option<String>, // 原始契约字符串,映射时走默认分支
    pub sku_count: Option<u32>,
    pub due_time: Option<NaiveDateTime>,

    // 元信息
    pub row_number: usize, // 原始文件行号（用于错误报告）
}
