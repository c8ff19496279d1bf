// ==========================================
// 仓储派工决策引擎 - 领域类型定义
// ==========================================
// 职责: 枚举类型与字面量契约
// 红线: 契约字符串大小写敏感,不做模糊匹配
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 优先级 (Priority Level)
// ==========================================
// 契约字面量: "High" / "Medium" / "Low"
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityLevel {
    Low,    // 低优先级
    Medium, // 中优先级
    High,   // 高优先级
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityLevel::Low => write!(f, "Low"),
            PriorityLevel::Medium => write!(f, "Medium"),
            PriorityLevel::High => write!(f, "High"),
        }
    }
}

impl PriorityLevel {
    /// 从契约字符串解析（大小写敏感）
    ///
    /// 未识别的值落入默认分支 Low,不报错
    pub fn from_contract_str(s: &str) -> Self {
        match s {
            "High" => PriorityLevel::High,
            "Medium" => PriorityLevel::Medium,
            _ => PriorityLevel::Low, // 默认分支（含 "Low" 与未识别值）
        }
    }
}

// ==========================================
// 可用性 (Availability)
// ==========================================
// 契约字面量: "Available",其余值一律视为不可用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Available,   // 在岗可用
    Unavailable, // 不可用
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "Available"),
            Availability::Unavailable => write!(f, "Unavailable"),
        }
    }
}

impl Availability {
    /// 从契约字符串解析（大小写敏感）
    pub fn from_contract_str(s: &str) -> Self {
        match s {
            "Available" => Availability::Available,
            _ => Availability::Unavailable, // 默认分支
        }
    }
}

// ==========================================
// 班次状态 (Shift Status)
// ==========================================
// 模拟时钟变体的派生字段
// 契约字面量: "Available" / "Off-shift"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftStatus {
    Available, // 班次覆盖当前小时
    #[serde(rename = "Off-shift")]
    OffShift, // 班次外
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftStatus::Available => write!(f, "Available"),
            ShiftStatus::OffShift => write!(f, "Off-shift"),
        }
    }
}

// ==========================================
// 告警状态 (Alert Status)
// ==========================================
// 全清是显式信号,不等价于空告警列表
// 下游 UI 按状态区分 success/warning 样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    AllClear, // 全清
    Warning,  // 有告警
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::AllClear => write!(f, "ALL_CLEAR"),
            AlertStatus::Warning => write!(f, "WARNING"),
        }
    }
}

// ==========================================
// 告警类别 (Alert Kind)
// ==========================================
// 顺序即规则求值顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    ZoneOverload,    // 库区过载
    IdleWorkers,     // 闲置/未分配拣选工
    OffShiftWorkers, // 班次外拣选工（模拟时钟变体）
    SlaRisk,         // SLA 风险订单
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::ZoneOverload => write!(f, "ZONE_OVERLOAD"),
            AlertKind::IdleWorkers => write!(f, "IDLE_WORKERS"),
            AlertKind::OffShiftWorkers => write!(f, "OFF_SHIFT_WORKERS"),
            AlertKind::SlaRisk => write!(f, "SLA_RISK"),
        }
    }
}
