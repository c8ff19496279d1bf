// ==========================================
// 仓储派工决策引擎 - 劳动力领域模型
// ==========================================
// 职责: 劳动力名册实体/班次视图/派工建议
// 红线: assigned_zone 的 None 与契约哨兵值 "Unassigned" 等价,
//       导入与输出时互相转换,内部只用 Option
// ==========================================

use crate::domain::types::{Availability, ShiftStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// "Unassigned" 哨兵值（契约字面量,大小写敏感）
pub const UNASSIGNED_SENTINEL: &str = "Unassigned";

// ==========================================
// Picker - 劳动力名册行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Picker {
    pub picker_id: String,                  // 拣选工唯一标识
    pub skill_level: String,                // 技能等级
    pub availability: Availability,         // 可用性（契约列）
    pub assigned_zone: Option<String>,      // 已分配库区（None = "Unassigned"）
    pub primary_task: String,               // 主要任务类型
    pub shift_start: Option<NaiveDateTime>, // 班次开始时间（仅模拟时钟数据集携带）
}

impl Picker {
    /// 是否闲置：不可用 或 未分配库区
    pub fn is_idle(&self) -> bool {
        self.availability != Availability::Available || self.assigned_zone.is_none()
    }

    /// 输出用的库区字符串（None 还原为哨兵值）
    pub fn assigned_zone_label(&self) -> &str {
        self.assigned_zone.as_deref().unwrap_or(UNASSIGNED_SENTINEL)
    }
}

// ==========================================
// PickerView - 带班次状态的名册视图
// ==========================================
// 用途: 模拟时钟变体下追加 Shift_Status 派生列;
//       实时变体下 shift_status 为 None
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerView {
    pub picker: Picker,
    pub shift_status: Option<ShiftStatus>,
}

impl PickerView {
    /// 不带班次派生的视图（实时变体）
    pub fn plain(picker: Picker) -> Self {
        Self {
            picker,
            shift_status: None,
        }
    }
}

// ==========================================
// PickerAssignment - 派工建议
// ==========================================
// 用途: Assignment Engine 输出（PickerID/Task/Zone 三元组）
// zone 为 None 表示维持未分配（需求表为空时的回退）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerAssignment {
    pub picker_id: String,
    pub primary_task: String,
    pub zone: Option<String>,
}

// ==========================================
// RawPickerRecord - 导入中间结构体
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPickerRecord {
    pub picker_id: Option<String>,
    pub skill_level: Option<String>,
    pub availability: Option<String>, // 原始契约字符串
    pub assigned_zone: Option<String>, // 原始值,含哨兵
    pub primary_task: Option<String>,
    pub shift_start: Option<NaiveDateTime>,

    // 元信息
    pub row_number: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker(availability: Availability, assigned_zone: Option<&str>) -> Picker {
        Picker {
            picker_id: "P001".to_string(),
            skill_level: "Expert".to_string(),
            availability,
            assigned_zone: assigned_zone.map(|z| z.to_string()),
            primary_task: "Picking".to_string(),
            shift_start: None,
        }
    }

    #[test]
    fn test_idle_when_unavailable() {
        assert!(picker(Availability::Unavailable, Some("A")).is_idle());
    }

    #[test]
    fn test_idle_when_unassigned() {
        assert!(picker(Availability::Available, None).is_idle());
    }

    #[test]
    fn test_not_idle_when_available_and_assigned() {
        assert!(!picker(Availability::Available, Some("A")).is_idle());
    }

    #[test]
    fn test_assigned_zone_label_sentinel() {
        assert_eq!(picker(Availability::Available, None).assigned_zone_label(), "Unassigned");
        assert_eq!(picker(Availability::Available, Some("B")).assigned_zone_label(), "B");
    }
}
