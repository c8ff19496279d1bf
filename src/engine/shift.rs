// ==========================================
// 仓储派工决策引擎 - 班次判定引擎
// ==========================================
// 职责: 按模拟小时派生每个拣选工的班次状态
// 输入: Labor_Roster + simulated_hour
// 输出: PickerView（追加 Shift_Status 列）
// ==========================================

use crate::domain::labor::{Picker, PickerView};
use crate::domain::types::{Availability, ShiftStatus};
use chrono::Timelike;
use tracing::instrument;

/// 班次时长（小时）,固定
pub const SHIFT_LENGTH_HOURS: u32 = 8;

// ==========================================
// ShiftEngine - 班次判定引擎
// ==========================================
pub struct ShiftEngine {
    // 无状态引擎,不需要注入依赖
}

impl ShiftEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 为整张名册派生班次状态
    ///
    /// # 参数
    /// - `roster`: 名册行（已过滤的工作集）
    /// - `simulated_hour`: 模拟小时 [8,20]
    #[instrument(skip(self, roster), fields(count = roster.len()))]
    pub fn derive_roster(&self, roster: &[Picker], simulated_hour: u32) -> Vec<PickerView> {
        roster
            .iter()
            .map(|picker| PickerView {
                picker: picker.clone(),
                shift_status: Some(self.shift_status(picker, simulated_hour)),
            })
            .collect()
    }

    /// 单人班次判定
    ///
    /// 规则: shift_start.hour <= simulated_hour < shift_start.hour + 8
    ///
    /// 边界处理: 无 Shift_Start 的行退回 Availability 列
    /// （Available → Available,其余 → Off-shift）
    pub fn shift_status(&self, picker: &Picker, simulated_hour: u32) -> ShiftStatus {
        match picker.shift_start {
            Some(start) => {
                let start_hour = start.hour();
                if start_hour <= simulated_hour && simulated_hour < start_hour + SHIFT_LENGTH_HOURS
                {
                    ShiftStatus::Available
                } else {
                    ShiftStatus::OffShift
                }
            }
            None => match picker.availability {
                Availability::Available => ShiftStatus::Available,
                Availability::Unavailable => ShiftStatus::OffShift,
            },
        }
    }
}

impl Default for ShiftEngine {
    fn default() -> Self {
        Self::new()
    }
}
