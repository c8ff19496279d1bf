// ==========================================
// 仓储派工决策引擎 - 数据集
// ==========================================
// 职责: 一次上传对应的三张内存表
// 红线: 评估趟内只读,趟间无共享可变状态
// ==========================================

use crate::domain::labor::Picker;
use crate::domain::order::Order;
use crate::domain::zone::ZoneActivity;
use serde::{Deserialize, Serialize};

// ==========================================
// Dataset - 校验后的三表数据集
// ==========================================
// 生命周期: 每次上传装载一次,引用校验在导入层完成
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub orders: Vec<Order>,       // Order_Backlog
    pub zones: Vec<ZoneActivity>, // Zone_Activity
    pub roster: Vec<Picker>,      // Labor_Roster
}

impl Dataset {
    pub fn new(orders: Vec<Order>, zones: Vec<ZoneActivity>, roster: Vec<Picker>) -> Self {
        Self {
            orders,
            zones,
            roster,
        }
    }

    /// 三表是否全部为空（空数据集是合法输入,引擎短路为无分数/全清）
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.zones.is_empty() && self.roster.is_empty()
    }

    /// 名册是否携带班次数据（决定模拟时钟下是否派生 Shift_Status）
    pub fn has_shift_data(&self) -> bool {
        self.roster.iter().any(|p| p.shift_start.is_some())
    }
}
