// ==========================================
// 仓储派工决策引擎 - 库区领域模型
// ==========================================
// 职责: 库区活动表实体与需求统计结构
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ZoneActivity - 库区活动行
// ==========================================
// 不变式: 库区集合应覆盖订单/拣选工引用的全部库区,
//         导入层负责校验（未知引用是显式错误,不再静默空连接）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneActivity {
    pub zone: String,        // 库区标识
    pub active_pickers: u32, // 在岗拣选工数（非负）
    pub total_orders: u32,   // 累计订单数（信息字段,不参与过载判定）
}

// ==========================================
// ZoneDemand - 库区需求统计
// ==========================================
// 用途: Assignment Engine 中间产物（当前工作集按库区计数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDemand {
    pub zone: String,      // 库区标识
    pub order_count: usize, // 工作集内订单数
}

// ==========================================
// RawZoneRecord - 导入中间结构体
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawZoneRecord {
    pub zone: Option<String>,
    pub active_pickers: Option<u32>,
    pub total_orders: Option<u32>,

    // 元信息
    pub row_number: usize,
}
