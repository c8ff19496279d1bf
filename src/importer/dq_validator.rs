// ==========================================
// 仓储派工决策引擎 - 数据校验器
// ==========================================
// 职责: 必填校验 + 主键唯一 + 库区引用校验
// 红线: 字符串连接不再静默得空集——未知库区引用是
//       显式阻断条件,在装载期暴露而非求值期吞掉
// ==========================================

use crate::domain::labor::{RawPickerRecord, UNASSIGNED_SENTINEL};
use crate::domain::order::RawOrderRecord;
use crate::domain::zone::RawZoneRecord;
use crate::importer::field_mapper::{
    COL_ACTIVE_PICKERS, COL_ASSIGNED_ZONE, COL_DUE_TIME, COL_ORDER_ID, COL_PICKER_ID,
    COL_PRIMARY_TASK, COL_SKILL_LEVEL, COL_SKU_COUNT, COL_TASK, COL_TOTAL_ORDERS, COL_ZONE,
    SHEET_LABOR_ROSTER, SHEET_ORDER_BACKLOG, SHEET_ZONE_ACTIVITY,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ==========================================
// ViolationLevel - 违规级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationLevel {
    Error,   // 阻断导入
    Warning, // 允许导入,记录日志
}

// ==========================================
// DataViolation - 违规记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataViolation {
    pub sheet: String,      // 所在表
    pub row_number: usize,  // 原始文件行号（0 = 表级违规）
    pub field: String,      // 违规字段
    pub level: ViolationLevel,
    pub message: String,    // 违规描述
}

// ==========================================
// DqValidator - 数据校验器
// ==========================================
pub struct DqValidator;

impl DqValidator {
    pub fn new() -> Self {
        Self
    }

    /// 对三表执行全部校验,返回违规清单（可能为空）
    pub fn validate_all(
        &self,
        orders: &[RawOrderRecord],
        zones: &[RawZoneRecord],
        pickers: &[RawPickerRecord],
    ) -> Vec<DataViolation> {
        let mut violations = Vec::new();

        violations.extend(self.validate_orders(orders));
        violations.extend(self.validate_zones(zones));
        violations.extend(self.validate_pickers(pickers));
        violations.extend(self.validate_zone_references(orders, zones, pickers));

        violations
    }

    // ==========================================
    // 单表校验
    // ==========================================

    fn validate_orders(&self, orders: &[RawOrderRecord]) -> Vec<DataViolation> {
        let mut violations = Vec::new();
        let mut seen_ids = HashSet::new();

        for record in orders {
            match &record.order_id {
                None => violations.push(Self::missing(
                    SHEET_ORDER_BACKLOG,
                    record.row_number,
                    COL_ORDER_ID,
                )),
                Some(id) => {
                    // 主键重复（同批次内）
                    if !seen_ids.insert(id.clone()) {
                        violations.push(DataViolation {
                            sheet: SHEET_ORDER_BACKLOG.to_string(),
                            row_number: record.row_number,
                            field: COL_ORDER_ID.to_string(),
                            level: ViolationLevel::Error,
                            message: format!("重复订单号: {}", id),
                        });
                    }
                }
            }

            if record.zone.is_none() {
                violations.push(Self::missing(SHEET_ORDER_BACKLOG, record.row_number, COL_ZONE));
            }
            if record.task.is_none() {
                violations.push(Self::missing(SHEET_ORDER_BACKLOG, record.row_number, COL_TASK));
            }
            if record.sku_count.is_none() {
                violations.push(Self::missing(
                    SHEET_ORDER_BACKLOG,
                    record.row_number,
                    COL_SKU_COUNT,
                ));
            }
            // 截止时间缺失会让剩余小时无定义,必须阻断
            if record.due_time.is_none() {
                violations.push(Self::missing(
                    SHEET_ORDER_BACKLOG,
                    record.row_number,
                    COL_DUE_TIME,
                ));
            }
        }

        violations
    }

    fn validate_zones(&self, zones: &[RawZoneRecord]) -> Vec<DataViolation> {
        let mut violations = Vec::new();
        let mut seen_zones = HashSet::new();

        for record in zones {
            match &record.zone {
                None => violations.push(Self::missing(
                    SHEET_ZONE_ACTIVITY,
                    record.row_number,
                    COL_ZONE,
                )),
                Some(zone) => {
                    if !seen_zones.insert(zone.clone()) {
                        violations.push(DataViolation {
                            sheet: SHEET_ZONE_ACTIVITY.to_string(),
                            row_number: record.row_number,
                            field: COL_ZONE.to_string(),
                            level: ViolationLevel::Error,
                            message: format!("重复库区: {}", zone),
                        });
                    }
                }
            }

            if record.active_pickers.is_none() {
                violations.push(Self::missing(
                    SHEET_ZONE_ACTIVITY,
                    record.row_number,
                    COL_ACTIVE_PICKERS,
                ));
            }
            if record.total_orders.is_none() {
                violations.push(Self::missing(
                    SHEET_ZONE_ACTIVITY,
                    record.row_number,
                    COL_TOTAL_ORDERS,
                ));
            }
        }

        violations
    }

    fn validate_pickers(&self, pickers: &[RawPickerRecord]) -> Vec<DataViolation> {
        let mut violations = Vec::new();
        let mut seen_ids = HashSet::new();

        for record in pickers {
            match &record.picker_id {
                None => violations.push(Self::missing(
                    SHEET_LABOR_ROSTER,
                    record.row_number,
                    COL_PICKER_ID,
                )),
                Some(id) => {
                    if !seen_ids.insert(id.clone()) {
                        violations.push(DataViolation {
                            sheet: SHEET_LABOR_ROSTER.to_string(),
                            row_number: record.row_number,
                            field: COL_PICKER_ID.to_string(),
                            level: ViolationLevel::Error,
                            message: format!("重复拣选工号: {}", id),
                        });
                    }
                }
            }

            if record.skill_level.is_none() {
                violations.push(Self::missing(
                    SHEET_LABOR_ROSTER,
                    record.row_number,
                    COL_SKILL_LEVEL,
                ));
            }
            if record.assigned_zone.is_none() {
                violations.push(Self::missing(
                    SHEET_LABOR_ROSTER,
                    record.row_number,
                    COL_ASSIGNED_ZONE,
                ));
            }
            if record.primary_task.is_none() {
                violations.push(Self::missing(
                    SHEET_LABOR_ROSTER,
                    record.row_number,
                    COL_PRIMARY_TASK,
                ));
            }
            // Availability 空白走默认分支（Unavailable）,不算违规
        }

        violations
    }

    // ==========================================
    // 跨表引用校验
    // ==========================================

    /// 库区外键校验 + 有单无人预警
    fn validate_zone_references(
        &self,
        orders: &[RawOrderRecord],
        zones: &[RawZoneRecord],
        pickers: &[RawPickerRecord],
    ) -> Vec<DataViolation> {
        let mut violations = Vec::new();

        let known_zones: HashSet<&str> = zones
            .iter()
            .filter_map(|z| z.zone.as_deref())
            .collect();

        // 订单引用的库区必须存在
        let mut orders_per_zone: HashMap<&str, usize> = HashMap::new();
        for record in orders {
            if let Some(zone) = record.zone.as_deref() {
                *orders_per_zone.entry(zone).or_insert(0) += 1;
                if !known_zones.contains(zone) {
                    violations.push(DataViolation {
                        sheet: SHEET_ORDER_BACKLOG.to_string(),
                        row_number: record.row_number,
                        field: COL_ZONE.to_string(),
                        level: ViolationLevel::Error,
                        message: format!("未知库区引用: {}", zone),
                    });
                }
            }
        }

        // 拣选工引用的库区必须存在（哨兵值除外）
        for record in pickers {
            if let Some(zone) = record.assigned_zone.as_deref() {
                if zone != UNASSIGNED_SENTINEL && !known_zones.contains(zone) {
                    violations.push(DataViolation {
                        sheet: SHEET_LABOR_ROSTER.to_string(),
                        row_number: record.row_number,
                        field: COL_ASSIGNED_ZONE.to_string(),
                        level: ViolationLevel::Error,
                        message: format!("未知库区引用: {}", zone),
                    });
                }
            }
        }

        // 有单无人: 不触发过载告警（比值无定义）,装载期给出预警可见性
        for record in zones {
            if let (Some(zone), Some(0)) = (record.zone.as_deref(), record.active_pickers) {
                let backlog = orders_per_zone.get(zone).copied().unwrap_or(0);
                if backlog > 0 {
                    violations.push(DataViolation {
                        sheet: SHEET_ZONE_ACTIVITY.to_string(),
                        row_number: record.row_number,
                        field: COL_ACTIVE_PICKERS.to_string(),
                        level: ViolationLevel::Warning,
                        message: format!("库区 {} 有 {} 单积压但无在岗拣选工", zone, backlog),
                    });
                }
            }
        }

        violations
    }

    fn missing(sheet: &str, row_number: usize, field: &str) -> DataViolation {
        DataViolation {
            sheet: sheet.to_string(),
            row_number,
            field: field.to_string(),
            level: ViolationLevel::Error,
            message: "必填字段缺失".to_string(),
        }
    }
}

impl Default for DqValidator {
    fn default() -> Self {
        Self::new()
    }
}
