// ==========================================
// 仓储派工决策引擎 - 字段映射器
// ==========================================
// 职责: 表头契约列 → 中间记录 + 类型转换
// 红线: 列名与字面量大小写敏感;空白单元格映射为 None,
//       是否必填由校验器裁决;非空但无法转换立即报错
// ==========================================

use crate::domain::labor::RawPickerRecord;
use crate::domain::order::RawOrderRecord;
use crate::domain::zone::RawZoneRecord;
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDateTime;
use std::collections::HashMap;

// ===== 表名契约 =====
pub const SHEET_ORDER_BACKLOG: &str = "Order_Backlog";
pub const SHEET_ZONE_ACTIVITY: &str = "Zone_Activity";
pub const SHEET_LABOR_ROSTER: &str = "Labor_Roster";

// ===== 列名契约 =====
pub const COL_ORDER_ID: &str = "OrderID";
pub const COL_ZONE: &str = "Zone";
pub const COL_TASK: &str = "Task";
pub const COL_PRIORITY: &str = "Priority";
pub const COL_SKU_COUNT: &str = "SKU_Count";
pub const COL_DUE_TIME: &str = "Due_Time";
pub const COL_ACTIVE_PICKERS: &str = "Active_Pickers";
pub const COL_TOTAL_ORDERS: &str = "Total_Orders";
pub const COL_PICKER_ID: &str = "PickerID";
pub const COL_SKILL_LEVEL: &str = "Skill_Level";
pub const COL_AVAILABILITY: &str = "Availability";
pub const COL_ASSIGNED_ZONE: &str = "Assigned_Zone";
pub const COL_PRIMARY_TASK: &str = "Primary_Task";
pub const COL_SHIFT_START: &str = "Shift_Start";

pub struct FieldMapper;

impl FieldMapper {
    // ==========================================
    // 逐表映射
    // ==========================================

    /// Order_Backlog 行 → RawOrderRecord
    pub fn map_order_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<RawOrderRecord> {
        Ok(RawOrderRecord {
            order_id: self.get_string(row, COL_ORDER_ID),
            zone: self.get_string(row, COL_ZONE),
            task: self.get_string(row, COL_TASK),
            priority: self.get_string(row, COL_PRIORITY),
            sku_count: self.parse_u32(row, SHEET_ORDER_BACKLOG, COL_SKU_COUNT, row_number)?,
            due_time: self.parse_datetime(row, SHEET_ORDER_BACKLOG, COL_DUE_TIME, row_number)?,
            row_number,
        })
    }

    /// Zone_Activity 行 → RawZoneRecord
    pub fn map_zone_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<RawZoneRecord> {
        Ok(RawZoneRecord {
            zone: self.get_string(row, COL_ZONE),
            active_pickers: self.parse_u32(
                row,
                SHEET_ZONE_ACTIVITY,
                COL_ACTIVE_PICKERS,
                row_number,
            )?,
            total_orders: self.parse_u32(row, SHEET_ZONE_ACTIVITY, COL_TOTAL_ORDERS, row_number)?,
            row_number,
        })
    }

    /// Labor_Roster 行 → RawPickerRecord
    pub fn map_picker_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<RawPickerRecord> {
        Ok(RawPickerRecord {
            picker_id: self.get_string(row, COL_PICKER_ID),
            skill_level: self.get_string(row, COL_SKILL_LEVEL),
            availability: self.get_string(row, COL_AVAILABILITY),
            assigned_zone: self.get_string(row, COL_ASSIGNED_ZONE),
            primary_task: self.get_string(row, COL_PRIMARY_TASK),
            shift_start: self.parse_datetime(
                row,
                SHEET_LABOR_ROSTER,
                COL_SHIFT_START,
                row_number,
            )?,
            row_number,
        })
    }

    // ==========================================
    // 转换辅助
    // ==========================================

    /// 提取字符串字段,空白视为缺失
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 解析非负整数
    ///
    /// 兼容 Excel 整数列被读成 "12.0" 的情况（小数部分为零时接受）
    fn parse_u32(
        &self,
        row: &HashMap<String, String>,
        sheet: &str,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<u32>> {
        let value = match self.get_string(row, key) {
            None => return Ok(None),
            Some(v) => v,
        };

        if let Ok(n) = value.parse::<u32>() {
            return Ok(Some(n));
        }

        if let Ok(f) = value.parse::<f64>() {
            if f.is_finite() && f >= 0.0 && f <= u32::MAX as f64 && f.fract() == 0.0 {
                return Ok(Some(f as u32));
            }
        }

        Err(ImportError::TypeConversionError {
            sheet: sheet.to_string(),
            row: row_number,
            field: key.to_string(),
            message: format!("无法解析为非负整数: {}", value),
        })
    }

    /// 解析时间戳（多格式尽力匹配）
    ///
    /// 支持格式:
    /// - `%Y-%m-%d %H:%M:%S`
    /// - `%Y-%m-%d %H:%M`
    /// - `%Y-%m-%dT%H:%M:%S`
    /// - RFC3339
    fn parse_datetime(
        &self,
        row: &HashMap<String, String>,
        sheet: &str,
        key: &str,
        row_number: usize,
    ) -> ImportResult<Option<NaiveDateTime>> {
        let value = match self.get_string(row, key) {
            None => return Ok(None),
            Some(v) => v,
        };

        parse_dt_best_effort(&value)
            .map(Some)
            .ok_or_else(|| ImportError::DateFormatError {
                sheet: sheet.to_string(),
                row: row_number,
                field: key.to_string(),
                value,
            })
    }
}

/// 尽力解析时间戳字符串
pub fn parse_dt_best_effort(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    None
}
