// ==========================================
// 仓储派工决策引擎 - 数据集导入器
// ==========================================
// 职责: 文件解析 → 字段映射 → 数据校验 → Dataset
// 红线: 任一阻断性违规 → 整趟导入失败,不产出半套数据
// 支持: 单工作簿三表 / 三个 CSV 文件
// ==========================================

use crate::domain::dataset::Dataset;
use crate::domain::labor::{Picker, RawPickerRecord, UNASSIGNED_SENTINEL};
use crate::domain::order::{Order, RawOrderRecord};
use crate::domain::types::{Availability, PriorityLevel};
use crate::domain::zone::{RawZoneRecord, ZoneActivity};
use crate::importer::dq_validator::{DqValidator, ViolationLevel};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{
    FieldMapper, SHEET_LABOR_ROSTER, SHEET_ORDER_BACKLOG, SHEET_ZONE_ACTIVITY,
};
use crate::importer::file_parser::{CsvParser, WorkbookParser};
use crate::perf::PerfGuard;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, instrument, warn};

// ==========================================
// DatasetImporter - 数据集导入器
// ==========================================
pub struct DatasetImporter {
    workbook_parser: WorkbookParser,
    csv_parser: CsvParser,
    mapper: FieldMapper,
    validator: DqValidator,
}

impl DatasetImporter {
    pub fn new() -> Self {
        Self {
            workbook_parser: WorkbookParser,
            csv_parser: CsvParser,
            mapper: FieldMapper,
            validator: DqValidator::new(),
        }
    }

    // ==========================================
    // 入口
    // ==========================================

    /// 从单个工作簿导入三张契约表
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn import_workbook<P: AsRef<Path>>(&self, path: P) -> ImportResult<Dataset> {
        let _perf = PerfGuard::new("import_workbook");
        let path = path.as_ref();

        let order_rows = self.workbook_parser.parse_sheet(path, SHEET_ORDER_BACKLOG)?;
        let zone_rows = self.workbook_parser.parse_sheet(path, SHEET_ZONE_ACTIVITY)?;
        let picker_rows = self.workbook_parser.parse_sheet(path, SHEET_LABOR_ROSTER)?;

        self.build_dataset(order_rows, zone_rows, picker_rows)
    }

    /// 从三个 CSV 文件导入（每文件一张表,同列名契约）
    #[instrument(skip_all)]
    pub fn import_csv_tables<P: AsRef<Path>>(
        &self,
        orders_path: P,
        zones_path: P,
        roster_path: P,
    ) -> ImportResult<Dataset> {
        let _perf = PerfGuard::new("import_csv_tables");

        let order_rows = self.csv_parser.parse_to_raw_records(orders_path.as_ref())?;
        let zone_rows = self.csv_parser.parse_to_raw_records(zones_path.as_ref())?;
        let picker_rows = self.csv_parser.parse_to_raw_records(roster_path.as_ref())?;

        self.build_dataset(order_rows, zone_rows, picker_rows)
    }

    // ==========================================
    // 管道
    // ==========================================

    fn build_dataset(
        &self,
        order_rows: Vec<HashMap<String, String>>,
        zone_rows: Vec<HashMap<String, String>>,
        picker_rows: Vec<HashMap<String, String>>,
    ) -> ImportResult<Dataset> {
        // 1. 字段映射（首个数据行 = 第 2 行,表头占第 1 行）
        let raw_orders: Vec<RawOrderRecord> = order_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_order_row(row, idx + 2))
            .collect::<ImportResult<_>>()?;
        let raw_zones: Vec<RawZoneRecord> = zone_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_zone_row(row, idx + 2))
            .collect::<ImportResult<_>>()?;
        let raw_pickers: Vec<RawPickerRecord> = picker_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_picker_row(row, idx + 2))
            .collect::<ImportResult<_>>()?;

        // 2. 数据校验
        let violations = self
            .validator
            .validate_all(&raw_orders, &raw_zones, &raw_pickers);

        let (errors, warnings): (Vec<_>, Vec<_>) = violations
            .into_iter()
            .partition(|v| v.level == ViolationLevel::Error);

        for violation in &warnings {
            warn!(
                sheet = %violation.sheet,
                row = violation.row_number,
                field = %violation.field,
                "{}",
                violation.message
            );
        }

        if !errors.is_empty() {
            return Err(ImportError::ValidationFailed { violations: errors });
        }

        // 3. 落成类型化实体
        let orders = raw_orders
            .into_iter()
            .map(Self::finalize_order)
            .collect::<ImportResult<Vec<_>>>()?;
        let zones = raw_zones
            .into_iter()
            .map(Self::finalize_zone)
            .collect::<ImportResult<Vec<_>>>()?;
        let roster = raw_pickers
            .into_iter()
            .map(Self::finalize_picker)
            .collect::<ImportResult<Vec<_>>>()?;

        info!(
            orders = orders.len(),
            zones = zones.len(),
            roster = roster.len(),
            "数据集装载完成"
        );

        Ok(Dataset::new(orders, zones, roster))
    }

    // ==========================================
    // 实体落成（校验器已保证必填,此处兜底报错而非 unwrap）
    // ==========================================

    fn finalize_order(raw: RawOrderRecord) -> ImportResult<Order> {
        let row = raw.row_number;
        Ok(Order {
            order_id: Self::require(raw.order_id, SHEET_ORDER_BACKLOG, row, "OrderID")?,
            zone: Self::require(raw.zone, SHEET_ORDER_BACKLOG, row, "Zone")?,
            task: Self::require(raw.task, SHEET_ORDER_BACKLOG, row, "Task")?,
            // 空白/未识别优先级走默认分支,与未识别字面量同待遇
            priority: raw
                .priority
                .as_deref()
                .map(PriorityLevel::from_contract_str)
                .unwrap_or(PriorityLevel::Low),
            sku_count: Self::require(raw.sku_count, SHEET_ORDER_BACKLOG, row, "SKU_Count")?,
            due_time: Self::require(raw.due_time, SHEET_ORDER_BACKLOG, row, "Due_Time")?,
        })
    }

    fn finalize_zone(raw: RawZoneRecord) -> ImportResult<ZoneActivity> {
        let row = raw.row_number;
        Ok(ZoneActivity {
            zone: Self::require(raw.zone, SHEET_ZONE_ACTIVITY, row, "Zone")?,
            active_pickers: Self::require(
                raw.active_pickers,
                SHEET_ZONE_ACTIVITY,
                row,
                "Active_Pickers",
            )?,
            total_orders: Self::require(
                raw.total_orders,
                SHEET_ZONE_ACTIVITY,
                row,
                "Total_Orders",
            )?,
        })
    }

    fn finalize_picker(raw: RawPickerRecord) -> ImportResult<Picker> {
        let row = raw.row_number;
        let assigned_zone =
            Self::require(raw.assigned_zone, SHEET_LABOR_ROSTER, row, "Assigned_Zone")?;
        Ok(Picker {
            picker_id: Self::require(raw.picker_id, SHEET_LABOR_ROSTER, row, "PickerID")?,
            skill_level: Self::require(raw.skill_level, SHEET_LABOR_ROSTER, row, "Skill_Level")?,
            // 空白/未识别可用性走默认分支 Unavailable
            availability: raw
                .availability
                .as_deref()
                .map(Availability::from_contract_str)
                .unwrap_or(Availability::Unavailable),
            // 哨兵值归一为 None
            assigned_zone: if assigned_zone == UNASSIGNED_SENTINEL {
                None
            } else {
                Some(assigned_zone)
            },
            primary_task: Self::require(raw.primary_task, SHEET_LABOR_ROSTER, row, "Primary_Task")?,
            shift_start: raw.shift_start,
        })
    }

    fn require<T>(value: Option<T>, sheet: &str, row: usize, field: &str) -> ImportResult<T> {
        value.ok_or_else(|| ImportError::MissingField {
            sheet: sheet.to_string(),
            row,
            field: field.to_string(),
        })
    }
}

impl Default for DatasetImporter {
    fn default() -> Self {
        Self::new()
    }
}
