// ==========================================
// 仓储派工决策引擎 - 导入层
// ==========================================
// 职责: 外部表格数据装载,生成校验后的内存数据集
// 支持: Excel 工作簿（三表）, CSV（每表一文件）
// ==========================================

// 模块声明
pub mod dataset_importer;
pub mod dq_validator;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use dataset_importer::DatasetImporter;
pub use dq_validator::{DataViolation, DqValidator, ViolationLevel};
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper, SHEET_LABOR_ROSTER, SHEET_ORDER_BACKLOG, SHEET_ZONE_ACTIVITY};
pub use file_parser::{CsvParser, WorkbookParser};
