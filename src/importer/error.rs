// ==========================================
// 仓储派工决策引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 缺表/缺列/坏值 → 整趟导入失败,
//       绝不带着部分数据继续算分
// ==========================================

use crate::importer::dq_validator::DataViolation;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("工作表缺失: {0}")]
    MissingSheet(String),

    // ===== 字段映射错误 =====
    #[error("必填字段缺失 (表 {sheet}, 行 {row}): {field}")]
    MissingField {
        sheet: String,
        row: usize,
        field: String,
    },

    #[error("类型转换失败 (表 {sheet}, 行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        sheet: String,
        row: usize,
        field: String,
        message: String,
    },

    #[error("时间格式错误 (表 {sheet}, 行 {row}, 字段 {field}): 无法解析 {value}")]
    DateFormatError {
        sheet: String,
        row: usize,
        field: String,
        value: String,
    },

    // ===== 数据校验错误 =====
    #[error("数据校验失败: {} 处阻断性违规", .violations.len())]
    ValidationFailed { violations: Vec<DataViolation> },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
