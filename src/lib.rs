// ==========================================
// 仓储派工决策引擎 - 核心库
// ==========================================
// 技术栈: Rust（纯内存评估,无持久化）
// 系统定位: 决策支持引擎（评分/告警/派工建议,人工最终控制权）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 日志系统
pub mod logging;

// 性能观测
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AlertKind, AlertStatus, Availability, PriorityLevel, ShiftStatus};

// 领域实体
pub use domain::{
    Alert, AlertReport, Dataset, Order, Picker, PickerAssignment, PickerView, ScoredOrder,
    ZoneActivity, ZoneDemand,
};

// 引擎
pub use engine::{
    AlertEngine, AssignmentEngine, BacklogSummary, DispatchOrchestrator, EvaluationRequest,
    EvaluationResult, FilterCriteria, LaborAlertRule, ScoringEngine, ShiftEngine, TimeContext,
};

// 导入器
pub use importer::{DatasetImporter, ImportError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储派工决策引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
