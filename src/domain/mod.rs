// ==========================================
// 仓储派工决策引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、派生结构
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod alert;
pub mod dataset;
pub mod labor;
pub mod order;
pub mod types;
pub mod zone;

// 重导出核心类型
pub use alert::{Alert, AlertReport};
pub use dataset::Dataset;
pub use labor::{Picker, PickerAssignment, PickerView, RawPickerRecord, UNASSIGNED_SENTINEL};
pub use order::{Order, RawOrderRecord, ScoredOrder};
pub use types::{AlertKind, AlertStatus, Availability, PriorityLevel, ShiftStatus};
pub use zone::{RawZoneRecord, ZoneActivity, ZoneDemand};
