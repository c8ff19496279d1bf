// ==========================================
// 仓储派工决策引擎 - 告警领域模型
// ==========================================
// 职责: 告警条目与告警报告
// 红线: 所有告警必须同时输出人读 message 与机读 detail
// ==========================================

use crate::domain::types::{AlertKind, AlertStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// Alert - 单条告警
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind, // 告警类别
    pub message: String, // 人读文本（契约字符串,下游 UI 直接展示）
    pub detail: String,  // 机读明细（JSON,可解释性）
}

// ==========================================
// AlertReport - 一趟评估的告警报告
// ==========================================
// 全清不是空列表: status=ALL_CLEAR 时携带显式全清文案,
// 下游按状态走 success/warning 两种样式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertReport {
    pub status: AlertStatus,
    pub alerts: Vec<Alert>,
    pub all_clear_message: Option<String>, // 仅 ALL_CLEAR 时为 Some
}

impl AlertReport {
    /// 构造全清报告
    pub fn all_clear(message: impl Into<String>) -> Self {
        Self {
            status: AlertStatus::AllClear,
            alerts: Vec::new(),
            all_clear_message: Some(message.into()),
        }
    }

    /// 构造告警报告（调用方保证列表非空）
    pub fn triggered(alerts: Vec<Alert>) -> Self {
        debug_assert!(!alerts.is_empty());
        Self {
            status: AlertStatus::Warning,
            alerts,
            all_clear_message: None,
        }
    }

    pub fn is_all_clear(&self) -> bool {
        self.status == AlertStatus::AllClear
    }

    /// 按规则求值顺序返回全部人读文本
    pub fn messages(&self) -> Vec<&str> {
        self.alerts.iter().map(|a| a.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_clear_carries_message_not_empty_list_semantics() {
        let report = AlertReport::all_clear("No critical alerts at the moment.");
        assert!(report.is_all_clear());
        assert!(report.alerts.is_empty());
        assert_eq!(
            report.all_clear_message.as_deref(),
            Some("No critical alerts at the moment.")
        );
    }

    #[test]
    fn test_triggered_report_has_warning_status() {
        let report = AlertReport::triggered(vec![Alert {
            kind: AlertKind::SlaRisk,
            message: "1 high-priority orders are at SLA risk (< 2 hrs left)".to_string(),
            detail: "{}".to_string(),
        }]);
        assert_eq!(report.status, AlertStatus::Warning);
        assert!(report.all_clear_message.is_none());
    }
}
