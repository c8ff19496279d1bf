// ==========================================
// 仓储派工决策引擎 - 时间上下文
// ==========================================
// 职责: 为一趟评估提供唯一基准时间
// 红线: 每趟只取一次基准时间,所有行共用,
//       禁止逐行重新采样（避免趟内偏移）
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 模拟时钟可选小时下界（滑块契约）
pub const MIN_SIMULATED_HOUR: u32 = 8;
/// 模拟时钟可选小时上界（滑块契约）
pub const MAX_SIMULATED_HOUR: u32 = 20;

/// 时间上下文错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeContextError {
    #[error("模拟小时超出范围 [{MIN_SIMULATED_HOUR}, {MAX_SIMULATED_HOUR}]: {0}")]
    HourOutOfRange(u32),
}

// ==========================================
// TimeContext - 基准时间来源
// ==========================================
// 变体A: 实时（墙钟）
// 变体B: 模拟（当日日期 + 用户选定整点,分秒清零）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeContext {
    RealTime,
    SimulatedHour(u32),
}

impl Default for TimeContext {
    fn default() -> Self {
        TimeContext::RealTime
    }
}

impl TimeContext {
    /// 实时变体
    pub fn real_time() -> Self {
        TimeContext::RealTime
    }

    /// 模拟变体（校验小时范围）
    pub fn simulated(hour: u32) -> Result<Self, TimeContextError> {
        if !(MIN_SIMULATED_HOUR..=MAX_SIMULATED_HOUR).contains(&hour) {
            return Err(TimeContextError::HourOutOfRange(hour));
        }
        Ok(TimeContext::SimulatedHour(hour))
    }

    /// 解析出本趟基准时间（纯函数,墙钟由调用方采样一次后传入）
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self {
            TimeContext::RealTime => now,
            TimeContext::SimulatedHour(hour) => {
                // 绕过构造器直接写入越界值时收敛到上界
                let hour = (*hour).min(MAX_SIMULATED_HOUR);
                now.date().and_hms_opt(hour, 0, 0).unwrap_or(now)
            }
        }
    }

    /// 是否为模拟时钟变体（决定告警全清文案与班次派生）
    pub fn is_simulated(&self) -> bool {
        matches!(self, TimeContext::SimulatedHour(_))
    }

    /// 模拟小时（实时变体返回 None）
    pub fn simulated_hour(&self) -> Option<u32> {
        match self {
            TimeContext::RealTime => None,
            TimeContext::SimulatedHour(hour) => Some(*hour),
        }
    }
}
