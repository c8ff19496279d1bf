// ==========================================
// 性能观测
// ==========================================
// 每趟评估/导入一条 perf 日志,观测耗时漂移
// ==========================================

use std::time::Instant;

/// 性能统计 Guard: 作用域结束时记录 elapsed_ms
///
/// 使用方式:
/// ```ignore
/// let _perf = flowforge_engine::perf::PerfGuard::new("evaluation_pass");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}
