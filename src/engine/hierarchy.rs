// ==========================================
// 仓储库存管理系统 - 库位层级聚合引擎
// ==========================================
// 红线: 空库位只计入 total_locations，不计入 total_bins/occupied_bins
// 红线: 单行解码失败只跳过该行，不中断整体聚合
// ==========================================
// 职责: 扁平库位行 → 仓库/区域/货架/层/库位箱 层级树 + 占用统计
// 输入: 库位行列表 (LocationRow)
// 输出: 层级树 + 构建报告 + 利用率报表
// ==========================================

mod core;
mod report;

#[cfg(test)]
mod tests;

pub use self::core::HierarchyAggregator;
pub use report::{BuildReport, NodeKind, SkippedRow, UtilizationReport, UtilizationRow};
