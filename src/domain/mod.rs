// ==========================================
// 仓储库存管理系统 - 领域模型层
// ==========================================
// 职责: 定义库位坐标、聚合输入行、层级树节点
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod hierarchy;
pub mod location;
pub mod location_row;

// 重导出核心类型
pub use hierarchy::{
    utilization, AreaNode, BinEntry, HierarchyTree, LevelNode, Occupancy, OccupancyStats,
    RackNode, RollupViolation, WarehouseNode,
};
pub use location::{ordinal_to_rack_letter, rack_letter_to_ordinal, Coordinate};
pub use location_row::{BinRow, LocationRow, RawLocationRecord, StockEntry};
