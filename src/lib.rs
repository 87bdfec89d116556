// ==========================================
// 仓储库存管理系统 - 库位层级核心库
// ==========================================
// 范围: 库位编码编解码 + 仓库/区域/货架/层/库位箱 占用统计
// 系统定位: 报表视图的纯计算核心（不查库、不持有共享状态）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 坐标、输入行、层级树
pub mod domain;

// 引擎层 - 编解码与聚合
pub mod engine;

// 导入层 - 外部导出文件
pub mod importer;

// 配置层 - 层级编码配置
pub mod config;

// 数据库基础设施（配置表连接）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    utilization, AreaNode, BinEntry, BinRow, Coordinate, HierarchyTree, LevelNode, LocationRow,
    Occupancy, OccupancyStats, RackNode, StockEntry, WarehouseNode,
};

pub use engine::{
    decode, encode, BuildReport, DecodingError, EncodingError, HierarchyAggregator,
    LocationCodec, UtilizationReport,
};

pub use config::{ConfigManager, HierarchyConfig};

pub use importer::LocationRowImporter;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储库存管理系统";
