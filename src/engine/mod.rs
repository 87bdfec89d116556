// ==========================================
// 仓储库存管理系统 - 引擎层
// ==========================================
// 职责: 库位编码编解码 + 层级占用聚合
// 红线: 引擎为纯计算，不做 I/O，不持有共享状态
// ==========================================

pub mod error;
pub mod hierarchy;
pub mod location_codec;

// 重导出核心引擎
pub use error::{DecodingError, EncodingError};
pub use hierarchy::{
    BuildReport, HierarchyAggregator, NodeKind, SkippedRow, UtilizationReport, UtilizationRow,
};
pub use location_codec::{decode, encode, LocationCodec};
