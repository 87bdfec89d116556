// ==========================================
// 仓储库存管理系统 - 配置层
// ==========================================
// 职责: 层级节点编码等展示配置
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod hierarchy_config;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult};
pub use hierarchy_config::HierarchyConfig;
