// ==========================================
// 仓储库存管理系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::hierarchy_config::HierarchyConfig;
use crate::db::{open_existing_sqlite_connection, open_sqlite_connection};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;
use tracing::{debug, info};

/// 配置键
pub mod config_keys {
    /// 层级节点编码配置（JSON）
    pub const HIERARCHY_DISPLAY: &str = "hierarchy/display";
}

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置读取失败: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("配置值格式错误 (key: {key}): {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Connection,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> ConfigResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self { conn })
    }

    /// 打开已存在的配置库，文件不存在时报错而不新建
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn open_existing(db_path: &str) -> ConfigResult<Self> {
        let conn = open_existing_sqlite_connection(db_path)?;
        Ok(Self { conn })
    }

    /// 从已有连接创建 ConfigManager
    pub fn from_connection(conn: Connection) -> ConfigResult<Self> {
        crate::db::configure_sqlite_connection(&conn)?;
        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// config_kv 表不存在时视为无配置。
    fn get_config_value(&self, key: &str) -> ConfigResult<Option<String>> {
        if !crate::db::table_exists(&self.conn, "config_kv")? {
            debug!("config_kv 表不存在，使用默认配置");
            return Ok(None);
        }

        let value = self
            .conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 读取层级节点编码配置，不存在时返回默认值
    pub fn get_hierarchy_config(&self) -> ConfigResult<HierarchyConfig> {
        let key = config_keys::HIERARCHY_DISPLAY;
        let raw = match self.get_config_value(key)? {
            Some(v) if !v.trim().is_empty() => v,
            _ => return Ok(HierarchyConfig::default()),
        };

        let config: HierarchyConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::InvalidValue {
                key: key.to_string(),
                source,
            })?;

        info!(
            area_prefix = %config.area_code_prefix,
            rack_prefix = %config.rack_code_prefix,
            level_prefix = %config.level_code_prefix,
            "层级编码配置已加载"
        );
        Ok(config)
    }
}
