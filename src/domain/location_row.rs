// ==========================================
// 仓储库存管理系统 - 库位行（聚合输入）
// ==========================================
// 职责: 存储层 location × bin × stock 关联结果的显式结构
// 说明: 本模块不查库，由外部存储层或导入层构造
// ==========================================

use serde::{Deserialize, Serialize};

/// 库存条目（某个库位箱的一条库存数量）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub quantity: i64,
}

/// 库位箱及其库存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinRow {
    pub bin_id: i64,
    pub bin_code: String,
    #[serde(default)]
    pub stock_entries: Vec<StockEntry>,
}

impl BinRow {
    /// 库存总量（饱和加法，不溢出）
    pub fn total_quantity(&self) -> i64 {
        self.stock_entries
            .iter()
            .fold(0i64, |acc, e| acc.saturating_add(e.quantity))
    }

    /// 是否占用: 库存总量 > 0
    pub fn is_occupied(&self) -> bool {
        self.total_quantity() > 0
    }
}

/// 库位行
///
/// `bins` 可以为空（库位尚未分配库位箱）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRow {
    pub location_code: String,
    #[serde(default)]
    pub warehouse_code: String,
    #[serde(default)]
    pub bins: Vec<BinRow>,
}

impl LocationRow {
    pub fn new(location_code: impl Into<String>, warehouse_code: impl Into<String>) -> Self {
        Self {
            location_code: location_code.into(),
            warehouse_code: warehouse_code.into(),
            bins: Vec::new(),
        }
    }

    /// 追加库位箱（构造测试数据/导入时使用）
    pub fn with_bin(mut self, bin_id: i64, bin_code: impl Into<String>, quantities: &[i64]) -> Self {
        self.bins.push(BinRow {
            bin_id,
            bin_code: bin_code.into(),
            stock_entries: quantities
                .iter()
                .map(|&quantity| StockEntry { quantity })
                .collect(),
        });
        self
    }
}

/// 扁平关联记录（导入文件中的一行: location × bin × stock）
///
/// - bin_id 为空: 库位未分配库位箱
/// - quantity 为空: 库位箱无库存条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLocationRecord {
    pub location_code: String,
    pub warehouse_code: Option<String>,
    pub bin_id: Option<i64>,
    pub bin_code: Option<String>,
    pub quantity: Option<i64>,

    // 元信息
    pub row_number: usize,
}
