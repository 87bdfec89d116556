// ==========================================
// 仓储库存管理系统 - 库位层级树
// ==========================================
// 层级: 仓库 → 区域 → 货架 → 层 → 库位箱
// 红线: 每个节点的计数 = 子节点计数之和
// 红线: 空库位（无库位箱）只计入 total_locations，不计入 total_bins/occupied_bins
// ==========================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ==========================================
// OccupancyStats - 占用计数
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStats {
    /// 库位数（每个库位行计 1，与库位箱数量无关）
    pub total_locations: u64,

    /// 库位箱数（不含空库位占位项）
    pub total_bins: u64,

    /// 已占用库位箱数
    pub occupied_bins: u64,
}

impl OccupancyStats {
    pub fn record_location(&mut self) {
        self.total_locations += 1;
    }

    pub fn record_bin(&mut self, occupied: bool) {
        self.total_bins += 1;
        if occupied {
            self.occupied_bins += 1;
        }
    }

    pub fn merge(&mut self, other: &OccupancyStats) {
        self.total_locations += other.total_locations;
        self.total_bins += other.total_bins;
        self.occupied_bins += other.occupied_bins;
    }

    /// 利用率（百分比）；total_bins 为 0 时返回 0
    pub fn utilization(&self) -> f64 {
        if self.total_bins == 0 {
            return 0.0;
        }
        self.occupied_bins as f64 / self.total_bins as f64 * 100.0
    }
}

// ==========================================
// Occupancy Trait
// ==========================================
// 实现者: HierarchyTree / WarehouseNode / AreaNode / RackNode / LevelNode
pub trait Occupancy {
    fn stats(&self) -> &OccupancyStats;

    fn total_locations(&self) -> u64 {
        self.stats().total_locations
    }

    fn total_bins(&self) -> u64 {
        self.stats().total_bins
    }

    fn occupied_bins(&self) -> u64 {
        self.stats().occupied_bins
    }

    /// 只使用本节点自身的汇总计数
    fn utilization(&self) -> f64 {
        self.stats().utilization()
    }
}

/// 任意层级节点的利用率
pub fn utilization<N: Occupancy + ?Sized>(node: &N) -> f64 {
    node.utilization()
}

// ==========================================
// BinEntry - 叶子节点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinEntry {
    /// 库位箱 ID（空库位占位项为 None）
    pub bin_id: Option<i64>,

    /// 库位箱编码（空库位占位项使用配置的显示标签）
    pub bin_code: String,

    /// 所在库位编码
    pub location_code: String,

    pub occupied: bool,

    /// 库存条目数
    pub stock_count: usize,

    /// 库存总量
    pub total_stock_quantity: i64,

    /// 空库位占位项（仅用于展示，不参与计数）
    pub is_empty_location: bool,
}

impl BinEntry {
    /// 空库位占位项
    pub fn placeholder(location_code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            bin_id: None,
            bin_code: label.into(),
            location_code: location_code.into(),
            occupied: false,
            stock_count: 0,
            total_stock_quantity: 0,
            is_empty_location: true,
        }
    }
}

// ==========================================
// 层级节点
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelNode {
    pub level_code: String,
    pub level_number: u32,
    #[serde(flatten)]
    pub stats: OccupancyStats,
    /// 按出现顺序保存
    pub bins: Vec<BinEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RackNode {
    pub rack_code: String,
    pub rack_letter: char,
    #[serde(flatten)]
    pub stats: OccupancyStats,
    pub levels: IndexMap<String, LevelNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaNode {
    pub area_code: String,
    pub area_number: u32,
    #[serde(flatten)]
    pub stats: OccupancyStats,
    pub racks: IndexMap<String, RackNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseNode {
    pub warehouse_code: String,
    #[serde(flatten)]
    pub stats: OccupancyStats,
    pub areas: IndexMap<String, AreaNode>,
}

/// 库位层级树（聚合结果）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchyTree {
    #[serde(flatten)]
    pub stats: OccupancyStats,
    pub warehouses: IndexMap<String, WarehouseNode>,
}

macro_rules! impl_occupancy {
    ($($node:ty),+ $(,)?) => {
        $(
            impl Occupancy for $node {
                fn stats(&self) -> &OccupancyStats {
                    &self.stats
                }
            }
        )+
    };
}

impl_occupancy!(HierarchyTree, WarehouseNode, AreaNode, RackNode, LevelNode);

impl LevelNode {
    pub fn new(level_code: String, level_number: u32) -> Self {
        Self {
            level_code,
            level_number,
            stats: OccupancyStats::default(),
            bins: Vec::new(),
        }
    }

    /// 实际库位箱（不含空库位占位项）
    pub fn real_bins(&self) -> impl Iterator<Item = &BinEntry> {
        self.bins.iter().filter(|b| !b.is_empty_location)
    }
}

impl RackNode {
    pub fn new(rack_code: String, rack_letter: char) -> Self {
        Self {
            rack_code,
            rack_letter,
            stats: OccupancyStats::default(),
            levels: IndexMap::new(),
        }
    }
}

impl AreaNode {
    pub fn new(area_code: String, area_number: u32) -> Self {
        Self {
            area_code,
            area_number,
            stats: OccupancyStats::default(),
            racks: IndexMap::new(),
        }
    }
}

impl WarehouseNode {
    pub fn new(warehouse_code: String) -> Self {
        Self {
            warehouse_code,
            stats: OccupancyStats::default(),
            areas: IndexMap::new(),
        }
    }
}

// ==========================================
// 汇总一致性校验
// ==========================================

/// 汇总计数不一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupViolation {
    /// 节点路径，例如 "A/A01/R01"
    pub path: String,
    /// 子节点求和（层节点为库位箱列表统计）
    pub expected: OccupancyStats,
    /// 节点自身记录的计数
    pub actual: OccupancyStats,
}

fn sum_stats<'a>(children: impl Iterator<Item = &'a OccupancyStats>) -> OccupancyStats {
    children.fold(OccupancyStats::default(), |mut acc, s| {
        acc.merge(s);
        acc
    })
}

fn compare(path: String, expected: OccupancyStats, actual: OccupancyStats) -> Result<(), RollupViolation> {
    if expected != actual || actual.occupied_bins > actual.total_bins {
        return Err(RollupViolation {
            path,
            expected,
            actual,
        });
    }
    Ok(())
}

impl HierarchyTree {
    /// 校验每个非叶子节点的计数等于子节点之和
    ///
    /// 层节点: total_bins/occupied_bins 必须等于其非占位库位箱的统计。
    /// total_locations 在层节点上无法由库位箱列表推出，只校验上层求和。
    pub fn check_rollup(&self) -> Result<(), RollupViolation> {
        for (wh_code, warehouse) in &self.warehouses {
            for (area_code, area) in &warehouse.areas {
                for (rack_code, rack) in &area.racks {
                    for (level_code, level) in &rack.levels {
                        let mut expected = OccupancyStats {
                            total_locations: level.stats.total_locations,
                            ..OccupancyStats::default()
                        };
                        for bin in level.real_bins() {
                            expected.record_bin(bin.occupied);
                        }
                        compare(
                            format!("{}/{}/{}/{}", wh_code, area_code, rack_code, level_code),
                            expected,
                            level.stats,
                        )?;
                    }
                    compare(
                        format!("{}/{}/{}", wh_code, area_code, rack_code),
                        sum_stats(rack.levels.values().map(|l| &l.stats)),
                        rack.stats,
                    )?;
                }
                compare(
                    format!("{}/{}", wh_code, area_code),
                    sum_stats(area.racks.values().map(|r| &r.stats)),
                    area.stats,
                )?;
            }
            compare(
                wh_code.clone(),
                sum_stats(warehouse.areas.values().map(|a| &a.stats)),
                warehouse.stats,
            )?;
        }
        compare(
            String::new(),
            sum_stats(self.warehouses.values().map(|w| &w.stats)),
            self.stats,
        )
    }
}
