// ==========================================
// 仓储库存管理系统 - 库位层级聚合引擎
// ==========================================
// 红线: 空库位只计入 total_locations，不计入 total_bins/occupied_bins
// 红线: 单行解码失败只跳过该行，不中断整体聚合
// ==========================================
// 注: 无状态引擎，每次调用返回独立的层级树
// ==========================================

use crate::config::HierarchyConfig;
use crate::domain::hierarchy::{
    AreaNode, BinEntry, HierarchyTree, LevelNode, OccupancyStats, RackNode, WarehouseNode,
};
use crate::domain::location::Coordinate;
use crate::domain::location_row::LocationRow;
use crate::engine::location_codec::LocationCodec;
use tracing::{debug, info, warn};

use super::report::{BuildReport, SkippedRow};

// ==========================================
// HierarchyAggregator - 库位层级聚合引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct HierarchyAggregator {
    config: HierarchyConfig,
}

impl HierarchyAggregator {
    /// 使用默认节点编码配置
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HierarchyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 构建层级树
    ///
    /// 按输入顺序处理库位行；解码失败的行记录警告后跳过。
    pub fn build(&self, rows: &[LocationRow]) -> HierarchyTree {
        self.build_with_report(rows).0
    }

    /// 构建层级树并返回构建报告（含跳过行明细）
    pub fn build_with_report(&self, rows: &[LocationRow]) -> (HierarchyTree, BuildReport) {
        debug!(rows_count = rows.len(), "开始构建库位层级树");

        let mut tree = HierarchyTree::default();
        let mut report = BuildReport {
            rows_total: rows.len(),
            ..BuildReport::default()
        };

        for (row_index, row) in rows.iter().enumerate() {
            let coordinate = match LocationCodec::decode(&row.location_code) {
                Ok(c) => c,
                Err(e) => {
                    warn!(
                        row_index = row_index,
                        location_code = %row.location_code,
                        error = %e,
                        "库位编码解码失败，跳过该行"
                    );
                    report.skipped.push(SkippedRow {
                        row_index,
                        location_code: row.location_code.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            self.insert_row(&mut tree, row, &coordinate);
            report.rows_aggregated += 1;
        }

        info!(
            rows_total = report.rows_total,
            rows_aggregated = report.rows_aggregated,
            rows_skipped = report.skipped.len(),
            warehouses = tree.warehouses.len(),
            total_locations = tree.stats.total_locations,
            total_bins = tree.stats.total_bins,
            occupied_bins = tree.stats.occupied_bins,
            "库位层级树构建完成"
        );

        (tree, report)
    }

    // ==========================================
    // 内部方法
    // ==========================================

    /// 插入单个库位行，并将本行计数累加到路径上的每个节点
    fn insert_row(&self, tree: &mut HierarchyTree, row: &LocationRow, coordinate: &Coordinate) {
        let (entries, row_stats) = self.bin_entries(row);

        // 存储层提供的仓库代码优先；为空时使用编码中的仓库字母
        let warehouse_code = match row.warehouse_code.trim() {
            "" => coordinate.warehouse_code.clone(),
            code => code.to_string(),
        };
        let area_code = self.config.area_code(coordinate);
        let rack_code = self.config.rack_code(coordinate);
        let level_code = self.config.level_code(coordinate);

        tree.stats.merge(&row_stats);

        let warehouse = tree
            .warehouses
            .entry(warehouse_code.clone())
            .or_insert_with(|| WarehouseNode::new(warehouse_code));
        warehouse.stats.merge(&row_stats);

        let area = warehouse
            .areas
            .entry(area_code.clone())
            .or_insert_with(|| AreaNode::new(area_code, coordinate.area_number));
        area.stats.merge(&row_stats);

        let rack = area
            .racks
            .entry(rack_code.clone())
            .or_insert_with(|| RackNode::new(rack_code, coordinate.rack_letter));
        rack.stats.merge(&row_stats);

        let level = rack
            .levels
            .entry(level_code.clone())
            .or_insert_with(|| LevelNode::new(level_code, coordinate.level_number));
        level.stats.merge(&row_stats);
        level.bins.extend(entries);
    }

    /// 生成库位行的叶子项及其计数
    ///
    /// 无库位箱的库位生成一个占位项，row_stats 中只有 total_locations = 1。
    fn bin_entries(&self, row: &LocationRow) -> (Vec<BinEntry>, OccupancyStats) {
        let mut stats = OccupancyStats::default();
        stats.record_location();

        if row.bins.is_empty() {
            let placeholder =
                BinEntry::placeholder(row.location_code.clone(), self.config.empty_location_label.clone());
            return (vec![placeholder], stats);
        }

        let entries: Vec<BinEntry> = row
            .bins
            .iter()
            .map(|bin| {
                let total_stock_quantity = bin.total_quantity();
                let occupied = total_stock_quantity > 0;
                stats.record_bin(occupied);
                BinEntry {
                    bin_id: Some(bin.bin_id),
                    bin_code: bin.bin_code.clone(),
                    location_code: row.location_code.clone(),
                    occupied,
                    stock_count: bin.stock_entries.len(),
                    total_stock_quantity,
                    is_empty_location: false,
                }
            })
            .collect();

        (entries, stats)
    }
}
