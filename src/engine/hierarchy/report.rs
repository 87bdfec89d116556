use crate::domain::hierarchy::{HierarchyTree, Occupancy, OccupancyStats};
use crate::domain::location::rack_letter_to_ordinal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

// ==========================================
// BuildReport - 构建报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// 输入行数
    pub rows_total: usize,

    /// 已聚合行数
    pub rows_aggregated: usize,

    /// 跳过的行
    pub skipped: Vec<SkippedRow>,
}

/// 被跳过的库位行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 输入中的行序号（0 起）
    pub row_index: usize,
    pub location_code: String,
    pub reason: String,
}

// ==========================================
// UtilizationReport - 利用率报表
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Total,
    Warehouse,
    Area,
    Rack,
    Level,
}

/// 报表行（一个层级节点）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRow {
    pub kind: NodeKind,

    /// 节点路径，例如 "A/A01/R06/L4"；汇总行为空串
    pub path: String,

    pub total_locations: u64,
    pub total_bins: u64,
    pub occupied_bins: u64,

    /// 利用率 (0-100)
    pub utilization: f64,
}

impl UtilizationRow {
    fn new(kind: NodeKind, path: String, stats: &OccupancyStats) -> Self {
        Self {
            kind,
            path,
            total_locations: stats.total_locations,
            total_bins: stats.total_bins,
            occupied_bins: stats.occupied_bins,
            utilization: stats.utilization(),
        }
    }

    fn depth(&self) -> usize {
        match self.kind {
            NodeKind::Total => 0,
            NodeKind::Warehouse => 1,
            NodeKind::Area => 2,
            NodeKind::Rack => 3,
            NodeKind::Level => 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilizationReport {
    pub generated_at: DateTime<Utc>,
    /// 深度优先，父节点在前
    pub rows: Vec<UtilizationRow>,
}

impl UtilizationReport {
    /// 将层级树展开为报表行
    ///
    /// 排序: 仓库/区域按编码字典序，货架按序号，层按层号。
    pub fn from_tree(tree: &HierarchyTree) -> Self {
        let mut rows = vec![UtilizationRow::new(NodeKind::Total, String::new(), tree.stats())];

        let mut warehouses: Vec<_> = tree.warehouses.values().collect();
        warehouses.sort_by(|a, b| a.warehouse_code.cmp(&b.warehouse_code));

        for warehouse in warehouses {
            let wh_path = warehouse.warehouse_code.clone();
            rows.push(UtilizationRow::new(NodeKind::Warehouse, wh_path.clone(), warehouse.stats()));

            let mut areas: Vec<_> = warehouse.areas.values().collect();
            areas.sort_by(|a, b| a.area_code.cmp(&b.area_code));

            for area in areas {
                let area_path = format!("{}/{}", wh_path, area.area_code);
                rows.push(UtilizationRow::new(NodeKind::Area, area_path.clone(), area.stats()));

                let mut racks: Vec<_> = area.racks.values().collect();
                // 非 A-Z 货架排在最后
                racks.sort_by_key(|r| {
                    (
                        rack_letter_to_ordinal(r.rack_letter).unwrap_or(u32::MAX),
                        r.rack_code.clone(),
                    )
                });

                for rack in racks {
                    let rack_path = format!("{}/{}", area_path, rack.rack_code);
                    rows.push(UtilizationRow::new(NodeKind::Rack, rack_path.clone(), rack.stats()));

                    let mut levels: Vec<_> = rack.levels.values().collect();
                    levels.sort_by_key(|l| l.level_number);

                    for level in levels {
                        rows.push(UtilizationRow::new(
                            NodeKind::Level,
                            format!("{}/{}", rack_path, level.level_code),
                            level.stats(),
                        ));
                    }
                }
            }
        }

        Self {
            generated_at: Utc::now(),
            rows,
        }
    }

    /// 查找指定路径的报表行
    pub fn find(&self, path: &str) -> Option<&UtilizationRow> {
        self.rows.iter().find(|r| r.path == path)
    }

    /// 文本格式（命令行输出）
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let label = if row.path.is_empty() {
                "TOTAL"
            } else {
                row.path.rsplit('/').next().unwrap_or(&row.path)
            };
            let _ = writeln!(
                out,
                "{:indent$}{:<8} locations={:<5} bins={:<5} occupied={:<5} utilization={:.1}%",
                "",
                label,
                row.total_locations,
                row.total_bins,
                row.occupied_bins,
                row.utilization,
                indent = row.depth() * 2
            );
        }
        out
    }
}
