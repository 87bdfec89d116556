use super::*;
use crate::config::HierarchyConfig;
use crate::domain::hierarchy::{HierarchyTree, Occupancy};
use crate::domain::location_row::LocationRow;

// ==========================================
// 测试辅助函数
// ==========================================

/// 场景: A1A1 无库位箱, A1A2 一个空箱, A1A3 一个有货箱
fn create_basic_rows() -> Vec<LocationRow> {
    vec![
        LocationRow::new("A1A1", "A"),
        LocationRow::new("A1A2", "A").with_bin(10, "B10", &[0]),
        LocationRow::new("A1A3", "A").with_bin(11, "B11", &[5]),
    ]
}

/// 混合场景: 多仓库、多区域、多箱库位
fn create_mixed_rows() -> Vec<LocationRow> {
    vec![
        LocationRow::new("A1F4", "A")
            .with_bin(1, "B01", &[3, 2])
            .with_bin(2, "B02", &[])
            .with_bin(3, "B03", &[0, 0]),
        LocationRow::new("A1E7", "A").with_bin(4, "B04", &[1]),
        LocationRow::new("A2B1", "A"),
        LocationRow::new("B1B1", "B").with_bin(5, "B05", &[7]),
        LocationRow::new("B1B2", "B"),
        LocationRow::new("A1F4", "A").with_bin(6, "B06", &[4]),
    ]
}

fn assert_utilization_bounds<N: Occupancy>(node: &N) {
    let u = node.utilization();
    assert!((0.0..=100.0).contains(&u), "utilization out of bounds: {}", u);
    if node.total_bins() == 0 {
        assert_eq!(u, 0.0);
    }
    assert!(node.occupied_bins() <= node.total_bins());
}

fn assert_all_bounds(tree: &HierarchyTree) {
    assert_utilization_bounds(tree);
    for wh in tree.warehouses.values() {
        assert_utilization_bounds(wh);
        for area in wh.areas.values() {
            assert_utilization_bounds(area);
            for rack in area.racks.values() {
                assert_utilization_bounds(rack);
                for level in rack.levels.values() {
                    assert_utilization_bounds(level);
                }
            }
        }
    }
}

// ==========================================
// 基本场景
// ==========================================

#[test]
fn test_empty_location_is_not_a_bin() {
    let tree = HierarchyAggregator::new().build(&create_basic_rows());

    let rack = &tree.warehouses["A"].areas["A01"].racks["R01"];
    assert_eq!(rack.total_locations(), 3);
    assert_eq!(rack.total_bins(), 2);
    assert_eq!(rack.occupied_bins(), 1);
    assert_eq!(rack.utilization(), 50.0);

    assert_eq!(tree.stats.total_locations, 3);
    assert_eq!(tree.stats.total_bins, 2);
    assert_eq!(tree.stats.occupied_bins, 1);
}

#[test]
fn test_placeholder_leaf() {
    let tree = HierarchyAggregator::new().build(&create_basic_rows());

    let level = &tree.warehouses["A"].areas["A01"].racks["R01"].levels["L1"];
    assert_eq!(level.bins.len(), 1);
    let placeholder = &level.bins[0];
    assert!(placeholder.is_empty_location);
    assert!(!placeholder.occupied);
    assert_eq!(placeholder.bin_id, None);
    assert_eq!(placeholder.bin_code, "EMPTY");
    assert_eq!(placeholder.location_code, "A1A1");

    assert_eq!(level.total_locations(), 1);
    assert_eq!(level.total_bins(), 0);
    assert_eq!(level.utilization(), 0.0);
}

#[test]
fn test_bin_entry_fields() {
    let tree = HierarchyAggregator::new().build(&create_mixed_rows());

    let level = &tree.warehouses["A"].areas["A01"].racks["R06"].levels["L4"];
    let codes: Vec<_> = level.bins.iter().map(|b| b.bin_code.as_str()).collect();
    assert_eq!(codes, vec!["B01", "B02", "B03", "B06"]);

    let b01 = &level.bins[0];
    assert_eq!(b01.bin_id, Some(1));
    assert!(b01.occupied);
    assert_eq!(b01.stock_count, 2);
    assert_eq!(b01.total_stock_quantity, 5);

    let b02 = &level.bins[1];
    assert!(!b02.occupied);
    assert_eq!(b02.stock_count, 0);

    let b03 = &level.bins[2];
    assert!(!b03.occupied);
    assert_eq!(b03.stock_count, 2);
    assert_eq!(b03.total_stock_quantity, 0);

    // 同一库位出现两次，各计一次库位
    assert_eq!(level.total_locations(), 2);
    assert_eq!(level.total_bins(), 4);
    assert_eq!(level.occupied_bins(), 2);
}

#[test]
fn test_multi_bin_location_counts_once() {
    let rows = vec![LocationRow::new("C3D2", "C")
        .with_bin(1, "B01", &[1])
        .with_bin(2, "B02", &[1])
        .with_bin(3, "B03", &[0])];
    let tree = HierarchyAggregator::new().build(&rows);

    assert_eq!(tree.total_locations(), 1);
    assert_eq!(tree.total_bins(), 3);
    assert_eq!(tree.occupied_bins(), 2);
}

// ==========================================
// 不变量
// ==========================================

#[test]
fn test_rollup_invariant() {
    let tree = HierarchyAggregator::new().build(&create_mixed_rows());
    assert!(tree.check_rollup().is_ok());

    let wh_a = &tree.warehouses["A"];
    assert_eq!(wh_a.total_locations(), 4);
    assert_eq!(wh_a.total_bins(), 5);
    assert_eq!(wh_a.occupied_bins(), 3);

    let wh_b = &tree.warehouses["B"];
    assert_eq!(wh_b.total_locations(), 2);
    assert_eq!(wh_b.total_bins(), 1);
    assert_eq!(wh_b.occupied_bins(), 1);
    assert_eq!(wh_b.utilization(), 100.0);

    assert_eq!(tree.total_locations(), 6);
    assert_eq!(tree.total_bins(), 6);
    assert_eq!(tree.occupied_bins(), 4);
}

#[test]
fn test_no_phantom_bins() {
    let rows = vec![
        LocationRow::new("A1A1", "A"),
        LocationRow::new("A1A2", "A"),
        LocationRow::new("A2A1", "A"),
    ];
    let tree = HierarchyAggregator::new().build(&rows);

    assert_eq!(tree.total_locations(), 3);
    assert_eq!(tree.total_bins(), 0);
    assert_eq!(tree.occupied_bins(), 0);
    assert_eq!(tree.utilization(), 0.0);

    for area in tree.warehouses["A"].areas.values() {
        for rack in area.racks.values() {
            for level in rack.levels.values() {
                assert_eq!(level.bins.len(), 1);
                assert!(level.bins[0].is_empty_location);
                assert_eq!(level.total_bins(), 0);
            }
        }
    }
    assert!(tree.check_rollup().is_ok());
}

#[test]
fn test_utilization_bounds() {
    let tree = HierarchyAggregator::new().build(&create_mixed_rows());
    assert_all_bounds(&tree);

    let empty = HierarchyAggregator::new().build(&[]);
    assert_all_bounds(&empty);
    assert_eq!(empty.utilization(), 0.0);
}

#[test]
fn test_idempotent_build() {
    let aggregator = HierarchyAggregator::new();
    let rows = create_mixed_rows();
    assert_eq!(aggregator.build(&rows), aggregator.build(&rows));
}

// ==========================================
// 异常输入
// ==========================================

#[test]
fn test_empty_code_skipped() {
    let mut rows = create_basic_rows();
    rows.insert(1, LocationRow::new("", "A").with_bin(99, "B99", &[8]));

    let (tree, report) = HierarchyAggregator::new().build_with_report(&rows);

    assert_eq!(report.rows_total, 4);
    assert_eq!(report.rows_aggregated, 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].row_index, 1);
    assert_eq!(report.skipped[0].location_code, "");

    // 跳过行不影响其余结果
    assert_eq!(tree.total_locations(), 3);
    assert_eq!(tree.total_bins(), 2);
    assert_eq!(tree.occupied_bins(), 1);
}

#[test]
fn test_legacy_code_is_aggregated() {
    let rows = vec![LocationRow::new("W1-A01-R01-L1-B05", "W").with_bin(1, "B05", &[2])];
    let (tree, report) = HierarchyAggregator::new().build_with_report(&rows);

    assert!(report.skipped.is_empty());
    let rack = &tree.warehouses["W"].areas["A01"].racks["R-"];
    assert_eq!(rack.levels["L1"].total_bins(), 1);
    assert_eq!(rack.occupied_bins(), 1);
}

#[test]
fn test_blank_warehouse_falls_back_to_code() {
    let rows = vec![LocationRow::new("C2A1", "  ").with_bin(1, "B01", &[1])];
    let tree = HierarchyAggregator::new().build(&rows);
    assert!(tree.warehouses.contains_key("C"));
}

#[test]
fn test_row_warehouse_code_wins() {
    let rows = vec![LocationRow::new("A1A1", "WH-NORTH").with_bin(1, "B01", &[1])];
    let tree = HierarchyAggregator::new().build(&rows);
    assert!(tree.warehouses.contains_key("WH-NORTH"));
    assert!(!tree.warehouses.contains_key("A"));
}

// ==========================================
// 配置与报表
// ==========================================

#[test]
fn test_custom_config_codes() {
    let config = HierarchyConfig {
        rack_code_prefix: "RK".to_string(),
        empty_location_label: "(空)".to_string(),
        ..HierarchyConfig::default()
    };
    let tree = HierarchyAggregator::with_config(config).build(&create_basic_rows());

    let rack = &tree.warehouses["A"].areas["A01"].racks["RK01"];
    assert_eq!(rack.levels["L1"].bins[0].bin_code, "(空)");
}

#[test]
fn test_insertion_order_preserved() {
    let rows = vec![
        LocationRow::new("A1C1", "A"),
        LocationRow::new("A1A1", "A"),
        LocationRow::new("A1B1", "A"),
    ];
    let tree = HierarchyAggregator::new().build(&rows);
    let keys: Vec<_> = tree.warehouses["A"].areas["A01"].racks.keys().cloned().collect();
    assert_eq!(keys, vec!["R03", "R01", "R02"]);
}

#[test]
fn test_report_sorted_and_consistent() {
    let mut rows = create_mixed_rows();
    rows.push(LocationRow::new("A1A12", "A").with_bin(7, "B07", &[0]));
    rows.push(LocationRow::new("A1A2", "A").with_bin(8, "B08", &[1]));
    let tree = HierarchyAggregator::new().build(&rows);
    let report = UtilizationReport::from_tree(&tree);

    assert_eq!(report.rows[0].kind, NodeKind::Total);
    assert_eq!(report.rows[0].total_bins, tree.total_bins());

    let paths: Vec<_> = report
        .rows
        .iter()
        .filter(|r| r.kind == NodeKind::Rack && r.path.starts_with("A/A01/"))
        .map(|r| r.path.as_str())
        .collect();
    assert_eq!(paths, vec!["A/A01/R01", "A/A01/R05", "A/A01/R06"]);

    let levels: Vec<_> = report
        .rows
        .iter()
        .filter(|r| r.kind == NodeKind::Level && r.path.starts_with("A/A01/R01/"))
        .map(|r| r.path.as_str())
        .collect();
    assert_eq!(levels, vec!["A/A01/R01/L2", "A/A01/R01/L12"]);

    let rack = report.find("A/A01/R06").unwrap();
    assert_eq!(rack.total_bins, 4);
    assert_eq!(rack.occupied_bins, 2);
    assert_eq!(rack.utilization, 50.0);

    let text = report.render_text();
    assert!(text.starts_with("TOTAL"));
    assert!(text.contains("R06"));
}
