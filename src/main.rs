// ==========================================
// 仓储库存管理系统 - 库位利用率报表
// ==========================================
// 用法:
//   location-report <rows.csv|rows.xlsx> [config_db_path] [--json] [--log-json]
//
// 读取存储层导出的 location × bin × stock 关联记录，
// 构建库位层级树并输出各层级利用率。
// ==========================================

use anyhow::{bail, Context, Result};
use warehouse_inventory::{
    logging, ConfigManager, HierarchyAggregator, HierarchyConfig, LocationRowImporter,
    UtilizationReport,
};

fn main() -> Result<()> {
    let mut json = false;
    let mut log_json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--log-json" => log_json = true,
            _ => positional.push(arg),
        }
    }

    if log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    let mut positional = positional.into_iter();
    let input_path = match positional.next() {
        Some(p) => p,
        None => bail!("usage: location-report <rows.csv|rows.xlsx> [config_db_path] [--json] [--log-json]"),
    };

    let config = match positional.next() {
        Some(db_path) => ConfigManager::open_existing(&db_path)
            .and_then(|manager| manager.get_hierarchy_config())
            .with_context(|| format!("读取配置失败: {}", db_path))?,
        None => HierarchyConfig::default(),
    };

    tracing::info!("{} v{}", warehouse_inventory::APP_NAME, warehouse_inventory::VERSION);

    let rows = LocationRowImporter::new()
        .import_file(&input_path)
        .with_context(|| format!("导入失败: {}", input_path))?;

    let aggregator = HierarchyAggregator::with_config(config);
    let (tree, build_report) = aggregator.build_with_report(&rows);
    if !build_report.skipped.is_empty() {
        tracing::warn!(skipped = build_report.skipped.len(), "部分库位行被跳过");
    }

    let report = UtilizationReport::from_tree(&tree);
    if json {
        let output = serde_json::json!({
            "tree": tree,
            "report": report,
            "build": build_report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
