// ==========================================
// 仓储库存管理系统 - 库位行归并
// ==========================================
// 职责: 扁平关联记录 → LocationRow（库位 → 库位箱 → 库存条目）
// 顺序: 库位、库位箱均按首次出现顺序
// ==========================================

use crate::domain::location_row::{BinRow, LocationRow, RawLocationRecord, StockEntry};
use crate::importer::importer_trait::RowAssembler;
use indexmap::IndexMap;
use tracing::warn;

pub struct LocationRowAssembler;

impl RowAssembler for LocationRowAssembler {
    fn assemble(&self, records: Vec<RawLocationRecord>) -> Vec<LocationRow> {
        let mut locations: IndexMap<String, LocationRow> = IndexMap::new();

        for record in records {
            let row = locations
                .entry(record.location_code.clone())
                .or_insert_with(|| {
                    LocationRow::new(
                        record.location_code.clone(),
                        record.warehouse_code.clone().unwrap_or_default(),
                    )
                });

            if let Some(code) = &record.warehouse_code {
                if row.warehouse_code.is_empty() {
                    row.warehouse_code = code.clone();
                } else if row.warehouse_code != *code {
                    warn!(
                        row_number = record.row_number,
                        location_code = %record.location_code,
                        expected = %row.warehouse_code,
                        actual = %code,
                        "同一库位出现不同仓库代码，保留首次出现的值"
                    );
                }
            }

            // 无库位箱: 仅登记库位
            let bin_id = match record.bin_id {
                Some(id) => id,
                None => continue,
            };

            let bin = match row.bins.iter().position(|b| b.bin_id == bin_id) {
                Some(idx) => &mut row.bins[idx],
                None => {
                    row.bins.push(BinRow {
                        bin_id,
                        bin_code: record
                            .bin_code
                            .clone()
                            .unwrap_or_else(|| bin_id.to_string()),
                        stock_entries: Vec::new(),
                    });
                    let last = row.bins.len() - 1;
                    &mut row.bins[last]
                }
            };

            if let Some(quantity) = record.quantity {
                bin.stock_entries.push(StockEntry { quantity });
            }
        }

        locations.into_values().collect()
    }
}
