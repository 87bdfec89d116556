// ==========================================
// 仓储库存管理系统 - 导入接口
// ==========================================
// 职责: 定义库位行导入各阶段接口（不包含实现）
// ==========================================

use crate::domain::location_row::{LocationRow, RawLocationRecord};
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始记录: 表头 → 单元格值（已 trim）
pub type RawRecord = HashMap<String, String>;

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser / ExcelParser
pub trait FileParser {
    /// 解析文件为原始记录（跳过完全空白的行）
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<Vec<RawRecord>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 实现者: LocationFieldMapper
pub trait FieldMapper {
    /// 原始记录 → 库位扁平记录
    ///
    /// # 参数
    /// - row: 原始记录
    /// - row_number: 数据行号（1 起，不含表头）
    fn map_to_raw_location(&self, row: &RawRecord, row_number: usize) -> ImportResult<RawLocationRecord>;
}

// ==========================================
// RowAssembler Trait
// ==========================================
// 实现者: LocationRowAssembler
pub trait RowAssembler {
    /// 扁平记录按库位/库位箱归并为聚合输入
    fn assemble(&self, records: Vec<RawLocationRecord>) -> Vec<LocationRow>;
}
