// ==========================================
// 仓储库存管理系统 - 库位行导入器
// ==========================================
// 导入流程:
// 1. 文件读取与解析（CSV / Excel）
// 2. 字段映射与类型转换
// 3. 按库位/库位箱归并为 LocationRow
// ==========================================

use crate::domain::location_row::LocationRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::LocationFieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FieldMapper, RawRecord, RowAssembler};
use crate::importer::row_assembler::LocationRowAssembler;
use std::path::Path;
use tracing::{debug, info};

pub struct LocationRowImporter {
    parser: UniversalFileParser,
    mapper: LocationFieldMapper,
    assembler: LocationRowAssembler,
}

impl Default for LocationRowImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationRowImporter {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            mapper: LocationFieldMapper,
            assembler: LocationRowAssembler,
        }
    }

    /// 从文件导入库位行
    ///
    /// # 返回
    /// - Ok(Vec<LocationRow>): 聚合输入
    /// - Err: 文件不存在/格式不支持/缺少库位编码列/数值列无法解析
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<LocationRow>> {
        let path = file_path.as_ref();
        debug!(path = %path.display(), "开始导入库位数据");

        let raw_records = self.parser.parse(path)?;
        let rows = self.import_records(&raw_records)?;

        info!(
            path = %path.display(),
            records = raw_records.len(),
            locations = rows.len(),
            "库位数据导入完成"
        );
        Ok(rows)
    }

    /// 从已解析的原始记录导入
    pub fn import_records(&self, raw_records: &[RawRecord]) -> ImportResult<Vec<LocationRow>> {
        if let Some(first) = raw_records.first() {
            if !self.mapper.has_location_column(first.keys()) {
                return Err(ImportError::MissingColumn("location_code".to_string()));
            }
        }

        let records = raw_records
            .iter()
            .enumerate()
            .map(|(idx, row)| self.mapper.map_to_raw_location(row, idx + 1))
            .collect::<ImportResult<Vec<_>>>()?;

        Ok(self.assembler.assemble(records))
    }
}
