// ==========================================
// 仓储库存管理系统 - 导入层
// ==========================================
// 职责: 存储层导出文件 → 聚合输入 (LocationRow)
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod location_importer;
pub mod row_assembler;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::LocationFieldMapper;
pub use file_parser::{CsvParser, ExcelFormat, ExcelParser, UniversalFileParser};
pub use location_importer::LocationRowImporter;
pub use row_assembler::LocationRowAssembler;

// 重导出 Trait 接口
pub use importer_trait::{FieldMapper, FileParser, RawRecord, RowAssembler};
