// ==========================================
// 仓储库存管理系统 - 字段映射器实现
// ==========================================
// 职责: 源字段 → 标准字段映射 + 类型转换
// 标准字段: location_code / warehouse_code / bin_id / bin_code / quantity
// ==========================================

use crate::domain::location_row::RawLocationRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FieldMapper, RawRecord};

pub struct LocationFieldMapper;

impl FieldMapper for LocationFieldMapper {
    fn map_to_raw_location(&self, row: &RawRecord, row_number: usize) -> ImportResult<RawLocationRecord> {
        Ok(RawLocationRecord {
            // 主键（允许为空，由聚合阶段跳过并记录）
            location_code: self.get_string(row, "location_code").unwrap_or_default(),
            warehouse_code: self.get_string(row, "warehouse_code"),

            // 库位箱
            bin_id: self.parse_i64(row, "bin_id", row_number)?,
            bin_code: self.get_string(row, "bin_code"),

            // 库存
            quantity: self.parse_i64(row, "quantity", row_number)?,

            // 元信息
            row_number,
        })
    }
}

impl LocationFieldMapper {
    /// 表头中是否存在库位编码列（任一别名）
    pub fn has_location_column<'a>(&self, headers: impl IntoIterator<Item = &'a String>) -> bool {
        let aliases = Self::aliases("location_code");
        headers.into_iter().any(|h| aliases.contains(&h.as_str()))
    }

    /// 列名别名（导出报表可能使用中文表头）
    fn aliases(key: &str) -> Vec<&str> {
        match key {
            "location_code" => vec!["location_code", "库位编码", "库位"],
            "warehouse_code" => vec!["warehouse_code", "仓库代码", "仓库"],
            "bin_id" => vec!["bin_id", "库位箱ID"],
            "bin_code" => vec!["bin_code", "库位箱编码"],
            "quantity" => vec!["quantity", "on_hand_quantity", "库存数量"],
            _ => vec![key],
        }
    }

    /// 提取字符串字段（空值返回 None）
    fn get_string(&self, row: &RawRecord, key: &str) -> Option<String> {
        for alias in Self::aliases(key) {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// 解析整数
    ///
    /// Excel 数值单元格可能输出为 "5.0"，小数部分为 0 时按整数接受。
    /// 超出 i64 表示范围的浮点值视为类型错误，不做截断。
    fn parse_i64(&self, row: &RawRecord, key: &str, row_number: usize) -> ImportResult<Option<i64>> {
        let value = match self.get_string(row, key) {
            None => return Ok(None),
            Some(v) => v,
        };

        if let Ok(n) = value.parse::<i64>() {
            return Ok(Some(n));
        }

        match value.parse::<f64>() {
            // i64::MAX as f64 == 2^63，已越界，上界取开区间
            Ok(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Ok(Some(f as i64))
            }
            _ => Err(ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为整数: {}", value),
            }),
        }
    }
}
