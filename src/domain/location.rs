// ==========================================
// 仓储库存管理系统 - 库位坐标
// ==========================================
// 职责: 定义库位编码解码后的四级坐标
// 格式: <仓库字母><区域数字><货架字母><层数字>, 例如 A1F4
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 库位编码固定长度
pub const LOCATION_CODE_LEN: usize = 4;

/// 单字符数字字段的最大值（区域号/层号）
pub const MAX_SINGLE_DIGIT: u32 = 9;

// ==========================================
// Coordinate - 库位坐标
// ==========================================
// 红线: 四元组在物理库位上唯一
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// 仓库代码（通常为单个大写字母，不在此处校验）
    pub warehouse_code: String,

    /// 区域号
    pub area_number: u32,

    /// 货架字母 (A-Z)
    pub rack_letter: char,

    /// 层号
    pub level_number: u32,
}

impl Coordinate {
    pub fn new(
        warehouse_code: impl Into<String>,
        area_number: u32,
        rack_letter: char,
        level_number: u32,
    ) -> Self {
        Self {
            warehouse_code: warehouse_code.into(),
            area_number,
            rack_letter,
            level_number,
        }
    }

    /// 货架序号（A→1, B→2 ...）；非 A-Z 字母返回 None
    pub fn rack_ordinal(&self) -> Option<u32> {
        rack_letter_to_ordinal(self.rack_letter)
    }
}

impl fmt::Display for Coordinate {
    /// 按标准编码格式输出（尽力而为，不做位宽校验）
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.warehouse_code, self.area_number, self.rack_letter, self.level_number
        )
    }
}

/// 货架字母 → 序号（1 起）
pub fn rack_letter_to_ordinal(letter: char) -> Option<u32> {
    if letter.is_ascii_uppercase() {
        Some(letter as u32 - 'A' as u32 + 1)
    } else {
        None
    }
}

/// 序号 → 货架字母；仅 1..=26 有效
pub fn ordinal_to_rack_letter(ordinal: u32) -> Option<char> {
    if (1..=26).contains(&ordinal) {
        char::from_u32('A' as u32 + ordinal - 1)
    } else {
        None
    }
}
