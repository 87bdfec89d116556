// ==========================================
// 仓储库存管理系统 - 库位编码编解码器
// ==========================================
// 职责: Coordinate <-> 4 字符库位编码 (例如 A1F4)
// 红线: 区域号/层号只允许单个十进制数字，编码时不截断
// 红线: 解码宽松，历史遗留编码按默认值降级，不拒绝记录
// ==========================================
// 注: 纯函数，无 I/O，无共享状态
// ==========================================

use crate::domain::location::{rack_letter_to_ordinal, Coordinate, LOCATION_CODE_LEN, MAX_SINGLE_DIGIT};
use crate::engine::error::{DecodingError, EncodingError};

/// 区域号缺省值
pub const DEFAULT_AREA_NUMBER: u32 = 1;

/// 货架字母缺省值
pub const DEFAULT_RACK_LETTER: char = 'A';

/// 层号缺省值
pub const DEFAULT_LEVEL_NUMBER: u32 = 1;

// ==========================================
// LocationCodec - 库位编码编解码器
// ==========================================
pub struct LocationCodec;

impl LocationCodec {
    /// 坐标编码为 4 字符库位编码
    ///
    /// # 返回
    /// - `Ok(String)`: 例如 "A1F4"
    /// - `Err(EncodingError)`: 区域号/层号 ≥ 10，仓库代码不是单字符，或货架字母不在 A-Z
    pub fn encode(coordinate: &Coordinate) -> Result<String, EncodingError> {
        let mut chars = coordinate.warehouse_code.chars();
        let warehouse = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(EncodingError::InvalidWarehouseCode(
                    coordinate.warehouse_code.clone(),
                ))
            }
        };

        if coordinate.area_number > MAX_SINGLE_DIGIT {
            return Err(EncodingError::AreaOutOfRange(coordinate.area_number));
        }
        if rack_letter_to_ordinal(coordinate.rack_letter).is_none() {
            return Err(EncodingError::InvalidRackLetter(coordinate.rack_letter));
        }
        if coordinate.level_number > MAX_SINGLE_DIGIT {
            return Err(EncodingError::LevelOutOfRange(coordinate.level_number));
        }

        let mut code = String::with_capacity(LOCATION_CODE_LEN);
        code.push(warehouse);
        code.push_str(&coordinate.area_number.to_string());
        code.push(coordinate.rack_letter);
        code.push_str(&coordinate.level_number.to_string());
        Ok(code)
    }

    /// 库位编码解码为坐标（宽松解析）
    ///
    /// # 解析规则（按位置，从左到右）
    /// 1. 第 0 位: 仓库代码，原样保留
    /// 2. 第 1 位: 十进制数字则为区域号，否则取 1
    /// 3. 第 2 位: 货架字母，原样保留；缺失取 'A'
    /// 4. 第 3 位起: 剩余子串按整数解析为层号；为空或非数字取 1
    ///
    /// 输入不做 trim，空白字符同样按位置解析。只有空串返回 `DecodingError::EmptyCode`。
    pub fn decode(code: &str) -> Result<Coordinate, DecodingError> {
        let mut chars = code.char_indices();

        let warehouse = match chars.next() {
            Some((_, c)) => c,
            None => return Err(DecodingError::EmptyCode),
        };

        let area_number = chars
            .next()
            .and_then(|(_, c)| c.to_digit(10))
            .unwrap_or(DEFAULT_AREA_NUMBER);

        let rack_letter = chars
            .next()
            .map(|(_, c)| c)
            .unwrap_or(DEFAULT_RACK_LETTER);

        let level_number = chars
            .next()
            .and_then(|(idx, _)| code[idx..].parse::<u32>().ok())
            .unwrap_or(DEFAULT_LEVEL_NUMBER);

        Ok(Coordinate {
            warehouse_code: warehouse.to_string(),
            area_number,
            rack_letter,
            level_number,
        })
    }

    /// 是否为标准格式（4 字符且编解码往返一致）
    pub fn is_canonical(code: &str) -> bool {
        if code.chars().count() != LOCATION_CODE_LEN {
            return false;
        }
        match Self::decode(code) {
            Ok(coordinate) => Self::encode(&coordinate).map_or(false, |encoded| encoded == code),
            Err(_) => false,
        }
    }
}

/// 见 [`LocationCodec::encode`]
pub fn encode(coordinate: &Coordinate) -> Result<String, EncodingError> {
    LocationCodec::encode(coordinate)
}

/// 见 [`LocationCodec::decode`]
pub fn decode(code: &str) -> Result<Coordinate, DecodingError> {
    LocationCodec::decode(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_canonical() {
        let c = Coordinate::new("A", 1, 'F', 4);
        assert_eq!(encode(&c).unwrap(), "A1F4");
    }

    #[test]
    fn test_decode_canonical() {
        let c = decode("A1F4").unwrap();
        assert_eq!(c, Coordinate::new("A", 1, 'F', 4));

        let c = decode("A1E7").unwrap();
        assert_eq!(c.area_number, 1);
        assert_eq!(c.rack_letter, 'E');
        assert_eq!(c.rack_ordinal(), Some(5));
        assert_eq!(c.level_number, 7);
    }

    #[test]
    fn test_round_trip_all_single_digit() {
        for warehouse in ["A", "B", "Z"] {
            for area in 0..=9 {
                for rack in 'A'..='Z' {
                    for level in 0..=9 {
                        let c = Coordinate::new(warehouse, area, rack, level);
                        let code = encode(&c).unwrap();
                        assert_eq!(code.len(), LOCATION_CODE_LEN);
                        assert_eq!(decode(&code).unwrap(), c);
                        assert!(LocationCodec::is_canonical(&code));
                    }
                }
            }
        }
    }

    #[test]
    fn test_encode_rejects_two_digit_fields() {
        let c = Coordinate::new("A", 10, 'A', 1);
        assert_eq!(encode(&c), Err(EncodingError::AreaOutOfRange(10)));

        let c = Coordinate::new("A", 1, 'A', 12);
        assert_eq!(encode(&c), Err(EncodingError::LevelOutOfRange(12)));
    }

    #[test]
    fn test_encode_rejects_bad_warehouse_and_rack() {
        let c = Coordinate::new("AB", 1, 'A', 1);
        assert!(matches!(encode(&c), Err(EncodingError::InvalidWarehouseCode(_))));

        let c = Coordinate::new("", 1, 'A', 1);
        assert!(matches!(encode(&c), Err(EncodingError::InvalidWarehouseCode(_))));

        let c = Coordinate::new("A", 1, 'f', 1);
        assert_eq!(encode(&c), Err(EncodingError::InvalidRackLetter('f')));
    }

    #[test]
    fn test_decode_empty_fails() {
        assert_eq!(decode(""), Err(DecodingError::EmptyCode));
    }

    #[test]
    fn test_decode_short_codes_use_defaults() {
        assert_eq!(decode("B").unwrap(), Coordinate::new("B", 1, 'A', 1));
        assert_eq!(decode("B3").unwrap(), Coordinate::new("B", 3, 'A', 1));
        assert_eq!(decode("B3C").unwrap(), Coordinate::new("B", 3, 'C', 1));
    }

    #[test]
    fn test_decode_lenient_legacy_codes() {
        // 非数字区域位
        assert_eq!(decode("AXB2").unwrap(), Coordinate::new("A", 1, 'B', 2));

        // 多位层号
        assert_eq!(decode("A1F12").unwrap(), Coordinate::new("A", 1, 'F', 12));

        // 旧版带横线格式
        let c = decode("W1-A01-R01-L1-B05").unwrap();
        assert_eq!(c, Coordinate::new("W", 1, '-', 1));

        let c = decode("A01-R02-L3-B05").unwrap();
        assert_eq!(c, Coordinate::new("A", 0, '1', 1));
    }

    #[test]
    fn test_decode_whitespace_is_positional() {
        // 单个空格也是合法的仓库代码位
        assert_eq!(decode(" ").unwrap(), Coordinate::new(" ", 1, 'A', 1));

        // 前导空格使各字段整体右移
        assert_eq!(decode(" A1F4").unwrap(), Coordinate::new(" ", 1, '1', 1));

        // 尾随空格导致层号无法解析，取默认值
        assert_eq!(decode("A1F4 ").unwrap(), Coordinate::new("A", 1, 'F', 1));
    }

    #[test]
    fn test_is_canonical() {
        assert!(LocationCodec::is_canonical("B1B1"));
        assert!(!LocationCodec::is_canonical("A1F12"));
        assert!(!LocationCodec::is_canonical("AXB2"));
        assert!(!LocationCodec::is_canonical("A1f4"));
        assert!(!LocationCodec::is_canonical(""));
    }
}
