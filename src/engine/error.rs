// ==========================================
// 仓储库存管理系统 - 库位编码错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 编码错误: 坐标无法放入固定 4 字符格式
///
/// 编码是确定性的，重试无意义，直接返回给调用方。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("区域号超出单字符范围: {0}（允许 0-9）")]
    AreaOutOfRange(u32),

    #[error("层号超出单字符范围: {0}（允许 0-9）")]
    LevelOutOfRange(u32),

    #[error("仓库代码必须为单个字符: {0:?}")]
    InvalidWarehouseCode(String),

    #[error("货架字母必须为 A-Z: {0:?}")]
    InvalidRackLetter(char),
}

/// 解码错误: 仅在无法取得仓库代码时产生
///
/// 其余格式异常一律按默认值降级，不报错。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("库位编码为空")]
    EmptyCode,
}
