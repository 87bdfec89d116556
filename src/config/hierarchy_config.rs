use crate::domain::location::{rack_letter_to_ordinal, Coordinate};
use serde::{Deserialize, Serialize};

/// 层级节点编码配置
///
/// 存储位置：config_kv（scope_id='global'，key='hierarchy/display'），值为 JSON。
/// 所有字段均有默认值，缺省字段按默认处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// 区域编码前缀（A01）
    #[serde(default = "default_area_prefix")]
    pub area_code_prefix: String,

    /// 货架编码前缀（R01）
    #[serde(default = "default_rack_prefix")]
    pub rack_code_prefix: String,

    /// 层编码前缀（L1）
    #[serde(default = "default_level_prefix")]
    pub level_code_prefix: String,

    /// 区域号/货架序号补零宽度
    #[serde(default = "default_number_width")]
    pub code_number_width: usize,

    /// 空库位占位项显示的 bin_code
    #[serde(default = "default_empty_label")]
    pub empty_location_label: String,
}

fn default_area_prefix() -> String {
    "A".to_string()
}

fn default_rack_prefix() -> String {
    "R".to_string()
}

fn default_level_prefix() -> String {
    "L".to_string()
}

fn default_number_width() -> usize {
    2
}

fn default_empty_label() -> String {
    "EMPTY".to_string()
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            area_code_prefix: default_area_prefix(),
            rack_code_prefix: default_rack_prefix(),
            level_code_prefix: default_level_prefix(),
            code_number_width: default_number_width(),
            empty_location_label: default_empty_label(),
        }
    }
}

impl HierarchyConfig {
    /// 区域编码，例如 A01
    pub fn area_code(&self, coordinate: &Coordinate) -> String {
        format!(
            "{}{:0width$}",
            self.area_code_prefix,
            coordinate.area_number,
            width = self.code_number_width
        )
    }

    /// 货架编码，例如 R06（F 架）
    ///
    /// 货架字母不在 A-Z 时保留原字符（R-、Rf），避免不同的非法字符合并到同一节点。
    pub fn rack_code(&self, coordinate: &Coordinate) -> String {
        match rack_letter_to_ordinal(coordinate.rack_letter) {
            Some(ordinal) => format!(
                "{}{:0width$}",
                self.rack_code_prefix,
                ordinal,
                width = self.code_number_width
            ),
            None => format!("{}{}", self.rack_code_prefix, coordinate.rack_letter),
        }
    }

    /// 层编码，例如 L4
    pub fn level_code(&self, coordinate: &Coordinate) -> String {
        format!("{}{}", self.level_code_prefix, coordinate.level_number)
    }
}
