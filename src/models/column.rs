use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnColor {
    #[default]
    Gray,
    Blue,
    Yellow,
    Green,
}

impl ColumnColor {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColumnColor::Gray => "column-gray",
            ColumnColor::Blue => "column-blue",
            ColumnColor::Yellow => "column-yellow",
            ColumnColor::Green => "column-green",
        }
    }
}

/// A fixed lane of the board. Columns come from configuration and never change at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color: ColumnColor,
}
